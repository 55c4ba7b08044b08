use reqwest::Method;

/// 本客户端会用到的 HTTP / WebDAV 方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WebDavMethod {
    Propfind,
    Mkcol,
    Get,
    Put,
    Head,
    Delete,
}

impl WebDavMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            WebDavMethod::Propfind => "PROPFIND",
            WebDavMethod::Mkcol => "MKCOL",
            WebDavMethod::Get => "GET",
            WebDavMethod::Put => "PUT",
            WebDavMethod::Head => "HEAD",
            WebDavMethod::Delete => "DELETE",
        }
    }

    pub fn to_http_method(&self) -> Result<Method, String> {
        Method::from_bytes(self.as_str().as_bytes()).map_err(|e| e.to_string())
    }
}

pub enum Depth {
    /// 仅返回当前资源
    Zero,
    /// 返回当前资源及直接子资源
    One,
    /// 返回当前资源及所有子资源（谨慎使用）
    Infinity,
}

impl Depth {
    pub fn as_str(&self) -> &'static str {
        match self {
            Depth::Zero => "0",
            Depth::One => "1",
            Depth::Infinity => "infinity",
        }
    }
}

/// 协议里有特殊语义的状态码
pub mod status {
    /// PROPFIND 的成功响应
    pub const MULTI_STATUS: u16 = 207;
    /// MKCOL 碰上它说明目录早已存在
    pub const MOVED_PERMANENTLY: u16 = 301;
    pub const NOT_FOUND: u16 = 404;
    /// MKCOL 碰上它说明目录早已存在
    pub const METHOD_NOT_ALLOWED: u16 = 405;
    /// PUT 碰上它多半是父目录缺失（nextcloud 等），MKCOL 碰上它说明目录已存在
    pub const CONFLICT: u16 = 409;
    /// 条件写/删被拒：远端已被别人改过
    pub const PRECONDITION_FAILED: u16 = 412;
}
