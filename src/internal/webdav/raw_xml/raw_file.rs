use serde::{Deserialize, Serialize};

/// 对应 WebDAV 响应 XML 顶层的 `<D:multistatus>` 节点
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct MultiStatus {
    /// `<D:response>` 节点列表，每个 response 表示一个资源（文件或目录）
    #[serde(rename = "response", default)]
    pub responses: Vec<Response>,
}

/// 对应单个 `<D:response>` 节点
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct Response {
    /// `<D:href>`：资源路径（URL 编码，需要解码才能显示原始文件名）
    pub href: String,
    /// `<D:propstat>`：资源属性集和对应状态码的列表
    #[serde(rename = "propstat", default)]
    pub propstats: Vec<PropStat>,
}

/// 对应 `<D:propstat>` 节点：一个属性集 + 对应的 HTTP 状态
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct PropStat {
    /// `<D:prop>`：资源的具体属性
    pub prop: Prop,
    /// `<D:status>`：该属性集对应的 HTTP 状态，如 "HTTP/1.1 200 OK"
    pub status: String,
}

/// 对应 `<D:prop>` 节点，只保留本客户端会读取的属性
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct Prop {
    /// `<resourcetype>`：资源类型（文件/目录）
    #[serde(rename = "resourcetype")]
    pub resource_type: Option<ResourceType>,

    /// `<getcontentlength>`：文件大小（字节），目录一般没有此字段
    #[serde(rename = "getcontentlength")]
    pub content_length: Option<u64>,

    /// `<getlastmodified>`：最后修改时间（HTTP-date 格式）。
    /// 保留原文不做解析，整个字符串就是该文件的规范版本号
    #[serde(rename = "getlastmodified")]
    pub last_modified: Option<String>,

    /// `<getcontenttype>`：MIME 类型（如 "text/plain"）
    #[serde(rename = "getcontenttype")]
    pub content_type: Option<String>,

    /// `<getetag>`：实体标签，仅用于旧版本号兼容比较
    #[serde(rename = "getetag")]
    pub etag: Option<String>,

    /// `<displayname>`：显示名（用户友好的文件/目录名）
    #[serde(rename = "displayname")]
    pub display_name: Option<String>,
}

/// `<resourcetype>` 节点
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct ResourceType {
    /// `<collection/>` 存在表示是目录，否则是文件
    #[serde(rename = "collection")]
    pub is_collection: Option<EmptyElement>,
}

/// 空元素的占位结构，例如 `<collection/>`
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EmptyElement {}
