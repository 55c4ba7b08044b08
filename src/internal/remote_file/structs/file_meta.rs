/// 远程文件元数据
///
/// 约定：成功返回的 FileMeta 一定带非空的 last_modified（规范版本号）。
/// 拿不到修改时间的记录在更早的层就已经被丢弃或转成错误，
/// 绝不会以空版本号的形式流到调用方手里。
#[derive(Debug, Clone)]
pub struct FileMeta {
    pub filename: String,
    pub basename: String,
    /// 规范版本号：Last-Modified 头的原文
    pub last_modified: String,
    /// 文件大小（字节），头缺失或非法时为 0
    pub size: u64,
    pub content_type: String,
    /// 清理后的实体标签，仅用于旧版本号兼容比较，不用于条件请求
    pub etag: String,
    /// 服务器返回的原始实体标签（HEAD 合成的元数据没有它）
    pub raw_etag: Option<String>,
}
