/// download 的成功返回值
#[derive(Debug, Clone)]
pub struct DownloadOutcome {
    /// 规范版本号（Last-Modified 原文），成功时一定非空
    pub rev: String,
    /// 旧版实体标签版本号（清理后），服务器没给就是 None
    pub legacy_rev: Option<String>,
    /// 文件内容
    pub data: String,
    /// 与 rev 相同，保留此字段便于调用方直接拿原始头
    pub last_modified: String,
}

/// upload 的成功返回值
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    /// 新的规范版本号，成功时一定非空
    pub rev: String,
    pub legacy_rev: Option<String>,
    pub last_modified: String,
}
