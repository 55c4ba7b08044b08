//! GET 下载。

use tracing::{debug, error};

use crate::internal::remote_file::structs::outcomes::DownloadOutcome;
use crate::internal::remote_file::structs::remote_error::RemoteError;
use crate::internal::transport::structs::http_message::HttpRequest;
use crate::internal::webdav::enums::WebDavMethod;
use crate::internal::webdav::functions::build_full_path::build_full_path;
use crate::internal::webdav::functions::clean_revision::clean_revision;
use crate::internal::webdav::functions::validate_content::validate_response_content;

use super::RemoteFileStore;

impl RemoteFileStore {
    /// 下载文件内容。
    ///
    /// 版本号取自 Last-Modified 头；没有它的下载结果无法参与后续的
    /// 冲突检测，即使内容已经拿到也按 MissingRevision 失败。
    pub async fn download(&self, path: &str) -> Result<DownloadOutcome, RemoteError> {
        let cfg = self.live_config().await?;
        let full_path = build_full_path(&cfg.base_url, path)?;

        let request = HttpRequest::new(WebDavMethod::Get, full_path.as_str());
        let response = self.make_request(path, request).await?;

        // 识别伪装成 200 的 HTML 错误页
        validate_response_content(&response.body, path, "download")?;

        let last_modified = response.header("last-modified").unwrap_or("").to_string();
        let legacy_rev = response
            .header("etag")
            .map(clean_revision)
            .filter(|s| !s.is_empty());

        if last_modified.is_empty() {
            error!(path, "下载响应缺少 Last-Modified");
            return Err(RemoteError::MissingRevision);
        }

        debug!(path, rev = %last_modified, "下载成功");

        Ok(DownloadOutcome {
            rev: last_modified.clone(),
            legacy_rev,
            data: response.body,
            last_modified,
        })
    }
}
