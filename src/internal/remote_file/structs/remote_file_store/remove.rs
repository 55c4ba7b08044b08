//! 条件 DELETE。

use tracing::debug;

use crate::internal::remote_file::structs::remote_error::RemoteError;
use crate::internal::transport::structs::http_message::HttpRequest;
use crate::internal::webdav::enums::{WebDavMethod, status};
use crate::internal::webdav::functions::build_full_path::build_full_path;
use crate::internal::webdav::functions::http_date::{format_http_date, parse_http_date};

use super::RemoteFileStore;

impl RemoteFileStore {
    /// 删除远程文件。
    ///
    /// `expected_rev` 能解析为日期时附带 If-Unmodified-Since，412 映射为
    /// ConflictChanged。删除没有值得恢复的「父目录缺失」场景，不做任何
    /// 重试，其余失败原样抛出。
    pub async fn remove(&self, path: &str, expected_rev: Option<&str>) -> Result<(), RemoteError> {
        let cfg = self.live_config().await?;
        let full_path = build_full_path(&cfg.base_url, path)?;

        let mut request = HttpRequest::new(WebDavMethod::Delete, full_path.as_str());
        if let Some(rev) = expected_rev.filter(|r| !r.is_empty()) {
            if let Some(date) = parse_http_date(rev) {
                request = request.header("If-Unmodified-Since", format_http_date(date));
            }
        }

        match self.make_request(path, request).await {
            Ok(_) => {
                debug!(path, "删除成功");
                Ok(())
            }
            Err(RemoteError::Transport(t)) if t.status() == Some(status::PRECONDITION_FAILED) => {
                Err(RemoteError::ConflictChanged {
                    path: path.to_string(),
                    expected_rev: expected_rev.map(|s| s.to_string()),
                })
            }
            Err(e) => Err(e),
        }
    }
}
