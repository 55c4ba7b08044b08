//! 上传后的新版本号发现。
//!
//! 一串固定顺序的策略，逐个尝试、命中即止：
//! 1. PUT 响应自带的 Last-Modified（多数服务器到这里就结束了）
//! 2. HEAD 探测（只查头，比 PROPFIND 轻）
//! 3. 完整 PROPFIND（其内部还有 HEAD 回退）
//!
//! 每一级都比上一级更贵；三级全失败时，最后一级的 NotFound 原样抛出。

use tracing::debug;

use crate::internal::remote_file::structs::outcomes::UploadOutcome;
use crate::internal::remote_file::structs::remote_error::RemoteError;
use crate::internal::transport::structs::http_message::{HttpRequest, HttpResponse};
use crate::internal::webdav::enums::WebDavMethod;
use crate::internal::webdav::functions::clean_revision::clean_revision;

use super::RemoteFileStore;

impl RemoteFileStore {
    pub(crate) async fn discover_revision(
        &self,
        path: &str,
        full_path: &str,
        put_response: &HttpResponse,
    ) -> Result<UploadOutcome, RemoteError> {
        // 策略一：写响应自带版本号
        if let Some(outcome) = outcome_from_headers(put_response) {
            return Ok(outcome);
        }

        // 策略二：HEAD 探测
        debug!(path, "PUT 响应缺少 Last-Modified，改用 HEAD 探测");
        match self.revision_via_head(path, full_path).await {
            Some(outcome) => return Ok(outcome),
            None => debug!(path, "HEAD 探测未得到版本号，退回 PROPFIND"),
        }

        // 策略三：完整元数据查询
        let meta = self.get_file_meta(path, None, true).await?;
        let legacy_rev = meta
            .raw_etag
            .as_deref()
            .map(clean_revision)
            .filter(|s| !s.is_empty());

        Ok(UploadOutcome {
            rev: meta.last_modified.clone(),
            legacy_rev,
            last_modified: meta.last_modified,
        })
    }

    /// HEAD 一次并尝试从响应头组装结果；任何失败都表示本策略放弃。
    async fn revision_via_head(&self, path: &str, full_path: &str) -> Option<UploadOutcome> {
        let request = HttpRequest::new(WebDavMethod::Head, full_path);
        let response = self.make_request(path, request).await.ok()?;
        outcome_from_headers(&response)
    }
}

/// 从响应头组版本号；没有 Last-Modified 就明确放弃
fn outcome_from_headers(response: &HttpResponse) -> Option<UploadOutcome> {
    let last_modified = response.header("last-modified")?.to_string();
    if last_modified.is_empty() {
        return None;
    }

    let legacy_rev = response
        .header("etag")
        .map(clean_revision)
        .filter(|s| !s.is_empty());

    Some(UploadOutcome {
        rev: last_modified.clone(),
        legacy_rev,
        last_modified,
    })
}
