//! 条件 PUT 上传，含父目录自动创建与重试。

use tracing::{debug, warn};

use crate::internal::remote_file::structs::outcomes::UploadOutcome;
use crate::internal::remote_file::structs::remote_error::RemoteError;
use crate::internal::transport::structs::http_message::HttpRequest;
use crate::internal::webdav::enums::{WebDavMethod, status};
use crate::internal::webdav::functions::build_full_path::build_full_path;
use crate::internal::webdav::functions::http_date::{format_http_date, parse_http_date};

use super::RemoteFileStore;

impl RemoteFileStore {
    /// 乐观并发写入。
    ///
    /// - `expected_rev` 能解析成 HTTP 日期时附带 If-Unmodified-Since，
    ///   服务器会拒绝在该时刻之后被改动过的资源；解析不了就退化为
    ///   无条件写，绝不因为版本号不像日期而让上传失败
    /// - 首次写入 412 视为远端冲突（ConflictChanged），调用方应当重新
    ///   拉取合并后再试
    /// - 首次写入 404/409 视为父目录缺失：确保目录后原样重试一次，
    ///   重试的失败原样抛出，不再有第二次重试
    /// - 成功后按「PUT 响应头 → HEAD 探测 → PROPFIND」回退链确定新版本号
    pub async fn upload(
        &self,
        path: &str,
        data: &str,
        expected_rev: Option<&str>,
        is_force_overwrite: bool,
    ) -> Result<UploadOutcome, RemoteError> {
        let cfg = self.live_config().await?;
        let full_path = build_full_path(&cfg.base_url, path)?;

        let mut headers: Vec<(String, String)> = vec![(
            "Content-Type".to_string(),
            "application/octet-stream".to_string(),
        )];

        if !is_force_overwrite {
            if let Some(rev) = expected_rev.filter(|r| !r.is_empty()) {
                match parse_http_date(rev) {
                    Some(date) => {
                        // 统一重排成 UTC 格式，不直接透传调用方的原始字符串
                        let value = format_http_date(date);
                        debug!(path, value = %value, "附带 If-Unmodified-Since");
                        headers.push(("If-Unmodified-Since".to_string(), value));
                    }
                    None => {
                        // 版本号不是日期形态：跳过条件头，按无条件写处理
                        warn!(path, rev, "expected_rev 无法解析为日期，跳过条件头");
                    }
                }
            }
        }

        let put_request = || {
            let mut request = HttpRequest::new(WebDavMethod::Put, full_path.as_str())
                .body(data.as_bytes().to_vec());
            for (name, value) in &headers {
                request = request.header(name, value.clone());
            }
            request
        };

        let response = match self.make_request(path, put_request()).await {
            Ok(response) => response,
            Err(err) => {
                if let RemoteError::Transport(t) = &err {
                    if t.status() == Some(status::PRECONDITION_FAILED) {
                        return Err(RemoteError::ConflictChanged {
                            path: path.to_string(),
                            expected_rev: expected_rev.map(|s| s.to_string()),
                        });
                    }
                }

                // 404/409 都可能意味着父目录不存在（各家服务器口径不一）
                let parent_missing = matches!(&err, RemoteError::NotFound { .. })
                    || matches!(&err, RemoteError::Transport(t) if t.status() == Some(status::CONFLICT));

                if !parent_missing {
                    return Err(err);
                }

                debug!(path, "写入失败疑似父目录缺失，创建后重试");
                self.ensure_parent_directory(&full_path).await;

                // 只重试这一次；再失败就原样抛给调用方，避免对坏服务器无限循环
                self.make_request(path, put_request()).await?
            }
        };

        // 确定新版本号（回退链见 revision_discovery）
        self.discover_revision(path, &full_path, &response).await
    }
}
