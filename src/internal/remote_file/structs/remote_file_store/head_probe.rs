//! HEAD 头部探测：从响应头合成元数据。

use tracing::warn;

use crate::internal::remote_file::structs::file_meta::FileMeta;
use crate::internal::remote_file::structs::remote_error::RemoteError;
use crate::internal::transport::structs::http_message::HttpRequest;
use crate::internal::webdav::enums::WebDavMethod;

use super::RemoteFileStore;

impl RemoteFileStore {
    /// 只发 HEAD，从响应头合成一份元数据。
    ///
    /// Content-Length 坏了按 0 处理，Content-Type 缺省按二进制；
    /// 唯独 Last-Modified 不能缺：没有版本号的探测结果不能替代元数据，
    /// 直接报 MissingRevision。
    pub(crate) async fn head_probe(
        &self,
        path: &str,
        full_path: &str,
    ) -> Result<FileMeta, RemoteError> {
        let request = HttpRequest::new(WebDavMethod::Head, full_path);
        let response = self.make_request(path, request).await?;

        let last_modified = match response.header("last-modified") {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => return Err(RemoteError::MissingRevision),
        };

        // 防御式解析大小：头坏了不至于让整次探测失败
        let size = match response.header("content-length") {
            None => 0,
            Some(v) => match v.trim().parse::<u64>() {
                Ok(n) => n,
                Err(_) => {
                    warn!(path, raw = v, "content-length 非法，按 0 处理");
                    0
                }
            },
        };

        let content_type = response
            .header("content-type")
            .filter(|v| !v.is_empty())
            .unwrap_or("application/octet-stream")
            .to_string();

        // 文件名取路径最后一段
        let filename = full_path
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or("")
            .to_string();

        Ok(FileMeta {
            filename: filename.clone(),
            basename: filename,
            last_modified: last_modified.clone(),
            size,
            content_type,
            // 内部一致性：合成元数据的 etag 与修改时间保持一致
            etag: last_modified,
            raw_etag: None,
        })
    }
}
