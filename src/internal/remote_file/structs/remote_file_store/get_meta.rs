//! PROPFIND 元数据查询。

use tracing::{debug, warn};

use crate::internal::remote_file::structs::file_meta::FileMeta;
use crate::internal::remote_file::structs::remote_error::RemoteError;
use crate::internal::transport::structs::http_message::HttpRequest;
use crate::internal::webdav::enums::{Depth, WebDavMethod, status};
use crate::internal::webdav::functions::build_full_path::build_full_path;
use crate::internal::webdav::raw_xml::impl_multi_status::ToFileMeta;
use crate::internal::webdav::raw_xml::raw_file::MultiStatus;

use super::RemoteFileStore;

/// PROPFIND 请求体：固定查 allprop，兼容面最大
const PROPFIND_BODY: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<D:propfind xmlns:D="DAV:">
  <D:allprop/>
</D:propfind>"#;

impl RemoteFileStore {
    /// 查询单个文件的元数据（depth 0）。
    ///
    /// 多状态响应解析出至少一条记录时返回第一条；没有可用记录时，
    /// `use_get_fallback` 为 true 则退回 HEAD 探测，否则按 NotFound 失败。
    /// 成功返回的元数据一定带非空版本号。
    pub async fn get_file_meta(
        &self,
        path: &str,
        _local_rev: Option<&str>,
        use_get_fallback: bool,
    ) -> Result<FileMeta, RemoteError> {
        let cfg = self.live_config().await?;
        let full_path = build_full_path(&cfg.base_url, path)?;

        let request = HttpRequest::new(WebDavMethod::Propfind, full_path.as_str())
            .header("Content-Type", "application/xml; charset=utf-8")
            .header("Depth", Depth::Zero.as_str())
            .body(PROPFIND_BODY);

        let response = self.make_request(path, request).await?;

        if response.status == status::MULTI_STATUS {
            match quick_xml::de::from_str::<MultiStatus>(&response.body) {
                Ok(multi_status) => {
                    let mut metas = multi_status.to_file_meta();
                    if !metas.is_empty() {
                        let meta = metas.remove(0);
                        debug!(path, lastmod = %meta.last_modified, "PROPFIND 命中");
                        return Ok(meta);
                    }
                }
                Err(e) => {
                    // 解析不动的响应体当作没有可用记录，走回退逻辑
                    warn!(path, error = %e, "多状态响应解析失败");
                }
            }
        }

        if use_get_fallback {
            return self.head_probe(path, &full_path).await;
        }

        Err(RemoteError::NotFound {
            path: path.to_string(),
        })
    }
}
