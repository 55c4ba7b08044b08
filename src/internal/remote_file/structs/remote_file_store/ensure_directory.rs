//! 父目录确保与 MKCOL。

use tracing::{debug, warn};

use crate::internal::remote_file::structs::remote_error::RemoteError;
use crate::internal::transport::structs::http_message::HttpRequest;
use crate::internal::webdav::enums::{WebDavMethod, status};

use super::RemoteFileStore;

/// MKCOL 返回这些状态时目录一定已经存在（或等价于存在）。
/// 这组取值来自各家服务器的实测行为，而不是某一份标准。
const ALREADY_EXISTS_STATUSES: [u16; 3] = [
    status::METHOD_NOT_ALLOWED,
    status::CONFLICT,
    status::MOVED_PERMANENTLY,
];

impl RemoteFileStore {
    /// 确保 full_path 的父目录存在；并发调用共享同一次 MKCOL。
    ///
    /// 创建失败一律消化掉：目录若真的还不存在，紧随其后的重试写入
    /// 会给出更准确的错误，这里再报一次只会把一个根因报成两个错。
    pub(crate) async fn ensure_parent_directory(&self, full_path: &str) {
        let parent = match full_path.rsplit_once('/') {
            Some((parent, _)) if !parent.is_empty() => parent.to_string(),
            _ => return,
        };

        self.dir_queue
            .run_deduplicated(&parent, || self.create_directory(parent.clone()))
            .await;
    }

    /// 发一次 MKCOL；“已存在”语义的状态码一律按成功对待。
    async fn create_directory(&self, parent_url: String) {
        let request = HttpRequest::new(WebDavMethod::Mkcol, parent_url.as_str());

        match self.make_request(&parent_url, request).await {
            Ok(_) => debug!(url = %parent_url, "目录已创建"),
            Err(RemoteError::Transport(t))
                if t.status()
                    .map(|s| ALREADY_EXISTS_STATUSES.contains(&s))
                    .unwrap_or(false) =>
            {
                debug!(url = %parent_url, status = ?t.status(), "目录应已存在");
            }
            Err(e) => {
                // 记录但不上抛，让后续的写入自己暴露真实错误
                warn!(url = %parent_url, error = %e, "目录创建失败（已忽略）");
            }
        }
    }
}
