//! 远程文件存储客户端
//!
//! 把一台 WebDAV 服务器当成带版本号的键值存储使用：每个逻辑文件有内容、
//! 大小和一个不透明的版本号，版本号用于乐观并发的冲突检测。
//!
//! ## 公开操作
//!
//! - `get_file_meta`：PROPFIND 元数据查询，可选 HEAD 探测回退
//! - `download`：GET 下载，内容校验 + 版本号提取
//! - `upload`：条件 PUT，自动建父目录并重试一次，三级版本号发现回退
//! - `remove`：条件 DELETE
//!
//! 每个操作要么成功返回带非空版本号的完整结果，要么以一种明确的错误失败，
//! 绝不返回半成品。对同一路径的并发写入由服务器裁决，条件头是唯一的顺序
//! 保证（过期的写入会被 412 拒绝，而不是被悄悄覆盖）。
//!
//! ## 内部实现说明
//!
//! - `upload` / `ensure_directory` 子模块：写入链路与父目录创建
//! - `revision_discovery` 子模块：上传后的版本号发现回退链
//! - `get_meta` / `head_probe` / `download` / `remove` 子模块：其余操作

mod download;
mod ensure_directory;
mod get_meta;
mod head_probe;
mod remove;
mod revision_discovery;
mod upload;

use std::sync::Arc;

use crate::internal::config::structs::remote_config::RemoteConfig;
use crate::internal::config::traits::config_provider::ConfigProvider;
use crate::internal::remote_file::structs::remote_error::RemoteError;
use crate::internal::states::dir_creation_queue::DirCreationQueue;
use crate::internal::transport::structs::http_message::{HttpRequest, HttpResponse};
use crate::internal::transport::traits::transport::Transport;
use crate::internal::webdav::enums::status;

pub struct RemoteFileStore {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) config_provider: Arc<dyn ConfigProvider>,
    /// 在途目录创建表，本实例独享，除它之外不持有任何跨调用状态
    pub(crate) dir_queue: DirCreationQueue,
}

impl RemoteFileStore {
    pub fn new(transport: Arc<dyn Transport>, config_provider: Arc<dyn ConfigProvider>) -> Self {
        Self {
            transport,
            config_provider,
            dir_queue: DirCreationQueue::new(),
        }
    }

    /// 读取当前生效的配置（每次都重新获取，支持凭据热轮换）
    pub(crate) async fn live_config(&self) -> Result<RemoteConfig, RemoteError> {
        self.config_provider
            .remote_config()
            .await
            .map_err(RemoteError::Config)
    }

    /// 发送一次请求：按当前配置补上 Basic 认证头，404 统一映射成 NotFound。
    pub(crate) async fn make_request(
        &self,
        path: &str,
        request: HttpRequest,
    ) -> Result<HttpResponse, RemoteError> {
        let cfg = self.live_config().await?;
        let request = request.header("Authorization", format!("Basic {}", cfg.basic_token()));

        match self.transport.exchange(request).await {
            Ok(response) => Ok(response),
            Err(e) if e.status() == Some(status::NOT_FOUND) => Err(RemoteError::NotFound {
                path: path.to_string(),
            }),
            Err(e) => Err(RemoteError::Transport(e)),
        }
    }
}
