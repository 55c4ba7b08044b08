use std::sync::Arc;

use crate::internal::config::structs::remote_config::RemoteConfig;
use crate::internal::config::traits::config_provider::{ConfigProvider, StaticConfigProvider};
use crate::internal::remote_file::structs::remote_file_store::RemoteFileStore;
use crate::internal::transport::structs::reqwest_transport::ReqwestTransport;
use crate::internal::transport::traits::transport::Transport;

/// 用默认 reqwest 传输连接远程存储。
///
/// 配置由 provider 在每次操作前提供，因此凭据轮换无需重建客户端。
///
/// example:
/// ```rust,no_run
/// use std::sync::Arc;
/// use webdav_store::config::{RemoteConfig, StaticConfigProvider};
/// use webdav_store::connect_store;
///
/// # async fn example() {
/// let provider = StaticConfigProvider::new(RemoteConfig {
///     base_url: "https://dav.example.com/remote".to_string(),
///     user_name: "account".to_string(),
///     password: "password".to_string(),
/// });
///
/// let store = connect_store(Arc::new(provider)).unwrap();
/// let meta = store.get_file_meta("/notes/a.txt", None, true).await;
/// # }
/// ```
pub fn connect_store(config_provider: Arc<dyn ConfigProvider>) -> Result<RemoteFileStore, String> {
    let transport = ReqwestTransport::new()?;
    Ok(RemoteFileStore::new(Arc::new(transport), config_provider))
}

/// 固定配置直连（内部包一层 StaticConfigProvider）。
pub fn connect_store_with_config(config: RemoteConfig) -> Result<RemoteFileStore, String> {
    // 先校验 base_url，省得到第一次请求才发现配置是坏的
    config.validate_base_url()?;
    connect_store(Arc::new(StaticConfigProvider::new(config)))
}

/// 注入自定义传输（测试或特殊网络栈）。
pub fn connect_store_with_transport(
    transport: Arc<dyn Transport>,
    config_provider: Arc<dyn ConfigProvider>,
) -> RemoteFileStore {
    RemoteFileStore::new(transport, config_provider)
}
