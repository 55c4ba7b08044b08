use async_trait::async_trait;

use crate::internal::config::structs::remote_config::RemoteConfig;

/// 配置提供者：每次操作前由客户端调用，返回当前生效的账号配置。
///
/// 客户端从不缓存返回值，实现方可以随时轮换凭据。
#[async_trait]
pub trait ConfigProvider: Send + Sync {
    async fn remote_config(&self) -> Result<RemoteConfig, String>;
}

/// 固定配置的提供者，适合配置不会变化的简单场景与测试。
pub struct StaticConfigProvider {
    config: RemoteConfig,
}

impl StaticConfigProvider {
    pub fn new(config: RemoteConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ConfigProvider for StaticConfigProvider {
    async fn remote_config(&self) -> Result<RemoteConfig, String> {
        Ok(self.config.clone())
    }
}
