use core::fmt;

use base64::Engine;
use sha2::{Digest, Sha256};
use url::Url;

/// 远程账号配置
///
/// 该结构体定位
/// - 每次操作前由 ConfigProvider 重新提供，只是一次快照，客户端不做任何缓存
/// - 因此凭据轮换后的下一次操作就会用上新凭据，无需重建客户端
///
/// 默认 Eq 时比较 base_url 与凭据指纹，不比较明文密码
#[derive(Clone)]
pub struct RemoteConfig {
    pub base_url: String,
    pub user_name: String,
    pub password: String,
}

impl RemoteConfig {
    /// 生成 Basic 认证 token（base64("user:pass")），每次请求现算
    pub fn basic_token(&self) -> String {
        base64::engine::general_purpose::STANDARD
            .encode(format!("{}:{}", self.user_name, self.password))
    }

    /// 校验 base_url 是否为合法 URL（只校验，不修改）
    pub fn validate_base_url(&self) -> Result<Url, String> {
        if self.base_url.is_empty() {
            return Err("base_url 为空".to_string());
        }
        Url::parse(&self.base_url).map_err(|e| e.to_string())
    }

    /// 凭据指纹（sha256），用于相等比较与日志标识，避免明文外泄
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.basic_token().as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

/// 用于比较配置是否指向同一账号
impl PartialEq for RemoteConfig {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.fingerprint() == other.fingerprint()
    }
}

/// 防止 debug 泄漏密码
impl fmt::Debug for RemoteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteConfig")
            .field("base_url", &self.base_url)
            .field("user_name", &self.user_name)
            .field("password", &"<hidden>")
            .finish()
    }
}
