//! 配置结构体测试：凭据处理与脱敏。

use base64::Engine;

use crate::internal::config::structs::remote_config::RemoteConfig;

fn sample() -> RemoteConfig {
    RemoteConfig {
        base_url: "https://dav.example.com/remote".to_string(),
        user_name: "tester".to_string(),
        password: "secret".to_string(),
    }
}

#[test]
fn basic_token_encodes_user_and_password() {
    let token = sample().basic_token();
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(&token)
        .unwrap();
    assert_eq!(decoded, b"tester:secret");
}

#[test]
fn debug_never_leaks_password() {
    let text = format!("{:?}", sample());
    assert!(!text.contains("secret"), "debug 输出不应包含明文密码");
    assert!(text.contains("tester"));
}

#[test]
fn eq_compares_fingerprint_not_cleartext() {
    let a = sample();
    let b = sample();
    assert_eq!(a, b);

    let mut c = sample();
    c.password = "rotated".to_string();
    assert_ne!(a, c, "凭据不同指纹必然不同");
}

#[test]
fn validate_base_url_rejects_garbage() {
    let mut config = sample();
    config.base_url = String::new();
    assert!(config.validate_base_url().is_err());

    config.base_url = "not a url".to_string();
    assert!(config.validate_base_url().is_err());

    config.base_url = "https://dav.example.com/remote".to_string();
    assert!(config.validate_base_url().is_ok());
}
