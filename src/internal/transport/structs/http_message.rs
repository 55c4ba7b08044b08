use std::collections::HashMap;

use bytes::Bytes;

use crate::internal::webdav::enums::WebDavMethod;

/// 一次 HTTP 交换的请求侧描述
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub method: WebDavMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<Bytes>,
}

impl HttpRequest {
    pub fn new(method: WebDavMethod, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// 一次 HTTP 交换的响应侧描述
///
/// 头部键在构造时统一转小写，取值用 [`HttpResponse::header`]，
/// 这样上层不必关心服务器返回的是 `Last-Modified` 还是 `last-modified`。
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    headers: HashMap<String, String>,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, headers: Vec<(String, String)>, body: String) -> Self {
        let headers = headers
            .into_iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v))
            .collect();
        Self {
            status,
            headers,
            body,
        }
    }

    /// 大小写不敏感地取响应头
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(|s| s.as_str())
    }
}
