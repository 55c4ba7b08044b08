use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::internal::transport::structs::http_message::{HttpRequest, HttpResponse};
use crate::internal::transport::structs::transport_error::TransportError;
use crate::internal::transport::traits::transport::Transport;

/// 基于 reqwest 的默认传输实现
///
/// 不设任何默认认证头，认证由上层按请求注入（配置可能随时轮换）。
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, String> {
        let client = Client::builder()
            .http1_only()
            .build()
            .map_err(|e| e.to_string())?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn exchange(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &request.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| TransportError::InvalidHeader(name.clone()))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|_| TransportError::InvalidHeader(name.clone()))?;
            headers.insert(header_name, header_value);
        }

        let method = request
            .method
            .to_http_method()
            .map_err(TransportError::InvalidMethod)?;

        let mut builder = self
            .client
            .request(method, request.url.as_str())
            .headers(headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let res = builder.send().await?;

        let status = res.status().as_u16();
        let header_pairs = res
            .headers()
            .iter()
            .filter_map(|(k, v)| {
                v.to_str()
                    .ok()
                    .map(|v| (k.as_str().to_string(), v.to_string()))
            })
            .collect::<Vec<_>>();
        let body = res.text().await?;

        let response = HttpResponse::new(status, header_pairs, body);
        if !(200..300).contains(&response.status) {
            return Err(TransportError::Status { response });
        }

        Ok(response)
    }
}
