//! 传输层错误类型。

use thiserror::Error;

use super::http_message::HttpResponse;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP 状态异常 {}: {}", .response.status, .response.body)]
    Status { response: HttpResponse },

    #[error("非法的请求头: {0}")]
    InvalidHeader(String),

    #[error("非法的请求方法: {0}")]
    InvalidMethod(String),
}

impl TransportError {
    /// 非 2xx 状态码（网络层错误没有状态码，返回 None）
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { response } => Some(response.status),
            _ => None,
        }
    }

    /// 携带的完整响应（仅状态类错误有）
    pub fn response(&self) -> Option<&HttpResponse> {
        match self {
            TransportError::Status { response } => Some(response),
            _ => None,
        }
    }
}
