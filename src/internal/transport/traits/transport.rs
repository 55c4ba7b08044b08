use async_trait::async_trait;

use crate::internal::transport::structs::http_message::{HttpRequest, HttpResponse};
use crate::internal::transport::structs::transport_error::TransportError;

/// 传输适配器：执行一次 HTTP 交换。
///
/// 约定：
/// - 非 2xx 状态必须返回 [`TransportError::Status`]，携带完整响应；
///   207 Multi-Status 落在 2xx 区间内，按成功返回
/// - 超时与取消由实现方处理，对上层统一表现为传输错误
#[async_trait]
pub trait Transport: Send + Sync {
    async fn exchange(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
