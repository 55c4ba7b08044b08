pub mod http_message;
pub mod reqwest_transport;
pub mod transport_error;

// 重导出公共类型
pub use http_message::{HttpRequest, HttpResponse};
pub use reqwest_transport::ReqwestTransport;
pub use transport_error::TransportError;
