//! 远程文件操作的错误类型。
//!
//! 每个公开操作要么成功返回完整结果，要么恰好落在下面某一种错误上；
//! 目录创建失败是唯一被内部消化的失败（随后的重试写入会暴露真实错误）。

use thiserror::Error;

use crate::internal::transport::structs::transport_error::TransportError;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("远程文件不存在: {path}")]
    NotFound { path: String },

    #[error("远程文件已被意外修改: {path}（期望版本: {expected_rev:?}）")]
    ConflictChanged {
        path: String,
        expected_rev: Option<String>,
    },

    #[error("服务器未返回任何版本信息（缺少 Last-Modified）")]
    MissingRevision,

    #[error("响应内容校验失败[{path}]: {reason}")]
    InvalidData { path: String, reason: String },

    #[error("路径非法: {path}，不允许包含 '..' 或 '//'")]
    PathValidation { path: String },

    #[error("获取配置失败: {0}")]
    Config(String),

    #[error(transparent)]
    Transport(#[from] TransportError),
}
