pub mod file_meta;
pub mod outcomes;
pub mod remote_error;
pub mod remote_file_store;

// 重导出公共类型
pub use file_meta::FileMeta;
pub use outcomes::{DownloadOutcome, UploadOutcome};
pub use remote_error::RemoteError;
pub use remote_file_store::RemoteFileStore;
