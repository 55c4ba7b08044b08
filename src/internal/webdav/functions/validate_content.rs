use crate::internal::remote_file::structs::remote_error::RemoteError;

/// 校验响应体是不是真正的文件内容。
///
/// 一些服务器会把登录页或错误页包装成 200 返回，这里识别明显的 HTML
/// 页面，避免把它当作文件内容交给上层。
pub fn validate_response_content(
    body: &str,
    path: &str,
    context: &str,
) -> Result<(), RemoteError> {
    let head = body.trim_start();
    let lowered = head.get(..64).unwrap_or(head).to_ascii_lowercase();

    if lowered.starts_with("<!doctype html") || lowered.starts_with("<html") {
        return Err(RemoteError::InvalidData {
            path: path.to_string(),
            reason: format!("{} 拿到的是 HTML 页面而不是文件内容", context),
        });
    }

    Ok(())
}
