use crate::internal::remote_file::structs::remote_error::RemoteError;

/// 把 base_url 与相对路径拼成完整请求 URL。
///
/// 相对路径不允许包含 `..` 或 `//`，违规直接返回 PathValidation 错误，
/// 不会发出任何网络请求。base_url 去掉尾部斜杠，相对路径保证单个前导
/// 斜杠，中间的连续斜杠压缩成一个。
pub fn build_full_path(base_url: &str, path: &str) -> Result<String, RemoteError> {
    if path.contains("..") || path.contains("//") {
        return Err(RemoteError::PathValidation {
            path: path.to_string(),
        });
    }

    let clean_base = base_url.trim_end_matches('/');
    let clean_path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };

    // 再压缩一次连续斜杠，防止拼接过程引入
    let mut normalized = String::with_capacity(clean_path.len());
    let mut prev_slash = false;
    for c in clean_path.chars() {
        if c == '/' {
            if prev_slash {
                continue;
            }
            prev_slash = true;
        } else {
            prev_slash = false;
        }
        normalized.push(c);
    }

    Ok(format!("{}{}", clean_base, normalized))
}
