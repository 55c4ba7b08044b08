/// 规范化实体标签之类的版本头：去掉引号、斜杠与 `&quot;` 实体，再修剪空白。
///
/// 只做字面清理，不校验输入是不是合法的实体标签；空输入返回空串。
pub fn clean_revision(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    raw.replace('"', "")
        .replace('/', "")
        .replace("&quot;", "")
        .trim()
        .to_string()
}
