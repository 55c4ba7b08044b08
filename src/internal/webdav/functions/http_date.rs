use chrono::{DateTime, FixedOffset, Utc};

/// 尝试把版本字符串解析为 HTTP 日期。
///
/// 先按 RFC 2822（标准 HTTP-date）解析，失败再退 RFC 3339；
/// 两者都不中返回 None，调用方应当退化为无条件请求，而不是报错。
pub fn parse_http_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
}

/// 按 IMF-fixdate（GMT）格式化，用于 If-Unmodified-Since 请求头
pub fn format_http_date(date: DateTime<FixedOffset>) -> String {
    date.with_timezone(&Utc)
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}
