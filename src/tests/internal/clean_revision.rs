//! 版本号清理测试。

use crate::internal::webdav::functions::clean_revision::clean_revision;

#[test]
fn strips_quotes() {
    assert_eq!(clean_revision("\"abc\""), "abc");
}

#[test]
fn strips_slashes() {
    assert_eq!(clean_revision("a/b"), "ab");
}

#[test]
fn strips_quote_entities() {
    assert_eq!(clean_revision("&quot;x&quot;"), "x");
}

#[test]
fn empty_stays_empty() {
    assert_eq!(clean_revision(""), "");
}

#[test]
fn trims_whitespace() {
    assert_eq!(clean_revision("  \"W2-abc\"  "), "W2-abc");
}

#[test]
fn never_validates_shape() {
    // 纯字面清理：乱七八糟的输入也照样处理，不报错
    assert_eq!(clean_revision("not-an-etag at all"), "not-an-etag at all");
}
