//! 多状态响应解析与转换测试。

use crate::internal::webdav::raw_xml::impl_multi_status::ToFileMeta;
use crate::internal::webdav::raw_xml::raw_file::MultiStatus;

fn parse(xml: &str) -> MultiStatus {
    quick_xml::de::from_str(xml).expect("测试 XML 应能解析")
}

#[test]
fn converts_single_file() {
    let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<multistatus xmlns="DAV:">
  <response>
    <href>/remote/notes/a%20b.txt</href>
    <propstat>
      <prop>
        <getlastmodified>Mon, 01 Jan 2024 00:00:00 GMT</getlastmodified>
        <getcontentlength>5</getcontentlength>
        <getcontenttype>text/plain</getcontenttype>
        <getetag>"abc123"</getetag>
      </prop>
      <status>HTTP/1.1 200 OK</status>
    </propstat>
  </response>
</multistatus>"#;

    let metas = parse(xml).to_file_meta();
    assert_eq!(metas.len(), 1);

    let meta = &metas[0];
    assert_eq!(meta.filename, "a b.txt", "href 应做 URL 解码");
    assert_eq!(meta.basename, "a b.txt");
    assert_eq!(meta.last_modified, "Mon, 01 Jan 2024 00:00:00 GMT");
    assert_eq!(meta.size, 5);
    assert_eq!(meta.content_type, "text/plain");
    assert_eq!(meta.etag, "abc123", "etag 应去掉引号");
    assert_eq!(meta.raw_etag.as_deref(), Some("\"abc123\""));
}

#[test]
fn display_name_wins_over_href() {
    let xml = r#"<?xml version="1.0"?>
<multistatus xmlns="DAV:">
  <response>
    <href>/remote/x.txt</href>
    <propstat>
      <prop>
        <displayname>好看的名字.txt</displayname>
        <getlastmodified>Mon, 01 Jan 2024 00:00:00 GMT</getlastmodified>
      </prop>
      <status>HTTP/1.1 200 OK</status>
    </propstat>
  </response>
</multistatus>"#;

    let metas = parse(xml).to_file_meta();
    assert_eq!(metas[0].filename, "好看的名字.txt");
}

#[test]
fn skips_collections() {
    let xml = r#"<?xml version="1.0"?>
<multistatus xmlns="DAV:">
  <response>
    <href>/remote/dir/</href>
    <propstat>
      <prop>
        <resourcetype><collection/></resourcetype>
        <getlastmodified>Mon, 01 Jan 2024 00:00:00 GMT</getlastmodified>
      </prop>
      <status>HTTP/1.1 200 OK</status>
    </propstat>
  </response>
</multistatus>"#;

    assert!(parse(xml).to_file_meta().is_empty(), "目录不应产出元数据");
}

#[test]
fn skips_records_without_last_modified() {
    // 没有修改时间就没有版本号，这样的记录必须被丢弃
    let xml = r#"<?xml version="1.0"?>
<multistatus xmlns="DAV:">
  <response>
    <href>/remote/x.txt</href>
    <propstat>
      <prop>
        <getcontentlength>5</getcontentlength>
      </prop>
      <status>HTTP/1.1 200 OK</status>
    </propstat>
  </response>
</multistatus>"#;

    assert!(parse(xml).to_file_meta().is_empty());
}

#[test]
fn skips_non_2xx_propstat() {
    let xml = r#"<?xml version="1.0"?>
<multistatus xmlns="DAV:">
  <response>
    <href>/remote/x.txt</href>
    <propstat>
      <prop>
        <getlastmodified>Mon, 01 Jan 2024 00:00:00 GMT</getlastmodified>
      </prop>
      <status>HTTP/1.1 404 Not Found</status>
    </propstat>
  </response>
</multistatus>"#;

    assert!(parse(xml).to_file_meta().is_empty());
}

#[test]
fn missing_size_defaults_to_zero() {
    let xml = r#"<?xml version="1.0"?>
<multistatus xmlns="DAV:">
  <response>
    <href>/remote/x.txt</href>
    <propstat>
      <prop>
        <getlastmodified>Mon, 01 Jan 2024 00:00:00 GMT</getlastmodified>
      </prop>
      <status>HTTP/1.1 200 OK</status>
    </propstat>
  </response>
</multistatus>"#;

    let metas = parse(xml).to_file_meta();
    assert_eq!(metas[0].size, 0);
    assert_eq!(metas[0].content_type, "application/octet-stream");
    assert_eq!(metas[0].etag, "");
    assert!(metas[0].raw_etag.is_none());
}

#[test]
fn empty_multistatus_yields_nothing() {
    let xml = r#"<?xml version="1.0"?><multistatus xmlns="DAV:"></multistatus>"#;
    assert!(parse(xml).to_file_meta().is_empty());
}
