//! 元数据查询测试：PROPFIND 主路径与 HEAD 探测回退。

use crate::internal::remote_file::structs::remote_error::RemoteError;
use crate::internal::webdav::enums::WebDavMethod;
use crate::tests::{CannedResponse, mock_store, multi_status_body};

const FILE_URL: &str = "https://dav.example.com/remote/notes/a.txt";

#[tokio::test]
async fn propfind_returns_first_record() {
    let (store, transport) = mock_store();
    transport.on(
        WebDavMethod::Propfind,
        FILE_URL,
        CannedResponse::new(207).body(&multi_status_body(
            "/remote/notes/a.txt",
            "Mon, 01 Jan 2024 00:00:00 GMT",
            "abc123",
        )),
    );

    let meta = store
        .get_file_meta("/notes/a.txt", None, false)
        .await
        .unwrap();

    assert_eq!(meta.last_modified, "Mon, 01 Jan 2024 00:00:00 GMT");
    assert!(!meta.last_modified.is_empty(), "成功的元数据必须带版本号");
    assert_eq!(meta.filename, "a.txt");
    assert_eq!(transport.count(WebDavMethod::Head), 0, "主路径命中不应触发探测");

    // 请求本身也要对：depth 0 + 认证头
    let seen = transport.seen();
    let propfind = &seen[0];
    assert_eq!(propfind.header("Depth"), Some("0"));
    assert!(
        propfind.header("Authorization").unwrap().starts_with("Basic "),
        "每次请求都应带 Basic 认证头"
    );
    assert!(propfind.body.as_deref().unwrap().contains("allprop"));
}

#[tokio::test]
async fn empty_multistatus_falls_back_to_head() {
    let (store, transport) = mock_store();
    transport
        .on(
            WebDavMethod::Propfind,
            FILE_URL,
            CannedResponse::new(207).body(r#"<?xml version="1.0"?><multistatus xmlns="DAV:"></multistatus>"#),
        )
        .on(
            WebDavMethod::Head,
            FILE_URL,
            CannedResponse::new(200)
                .header("Last-Modified", "Tue, 02 Jan 2024 10:00:00 GMT")
                .header("Content-Length", "not-a-number"),
        );

    let meta = store
        .get_file_meta("/notes/a.txt", None, true)
        .await
        .unwrap();

    // HEAD 合成的元数据：etag 与修改时间一致，坏长度按 0，类型按二进制
    assert_eq!(meta.last_modified, "Tue, 02 Jan 2024 10:00:00 GMT");
    assert_eq!(meta.etag, meta.last_modified);
    assert_eq!(meta.size, 0);
    assert_eq!(meta.content_type, "application/octet-stream");
    assert_eq!(meta.filename, "a.txt");
    assert!(meta.raw_etag.is_none());
}

#[tokio::test]
async fn empty_multistatus_without_fallback_is_not_found() {
    let (store, transport) = mock_store();
    transport.on(
        WebDavMethod::Propfind,
        FILE_URL,
        CannedResponse::new(207).body(r#"<?xml version="1.0"?><multistatus xmlns="DAV:"></multistatus>"#),
    );

    let err = store
        .get_file_meta("/notes/a.txt", None, false)
        .await
        .unwrap_err();

    assert!(matches!(err, RemoteError::NotFound { .. }));
    assert_eq!(transport.count(WebDavMethod::Head), 0);
}

#[tokio::test]
async fn garbage_body_behaves_like_empty() {
    let (store, transport) = mock_store();
    transport
        .on(
            WebDavMethod::Propfind,
            FILE_URL,
            CannedResponse::new(207).body("this is not xml at all"),
        )
        .on(
            WebDavMethod::Head,
            FILE_URL,
            CannedResponse::new(200).header("Last-Modified", "Tue, 02 Jan 2024 10:00:00 GMT"),
        );

    // 解析不动的响应体不应变成硬错误，而是走同样的回退
    let meta = store
        .get_file_meta("/notes/a.txt", None, true)
        .await
        .unwrap();
    assert_eq!(meta.last_modified, "Tue, 02 Jan 2024 10:00:00 GMT");
}

#[tokio::test]
async fn head_without_last_modified_is_missing_revision() {
    let (store, transport) = mock_store();
    transport
        .on(
            WebDavMethod::Propfind,
            FILE_URL,
            CannedResponse::new(207).body(r#"<?xml version="1.0"?><multistatus xmlns="DAV:"></multistatus>"#),
        )
        .on(WebDavMethod::Head, FILE_URL, CannedResponse::new(200));

    let err = store
        .get_file_meta("/notes/a.txt", None, true)
        .await
        .unwrap_err();

    assert!(matches!(err, RemoteError::MissingRevision));
}

#[tokio::test]
async fn propfind_404_maps_to_not_found() {
    // 路由不设任何响应，mock 默认回 404
    let (store, _transport) = mock_store();

    let err = store
        .get_file_meta("/notes/a.txt", None, true)
        .await
        .unwrap_err();

    assert!(matches!(err, RemoteError::NotFound { .. }));
}

#[tokio::test]
async fn invalid_path_fails_before_any_request() {
    let (store, transport) = mock_store();

    let err = store
        .get_file_meta("/a/../b.txt", None, true)
        .await
        .unwrap_err();

    assert!(matches!(err, RemoteError::PathValidation { .. }));
    assert!(transport.seen().is_empty(), "路径校验失败不应发任何请求");
}
