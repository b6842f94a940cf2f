use super::*;

#[test]
fn status_reply_missing_fields_is_not_ok() {
    let reply: StatusReply = serde_json::from_str("{}").unwrap();
    assert!(!reply.is_ok());
    assert_eq!(reply.error, None);
}

#[test]
fn status_reply_error_shape() {
    let reply: StatusReply =
        serde_json::from_str(r#"{"status":"Error","error":"invalid credentials"}"#).unwrap();
    assert!(!reply.is_ok());
    assert_eq!(reply.error.as_deref(), Some("invalid credentials"));
    assert!(StatusReply::ok().is_ok());
}

#[test]
fn shorten_request_omits_blank_alias() {
    let body = serde_json::to_value(ShortenRequest::new("https://a.io", Some("  "))).unwrap();
    assert_eq!(body, serde_json::json!({ "url": "https://a.io" }));

    let body = serde_json::to_value(ShortenRequest::new("https://a.io", Some(" go "))).unwrap();
    assert_eq!(body, serde_json::json!({ "url": "https://a.io", "alias": "go" }));
}

#[test]
fn credentials_debug_hides_password() {
    let rendered = format!("{:?}", Credentials::new("ann", "hunter2"));
    assert!(rendered.contains("ann"));
    assert!(!rendered.contains("hunter2"));
}

#[test]
fn short_link_accepts_string_and_number_counts() {
    let links: Vec<ShortLink> = serde_json::from_str(
        r#"[
            {"url":"https://a.io","alias":"a","count":"17"},
            {"url":"https://b.io","alias":"b","count":4},
            {"url":"https://c.io","alias":"c","count":"many"},
            {"url":"https://d.io","alias":"d"}
        ]"#,
    )
    .unwrap();
    let counts: Vec<u64> = links.iter().map(|l| l.count).collect();
    assert_eq!(counts, vec![17, 4, 0, 0]);
}

#[test]
fn short_link_formats_creation_date() {
    let link: ShortLink = serde_json::from_str(
        r#"{"url":"https://a.io","alias":"a","created_at":"2024-03-09T23:30:00+03:00","count":"0"}"#,
    )
    .unwrap();
    assert_eq!(link.created_display(), "09.03.2024");
}

#[test]
fn short_link_tolerates_bad_timestamp() {
    let link: ShortLink =
        serde_json::from_str(r#"{"url":"https://a.io","alias":"a","created_at":"yesterday"}"#)
            .unwrap();
    assert_eq!(link.created_at, None);
    assert_eq!(link.created_display(), "-");
}

#[test]
fn url_page_null_urls_is_empty() {
    let page: UrlPage = serde_json::from_str(r#"{"status":"OK","urls":null,"total":0}"#).unwrap();
    assert!(page.urls.is_empty());
    assert_eq!(page.total, 0);
}

#[test]
fn alias_check_defaults_to_unused() {
    let check: AliasCheck = serde_json::from_str(r#"{"status":"OK"}"#).unwrap();
    assert!(!check.exists);
    let check: AliasCheck = serde_json::from_str(r#"{"exists":true}"#).unwrap();
    assert!(check.exists);
}

#[test]
fn shorten_reply_reads_alias() {
    let reply: ShortenReply = serde_json::from_str(r#"{"status":"OK","alias":"x1"}"#).unwrap();
    assert!(reply.is_ok());
    assert_eq!(reply.alias.as_deref(), Some("x1"));
}
