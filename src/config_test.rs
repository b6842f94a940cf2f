use super::*;

#[test]
fn parse_base_url_defaults_when_missing_or_blank() {
    assert_eq!(parse_base_url(None), DEFAULT_BASE_URL);
    assert_eq!(parse_base_url(Some("   ")), DEFAULT_BASE_URL);
}

#[test]
fn parse_base_url_strips_trailing_slashes() {
    assert_eq!(parse_base_url(Some("https://sho.rt/")), "https://sho.rt");
    assert_eq!(parse_base_url(Some(" https://sho.rt// ")), "https://sho.rt");
}

#[test]
fn parse_store_path_prefers_explicit_value() {
    assert_eq!(
        parse_store_path(Some("/tmp/creds.json"), Some("/home/ann")),
        PathBuf::from("/tmp/creds.json")
    );
}

#[test]
fn parse_store_path_falls_back_to_home() {
    assert_eq!(
        parse_store_path(None, Some("/home/ann")),
        PathBuf::from("/home/ann/.linkdeck/storage.json")
    );
}

#[test]
fn parse_store_path_without_home_is_relative() {
    assert_eq!(parse_store_path(Some(""), None), PathBuf::from(".linkdeck/storage.json"));
}

#[test]
fn page_size_matches_dashboard_contract() {
    assert_eq!(ITEMS_PER_PAGE, 10);
    assert_eq!(CREDENTIALS_KEY, "credentials");
}
