use super::*;

#[test]
fn resolve_base_url_defaults_when_unset() {
    assert_eq!(resolve_base_url(None), DEFAULT_BASE_URL);
    assert_eq!(resolve_base_url(Some("")), DEFAULT_BASE_URL);
}

#[test]
fn resolve_base_url_trims_trailing_slash() {
    assert_eq!(resolve_base_url(Some("https://sho.rt/")), "https://sho.rt");
}
