use super::*;

#[test]
fn backend_root_prefers_configured_url() {
    assert_eq!(backend_root(Some("http://api.test"), "http://page.test"), "http://api.test");
}

#[test]
fn backend_root_falls_back_to_origin_when_unset_or_blank() {
    assert_eq!(backend_root(None, "http://page.test"), "http://page.test");
    assert_eq!(backend_root(Some("  "), "http://page.test"), "http://page.test");
}

#[test]
fn config_for_appends_survey_api_path() {
    let cfg = config_for(Some("http://api.test/"), "http://page.test");
    assert_eq!(cfg.api_base, "http://api.test/api/surveys");
}

#[test]
fn config_for_origin_targets_proxy() {
    let cfg = config_for(None, "https://surveys.example");
    assert_eq!(cfg.api_base, "https://surveys.example/api/surveys");
}

#[test]
fn survey_service_builds_with_ambient_config() {
    assert!(client_config().api_base.ends_with("/api/surveys"));
    assert!(survey_service().is_ok());
}
