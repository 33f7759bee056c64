use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_port() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("SURVEY_BACKEND_URL", "http://localhost:8080")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.survey.api_base, "http://localhost:8080/api/surveys");
}

#[test]
fn from_lookup_parses_port() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "8081"),
        ("SURVEY_BACKEND_URL", "http://backend:8080"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8081);
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "eighty"),
        ("SURVEY_BACKEND_URL", "http://backend:8080"),
    ]))
    .unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT".into(), value: "eighty".into() });
}

#[test]
fn from_lookup_requires_backend_url() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "3000")])).unwrap_err();
    assert!(matches!(err, ConfigError::Missing { .. }));
}
