use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.upload_backend_url, "http://localhost:8001/upload");
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", " 8080 "),
        ("UPLOAD_BACKEND_URL", "http://ingest.internal:9000/upload"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.upload_backend_url, "http://ingest.internal:9000/upload");
}

#[test]
fn from_lookup_invalid_port_errors() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")]))
        .unwrap_err()
        .to_string();
    assert!(err.contains("invalid PORT"));
}

#[test]
fn from_lookup_port_out_of_range_errors() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(raw) if raw == "70000"));
}

#[test]
fn from_lookup_relative_upload_url_errors() {
    let err = ServerConfig::from_lookup(lookup_from(&[("UPLOAD_BACKEND_URL", "/upload")]))
        .unwrap_err()
        .to_string();
    assert!(err.contains("invalid UPLOAD_BACKEND_URL"));
}

#[test]
fn from_lookup_blank_upload_url_falls_back_to_default() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("UPLOAD_BACKEND_URL", "   ")])).unwrap();
    assert_eq!(cfg.upload_backend_url, DEFAULT_UPLOAD_BACKEND_URL);
}
