use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_unset() {
    let cfg = ConsoleConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(cfg.backend_connect_timeout, Duration::from_secs(DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS));
}

#[test]
fn overrides_are_parsed_and_trailing_slash_trimmed() {
    let cfg = ConsoleConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BACKEND_URL", "https://campus.example.test/api/"),
        ("BACKEND_CONNECT_TIMEOUT_SECS", "3"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url, "https://campus.example.test/api");
    assert_eq!(cfg.backend_connect_timeout, Duration::from_secs(3));
}

#[test]
fn bad_port_is_rejected() {
    let err = ConsoleConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "PORT", value: "eighty".to_owned() });
}

#[test]
fn backend_url_needs_http_scheme() {
    let err = ConsoleConfig::from_lookup(lookup(&[("BACKEND_URL", "campus.local/api")])).unwrap_err();
    assert!(matches!(err, ConfigError::BackendScheme(_)));
}
