use super::*;

#[test]
fn from_values_defaults_when_unset() {
    let cfg = ClientConfig::from_values(None, None, None, None).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.credential_key, "token");
    assert_eq!(cfg.notice_ttl_ms, 4000);
    assert_eq!(cfg.log_level, log::Level::Info);
}

#[test]
fn from_values_parses_overrides() {
    let cfg =
        ClientConfig::from_values(Some("https://api.example.test/"), Some("ss_token"), Some(" 2500 "), Some("debug"))
            .unwrap();
    assert_eq!(cfg.api_base, "https://api.example.test");
    assert_eq!(cfg.credential_key, "ss_token");
    assert_eq!(cfg.notice_ttl_ms, 2500);
    assert_eq!(cfg.log_level, log::Level::Debug);
}

#[test]
fn from_values_rejects_bad_ttl() {
    let err = ClientConfig::from_values(None, None, Some("soon"), None).unwrap_err();
    assert!(err.to_string().contains("SMARTSPEND_NOTICE_TTL_MS"));
}

#[test]
fn from_values_rejects_bad_log_level() {
    let err = ClientConfig::from_values(None, None, None, Some("loud")).unwrap_err();
    assert!(matches!(err, ClientError::ConfigParse(_)));
}

#[test]
fn from_values_rejects_empty_credential_key() {
    assert!(ClientConfig::from_values(None, Some("  "), None, None).is_err());
}
