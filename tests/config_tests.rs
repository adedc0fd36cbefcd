use docsum::core::config::{AppConfig, Backend, DEFAULT_MODEL_URL};
use std::collections::HashMap;

fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    AppConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults_apply_without_variables() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.backend, Backend::Inference);
    assert_eq!(config.model_url.as_str(), DEFAULT_MODEL_URL);
    assert_eq!(config.api_token, None);
    assert_eq!(config.request_timeout_secs, 120);
    assert_eq!(config.max_retries, 3);
    assert_eq!(config.min_detect_chars, 12);
}

#[test]
fn test_variables_override_defaults() {
    let config = config_from(&[
        ("DOCSUM_BACKEND", "lead"),
        ("DOCSUM_MODEL_URL", "http://localhost:8080/summarize"),
        ("HF_API_TOKEN", "hf_secret"),
        ("DOCSUM_REQUEST_TIMEOUT_SECS", "30"),
        ("DOCSUM_MAX_RETRIES", "0"),
        ("DOCSUM_MIN_DETECT_CHARS", "20"),
    ])
    .unwrap();

    assert_eq!(config.backend, Backend::Lead);
    assert_eq!(config.model_url.as_str(), "http://localhost:8080/summarize");
    assert_eq!(config.api_token.as_deref(), Some("hf_secret"));
    assert_eq!(config.request_timeout_secs, 30);
    assert_eq!(config.max_retries, 0);
    assert_eq!(config.min_detect_chars, 20);
}

#[test]
fn test_blank_token_is_ignored() {
    let config = config_from(&[("HF_API_TOKEN", "   ")]).unwrap();
    assert_eq!(config.api_token, None);
}

#[test]
fn test_invalid_values_are_rejected() {
    let cases = [
        ("DOCSUM_BACKEND", "gpt"),
        ("DOCSUM_MODEL_URL", "not a url"),
        ("DOCSUM_MODEL_URL", "ftp://example.com/model"),
        ("DOCSUM_MAX_RETRIES", "-1"),
        ("DOCSUM_REQUEST_TIMEOUT_SECS", "soon"),
    ];

    for (key, value) in cases {
        let err = config_from(&[(key, value)]).unwrap_err();
        assert!(err.contains(key), "error for {key}={value} should name the variable: {err}");
    }
}
