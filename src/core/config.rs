use std::env;
use std::str::FromStr;
use url::Url;

pub const DEFAULT_MODEL_URL: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-cnn";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_MAX_RETRIES: usize = 3;
pub const DEFAULT_MIN_DETECT_CHARS: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Hosted inference endpoint.
    Inference,
    /// Offline lead-sentence extraction.
    Lead,
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inference" => Ok(Backend::Inference),
            "lead" => Ok(Backend::Lead),
            other => Err(format!("unknown backend '{other}' (expected 'inference' or 'lead')")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend: Backend,
    pub model_url: Url,
    pub api_token: Option<String>,
    pub request_timeout_secs: u64,
    pub max_retries: usize,
    pub min_detect_chars: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Inference,
            model_url: Url::parse(DEFAULT_MODEL_URL).expect("default model URL is valid"),
            api_token: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
            min_detect_chars: DEFAULT_MIN_DETECT_CHARS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let backend = match lookup("DOCSUM_BACKEND") {
            Some(raw) => raw.parse().map_err(|e| format!("DOCSUM_BACKEND: {}", e))?,
            None => defaults.backend,
        };

        let model_url = match lookup("DOCSUM_MODEL_URL") {
            Some(raw) => parse_model_url(&raw).map_err(|e| format!("DOCSUM_MODEL_URL: {}", e))?,
            None => defaults.model_url,
        };

        Ok(Self {
            backend,
            model_url,
            api_token: lookup("HF_API_TOKEN").filter(|t| !t.trim().is_empty()),
            request_timeout_secs: parse_number(
                &lookup,
                "DOCSUM_REQUEST_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            )?,
            max_retries: parse_number(&lookup, "DOCSUM_MAX_RETRIES", defaults.max_retries)?,
            min_detect_chars: parse_number(
                &lookup,
                "DOCSUM_MIN_DETECT_CHARS",
                defaults.min_detect_chars,
            )?,
        })
    }
}

fn parse_model_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw.trim()).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("unsupported scheme '{other}'")),
    }
}

fn parse_number<F, T>(lookup: &F, key: &str, default: T) -> Result<T, String>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| format!("{}: {}", key, e)),
        None => Ok(default),
    }
}
