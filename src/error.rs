use thiserror::Error;

#[derive(Error, Debug)]
pub enum StaylistError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] ureq::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("Assistant CLI not installed: {0}")]
    AssistantNotInstalled(String),

    #[error("Assistant CLI failed: {0}")]
    AssistantFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl StaylistError {
    /// Get an actionable hint for how to resolve this error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            StaylistError::HttpError(_) => Some(
                "Check your internet connection, or pass the page URL with an explicit https:// scheme"
            ),
            StaylistError::ConfigError(_) => Some(
                "Set a Places API key with STAYLIST_API_KEY, or add api_key to config.toml\nRun `staylist doctor` to check your setup"
            ),
            StaylistError::AssistantNotInstalled(_) => Some(
                "Install the claude CLI, or re-run with --no-ai for the deterministic fallbacks"
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StaylistError>;
