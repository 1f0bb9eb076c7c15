use std::time::Duration;

use once_cell::sync::Lazy;
use ureq::ResponseExt;

use crate::error::{Result, StaylistError};

/// Default HTTP request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Shared HTTP agent for connection pooling
static HTTP_AGENT: Lazy<ureq::Agent> = Lazy::new(|| {
    ureq::Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)))
        .build()
        .into()
});

/// Content fetched from a listing page
#[derive(Debug, Clone)]
pub struct PageContent {
    /// Final URL after redirects
    pub url: String,
    /// Raw HTML content
    pub html: String,
}

/// Fetch a listing page over HTTP
pub fn fetch_page(url: &str) -> Result<PageContent> {
    let response = HTTP_AGENT
        .get(url)
        .header(
            "User-Agent",
            "Mozilla/5.0 (compatible; staylist/0.1; +https://github.com/staylist/staylist)",
        )
        .call()?;

    let final_url = response.get_uri().to_string();
    let html = response.into_body().read_to_string()?;

    Ok(PageContent {
        url: final_url,
        html,
    })
}

/// Normalize user input into a fetchable URL (accepts bare domains)
pub fn normalize_url(input: &str) -> Result<String> {
    let input = input.trim();

    if input.starts_with("http://") || input.starts_with("https://") {
        url::Url::parse(input)?;
        return Ok(input.to_string());
    }

    // Bare domain: auto-add https://
    if input.contains('.') && !input.contains(' ') {
        let with_scheme = format!("https://{}", input);
        if url::Url::parse(&with_scheme).is_ok() {
            return Ok(with_scheme);
        }
    }

    Err(StaylistError::ConfigError(format!(
        "Not a valid URL: {}",
        input
    )))
}
