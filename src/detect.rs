use std::time::Duration;

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

use crate::assist::{strip_code_fencing, Assistant};
use crate::config::RetryPolicy;
use crate::error::Result;

/// Precompiled regex for collapsing whitespace
static WHITESPACE_RE: Lazy<regex::Regex> =
    Lazy::new(|| regex::Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Maximum page text handed to the assistant for fallback detection
const ASSIST_TEXT_CHARS: usize = 1200;

/// Property name and location read off a listing page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectedProperty {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
}

impl DetectedProperty {
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
    }
}

/// Selector lists and cleanup rules for field extraction.
///
/// Kept as configuration data so new site layouts can be added without
/// touching the extractor itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorRules {
    /// Name selectors, evaluated in order; first non-empty match wins
    pub name_selectors: Vec<String>,
    /// Location selectors, evaluated in order
    pub location_selectors: Vec<String>,
    /// Regex patterns stripped from the extracted name
    pub cleanup_patterns: Vec<String>,
}

impl Default for SelectorRules {
    fn default() -> Self {
        Self {
            name_selectors: vec![
                "h1".into(),
                ".hp__hotel-name".into(),
                ".pp-header__title".into(),
                "[data-testid='header-hotel-name']".into(),
                ".hotel-name".into(),
                ".sr-hotel__name".into(),
                ".title".into(),
            ],
            location_selectors: vec![
                ".hp_address_subtitle".into(),
                ".pp-header__subtitle".into(),
                "[data-testid='header-hotel-address']".into(),
                ".address".into(),
                ".property-address".into(),
                ".sr_card_address_line".into(),
            ],
            cleanup_patterns: vec![r"(?i)\(.*deals.*\)".into(), r"(?i)deals".into()],
        }
    }
}

impl SelectorRules {
    /// Smaller rule set used on the retry pass
    pub fn reduced(&self) -> Self {
        Self {
            name_selectors: vec![
                "h1".into(),
                ".pp-header__title".into(),
                ".hp__hotel-name".into(),
            ],
            location_selectors: vec![
                ".address".into(),
                ".property-address".into(),
                "[data-testid='header-hotel-address']".into(),
            ],
            cleanup_patterns: self.cleanup_patterns.clone(),
        }
    }
}

/// Extract the property name and location from a page
pub fn detect(html: &str, rules: &SelectorRules) -> DetectedProperty {
    let document = Html::parse_document(html);

    let mut name = match first_selector_text(&document, &rules.name_selectors) {
        Some(n) => n,
        // No selector hit: the document title's first " - " segment is the
        // best remaining guess (booking sites suffix the site name there).
        None => title_first_segment(&document),
    };

    name = apply_cleanup(&name, &rules.cleanup_patterns);

    if name.chars().count() < 3 {
        name = apply_cleanup(&title_first_segment(&document), &rules.cleanup_patterns);
    }

    let location = first_selector_text(&document, &rules.location_selectors).unwrap_or_default();

    DetectedProperty { name, location }
}

/// Detect with a bounded retry: later attempts re-fetch the page and use the
/// reduced selector set. The sleep function is injected so tests can use a
/// fake clock.
pub fn detect_with_retry<F, S>(
    mut fetch_html: F,
    rules: &SelectorRules,
    policy: &RetryPolicy,
    mut sleep: S,
) -> Result<DetectedProperty>
where
    F: FnMut() -> Result<String>,
    S: FnMut(Duration),
{
    let html = fetch_html()?;
    let detected = detect(&html, rules);
    if !detected.is_empty() {
        return Ok(detected);
    }

    let reduced = rules.reduced();
    for _ in 1..policy.max_attempts.max(1) {
        sleep(policy.delay());
        let html = fetch_html()?;
        let retry = detect(&html, &reduced);
        if !retry.is_empty() {
            return Ok(retry);
        }
    }

    Ok(DetectedProperty::default())
}

/// Best-effort AI fallback: hand the leading body text to the assistant and
/// ask for a structured name/location guess. Any malformed reply is treated
/// as no detection.
pub fn detect_with_assistant(assistant: &dyn Assistant, html: &str) -> Option<DetectedProperty> {
    if !assistant.is_available() {
        return None;
    }

    let body_text = leading_body_text(html, ASSIST_TEXT_CHARS);
    if body_text.is_empty() {
        return None;
    }

    let prompt = format!(
        "Identify the hotel name and location on this page. \
         Respond ONLY with JSON, no other text: {{\"name\":\"...\",\"location\":\"...\"}}\n\n\
         Page text: {}",
        body_text
    );

    let reply = assistant.generate(&prompt).ok()?;
    let detected: DetectedProperty = serde_json::from_str(&strip_code_fencing(&reply)).ok()?;
    if detected.is_empty() {
        return None;
    }
    Some(detected)
}

/// Leading body text with whitespace collapsed, bounded to `max_chars`
pub fn leading_body_text(html: &str, max_chars: usize) -> String {
    let document = Html::parse_document(html);
    let body_selector = match Selector::parse("body") {
        Ok(s) => s,
        Err(_) => return String::new(),
    };

    let Some(body) = document.select(&body_selector).next() else {
        return String::new();
    };

    let text: String = body.text().collect::<Vec<_>>().join(" ");
    let collapsed = WHITESPACE_RE.replace_all(text.trim(), " ");
    collapsed.chars().take(max_chars).collect()
}

/// First non-empty trimmed text match across an ordered selector list.
/// Invalid selector strings are skipped.
fn first_selector_text(document: &Html, selectors: &[String]) -> Option<String> {
    for selector_str in selectors {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        if let Some(el) = document.select(&selector).next() {
            let text: String = el.text().collect::<Vec<_>>().join(" ");
            let trimmed = WHITESPACE_RE.replace_all(text.trim(), " ").into_owned();
            if !trimmed.is_empty() {
                return Some(trimmed);
            }
        }
    }
    None
}

/// First " - " segment of the document title, trimmed
fn title_first_segment(document: &Html) -> String {
    let Ok(selector) = Selector::parse("title") else {
        return String::new();
    };
    let Some(el) = document.select(&selector).next() else {
        return String::new();
    };
    let title: String = el.text().collect();
    title
        .split(" - ")
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

fn apply_cleanup(name: &str, patterns: &[String]) -> String {
    let mut cleaned = name.to_string();
    for pattern in patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            cleaned = re.replace_all(&cleaned, "").into_owned();
        }
    }
    WHITESPACE_RE.replace_all(cleaned.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str, title: &str) -> String {
        format!("<html><head><title>{}</title></head><body>{}</body></html>", title, body)
    }

    #[test]
    fn test_name_from_first_matching_selector() {
        let html = page(
            "<div class='hotel-name'>Lower Priority</div><h1>Sea View Resort</h1>",
            "ignored",
        );
        let detected = detect(&html, &SelectorRules::default());
        assert_eq!(detected.name, "Sea View Resort");
    }

    #[test]
    fn test_title_fallback_takes_first_segment() {
        let html = page("<p>nothing useful</p>", "Grand Hotel - Booking Site");
        let detected = detect(&html, &SelectorRules::default());
        assert_eq!(detected.name, "Grand Hotel");
    }

    #[test]
    fn test_deals_suffix_stripped() {
        let html = page("<h1>Lotus Inn (Great Deals Inside)</h1>", "x");
        let detected = detect(&html, &SelectorRules::default());
        assert_eq!(detected.name, "Lotus Inn");

        let html = page("<h1>Lotus Inn Deals</h1>", "x");
        let detected = detect(&html, &SelectorRules::default());
        assert_eq!(detected.name, "Lotus Inn");
    }

    #[test]
    fn test_short_name_rederived_from_title() {
        let html = page("<h1>Hi</h1>", "Palm Grove Retreat - Deals Site");
        let detected = detect(&html, &SelectorRules::default());
        assert_eq!(detected.name, "Palm Grove Retreat");
    }

    #[test]
    fn test_location_falls_back_to_empty() {
        let html = page("<h1>Sea View Resort</h1>", "x");
        let detected = detect(&html, &SelectorRules::default());
        assert_eq!(detected.location, "");

        let html = page("<h1>Sea View Resort</h1><div class='address'>Goa, India</div>", "x");
        let detected = detect(&html, &SelectorRules::default());
        assert_eq!(detected.location, "Goa, India");
    }

    #[test]
    fn test_retry_uses_reduced_set_and_fake_clock() {
        let empty = page("<p>loading</p>", "");
        let ready = page("<h1>Sea View Resort</h1>", "x");
        let pages = std::cell::RefCell::new(vec![ready, empty]);
        let mut slept = Vec::new();

        let policy = RetryPolicy { max_attempts: 2, delay_ms: 700 };
        let detected = detect_with_retry(
            || Ok(pages.borrow_mut().pop().unwrap()),
            &SelectorRules::default(),
            &policy,
            |d| slept.push(d),
        )
        .unwrap();

        assert_eq!(detected.name, "Sea View Resort");
        assert_eq!(slept, vec![std::time::Duration::from_millis(700)]);
    }

    #[test]
    fn test_retry_exhaustion_returns_empty() {
        let policy = RetryPolicy { max_attempts: 3, delay_ms: 10 };
        let mut sleeps = 0;
        let detected = detect_with_retry(
            || Ok(page("<p>nothing</p>", "")),
            &SelectorRules::default(),
            &policy,
            |_| sleeps += 1,
        )
        .unwrap();

        assert!(detected.is_empty());
        assert_eq!(detected.location, "");
        assert_eq!(sleeps, 2);
    }

    #[test]
    fn test_leading_body_text_is_bounded() {
        let long = "word ".repeat(1000);
        let html = page(&format!("<p>{}</p>", long), "x");
        let text = leading_body_text(&html, 1200);
        assert!(text.chars().count() <= 1200);
        assert!(text.starts_with("word word"));
    }
}
