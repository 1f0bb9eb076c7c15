//! Summarization adapter: condense an editorial summary into a short blurb,
//! AI-assisted when the capability is present, deterministic otherwise.

use once_cell::sync::Lazy;

use crate::assist::Assistant;

/// Inputs shorter than this pass through unchanged
const MIN_INPUT_CHARS: usize = 50;

/// Truncation target for the display blurb
const TARGET_CHARS: usize = 380;

/// Assistant results longer than this get condensed
const LIMIT_CHARS: usize = 400;

/// A sentence cut below this position would leave an unhelpfully short fragment
const MIN_SENTENCE_CUT: usize = 100;

static WHITESPACE_RE: Lazy<regex::Regex> =
    Lazy::new(|| regex::Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Shorten text for display. Identity under 50 characters; otherwise an
/// assistant "tl;dr" attempt with a plain truncation fallback.
pub fn summarize(text: &str, assistant: &dyn Assistant) -> String {
    if text.chars().count() < MIN_INPUT_CHARS {
        return text.to_string();
    }

    let clean = WHITESPACE_RE.replace_all(text.trim(), " ").into_owned();

    if assistant.is_available() {
        let prompt = format!(
            "Summarize the following hotel description as a short tl;dr, \
             a few sentences at most. Respond with the summary only.\n\n{}",
            clean
        );
        if let Ok(summary) = assistant.generate(&prompt) {
            let trimmed = summary.trim();
            if !trimmed.is_empty() {
                return condense(trimmed);
            }
        }
    }

    truncate_with_ellipsis(&clean)
}

/// Cut an oversize summary at a sentence boundary when one falls late enough,
/// else hard-cut at the target length. Positions are characters, not bytes.
fn condense(summary: &str) -> String {
    let chars: Vec<char> = summary.chars().collect();
    if chars.len() <= LIMIT_CHARS {
        return summary.to_string();
    }

    let cutoff = &chars[..TARGET_CHARS];
    let last_period = cutoff.iter().rposition(|&c| c == '.');

    let mut out: String = match last_period {
        Some(pos) if pos > MIN_SENTENCE_CUT => cutoff[..=pos].iter().collect(),
        _ => cutoff.iter().collect(),
    };
    out.push_str("...");
    out
}

fn truncate_with_ellipsis(text: &str) -> String {
    let mut out: String = text.chars().take(TARGET_CHARS).collect();
    out.push_str("...");
    out
}
