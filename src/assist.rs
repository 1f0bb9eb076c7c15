//! On-device text capability: an injectable assistant with a deterministic
//! "not available" stand-in so every caller carries a fallback path.

use std::process::Command;

use crate::error::{Result, StaylistError};

/// A text-generation capability that may be absent at runtime.
pub trait Assistant {
    /// Probe whether the capability can be used at all
    fn is_available(&self) -> bool;

    /// Generate text for a prompt
    fn generate(&self, prompt: &str) -> Result<String>;
}

/// Assistant backed by the local `claude` CLI
pub struct ClaudeAssistant;

impl Assistant for ClaudeAssistant {
    fn is_available(&self) -> bool {
        Command::new("claude")
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    fn generate(&self, prompt: &str) -> Result<String> {
        let output = Command::new("claude")
            .args(["-p", "--output-format", "json", "--max-turns", "1", prompt])
            .output()
            .map_err(|e| StaylistError::AssistantNotInstalled(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(StaylistError::AssistantFailed(stderr.to_string()));
        }

        // The CLI's JSON output wraps the actual reply in a "result" field
        let stdout = String::from_utf8_lossy(&output.stdout);
        let wrapper: serde_json::Value = serde_json::from_str(&stdout)?;
        let result_text = wrapper["result"]
            .as_str()
            .ok_or_else(|| StaylistError::AssistantFailed("No result in response".into()))?;

        Ok(result_text.trim().to_string())
    }
}

/// Always-unavailable assistant, used for --no-ai and in tests to force the
/// deterministic fallback paths.
pub struct NoAssistant;

impl Assistant for NoAssistant {
    fn is_available(&self) -> bool {
        false
    }

    fn generate(&self, _prompt: &str) -> Result<String> {
        Err(StaylistError::AssistantNotInstalled(
            "no assistant configured".into(),
        ))
    }
}

/// Pick the best available assistant for this environment
pub fn default_assistant(no_ai: bool) -> Box<dyn Assistant> {
    if no_ai {
        return Box::new(NoAssistant);
    }
    let claude = ClaudeAssistant;
    if claude.is_available() {
        Box::new(claude)
    } else {
        Box::new(NoAssistant)
    }
}

/// Strip markdown code fencing from a reply (e.g., ```json ... ```).
/// Also handles text before the code block.
pub fn strip_code_fencing(s: &str) -> String {
    let trimmed = s.trim();

    if let Some(json_start) = trimmed.find("```json") {
        let after_fence = &trimmed[json_start + 7..];
        if let Some(end_fence) = after_fence.find("```") {
            return after_fence[..end_fence].trim().to_string();
        }
        return after_fence.trim().to_string();
    }

    if let Some(code_start) = trimmed.find("```\n") {
        let after_fence = &trimmed[code_start + 4..];
        if let Some(end_fence) = after_fence.find("```") {
            return after_fence[..end_fence].trim().to_string();
        }
        return after_fence.trim().to_string();
    }

    let without_prefix = trimmed.strip_prefix("```").unwrap_or(trimmed);
    let without_suffix = without_prefix
        .trim()
        .strip_suffix("```")
        .unwrap_or(without_prefix);

    without_suffix.trim().to_string()
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Scripted assistant for tests: replies with a fixed string, or fails
    pub struct ScriptedAssistant {
        pub reply: Option<String>,
    }

    impl ScriptedAssistant {
        pub fn replying(reply: &str) -> Self {
            Self { reply: Some(reply.to_string()) }
        }

        pub fn failing() -> Self {
            Self { reply: None }
        }
    }

    impl Assistant for ScriptedAssistant {
        fn is_available(&self) -> bool {
            true
        }

        fn generate(&self, _prompt: &str) -> Result<String> {
            self.reply
                .clone()
                .ok_or_else(|| StaylistError::AssistantFailed("scripted failure".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fencing() {
        assert_eq!(strip_code_fencing("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_code_fencing("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(
            strip_code_fencing("Here you go:\n```json\n{\"a\":1}\n```"),
            "{\"a\":1}"
        );
        assert_eq!(strip_code_fencing("```\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn test_no_assistant_is_unavailable() {
        assert!(!NoAssistant.is_available());
        assert!(NoAssistant.generate("anything").is_err());
    }
}
