//! Inquiry drafter: a plain-text availability/rates message, AI-drafted when
//! possible, byte-stable template otherwise.

use crate::assist::Assistant;

/// Draft an inquiry message for a property. Any assistant failure falls back
/// to the fixed template.
pub fn draft_inquiry(name: &str, location: &str, assistant: &dyn Assistant) -> String {
    if assistant.is_available() {
        let prompt = format!(
            "Draft a polite hotel inquiry email for {} located at {}, asking for \
             availability and rates. Include check-in/out placeholders.",
            name, location
        );
        if let Ok(draft) = assistant.generate(&prompt) {
            let trimmed = draft.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }

    fallback_template(name)
}

/// Deterministic inquiry template; identical across calls for the same name.
pub fn fallback_template(name: &str) -> String {
    format!(
        "Dear {} Team,\n\
         \n\
         I am interested in booking a stay at your property and would like to inquire about availability and rates.\n\
         \n\
         Check-in: [specify]\n\
         Check-out: [specify]\n\
         Guests: [specify]\n\
         \n\
         Could you please share:\n\
         - Room availability\n\
         - Best rates\n\
         - Any special offers\n\
         \n\
         Best regards,\n\
         [Your Name]",
        name
    )
}

/// Subject line used for mail-composer links
pub fn inquiry_subject(name: &str) -> String {
    format!("Inquiry about {}", name)
}
