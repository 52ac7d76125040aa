//! Display filter for user-side chat messages.
//!
//! Messages the client sends on the user's behalf (the initial analysis
//! request, chart context) are hidden, and a pasted chart file is collapsed
//! into a short marker.

use once_cell::sync::Lazy;
use regex::Regex;

const SYSTEM_CONTEXT_MARKER: &str = "[System Context]";
const ANALYSIS_REQUEST_PREFIX: &str = "Analyzing";
const ATTACHMENT_PLACEHOLDER: &str = "📄 [已上傳命盤文本]";

static ATTACHMENT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\[引用檔案內容\]:.*").unwrap());

/// Text to show for a user message, or `None` when it should be hidden.
pub fn display_text(content: &str) -> Option<String> {
    if content.starts_with(ANALYSIS_REQUEST_PREFIX) || content.contains(SYSTEM_CONTEXT_MARKER) {
        return None;
    }
    Some(
        ATTACHMENT_REGEX
            .replace(content, ATTACHMENT_PLACEHOLDER)
            .trim()
            .to_string(),
    )
}
