//! Free-text extraction grammar for model output.
//!
//! Ollama responses are not guaranteed to be bare JSON: models routinely wrap
//! the payload in commentary or markdown fences. The rule here is a fixed
//! window — everything from the first `{` to the last `}` inclusive — kept
//! separate from the network call so its edge cases stay unit-testable.

/// Returns the substring spanning the first `{` through the last `}`.
/// `None` when either brace is missing or they are reversed.
pub fn extract_json_window(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}
