//! Prompt construction.

/// Build the instruction sent to the completion provider.
///
/// Custom instructions are appended as given, but only when they contain
/// something other than whitespace.
///
/// # Examples
///
/// ```
/// use mailassist::reply::build_prompt;
///
/// let prompt = build_prompt("Can we reschedule?", "casual", Some("Keep it short"));
/// assert!(prompt.contains("in a casual tone"));
/// assert!(prompt.ends_with("\n\nAdditional instructions: Keep it short"));
/// ```
pub fn build_prompt(email_text: &str, tone: &str, custom_prompt: Option<&str>) -> String {
    let mut prompt = format!(
        "You are an assistant helping a professional write replies to emails.\n\n\
         Respond to the following email in a {tone} tone:\n\n\
         \"{email_text}\"\n\n\
         Make sure your reply is clear, context-aware, and appropriately addresses \
         the sender's request or concern."
    );

    if let Some(extra) = custom_prompt.filter(|s| !s.trim().is_empty()) {
        prompt.push_str("\n\nAdditional instructions: ");
        prompt.push_str(extra);
    }

    prompt
}
