use serde_json::{Value, json};

/// Fixed system instruction sent with every summarization request.
pub const SYSTEM_INSTRUCTION: &str = "You are a professional text summarizer. \
    Create exactly 3 concise bullet points that capture the main ideas of the \
    given text. Each bullet point should be clear, informative, and \
    well-structured. Return only the bullet points, each starting with \"\u{2022}\" \
    and separated by newlines.";

/// Build the role-tagged message list for the chat completions request.
#[must_use]
pub fn build_messages(text: &str) -> Vec<Value> {
    vec![
        json!({
            "role": "system",
            "content": SYSTEM_INSTRUCTION,
        }),
        json!({
            "role": "user",
            "content": format!("Please summarize this text in exactly 3 bullet points:\n\n{text}"),
        }),
    ]
}
