//! Prompt construction for the analysis call.

/// Marker separating the instruction from the embedded event description.
/// The canned analyst relies on it to recover the description offline.
pub const EVENT_MARKER: &str = "Event: ";

/// Build the natural-language instruction for one sampled issue description.
pub fn analysis_prompt(description: &str) -> String {
    format!(
        "You are a broadcast signal monitoring assistant. Report the \
         following event to the operator in one short sentence of plain \
         technical language. {EVENT_MARKER}{description}"
    )
}

/// Recover the event description embedded by [`analysis_prompt`], if present.
pub fn embedded_description(prompt: &str) -> Option<&str> {
    prompt.split_once(EVENT_MARKER).map(|(_, tail)| tail)
}
