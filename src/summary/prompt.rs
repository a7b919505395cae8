//! Prompt construction for the conditions summary.

use crate::providers::chat::ChatMessage;
use crate::types::units::TemperatureUnit;

const BASE_INSTRUCTIONS: &str = "You are a helpful weather assistant. Provide a brief, conversational summary of the current conditions and upcoming weather based on the data provided. Try not to exceed 20 tokens in your output, but prioritize clarity. Hard limit 35 tokens.";

const RULES: &str = "Always use complete sentences, but remain professional. Do NOT use ANY data not given by the next prompt.";

const STABILIZE_INSTRUCTIONS: &str = "I have also included the previous summary for context. If only minor changes exist, ALWAYS just slot the new data into the previous summary without changing the layout at all. If there are major changes, you may modify it, but minimize the impact the best you can.";

const EXAMPLE: &str = "EXAMPLE: It is mostly sunny through the afternoon, with wind gusts up to 12 mph, and a high of 75°.";

/// Sent in place of the previous summary on the first request.
pub const NO_PREVIOUS_SUMMARY: &str = "IGNORE THIS, FOLLOW INSTRUCTIONS ABOVE.";

/// System prompt, formatted weather, then the previous summary (or a placeholder).
///
/// The system prompt names `unit` so it agrees with the formatted weather.
/// Feeding the last summary back asks the model to keep its wording and only slot
/// in changed numbers, so the text does not churn between refreshes.
pub fn build_messages(
    formatted_weather: &str,
    previous: Option<&str>,
    unit: TemperatureUnit,
) -> Vec<ChatMessage> {
    let previous = previous.map(str::trim).filter(|p| !p.is_empty());
    let base = format!(
        "{BASE_INSTRUCTIONS} The current unit is {} format temps as [TEMP]º. {RULES}",
        unit.name()
    );
    let system = match previous {
        Some(_) => format!("{base} {STABILIZE_INSTRUCTIONS} {EXAMPLE}"),
        None => format!("{base} {EXAMPLE}"),
    };
    vec![
        ChatMessage::system(system),
        ChatMessage::user(formatted_weather),
        ChatMessage::user(previous.unwrap_or(NO_PREVIOUS_SUMMARY)),
    ]
}
