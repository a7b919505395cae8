//! The one-paragraph conditions summary produced by a chat model.

pub mod error;
pub mod format;
pub mod prompt;

use crate::providers::chat::ChatProvider;
use crate::summary::error::SummaryError;
use crate::summary::format::format_weather_for_llm;
use crate::summary::prompt::build_messages;
use crate::types::forecast::Forecast;
use crate::types::units::Units;
use chrono::{DateTime, TimeZone};

/// What the dashboard shows in the summary slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SummaryState {
    /// Not produced yet.
    #[default]
    Pending,
    Ready(String),
    /// A request failed or the feature is off; no further requests are made.
    Disabled,
}

impl SummaryState {
    pub fn text(&self) -> Option<&str> {
        match self {
            SummaryState::Ready(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, SummaryState::Disabled)
    }
}

/// Formats the forecast, asks the model for a summary and returns its trimmed text.
pub async fn summarize<Tz: TimeZone>(
    chat: &ChatProvider,
    forecast: &Forecast,
    units: &Units,
    previous: Option<&str>,
    now: &DateTime<Tz>,
) -> Result<String, SummaryError> {
    let formatted = format_weather_for_llm(forecast, units, now);
    let messages = build_messages(&formatted, previous, units.temperature);
    let reply = chat.complete(&messages).await?;
    let reply = reply.trim();
    if reply.is_empty() {
        return Err(SummaryError::EmptyResponse);
    }
    Ok(reply.to_string())
}
