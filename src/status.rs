use serde_json::Value;

use crate::error::{PollError, Result};

/// Review outcome of a homework submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl ReviewStatus {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Human-readable verdict relayed to the chat.
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// Builds the notification text for one submission record.
pub fn parse_status(record: &Value) -> Result<String> {
    let name = match record.get("homework_name").and_then(Value::as_str) {
        Some(name) if !name.is_empty() => name,
        _ => {
            tracing::error!("Record has no homework_name");
            return Err(PollError::MissingHomeworkName);
        }
    };

    let raw_status = record.get("status").and_then(Value::as_str).unwrap_or("");
    let Some(status) = ReviewStatus::parse(raw_status) else {
        tracing::error!(status = raw_status, "Unrecognized review status");
        return Err(PollError::UnknownStatus(raw_status.to_string()));
    };

    Ok(format!(
        "Изменился статус проверки работы \"{}\".{}",
        name,
        status.verdict()
    ))
}

/// Map key for a record: string ids as-is, anything else rendered.
pub fn record_id(record: &Value) -> String {
    match record.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(other) => other.to_string(),
        None => Value::Null.to_string(),
    }
}
