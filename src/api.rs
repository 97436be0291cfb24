use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde_json::Value;

use crate::error::{PollError, Result};

/// Client for the Practicum homework-status endpoint.
#[derive(Clone)]
pub struct PracticumClient {
    http: reqwest::Client,
    token: String,
    endpoint: String,
}

impl PracticumClient {
    pub fn new(token: &str, endpoint: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            token: token.to_string(),
            endpoint: endpoint.to_string(),
        }
    }

    /// Fetches statuses changed since `from_date` (unix seconds).
    pub async fn homework_statuses(&self, from_date: i64) -> Result<Value> {
        let resp = self
            .http
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = resp.status();
        if status != StatusCode::OK {
            tracing::error!(code = status.as_u16(), "API returned unexpected status");
            return Err(PollError::BadHttpStatus(status.as_u16()));
        }

        Ok(resp.json::<Value>().await?)
    }
}

/// Validates the response shape and returns the submission records.
pub fn check_response(response: &Value) -> Result<&[Value]> {
    let Some(object) = response.as_object() else {
        tracing::error!("Response body is not a JSON object");
        return Err(PollError::ResponseNotObject);
    };

    let Some(homeworks) = object.get("homeworks") else {
        tracing::error!("Response has no \"homeworks\" key");
        return Err(PollError::MissingHomeworksKey);
    };

    let Some(list) = homeworks.as_array() else {
        tracing::error!("\"homeworks\" is not a list");
        return Err(PollError::HomeworksNotList);
    };

    if list.is_empty() {
        tracing::debug!("Homework list is empty");
        return Err(PollError::EmptyHomeworksList);
    }

    Ok(list)
}
