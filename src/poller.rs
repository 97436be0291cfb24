use std::collections::HashMap;
use std::time::Duration;

use chrono::Utc;
use tokio_util::sync::CancellationToken;

use crate::api::{check_response, PracticumClient};
use crate::error::{ErrorKind, Result};
use crate::status::{parse_status, record_id};
use crate::telegram::TelegramNotifier;

/// Pause between polling cycles, applied whether the cycle succeeded or not.
const RETRY_TIME: Duration = Duration::from_secs(2);

/// Drives the fetch → validate → diff → notify cycle and owns all its state.
pub struct Poller {
    api: PracticumClient,
    notifier: TelegramNotifier,
    known_statuses: HashMap<String, String>,
    last_error: Option<ErrorKind>,
    cursor: i64,
}

impl Poller {
    pub fn new(api: PracticumClient, notifier: TelegramNotifier) -> Self {
        Self {
            api,
            notifier,
            known_statuses: HashMap::new(),
            last_error: None,
            cursor: Utc::now().timestamp(),
        }
    }

    /// The `from_date` watermark for the next fetch.
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    async fn poll_once(&mut self) -> Result<()> {
        let response = self.api.homework_statuses(self.cursor).await?;
        let records = check_response(&response)?;

        for record in records {
            let message = parse_status(record)?;
            let id = record_id(record);
            if self.known_statuses.get(&id) != Some(&message) {
                self.notifier.send_message(&message).await?;
                self.known_statuses.insert(id, message);
            } else {
                tracing::info!(id = %id, "No status update for submission");
            }
        }

        self.cursor = Utc::now().timestamp();
        Ok(())
    }

    /// Runs one cycle. Failures are reported to the chat once per error kind;
    /// back-to-back repeats of the same kind stay quiet.
    pub async fn run_cycle(&mut self) {
        if let Err(err) = self.poll_once().await {
            let kind = err.kind();
            if self.last_error != Some(kind) {
                let text = format!("Сбой в работе программы: {}", err);
                if let Err(send_err) = self.notifier.send_message(&text).await {
                    tracing::error!(error = %send_err, "Failed to deliver failure notification");
                }
                self.last_error = Some(kind);
            } else {
                tracing::debug!(error = %err, "Suppressing duplicate error notification");
            }
        }
    }

    /// Cycles until the token is cancelled; the inter-cycle pause always
    /// follows the cycle, success or failure.
    pub async fn run(mut self, cancel: CancellationToken) {
        loop {
            self.run_cycle().await;
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Shutdown requested, stopping poller");
                    break;
                }
                _ = tokio::time::sleep(RETRY_TIME) => {}
            }
        }
    }
}
