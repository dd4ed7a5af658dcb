use async_trait::async_trait;
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::config::submission_conf::SubmissionConfig;
use crate::model::quote::{QuoteRequest, SubmissionAck};
use crate::util::error::SubmitError;

/// Boundary between the form controller and whatever receives quotes.
///
/// The controller calls this exactly once per valid submit and only moves
/// to the submitted state on success.
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    async fn submit(&self, quote: &QuoteRequest) -> Result<SubmissionAck, SubmitError>;
}

/// Stand-in for a real backend: waits a fixed delay, logs the accepted
/// record and acknowledges. Retains nothing.
pub struct DelayedStubTransport {
    delay: Duration,
    timeout: Option<Duration>,
}

impl DelayedStubTransport {
    pub fn new(config: &SubmissionConfig) -> Self {
        DelayedStubTransport {
            delay: Duration::from_millis(config.stub_delay_ms),
            timeout: config.timeout_ms.map(Duration::from_millis),
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        DelayedStubTransport {
            delay,
            timeout: None,
        }
    }

    pub fn with_delay_and_timeout(delay: Duration, timeout: Duration) -> Self {
        DelayedStubTransport {
            delay,
            timeout: Some(timeout),
        }
    }
}

#[async_trait]
impl SubmissionTransport for DelayedStubTransport {
    #[instrument(skip(self, quote), fields(service = %quote.service))]
    async fn submit(&self, quote: &QuoteRequest) -> Result<SubmissionAck, SubmitError> {
        info!("Forwarding quote request");
        let wait = tokio::time::sleep(self.delay);
        match self.timeout {
            Some(limit) => {
                if tokio::time::timeout(limit, wait).await.is_err() {
                    warn!("Quote submission timed out after {:?}", limit);
                    return Err(SubmitError::Timeout);
                }
            }
            None => wait.await,
        }

        let ack = SubmissionAck::new();
        match serde_json::to_string(quote) {
            Ok(json) => info!(submission_id = %ack.submission_id, "Quote request accepted: {}", json),
            Err(e) => warn!(submission_id = %ack.submission_id, "Quote request accepted (not serializable: {})", e),
        }
        Ok(ack)
    }
}
