//! Fire-and-forget delivery.
//!
//! The wizard never waits on the webhook: a delivery runs as a detached
//! task, a failure is logged and swallowed, and nothing is retried or
//! surfaced to the user. [`DeliverySink`] is the injectable seam that
//! makes the policy testable.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::client::{WebhookClient, WebhookError};
use crate::payload::WebhookPayload;

/// Destination for outbound payloads.
#[async_trait]
pub trait DeliverySink: Send + Sync {
    async fn deliver(
        &self,
        payload: WebhookPayload,
    ) -> Result<(), WebhookError>;
}

#[async_trait]
impl DeliverySink for WebhookClient {
    async fn deliver(
        &self,
        payload: WebhookPayload,
    ) -> Result<(), WebhookError> {
        self.send(&payload).await
    }
}

/// Dispatches one payload on a detached task.
///
/// The returned handle always resolves to `()`: a failed delivery is
/// captured here and logged with the payload kind as the task name. The
/// caller may drop the handle; the task keeps running.
pub fn spawn_delivery(
    sink: Arc<dyn DeliverySink>,
    payload: WebhookPayload,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let task = payload.kind();
        match sink.deliver(payload).await {
            Ok(()) => debug!(task, "webhook delivered"),
            Err(error) => error!(task, ?error, "webhook delivery failed"),
        }
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use mortgage_core::models::{IncomeType, LoanType, ReadinessProfile, YesNo};
    use mortgage_core::wizard::CalculationSnapshot;
    use mortgage_core::{LendingGuidelines, ReadinessCalculator};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        delivered: Mutex<Vec<WebhookPayload>>,
    }

    #[async_trait]
    impl DeliverySink for RecordingSink {
        async fn deliver(
            &self,
            payload: WebhookPayload,
        ) -> Result<(), WebhookError> {
            self.delivered.lock().unwrap().push(payload);
            Ok(())
        }
    }

    struct FailingSink;

    #[async_trait]
    impl DeliverySink for FailingSink {
        async fn deliver(
            &self,
            _payload: WebhookPayload,
        ) -> Result<(), WebhookError> {
            Err(WebhookError::Status(
                reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }

    fn payload() -> WebhookPayload {
        let profile = ReadinessProfile {
            monthly_debt: dec!(500),
            annual_income: dec!(72000),
            fico_scores: [dec!(700), dec!(680), dec!(720)],
            income_type: IncomeType::W2,
            loan_type: LoanType::Conventional,
            interest_rate: dec!(7),
            has_income_history: YesNo::Yes,
            has_tax_records: YesNo::Yes,
        };
        let guidelines = LendingGuidelines::default();
        let report = ReadinessCalculator::new(&guidelines)
            .calculate(&profile)
            .expect("calculation should succeed");
        WebhookPayload::calculation_result(&CalculationSnapshot { profile, report })
    }

    #[tokio::test]
    async fn delivers_exactly_once_on_success() {
        let sink = Arc::new(RecordingSink::default());

        spawn_delivery(sink.clone(), payload())
            .await
            .expect("task should not panic");

        let delivered = sink.delivered.lock().unwrap();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].kind(), "calculation_result");
    }

    #[tokio::test]
    async fn sink_failure_is_swallowed() {
        let handle = spawn_delivery(Arc::new(FailingSink), payload());

        // The task must complete cleanly; the error never propagates.
        assert!(handle.await.is_ok());
    }
}
