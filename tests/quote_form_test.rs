//! End-to-end lifecycle tests for the quote form controller against the
//! submission transport boundary.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use auto_reparis::controller::quote_form::{FormField, FormPhase, QuoteFormController, SubmitOutcome};
use auto_reparis::dto::quote_dto::QuoteDraft;
use auto_reparis::model::quote::{QuoteRequest, SubmissionAck};
use auto_reparis::service::submission::{DelayedStubTransport, SubmissionTransport};
use auto_reparis::util::error::SubmitError;

/// Counts calls and delegates to the stub.
struct CountingTransport {
    inner: DelayedStubTransport,
    calls: AtomicUsize,
}

impl CountingTransport {
    fn new() -> Self {
        CountingTransport {
            inner: DelayedStubTransport::with_delay(Duration::from_millis(1500)),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SubmissionTransport for CountingTransport {
    async fn submit(&self, quote: &QuoteRequest) -> Result<SubmissionAck, SubmitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.submit(quote).await
    }
}

/// Always fails, for the recovery path.
struct FailingTransport;

#[async_trait]
impl SubmissionTransport for FailingTransport {
    async fn submit(&self, _quote: &QuoteRequest) -> Result<SubmissionAck, SubmitError> {
        Err(SubmitError::Transport("connexion perdue".to_string()))
    }
}

fn filled_controller() -> QuoteFormController {
    let mut controller = QuoteFormController::new();
    controller.input(FormField::Name, "Al");
    controller.input(FormField::Email, "a@b.com");
    controller.input(FormField::Phone, "0600000000");
    controller.input(FormField::Vehicle, "Clio 2020");
    controller.input(FormField::Service, "mecanique");
    controller.input(FormField::Message, "");
    controller
}

#[tokio::test(start_paused = true)]
async fn test_valid_submit_ends_submitted() {
    let transport = CountingTransport::new();
    let mut controller = filled_controller();

    let outcome = controller.submit(&transport).await;
    assert!(matches!(outcome, SubmitOutcome::Accepted(_)));
    assert_eq!(controller.phase(), FormPhase::Submitted);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_invalid_submit_stays_idle_with_field_errors() {
    let transport = CountingTransport::new();
    let mut controller = QuoteFormController::new();
    controller.input(FormField::Name, "A");
    controller.input(FormField::Email, "bad");
    controller.input(FormField::Phone, "123");
    controller.input(FormField::Vehicle, "");
    controller.input(FormField::Service, "");

    let outcome = controller.submit(&transport).await;
    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert_eq!(controller.phase(), FormPhase::Idle);
    assert_eq!(controller.errors().len(), 5);
    assert_eq!(controller.errors().get("name"), Some("Nom requis"));
    assert_eq!(controller.errors().get("email"), Some("Email invalide"));
    assert_eq!(controller.errors().get("phone"), Some("Numéro de téléphone invalide"));
    assert_eq!(controller.errors().get("vehicle"), Some("Modèle du véhicule requis"));
    assert_eq!(controller.errors().get("service"), Some("Veuillez choisir un service"));
    // no transport call for an invalid draft
    assert_eq!(transport.calls(), 0);
    // the entered values are still there for correction
    assert_eq!(controller.draft().email, "bad");
}

#[tokio::test(start_paused = true)]
async fn test_submit_while_submitting_is_a_no_op() {
    let transport = CountingTransport::new();
    let mut controller = filled_controller();

    // First half only: the form is now mid-flight.
    let request = controller.begin_submit().expect("valid draft");
    assert_eq!(controller.phase(), FormPhase::Submitting);

    let outcome = controller.submit(&transport).await;
    assert_eq!(outcome, SubmitOutcome::Ignored);
    assert_eq!(controller.phase(), FormPhase::Submitting);
    assert_eq!(transport.calls(), 0);

    // Completing the in-flight submission still works.
    let ack = transport.submit(&request).await.expect("stub never fails");
    controller.complete_submit(Ok(ack));
    assert_eq!(controller.phase(), FormPhase::Submitted);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_submit_after_submitted_is_a_no_op() {
    let transport = CountingTransport::new();
    let mut controller = filled_controller();

    controller.submit(&transport).await;
    assert_eq!(controller.phase(), FormPhase::Submitted);

    let outcome = controller.submit(&transport).await;
    assert_eq!(outcome, SubmitOutcome::Ignored);
    assert_eq!(controller.phase(), FormPhase::Submitted);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_reset_clears_values_and_errors() {
    let transport = CountingTransport::new();
    let mut controller = filled_controller();

    controller.submit(&transport).await;
    assert_eq!(controller.phase(), FormPhase::Submitted);

    controller.reset();
    assert_eq!(controller.phase(), FormPhase::Idle);
    assert_eq!(controller.draft(), &QuoteDraft::default());
    assert!(controller.errors().is_empty());

    // the machine is re-enterable: a second request goes through
    controller.input(FormField::Name, "Jean Dupont");
    controller.input(FormField::Email, "jean@example.com");
    controller.input(FormField::Phone, "06 00 00 00 00");
    controller.input(FormField::Vehicle, "Peugeot 208 - 2021");
    controller.input(FormField::Service, "valet");
    let outcome = controller.submit(&transport).await;
    assert!(matches!(outcome, SubmitOutcome::Accepted(_)));
    assert_eq!(transport.calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_timeout_surfaces_and_keeps_values() {
    // The stub configured slower than its deadline behaves like any
    // other transport failure: back to idle, values kept, retry possible.
    let slow = DelayedStubTransport::with_delay_and_timeout(
        Duration::from_millis(1500),
        Duration::from_millis(1000),
    );
    let mut controller = filled_controller();

    let outcome = controller.submit(&slow).await;
    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(controller.phase(), FormPhase::Idle);
    assert_eq!(controller.submit_failure(), Some("Délai d'attente dépassé"));
    assert_eq!(controller.draft().name, "Al");

    let transport = CountingTransport::new();
    let outcome = controller.submit(&transport).await;
    assert!(matches!(outcome, SubmitOutcome::Accepted(_)));
    assert_eq!(transport.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_transport_failure_keeps_values_and_allows_retry() {
    let mut controller = filled_controller();

    let outcome = controller.submit(&FailingTransport).await;
    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(controller.phase(), FormPhase::Idle);
    assert!(controller.submit_failure().is_some());
    // entered values survive the failure
    assert_eq!(controller.draft().name, "Al");
    assert_eq!(controller.draft().vehicle, "Clio 2020");

    // retry without re-entering anything
    let transport = CountingTransport::new();
    let outcome = controller.submit(&transport).await;
    assert!(matches!(outcome, SubmitOutcome::Accepted(_)));
    assert_eq!(controller.phase(), FormPhase::Submitted);
    assert!(controller.submit_failure().is_none());
    assert_eq!(transport.calls(), 1);
}
