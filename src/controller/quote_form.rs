//! Quote form lifecycle.
//!
//! The controller owns the field state and drives the three-phase
//! submission lifecycle: idle → submitting → submitted, re-enterable
//! indefinitely. All mutation happens through `&mut self`; the only
//! suspension point is the transport call inside [`QuoteFormController::submit`].

use tracing::{debug, error, info, instrument, warn};

use crate::dto::quote_dto::{FieldErrors, QuoteDraft};
use crate::model::quote::{QuoteRequest, SubmissionAck};
use crate::service::submission::SubmissionTransport;
use crate::util::error::SubmitError;

/// Where the form is in its submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

impl FormPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormPhase::Idle => "idle",
            FormPhase::Submitting => "submitting",
            FormPhase::Submitted => "submitted",
        }
    }
}

/// Form fields addressable by input events. Names match the draft's field
/// names, which are also the keys of [`FieldErrors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Vehicle,
    Service,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Vehicle,
        FormField::Service,
        FormField::Message,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Vehicle => "vehicle",
            FormField::Service => "service",
            FormField::Message => "message",
        }
    }

    /// Label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Nom Complet",
            FormField::Email => "Email",
            FormField::Phone => "Téléphone",
            FormField::Vehicle => "Véhicule (Modèle/Année)",
            FormField::Service => "Service Souhaité",
            FormField::Message => "Message (Optionnel)",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }
}

/// What a submit attempt did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form was not idle; nothing happened (submit control disabled).
    Ignored,
    /// Validation failed; the form stays idle with per-field errors set.
    Invalid,
    /// The transport acknowledged; the form is now submitted.
    Accepted(SubmissionAck),
    /// The transport failed; the form is back to idle with values kept.
    Failed,
}

/// Read-only view of the form for the presentation shell.
#[derive(Debug, Clone)]
pub struct FormSnapshot {
    pub phase: FormPhase,
    pub draft: QuoteDraft,
    pub errors: FieldErrors,
    pub submit_failure: Option<String>,
}

/// Owns the draft, the validation errors and the lifecycle phase.
#[derive(Debug, Default)]
pub struct QuoteFormController {
    draft: QuoteDraft,
    errors: FieldErrors,
    phase: FormPhase,
    submit_failure: Option<String>,
}

impl QuoteFormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn draft(&self) -> &QuoteDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submit_failure(&self) -> Option<&str> {
        self.submit_failure.as_deref()
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            phase: self.phase,
            draft: self.draft.clone(),
            errors: self.errors.clone(),
            submit_failure: self.submit_failure.clone(),
        }
    }

    /// Update one field. Ignored while a submission is in flight.
    pub fn input(&mut self, field: FormField, value: impl Into<String>) {
        if self.phase == FormPhase::Submitting {
            debug!(field = field.name(), "Input ignored while submitting");
            return;
        }
        let value = value.into();
        debug!(field = field.name(), "Field updated");
        match field {
            FormField::Name => self.draft.name = value,
            FormField::Email => self.draft.email = value,
            FormField::Phone => self.draft.phone = value,
            FormField::Vehicle => self.draft.vehicle = value,
            FormField::Service => self.draft.service = value,
            FormField::Message => self.draft.message = value,
        }
    }

    /// First half of a submit: validate and, if the draft holds up, move to
    /// the submitting phase.
    ///
    /// Returns the validated record to hand to the transport. On a
    /// validation failure the form stays idle and the per-field errors are
    /// recorded. Only legal from the idle phase.
    #[instrument(skip(self))]
    pub fn begin_submit(&mut self) -> Option<QuoteRequest> {
        if self.phase != FormPhase::Idle {
            warn!(phase = self.phase.as_str(), "Submit ignored: form is not idle");
            return None;
        }
        match self.draft.validate_draft() {
            Ok(request) => {
                info!("Quote draft validated, submission starting");
                self.errors = FieldErrors::default();
                self.submit_failure = None;
                self.phase = FormPhase::Submitting;
                Some(request)
            }
            Err(errors) => {
                info!(error_count = errors.len(), "Quote draft rejected");
                self.errors = errors;
                None
            }
        }
    }

    /// Second half of a submit: fold the transport result back into the
    /// lifecycle. Only legal from the submitting phase.
    ///
    /// On failure the entered values stay untouched so the visitor can
    /// retry without re-typing anything.
    pub fn complete_submit(&mut self, result: Result<SubmissionAck, SubmitError>) {
        if self.phase != FormPhase::Submitting {
            warn!(phase = self.phase.as_str(), "Completion ignored: no submission in flight");
            return;
        }
        match result {
            Ok(ack) => {
                info!(submission_id = %ack.submission_id, "Quote request submitted");
                self.phase = FormPhase::Submitted;
            }
            Err(e) => {
                error!("Quote submission failed: {}", e);
                self.submit_failure = Some(e.to_string());
                self.phase = FormPhase::Idle;
            }
        }
    }

    /// Full submit: validate, call the transport exactly once, fold the
    /// result back. A submit while not idle is a no-op.
    pub async fn submit<T>(&mut self, transport: &T) -> SubmitOutcome
    where
        T: SubmissionTransport + ?Sized,
    {
        let Some(request) = self.begin_submit() else {
            return match self.phase {
                FormPhase::Idle => SubmitOutcome::Invalid,
                _ => SubmitOutcome::Ignored,
            };
        };

        // The record is dropped after this call; nothing retains it.
        let result = transport.submit(&request).await;
        match result {
            Ok(ack) => {
                self.complete_submit(Ok(ack.clone()));
                SubmitOutcome::Accepted(ack)
            }
            Err(e) => {
                self.complete_submit(Err(e));
                SubmitOutcome::Failed
            }
        }
    }

    /// "Envoyer une autre demande": back to an empty idle form.
    ///
    /// Clears field values, errors and any failure message. Ignored while a
    /// submission is in flight.
    pub fn reset(&mut self) {
        if self.phase == FormPhase::Submitting {
            warn!("Reset ignored while submitting");
            return;
        }
        info!("Quote form reset");
        self.draft = QuoteDraft::default();
        self.errors = FieldErrors::default();
        self.submit_failure = None;
        self.phase = FormPhase::Idle;
    }
}
