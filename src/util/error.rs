use thiserror::Error;

/// Failures the submission boundary can surface.
///
/// The current transport is a stub that always succeeds; the controller
/// still handles these so a real backend can slot in without touching the
/// form lifecycle. On failure the entered values are preserved and the
/// visitor can retry without re-typing anything.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The backend refused the request.
    #[error("Demande refusée: {0}")]
    Rejected(String),

    /// The request never reached the backend.
    #[error("Erreur d'envoi: {0}")]
    Transport(String),

    /// The backend did not answer within the configured limit.
    #[error("Délai d'attente dépassé")]
    Timeout,
}
