use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The fixed set of services the garage quotes for.
///
/// Wire names are the form's select values, kept as-is from the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceCategory {
    #[serde(rename = "mecanique")]
    Mecanique,
    #[serde(rename = "electronique")]
    Electronique,
    #[serde(rename = "carrosserie")]
    Carrosserie,
    #[serde(rename = "valet")]
    Valet,
    #[serde(rename = "achat-vente")]
    AchatVente,
}

impl ServiceCategory {
    /// All categories, in the order the form lists them.
    pub const ALL: [ServiceCategory; 5] = [
        ServiceCategory::Mecanique,
        ServiceCategory::Electronique,
        ServiceCategory::Carrosserie,
        ServiceCategory::Valet,
        ServiceCategory::AchatVente,
    ];

    /// Select value used by the form.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceCategory::Mecanique => "mecanique",
            ServiceCategory::Electronique => "electronique",
            ServiceCategory::Carrosserie => "carrosserie",
            ServiceCategory::Valet => "valet",
            ServiceCategory::AchatVente => "achat-vente",
        }
    }

    /// Display label shown in the select options.
    pub fn label(&self) -> &'static str {
        match self {
            ServiceCategory::Mecanique => "Mécanique",
            ServiceCategory::Electronique => "Électronique",
            ServiceCategory::Carrosserie => "Carrosserie",
            ServiceCategory::Valet => "Service Valet (Récupération/Livraison)",
            ServiceCategory::AchatVente => "Achat / Vente",
        }
    }

    /// Parse a select value. Unknown or empty values are rejected.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.code() == code)
    }
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A validated quote request, built from the form draft on submit.
///
/// Immutable once constructed; the transport logs it and nothing retains it
/// afterwards (no storage layer exists).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub vehicle: String,
    pub service: ServiceCategory,
    pub message: Option<String>,
}

/// Receipt returned by the submission transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionAck {
    pub submission_id: Uuid,
    pub received_at: DateTime<Utc>,
}

impl SubmissionAck {
    pub fn new() -> Self {
        SubmissionAck {
            submission_id: Uuid::new_v4(),
            received_at: Utc::now(),
        }
    }
}

impl Default for SubmissionAck {
    fn default() -> Self {
        Self::new()
    }
}
