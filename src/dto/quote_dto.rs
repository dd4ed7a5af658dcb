use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

use crate::model::quote::{QuoteRequest, ServiceCategory};

/// Raw form field state, as entered by the visitor.
///
/// Field rules and messages mirror the site's form schema. The whole draft
/// is accepted or rejected as a unit; there is no partial validity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct QuoteDraft {
    #[validate(length(min = 2, message = "Nom requis"))]
    pub name: String,

    #[validate(email(message = "Email invalide"))]
    pub email: String,

    #[validate(length(min = 10, message = "Numéro de téléphone invalide"))]
    pub phone: String,

    #[validate(length(min = 2, message = "Modèle du véhicule requis"))]
    pub vehicle: String,

    /// Raw select value; must match a [`ServiceCategory`] code.
    #[validate(length(min = 1, message = "Veuillez choisir un service"))]
    pub service: String,

    /// Optional free text, no constraint.
    pub message: String,
}

const SERVICE_MESSAGE: &str = "Veuillez choisir un service";

impl QuoteDraft {
    /// Validate the draft as a whole.
    ///
    /// Pure and synchronous. Returns the typed record on success, otherwise
    /// one message per offending field.
    pub fn validate_draft(&self) -> Result<QuoteRequest, FieldErrors> {
        let mut errors = FieldErrors::default();

        if let Err(validation) = self.validate() {
            for (field, field_errors) in validation.field_errors() {
                if let Some(first) = field_errors.first() {
                    let message = first
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Valeur invalide pour {}", field));
                    errors.insert(field.to_string(), message);
                }
            }
        }

        let service = ServiceCategory::from_code(&self.service);
        if service.is_none() && !errors.contains("service") {
            errors.insert("service", SERVICE_MESSAGE);
        }

        match service {
            Some(service) if errors.is_empty() => Ok(QuoteRequest {
                name: self.name.clone(),
                email: self.email.clone(),
                phone: self.phone.clone(),
                vehicle: self.vehicle.clone(),
                service,
                message: if self.message.is_empty() {
                    None
                } else {
                    Some(self.message.clone())
                },
            }),
            _ => Err(errors),
        }
    }
}

/// One human-readable message per invalid field, keyed by field name.
///
/// Ordered so rendering and logs are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
