pub mod quote_dto;

pub use quote_dto::{FieldErrors, QuoteDraft};
