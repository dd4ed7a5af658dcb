pub mod quote_form;

pub use quote_form::{FormField, FormPhase, FormSnapshot, QuoteFormController, SubmitOutcome};
