pub mod quote;

pub use quote::{QuoteRequest, ServiceCategory, SubmissionAck};
