pub mod submission;

pub use submission::{DelayedStubTransport, SubmissionTransport};
