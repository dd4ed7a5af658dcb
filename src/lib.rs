//! Auto Reparis — core of the garage's single-page site.
//!
//! The interesting part lives in [`controller`]: the quote-request form's
//! validation and submission lifecycle (idle → submitting → submitted).
//! Everything else is static French copy ([`content`]) rendered by the
//! presentation shell ([`shell`]).

pub mod app;
pub mod config;
pub mod content;
pub mod controller;
pub mod dto;
pub mod model;
pub mod service;
pub mod shell;
pub mod util;
