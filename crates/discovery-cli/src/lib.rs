//! Command-line front end for company discovery.
//!
//! The binary parses arguments and renders output; the pieces that drive a
//! [`discovery_core::Session`] live here so they can be tested directly.

pub mod discover;
pub mod logging;
pub mod types;

pub use discover::{DiscoverRequest, discover};
pub use types::{BlockedStep, ColumnSummary, DiscoverReport, RecordRow, SaveOutcome, StepSummary};
