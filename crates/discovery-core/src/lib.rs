#![deny(unsafe_code)]

//! Company discovery core: filter engine, flow state machine and session.
//!
//! - [`filter`], [`columns`], [`insights`]: pure derivations from criteria
//! - [`gate`], [`flow`]: configurable step tables and transitions
//! - [`session`]: intent reducer owning all state
//! - [`runtime`]: Tokio driver for the simulated fetch and save delays

pub mod columns;
pub mod config;
pub mod error;
pub mod feedback;
pub mod filter;
pub mod flow;
pub mod gate;
pub mod insights;
pub mod message;
pub mod runtime;
pub mod save;
pub mod session;
pub mod simulation;

pub use columns::{derive_column_selection, loosely_matches, selected_columns, toggle_column};
pub use config::{DiscoveryConfig, FlowConfig, TimingConfig};
pub use error::{DiscoveryError, Result};
pub use feedback::{FeedbackDraft, FeedbackError};
pub use filter::{ResultPadding, compute_result_set, matches_criteria};
pub use flow::{Advance, FetchTrigger, FlowDefinition, FlowMachine, StepDefinition};
pub use gate::{ColumnGatePolicy, Gate, GateContext};
pub use insights::compute_insights;
pub use message::{Effect, Intent};
pub use runtime::Driver;
pub use save::{SaveDialog, SavePhase, SaveRequest};
pub use session::Session;
pub use simulation::{OperationSlot, Ticket, TicketIssuer};
