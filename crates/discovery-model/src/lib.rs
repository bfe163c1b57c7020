#![deny(unsafe_code)]

//! Shared data types for company discovery: criteria, columns, company
//! records, insights, flow identifiers, save and feedback payloads.

pub mod column;
pub mod company;
pub mod contact;
pub mod criteria;
pub mod error;
pub mod feedback;
pub mod flow;
pub mod ids;
pub mod insights;
pub mod save;

pub use column::{ColumnCategory, ColumnConfig};
pub use company::CompanyData;
pub use contact::{CONTACT_COLUMN_IDS, contact_column_id, contact_functions};
pub use criteria::{DEFAULT_LOCATION_RANGE, FilterCriteria, Preset, Selection};
pub use error::{ModelError, Result};
pub use feedback::{FeedbackData, FeedbackKind};
pub use flow::{FlowKind, StepId, StepStatus};
pub use ids::{ColumnId, CompanyId};
pub use insights::{AVERAGE_COMPANY_SIZE_PLACEHOLDER, Insights, TOP_INDUSTRY_LIMIT};
pub use save::SaveKind;
