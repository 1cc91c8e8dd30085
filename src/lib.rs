//! Cellar Report
//!
//! Personalized, multilingual (fr/en/nl) wine and estate-planning reports
//! rendered to PDF from a flat questionnaire answer set.
//!
//! Pipeline:
//! - `report::normalize`: raw answers → canonical `Profile`, resolved once
//! - `report::sections`: fixed-order section composers over the content table
//! - `render::layout`: page cursor, chrome and page breaks → draw operations
//! - `render::pdf`: PDF serialization
//! - `chart`: the one generated visual (legal reserve allocation)
//! - `delivery`: lead store and mailer collaborators around a generation call

pub mod chart;
pub mod config;
pub mod delivery;
pub mod error;
pub mod render;
pub mod report;

// Re-export commonly used types
pub use config::ReportConfig;
pub use delivery::{submit, DocumentMailer, JsonlLeadStore, Lead, LeadStore, OutboxMailer, SubmissionReceipt};
pub use error::{ReportError, Result};
pub use report::{Answers, ContentTable, Locale, Profile, ReportGenerator, Topic};
