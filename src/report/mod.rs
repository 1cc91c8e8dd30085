//! Report engine
//!
//! - `types`: Answer Set access helpers
//! - `normalize`: Field Normalizer (`Answers` → `Profile`)
//! - `content`: Localized Content Table
//! - `sections`: Section Composer, one module per section
//! - `print_options`: pricing sheet
//! - `generator`: orchestration and file output

pub mod content;
pub mod generator;
pub mod normalize;
pub mod print_options;
pub mod sections;
pub mod types;

pub use content::{ContentTable, Locale, Topic};
pub use generator::ReportGenerator;
pub use normalize::Profile;
pub use types::Answers;
