//! Transformation engine for roster conversion.
//!
//! Everything here works on already-loaded [`Table`](roster_model::Table)s:
//!
//! - [`project`] shapes the source export into the general-info template
//! - [`apply_required_defaults`] fills blank required fields
//! - [`expand_certifications`] and [`expand_specialties`] fan multi-valued
//!   fields out into child tables
//! - [`stringify`] turns every cell into output text
//! - [`process_run`] ties them together into one all-or-nothing run

pub mod error;
pub mod expand;
pub mod normalize;
pub mod pipeline;
pub mod project;

pub use error::{Result, TransformError};
pub use expand::{Expansion, RecordSkip, SkipReason, expand_certifications, expand_specialties};
pub use normalize::{stringify, stringify_cell};
pub use pipeline::{RunContext, RunOutputs, RunReport, process_run};
pub use project::{apply_required_defaults, project};
