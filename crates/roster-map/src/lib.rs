//! Destination-to-source column mapping.
//!
//! [`resolve`] combines exact matches on normalized names with manual
//! overrides; [`MappingSession`] keeps the three mappings of one run.

pub mod config;
pub mod error;
pub mod normalize;
pub mod resolve;
pub mod session;

pub use config::{MappingOverrides, RosterConfig};
pub use error::{ConfigError, MappingError};
pub use normalize::{NormalizedLookup, normalize_column_name};
pub use resolve::{ManualOverrides, apply_fallback, resolve};
pub use session::{MappingSession, MappingSummary};
