//! Loading of roster exports and destination templates.
//!
//! The transformation crates never touch the file system; this crate turns
//! delimited-text files into [`roster_model::Table`] and
//! [`roster_model::Template`] values.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use roster_ingest::{SourceOptions, read_source_table, read_template};
//!
//! let source = read_source_table(Path::new("allied.csv"), &SourceOptions::default())?;
//! let general = read_template(Path::new("general_template.csv"))?;
//! ```

mod error;
mod file;
mod source;
mod template;
mod text;

pub use error::{IngestError, Result};
pub use file::{MAX_CSV_FILE_SIZE, check_file_size, validate_encoding};
pub use source::{SourceOptions, read_source_table};
pub use template::read_template;
pub use text::clean_text;
