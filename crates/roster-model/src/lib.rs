//! Data model shared by the roster mapper crates.
//!
//! Source exports, destination templates and the three output tables all use
//! the same [`Table`] type. Cells keep their loaded representation as a
//! [`Cell`] until the string normalizer converts them at the output boundary.

pub mod cell;
pub mod contract;
pub mod defaults;
pub mod error;
pub mod mapping;
pub mod table;
pub mod template;

pub use cell::{Cell, MISSING_VALUE_TOKENS, format_numeric, is_missing_token};
pub use contract::{
    ARCHIVE_FILE_NAME, CERTIFICATION_NAME_COLUMN, CERTIFICATIONS_COLUMN, PERSON_KEY_COLUMN,
    SOURCE_ID_COLUMN, SPECIALTY_COLUMNS, SPECIALTY_NAME_COLUMN, TemplateKind,
};
pub use defaults::RequiredDefaults;
pub use error::{ModelError, Result};
pub use mapping::{FieldMapping, MappingEntry, MappingOrigin};
pub use table::{Record, Table};
pub use template::{REQUIRED_MARKER, Template, clean_template_column};
