//! Output files for a conversion run.
//!
//! [`write_outputs`] writes the three CSV files (and optionally the ZIP
//! bundle) into a staging directory next to the destination and only moves
//! them into place once every file has been written.

pub mod archive;
pub mod csv_writer;
pub mod error;
pub mod write;

pub use archive::build_archive;
pub use csv_writer::{table_to_csv_bytes, write_csv};
pub use error::{OutputError, Result};
pub use write::{WriteOptions, WrittenFiles, write_outputs};
