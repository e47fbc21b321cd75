//! ZIP bundle of the output files.

use std::io::{Cursor, Write};

use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

use crate::error::{OutputError, Result};

/// Builds an in-memory deflate archive holding `files` under their names.
pub fn build_archive<'a, I>(files: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = (&'a str, &'a [u8])>,
{
    let mut buffer = Vec::new();
    {
        let mut zip = zip::ZipWriter::new(Cursor::new(&mut buffer));
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        for (name, bytes) in files {
            zip.start_file(name, options)?;
            zip.write_all(bytes).map_err(|source| OutputError::Io {
                operation: "compress",
                path: name.into(),
                source,
            })?;
        }
        zip.finish()?;
    }
    Ok(buffer)
}
