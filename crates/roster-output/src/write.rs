//! Staged writing of all run outputs into a directory.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use roster_model::{ARCHIVE_FILE_NAME, TemplateKind};
use roster_transform::RunOutputs;
use tracing::{debug, info};

use crate::archive::build_archive;
use crate::csv_writer::table_to_csv_bytes;
use crate::error::{OutputError, Result};

/// Options for [`write_outputs`].
#[derive(Debug, Clone, Copy)]
pub struct WriteOptions {
    /// Also write the ZIP bundle of the three CSV files.
    pub archive: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self { archive: true }
    }
}

/// Paths of the files written by [`write_outputs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    pub csv: Vec<PathBuf>,
    pub archive: Option<PathBuf>,
}

/// Writes the three CSV files (and the archive) into `output_dir`.
///
/// Everything is first written to a staging directory inside `output_dir`;
/// existing outputs are only replaced once all files were written.
pub fn write_outputs(
    output_dir: &Path,
    outputs: &RunOutputs,
    options: WriteOptions,
) -> Result<WrittenFiles> {
    fs::create_dir_all(output_dir).map_err(|source| OutputError::Io {
        operation: "create directory",
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::with_capacity(TemplateKind::ALL.len() + 1);
    for kind in TemplateKind::ALL {
        files.push((kind.file_name(), table_to_csv_bytes(outputs.table(kind))?));
    }
    if options.archive {
        let archive = build_archive(
            files
                .iter()
                .map(|(name, bytes)| (*name, bytes.as_slice())),
        )?;
        files.push((ARCHIVE_FILE_NAME, archive));
    }

    let staging = tempfile::Builder::new()
        .prefix(".roster-staging-")
        .tempdir_in(output_dir)
        .map_err(|source| OutputError::Io {
            operation: "create staging directory in",
            path: output_dir.to_path_buf(),
            source,
        })?;
    for (name, bytes) in &files {
        write_synced(&staging.path().join(name), bytes)?;
    }

    let mut written = WrittenFiles {
        csv: Vec::with_capacity(TemplateKind::ALL.len()),
        archive: None,
    };
    for (name, _) in &files {
        let staged = staging.path().join(name);
        let target = output_dir.join(name);
        fs::rename(&staged, &target).map_err(|source| OutputError::AtomicWriteFailed {
            staged: staged.clone(),
            target: target.clone(),
            source,
        })?;
        debug!(path = %target.display(), "output written");
        if *name == ARCHIVE_FILE_NAME {
            written.archive = Some(target);
        } else {
            written.csv.push(target);
        }
    }

    info!(
        dir = %output_dir.display(),
        files = files.len(),
        "outputs written"
    );
    Ok(written)
}

fn write_synced(path: &Path, bytes: &[u8]) -> Result<()> {
    let io_error = |operation: &'static str, source: std::io::Error| OutputError::Io {
        operation,
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(|e| io_error("create", e))?;
    file.write_all(bytes).map_err(|e| io_error("write", e))?;
    file.sync_all().map_err(|e| io_error("sync", e))?;
    Ok(())
}
