//! File I/O utilities with atomic writes
//!
//! Files are either fully replaced or left untouched, never half written.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tempfile::NamedTempFile;

use crate::error::ExpenseError;

/// Read JSON from a file, returning a default value if the file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, ExpenseError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| ExpenseError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| ExpenseError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically
///
/// Data goes to a uniquely named temp file in the target directory, which
/// then replaces the target. Concurrent writers never share a temp file.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), ExpenseError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    fs::create_dir_all(parent).map_err(|e| {
        ExpenseError::Storage(format!(
            "Failed to create directory {}: {}",
            parent.display(),
            e
        ))
    })?;

    // Same directory as the target so the rename stays on one filesystem
    let mut temp = NamedTempFile::new_in(parent)
        .map_err(|e| ExpenseError::Storage(format!("Failed to create temp file: {}", e)))?;

    write_temp(temp.as_file_mut(), data)?;

    temp.persist(path).map_err(|e| {
        ExpenseError::Storage(format!("Failed to replace {}: {}", path.display(), e.error))
    })?;
    Ok(())
}

fn write_temp<T: Serialize>(file: &mut File, data: &T) -> Result<(), ExpenseError> {
    let mut writer = BufWriter::new(&mut *file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| ExpenseError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| ExpenseError::Storage(format!("Failed to flush data: {}", e)))?;
    drop(writer);

    file.sync_all()
        .map_err(|e| ExpenseError::Storage(format!("Failed to sync data: {}", e)))
}
