// File: src/persistence.rs
use crate::core::types::WordRecord;
use crate::error::{AutocompleteError, Result};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Parses a JSON word list. Entries with empty text are dropped.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<WordRecord>> {
    let mut records: Vec<WordRecord> = serde_json::from_reader(reader)?;
    records.retain(|record| !record.text.is_empty());
    Ok(records)
}

/// Writes the word list as indented JSON. serde_json leaves non-ASCII text
/// unescaped, so Cyrillic entries stay readable in the file.
pub fn write_records<W: Write>(mut writer: W, records: &[WordRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Atomically replaces the dictionary at `path`, creating parent directories.
pub fn save_to_disk(records: &[WordRecord], path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    write_records(BufWriter::new(&temp_file), records)?;

    temp_file.persist(path).map_err(|e| AutocompleteError::Persist {
        path: path.display().to_string(),
        source: e.error,
    })?;
    tracing::debug!("saved {} words to {}", records.len(), path.display());
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<Vec<WordRecord>> {
    let file = File::open(path)?;
    let records = read_records(BufReader::new(file))?;
    tracing::debug!("loaded {} words from {}", records.len(), path.display());
    Ok(records)
}

/// Renames an unreadable dictionary to `<name>.bak`, replacing an older backup.
pub fn back_up_unreadable(path: &Path) -> Result<PathBuf> {
    let mut backup = path.as_os_str().to_owned();
    backup.push(".bak");
    let backup = PathBuf::from(backup);
    fs::rename(path, &backup)?;
    Ok(backup)
}
