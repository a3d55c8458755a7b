//! JSON document I/O for the ledger files
//!
//! Every repository keeps its entities in one JSON document. Reads treat a
//! missing file as an empty ledger; writes replace the whole document via
//! a sibling temp file and a rename.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::MokaError;

fn storage_error(action: &str, path: &Path, err: impl std::fmt::Display) -> MokaError {
    MokaError::Storage(format!("could not {} {}: {}", action, path.display(), err))
}

/// Load a document, or `T::default()` when the file has not been created yet
pub fn read_json<T, P>(path: P) -> Result<T, MokaError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path).map_err(|e| storage_error("open", path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| storage_error("parse", path, e))
}

/// Replace a document on disk
///
/// Readers see either the previous document or the new one, never a
/// half-written file.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), MokaError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| storage_error("create", dir, e))?;
    }

    // rename is only atomic within one filesystem
    let staged = path.with_extension("json.tmp");
    let mut writer =
        BufWriter::new(File::create(&staged).map_err(|e| storage_error("create", &staged, e))?);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| storage_error("serialize", &staged, e))?;
    writer
        .flush()
        .and_then(|_| writer.get_ref().sync_all())
        .map_err(|e| storage_error("sync", &staged, e))?;

    fs::rename(&staged, path).map_err(|e| {
        let _ = fs::remove_file(&staged);
        storage_error("replace", path, e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize, Default)]
    struct Doc {
        entries: Vec<String>,
    }

    #[test]
    fn test_missing_document_is_empty() {
        let dir = TempDir::new().unwrap();
        let doc: Doc = read_json(dir.path().join("loans.json")).unwrap();
        assert!(doc.entries.is_empty());
    }

    #[test]
    fn test_replace_leaves_no_staged_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("loans.json");

        write_json_atomic(&path, &Doc { entries: vec!["first".into()] }).unwrap();
        write_json_atomic(&path, &Doc { entries: vec!["second".into()] }).unwrap();

        let doc: Doc = read_json(&path).unwrap();
        assert_eq!(doc.entries, vec!["second".to_string()]);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_corrupt_document_is_storage_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("budgets.json");
        fs::write(&path, "{ not json").unwrap();

        let err = read_json::<Doc, _>(&path).unwrap_err();
        assert!(matches!(err, MokaError::Storage(_)));
        assert!(err.to_string().contains("budgets.json"));
    }
}
