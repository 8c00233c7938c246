//! Atomic model files.
//!
//! Writes go to a temporary file in the target's directory which is synced and
//! then renamed over the target, so readers only ever see the old file or the
//! complete new one.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, TextBayesError};

/// Model file used when no path is configured.
pub const DEFAULT_MODEL_PATH: &str = "/tmp/textbayes-model.json";

const TEMP_PREFIX: &str = ".textbayes-";
const TEMP_SUFFIX: &str = ".tmp";

/// Resolve an optional model path.
///
/// `None` and blank paths resolve to [`DEFAULT_MODEL_PATH`]. Relative paths
/// and paths that do not name a file are rejected.
pub fn resolve_model_path(path: Option<&Path>) -> Result<PathBuf> {
    let path = match path {
        Some(path) if !path.as_os_str().to_string_lossy().trim().is_empty() => path,
        _ => Path::new(DEFAULT_MODEL_PATH),
    };

    if !path.is_absolute() {
        return Err(TextBayesError::invalid_argument(format!(
            "model path must be absolute: {}",
            path.display()
        )));
    }

    if path.parent().is_none() || path.file_name().is_none() {
        return Err(TextBayesError::invalid_argument(format!(
            "model path must name a file: {}",
            path.display()
        )));
    }

    Ok(path.to_path_buf())
}

/// Replace `path` with whatever `write` produces.
///
/// The temporary file is removed on every failure path, and the existing
/// target is left untouched.
pub fn write_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let parent = path.parent().ok_or_else(|| {
        TextBayesError::invalid_argument(format!(
            "model path has no parent directory: {}",
            path.display()
        ))
    })?;
    fs::create_dir_all(parent)?;

    let temp_file = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .suffix(TEMP_SUFFIX)
        .tempfile_in(parent)?;

    {
        let mut writer = BufWriter::new(temp_file.as_file());
        write(&mut writer)?;
        writer.flush()?;
    }
    temp_file.as_file().sync_all()?;

    temp_file
        .persist(path)
        .map_err(|err| TextBayesError::Io(err.error))?;

    Ok(())
}

/// Open a model file for reading.
pub fn open_for_read(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)?;
    Ok(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::TempDir;

    fn temp_files(dir: &Path) -> Vec<PathBuf> {
        fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(TEMP_PREFIX))
            })
            .collect()
    }

    #[test]
    fn test_resolve_defaults() {
        assert_eq!(
            resolve_model_path(None).unwrap(),
            PathBuf::from(DEFAULT_MODEL_PATH)
        );
        assert_eq!(
            resolve_model_path(Some(Path::new("   "))).unwrap(),
            PathBuf::from(DEFAULT_MODEL_PATH)
        );
    }

    #[test]
    fn test_resolve_rejects_bad_paths() {
        for bad in ["model.json", "./model.json", "/"] {
            let err = resolve_model_path(Some(Path::new(bad))).unwrap_err();
            assert!(err.is_invalid_argument(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_write_creates_parents_and_replaces() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("model.json");

        write_atomically(&path, |w| Ok(w.write_all(b"first")?)).unwrap();
        write_atomically(&path, |w| Ok(w.write_all(b"second")?)).unwrap();

        let mut content = String::new();
        open_for_read(&path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "second");
        assert!(temp_files(path.parent().unwrap()).is_empty());
    }

    #[test]
    fn test_failed_write_keeps_target_and_cleans_up() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("model.json");
        fs::write(&path, "original").unwrap();

        let result = write_atomically(&path, |w| {
            w.write_all(b"partial")?;
            Err(TextBayesError::other("serializer failed"))
        });

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
        assert!(temp_files(dir.path()).is_empty());
    }

    #[test]
    fn test_failed_rename_cleans_up() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("occupied");
        fs::create_dir(&target).unwrap();

        let err = write_atomically(&target, |w| Ok(w.write_all(b"data")?)).unwrap_err();

        assert!(matches!(err, TextBayesError::Io(_)));
        assert!(target.is_dir());
        assert!(temp_files(dir.path()).is_empty());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = open_for_read(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.is_not_found());
    }
}
