use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::GenError;

/// Result of comparing generated text with what is on disk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileStatus {
    Written,
    UpToDate,
    Stale,
    Missing,
}

impl std::fmt::Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileStatus::Written => write!(f, "written"),
            FileStatus::UpToDate => write!(f, "up to date"),
            FileStatus::Stale => write!(f, "stale"),
            FileStatus::Missing => write!(f, "missing"),
        }
    }
}

/// Replace each `(path, contents)` target in one step.
///
/// Every file is first written to a temporary file next to its target, and only once all
/// of them are staged are they renamed into place, so readers never see a truncated file
/// and a failure while staging leaves every target untouched. Parent directories must
/// already exist.
pub fn write_all_atomic(files: &[(&Path, &str)]) -> Result<Vec<FileStatus>, GenError> {
    let staged = files
        .iter()
        .map(|(path, contents)| stage(path, contents))
        .collect::<Result<Vec<_>, _>>()?;

    for (tmp, (path, _)) in staged.into_iter().zip(files) {
        tmp.persist(path).map_err(|e| GenError::Write {
            path: path.to_path_buf(),
            source: e.error,
        })?;
    }

    Ok(vec![FileStatus::Written; files.len()])
}

/// Write `contents` to a temporary file in the directory of `path`.
fn stage(path: &Path, contents: &str) -> Result<NamedTempFile, GenError> {
    let write_err = |source: std::io::Error| GenError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    Ok(tmp)
}

/// Compare `contents` with the file at `path` without touching it.
pub fn check(path: &Path, contents: &str) -> Result<FileStatus, GenError> {
    if !path.exists() {
        return Ok(FileStatus::Missing);
    }
    let current = std::fs::read(path).map_err(|source| GenError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    if current == contents.as_bytes() {
        Ok(FileStatus::UpToDate)
    } else {
        Ok(FileStatus::Stale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_replaces_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spdx-licenses.ads");
        std::fs::write(&path, "old content that is longer than the new one\n").unwrap();

        let statuses = write_all_atomic(&[(path.as_path(), "new\n")]).unwrap();
        assert_eq!(statuses, vec![FileStatus::Written]);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new\n");
        // Only the target remains; the temporary file was renamed away.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_missing_parent_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("spdx-licenses.ads");

        let err = write_all_atomic(&[(path.as_path(), "x")]).unwrap_err();
        match err {
            GenError::Write { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_write_all_stages_before_replacing() {
        let dir = tempfile::tempdir().unwrap();
        let licenses = dir.path().join("spdx-licenses.ads");
        let exceptions = dir.path().join("no-such-dir").join("spdx-exceptions.ads");

        let files = [
            (licenses.as_path(), "licenses\n"),
            (exceptions.as_path(), "exceptions\n"),
        ];
        let err = write_all_atomic(&files).unwrap_err();
        assert!(matches!(err, GenError::Write { .. }));
        // The first file was staged but never moved into place.
        assert!(!licenses.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_write_all() {
        let dir = tempfile::tempdir().unwrap();
        let licenses = dir.path().join("spdx-licenses.ads");
        let exceptions = dir.path().join("spdx-exceptions.ads");

        let files = [
            (licenses.as_path(), "licenses\n"),
            (exceptions.as_path(), "exceptions\n"),
        ];
        let statuses = write_all_atomic(&files).unwrap();
        assert_eq!(statuses, vec![FileStatus::Written, FileStatus::Written]);
        assert_eq!(std::fs::read_to_string(&licenses).unwrap(), "licenses\n");
        assert_eq!(std::fs::read_to_string(&exceptions).unwrap(), "exceptions\n");
    }

    #[test]
    fn test_check() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spdx-exceptions.ads");

        assert_eq!(check(&path, "a\n").unwrap(), FileStatus::Missing);
        std::fs::write(&path, "a\n").unwrap();
        assert_eq!(check(&path, "a\n").unwrap(), FileStatus::UpToDate);
        assert_eq!(check(&path, "b\n").unwrap(), FileStatus::Stale);
        // check never writes
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\n");
    }
}
