//! Finding and loading YAML configuration files.

use crate::value::{self, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

/// Extensions of files considered to hold declared objects.
pub const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// SourceError is returned when declared configuration cannot be read.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

/// Expands `paths` into the files they contain.
///
/// Files are returned as given; directories are walked recursively with
/// entries visited in name order. Symlinks to directories below a given path
/// are not followed. Paths that cannot be read are reported as errors in
/// place, without stopping the walk.
pub fn iter_files<P: AsRef<Path>>(paths: &[P]) -> Vec<Result<PathBuf, SourceError>> {
    let mut files = Vec::new();
    for path in paths {
        let path = path.as_ref();
        for entry in WalkDir::new(path).follow_links(false).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let failed = err.path().unwrap_or(path).to_path_buf();
                    files.push(Err(SourceError::Io {
                        path: failed,
                        source: err.into(),
                    }));
                    continue;
                }
            };
            if entry.file_type().is_dir() {
                continue;
            }
            if entry.path_is_symlink() && entry.path().is_dir() {
                debug!(path = %entry.path().display(), "not following directory symlink");
                continue;
            }
            files.push(Ok(entry.into_path()));
        }
    }
    files
}

/// Returns true if `path` has a YAML extension.
pub fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| YAML_EXTENSIONS.contains(&ext))
}

/// Reads every non-empty YAML document in `path`.
pub fn load_documents(path: &Path) -> Result<Vec<Value>, SourceError> {
    let content = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let documents = value::from_yaml_documents(&content).map_err(|e| SourceError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(documents.into_iter().filter(|doc| !doc.is_null()).collect())
}
