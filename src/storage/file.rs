use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use super::Storage;
use crate::error::BookError;

/// Documents stored as files on the local filesystem.
///
/// Writes go to a temporary file next to the target which is then renamed over
/// it, so a failed write leaves the previous document in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStorage;

impl Storage for FileStorage {
    fn read(&self, path: &Path) -> Result<String, BookError> {
        fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => BookError::NotFound(path.to_path_buf()),
            _ => BookError::Read {
                path: path.to_path_buf(),
                source,
            },
        })
    }

    fn write(&mut self, path: &Path, text: &str) -> Result<(), BookError> {
        let temp = temp_path(path);
        debug!("Writing {} bytes to {}", text.len(), temp.display());

        let write_error = |source| BookError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Err(source) = fs::write(&temp, text) {
            let _ = fs::remove_file(&temp);
            return Err(write_error(source));
        }
        fs::rename(&temp, path).map_err(|source| {
            let _ = fs::remove_file(&temp);
            write_error(source)
        })
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{file_name}.tmp"))
}
