//! Reading and atomically rewriting the commit message file git hands the hook

use crate::error::{AddTicketError, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Read the whole commit message, which must be UTF-8
pub fn read(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| AddTicketError::io(path, e))?;

    String::from_utf8(bytes).map_err(|source| AddTicketError::Encoding {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace the file contents via a sibling temp file and a rename
///
/// The temp file lives in the same directory so the rename never crosses
/// filesystems. Permissions of the existing file are carried over, and a
/// symlinked message file is rewritten at its target so the link survives.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let target = match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(e) if e.kind() == io::ErrorKind::NotFound => path.to_path_buf(),
        Err(e) => return Err(AddTicketError::io(path, e)),
    };
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| AddTicketError::io(path, e))?;
    temp.write_all(contents.as_bytes())
        .and_then(|_| temp.as_file().sync_all())
        .map_err(|e| AddTicketError::io(path, e))?;

    if let Ok(metadata) = fs::metadata(&target) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| AddTicketError::io(path, e))?;
    }

    temp.persist(&target)
        .map_err(|e| AddTicketError::io(path, e.error))?;

    debug!(path = %path.display(), bytes = contents.len(), "commit message written");
    Ok(())
}
