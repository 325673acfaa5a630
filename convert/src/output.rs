/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::{
    fs,
    io::{self, BufWriter, Write},
    path::Path,
};

use tempfile::{Builder, NamedTempFile};

use crate::error::ConvertError;

/// Writes `bytes` to `path` through a temporary file in the same directory.
/// The target only ever holds complete output; on failure the temporary file
/// is removed and any existing target is left untouched. An existing target
/// keeps its permissions, a new one gets the usual umask-derived mode.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), ConvertError> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut file = temp_file_for(path, dir)?;
    {
        let mut writer = BufWriter::new(file.as_file_mut());
        writer.write_all(bytes)?;
        writer.flush()?;
    }
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;

    Ok(())
}

fn temp_file_for(target: &Path, dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();

    // Tempfiles default to 0600; ask for 0666 and let the umask narrow it.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let file = builder.tempfile_in(dir)?;
    if let Ok(meta) = fs::metadata(target) {
        fs::set_permissions(file.path(), meta.permissions())?;
    }

    Ok(file)
}
