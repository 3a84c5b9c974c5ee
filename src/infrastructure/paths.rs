//! Filesystem locations used by Hackpad.
//!
//! Everything lives under `<home>/.hackpad`:
//!
//! ```text
//! ~/.hackpad/
//! ├── config.toml          optional configuration
//! ├── hackpad-otlp.json    trace export (rotated)
//! └── vault/               note files
//! ```

use crate::domain::HackpadError;
use std::path::{Path, PathBuf};

/// Name of the application directory under the home directory.
const APP_DIR_NAME: &str = ".hackpad";

/// Name of the vault directory inside the application directory.
const VAULT_DIR_NAME: &str = "vault";

/// Permission bits applied to directories created for the vault.
pub const VAULT_DIR_MODE: u32 = 0o750;

/// Resolves the current user's home directory.
///
/// # Errors
///
/// Returns [`HackpadError::HomeDirUnavailable`] if no home directory can be
/// determined for the current user.
pub fn home_dir() -> Result<PathBuf, HackpadError> {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(HackpadError::HomeDirUnavailable)
}

/// Returns the application data directory (`<home>/.hackpad`).
///
/// ```
/// use hackpad::infrastructure::data_dir;
/// use std::path::Path;
///
/// assert_eq!(data_dir(Path::new("/home/ada")), Path::new("/home/ada/.hackpad"));
/// ```
#[must_use]
pub fn data_dir(home: &Path) -> PathBuf {
    home.join(APP_DIR_NAME)
}

/// Returns the vault root (`<home>/.hackpad/vault`).
///
/// ```
/// use hackpad::infrastructure::vault_dir;
/// use std::path::Path;
///
/// assert_eq!(vault_dir(Path::new("/home/ada")), Path::new("/home/ada/.hackpad/vault"));
/// ```
#[must_use]
pub fn vault_dir(home: &Path) -> PathBuf {
    data_dir(home).join(VAULT_DIR_NAME)
}

/// Creates `path` and any missing parents with [`VAULT_DIR_MODE`] permissions.
///
/// Existing directories are left untouched.
///
/// # Errors
///
/// Returns the underlying I/O error if a directory cannot be created.
pub fn ensure_private_dir(path: &Path) -> std::io::Result<()> {
    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(VAULT_DIR_MODE);
    }

    builder.create(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_nested_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let vault = vault_dir(tmp.path());

        ensure_private_dir(&vault).unwrap();
        assert!(vault.is_dir());

        // second call is a no-op
        ensure_private_dir(&vault).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn created_directories_are_not_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let vault = vault_dir(tmp.path());
        ensure_private_dir(&vault).unwrap();

        let mode = std::fs::metadata(&vault).unwrap().permissions().mode();
        assert_eq!(mode & 0o007, 0);
    }
}
