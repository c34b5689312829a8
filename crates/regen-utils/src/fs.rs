use std::{fs, path::Path};

use crate::error::{FileSystemError, FileSystemResult};

pub trait FileSystemProvider {
    /// Removes the specified file or directory, ignoring missing paths.
    ///
    /// Directories are removed recursively. A path that does not exist is not
    /// an error; the output tree may legitimately be absent on a first run.
    ///
    /// # Errors
    ///
    /// Returns a [`FileSystemError`] if the removal fails for any reason
    /// other than the path not existing.
    fn safe_remove<P: AsRef<Path>>(&self, path: P) -> FileSystemResult<()>;

    /// Creates a directory and any missing parents.
    ///
    /// Re-creating an existing directory is not an error. If the path exists
    /// but is not a directory, [`FileSystemError::NotADirectory`] is returned.
    ///
    /// # Errors
    ///
    /// Returns a [`FileSystemError::Directory`] if creation fails.
    fn ensure_dir_exists<P: AsRef<Path>>(&self, path: P) -> FileSystemResult<()>;

    /// Replaces `target` with the directory at `staging`.
    ///
    /// Any previous content at `target` is removed first, then `staging` is
    /// renamed into place. Callers build the complete tree under `staging`
    /// before promoting it, so `target` never holds a partially written tree.
    ///
    /// # Errors
    ///
    /// Returns a [`FileSystemError`] if the old target cannot be removed or
    /// the rename fails.
    fn promote_dir<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        staging: P,
        target: Q,
    ) -> FileSystemResult<()>;
}

#[derive(Default, Clone)]
pub struct StandardFileSystemProvider;

impl FileSystemProvider for StandardFileSystemProvider {
    fn safe_remove<P: AsRef<Path>>(&self, path: P) -> FileSystemResult<()> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(());
        }

        let result = if path.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        };

        result.map_err(|err| FileSystemError::File {
            path: path.to_path_buf(),
            action: "remove",
            source: err,
        })
    }

    fn ensure_dir_exists<P: AsRef<Path>>(&self, path: P) -> FileSystemResult<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path).map_err(|err| FileSystemError::Directory {
                path: path.to_path_buf(),
                action: "create",
                source: err,
            })?;
        } else if !path.is_dir() {
            return Err(FileSystemError::NotADirectory {
                path: path.to_path_buf(),
            });
        }

        Ok(())
    }

    fn promote_dir<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        staging: P,
        target: Q,
    ) -> FileSystemResult<()> {
        let staging = staging.as_ref();
        let target = target.as_ref();

        self.safe_remove(target)?;

        fs::rename(staging, target).map_err(|err| FileSystemError::Directory {
            path: staging.to_path_buf(),
            action: "promote",
            source: err,
        })
    }
}

/// Removes a file or directory, ignoring missing paths.
///
/// Convenience wrapper over [`FileSystemProvider::safe_remove`] on the
/// standard provider.
pub fn safe_remove<P: AsRef<Path>>(path: P) -> FileSystemResult<()> {
    StandardFileSystemProvider.safe_remove(path)
}

/// Creates a directory and any missing parents.
///
/// Convenience wrapper over [`FileSystemProvider::ensure_dir_exists`] on the
/// standard provider.
pub fn ensure_dir_exists<P: AsRef<Path>>(path: P) -> FileSystemResult<()> {
    StandardFileSystemProvider.ensure_dir_exists(path)
}

/// Replaces `target` with the directory at `staging`.
///
/// Convenience wrapper over [`FileSystemProvider::promote_dir`] on the
/// standard provider.
pub fn promote_dir<P: AsRef<Path>, Q: AsRef<Path>>(staging: P, target: Q) -> FileSystemResult<()> {
    StandardFileSystemProvider.promote_dir(staging, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_safe_remove_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("listing.json");
        fs::write(&file_path, "{}").unwrap();
        safe_remove(&file_path).unwrap();
        assert!(!file_path.exists());
    }

    #[test]
    fn test_safe_remove_dir_recursive() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("servers").join("echo").join("versions");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("latest"), "{}").unwrap();
        safe_remove(dir.path().join("servers")).unwrap();
        assert!(!dir.path().join("servers").exists());
    }

    #[test]
    fn test_safe_remove_non_existent() {
        let dir = tempdir().unwrap();
        safe_remove(dir.path().join("missing")).unwrap();
    }

    #[test]
    fn test_ensure_dir_exists_creates_parents() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("v0.1").join("servers").join("echo");
        ensure_dir_exists(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_ensure_dir_exists_idempotent() {
        let dir = tempdir().unwrap();
        ensure_dir_exists(dir.path()).unwrap();
        ensure_dir_exists(dir.path()).unwrap();
        assert!(dir.path().is_dir());
    }

    #[test]
    fn test_ensure_dir_exists_file_collision() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("servers");
        fs::write(&file_path, "not a dir").unwrap();
        assert!(ensure_dir_exists(&file_path).is_err());
    }

    #[test]
    fn test_promote_dir_replaces_target() {
        let dir = tempdir().unwrap();
        let staging = dir.path().join("public.staging");
        let target = dir.path().join("public");

        fs::create_dir_all(target.join("stale")).unwrap();
        fs::write(target.join("stale").join("old"), "old").unwrap();

        fs::create_dir_all(&staging).unwrap();
        fs::write(staging.join("fresh"), "new").unwrap();

        promote_dir(&staging, &target).unwrap();

        assert!(!staging.exists());
        assert!(target.join("fresh").exists());
        assert!(!target.join("stale").exists());
    }

    #[test]
    fn test_promote_dir_without_existing_target() {
        let dir = tempdir().unwrap();
        let staging = dir.path().join("staging");
        let target = dir.path().join("public");

        fs::create_dir_all(&staging).unwrap();
        fs::write(staging.join("fresh"), "new").unwrap();

        promote_dir(&staging, &target).unwrap();
        assert!(target.join("fresh").exists());
    }

    #[test]
    fn test_promote_dir_missing_staging() {
        let dir = tempdir().unwrap();
        let result = promote_dir(dir.path().join("missing"), dir.path().join("public"));
        assert!(result.is_err());
    }
}
