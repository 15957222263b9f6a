//! File system helpers for writing catalog sets.

use super::contents::CONTENTS_FILE;
use crate::error::{Error, ErrorExt, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Creates `destination/dir_name` for a new set.
///
/// `destination` must exist and be a directory. An existing set directory is
/// removed first when `overwrite` is set, otherwise it is an error.
pub async fn prepare_set_dir(destination: &Path, dir_name: &str, overwrite: bool) -> Result<PathBuf> {
    let metadata = match fs::metadata(destination).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::DestinationMissing(destination.to_path_buf()));
        }
        Err(e) => return Err(e).fs_context("inspecting destination", destination),
    };

    if !metadata.is_dir() {
        return Err(Error::GenericError(format!(
            "{} must be a directory",
            destination.display()
        )));
    }

    let dir = destination.join(dir_name);
    if fs::try_exists(&dir)
        .await
        .fs_context("checking output directory", &dir)?
    {
        if !overwrite {
            return Err(Error::DestinationExists(dir));
        }
        log::warn!("Replacing existing {}", dir.display());
        remove_dir_all(&dir).await?;
    }

    create_dir(&dir, false).await?;
    Ok(dir)
}

/// Serializes `contents` as pretty JSON into `dir/Contents.json`.
pub async fn write_contents<T: Serialize>(dir: &Path, contents: &T) -> Result<PathBuf> {
    let path = dir.join(CONTENTS_FILE);
    let json = serde_json::to_vec_pretty(contents)?;
    fs::write(&path, json)
        .await
        .fs_context("writing Contents.json", &path)?;
    log::debug!("Wrote {}", path.display());
    Ok(path)
}

/// Creates the given directory path, erasing it first if specified.
pub async fn create_dir(path: &Path, erase: bool) -> Result<()> {
    if erase {
        remove_dir_all(path).await?;
    }
    fs::create_dir(path)
        .await
        .fs_context("creating directory", path)
}

/// Removes the directory and its contents if it exists.
pub async fn remove_dir_all(path: &Path) -> Result<()> {
    if fs::try_exists(path).await.unwrap_or(false) {
        fs::remove_dir_all(path)
            .await
            .fs_context("removing directory", path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_destination() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let err = prepare_set_dir(&missing, "Logo.imageset", false).await.unwrap_err();
        assert!(matches!(err, Error::DestinationMissing(_)));
    }

    #[tokio::test]
    async fn test_destination_must_be_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file.txt");
        std::fs::write(&file, "x").unwrap();

        assert!(prepare_set_dir(&file, "Logo.imageset", false).await.is_err());
    }

    #[tokio::test]
    async fn test_existing_set_requires_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let created = prepare_set_dir(dir.path(), "Logo.imageset", false).await.unwrap();
        std::fs::write(created.join("stale.png"), "old").unwrap();

        let err = prepare_set_dir(dir.path(), "Logo.imageset", false).await.unwrap_err();
        assert!(matches!(err, Error::DestinationExists(_)));

        let replaced = prepare_set_dir(dir.path(), "Logo.imageset", true).await.unwrap();
        assert_eq!(replaced, created);
        assert!(!replaced.join("stale.png").exists());
    }

    #[tokio::test]
    async fn test_write_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_contents(dir.path(), &serde_json::json!({"images": []}))
            .await
            .unwrap();

        assert_eq!(path.file_name().unwrap(), CONTENTS_FILE);
        let written: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(written["images"], serde_json::json!([]));
    }
}
