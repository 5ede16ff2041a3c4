// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timestamp stored in a plain side file

use super::{StoreError, TimestampStore};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Single-value file store.
///
/// Writes go to a temp file that is synced before it is renamed over the
/// target, and the directory is synced after the rename, so a power cut
/// leaves either the old or the new value. A blank file reads as no value.
#[derive(Clone, Debug)]
pub struct FileTimestampStore {
    path: PathBuf,
}

impl FileTimestampStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl TimestampStore for FileTimestampStore {
    async fn get(&self) -> Result<Option<String>, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) if text.trim().is_empty() => {
                tracing::warn!(
                    path = %self.path().display(),
                    "timestamp file is blank, ignoring it"
                );
                Ok(None)
            }
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    async fn set(&self, value: &str) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| self.write_error(e))?;

        let temp = self.temp_path();
        let mut file = tokio::fs::File::create(&temp)
            .await
            .map_err(|e| self.write_error(e))?;
        file.write_all(value.as_bytes())
            .await
            .map_err(|e| self.write_error(e))?;
        file.sync_all().await.map_err(|e| self.write_error(e))?;
        drop(file);

        // Atomic replace (rename is atomic on POSIX), then persist the rename
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(|e| self.write_error(e))?;
        tokio::fs::File::open(&dir)
            .await
            .map_err(|e| self.write_error(e))?
            .sync_all()
            .await
            .map_err(|e| self.write_error(e))?;

        tracing::debug!(path = %self.path().display(), value, "timestamp written");
        Ok(())
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
