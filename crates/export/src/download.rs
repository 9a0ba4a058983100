//! Saving the finished document

use crate::{ExportError, Result};
use std::future::Future;
use std::path::{Path, PathBuf};

const PDF_EXTENSION: &str = "pdf";

/// File name for an export: the trimmed full name, or `fallback` when blank
pub fn export_file_name(full_name: &str, fallback: &str) -> String {
    let trimmed = full_name.trim();
    let base = if trimmed.is_empty() { fallback } else { trimmed };
    format!("{}.{}", sanitize(base), PDF_EXTENSION)
}

/// Replace characters no file system accepts in a single path component
fn sanitize(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    match cleaned.as_str() {
        "" | "." | ".." => "resume".to_string(),
        _ => cleaned,
    }
}

/// Where finished documents go
pub trait DownloadSink: Send + Sync {
    /// Store `bytes` under `file_name`, returning where they ended up
    fn save(&self, file_name: &str, bytes: Vec<u8>) -> impl Future<Output = Result<PathBuf>> + Send;
}

/// Saves into a directory on disk.
///
/// The document is written to a temporary sibling and renamed into place, so
/// a failed write never leaves a truncated PDF behind.
#[derive(Debug, Clone)]
pub struct FileDownloadSink {
    dir: PathBuf,
}

impl FileDownloadSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for FileDownloadSink {
    fn save(&self, file_name: &str, bytes: Vec<u8>) -> impl Future<Output = Result<PathBuf>> + Send {
        let target = self.dir.join(file_name);
        let partial = self.dir.join(format!(".{}.part", file_name));
        let dir = self.dir.clone();
        async move {
            tokio::fs::create_dir_all(&dir).await?;
            if let Err(e) = tokio::fs::write(&partial, &bytes).await {
                let _ = tokio::fs::remove_file(&partial).await;
                return Err(e.into());
            }
            tokio::fs::rename(&partial, &target).await?;
            tracing::info!("Saved {} ({} bytes)", target.display(), bytes.len());
            Ok::<_, ExportError>(target)
        }
    }
}
