//! Atomic write operations for JSONL files.
//!
//! Data is written to a sibling temporary file which is then renamed over the
//! target. On POSIX systems the rename is atomic, so readers observe either
//! the old file or the complete new one.

use crate::{JsonlWriter, Result};
use serde::Serialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs::File;

/// Atomically writes a slice of values to a JSONL file.
///
/// # Errors
///
/// Returns an error if the temporary file cannot be created or written, if a
/// value fails to serialize, or if the final rename fails. The original file
/// is left untouched on failure.
///
/// ```no_run
/// use graphwalk_jsonl::write_jsonl_atomic;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pairs = vec![(1, 3), (2, 3)];
/// write_jsonl_atomic("lineage.jsonl", &pairs).await?;
/// # Ok(())
/// # }
/// ```
pub async fn write_jsonl_atomic<T, P>(path: P, values: &[T]) -> Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    write_jsonl_atomic_iter(path, values.iter()).await
}

/// Atomically writes an iterator of values to a JSONL file.
///
/// # Errors
///
/// See [`write_jsonl_atomic`].
pub async fn write_jsonl_atomic_iter<T, I, P>(path: P, values: I) -> Result<()>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let temp_path = make_temp_path(path);

    if let Err(e) = write_to_temp_file(&temp_path, values).await {
        // Best-effort cleanup; the write error is what matters.
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(e);
    }

    tokio::fs::rename(&temp_path, path).await?;
    tracing::trace!(path = %path.display(), "Wrote JSONL file");
    Ok(())
}

/// `graph.jsonl` becomes `graph.jsonl.tmp`; `graph` becomes `graph.tmp`.
fn make_temp_path(path: &Path) -> PathBuf {
    let extension = match path.extension() {
        Some(ext) => {
            let mut ext = ext.to_os_string();
            ext.push(".tmp");
            ext
        }
        None => OsString::from("tmp"),
    };
    path.with_extension(extension)
}

async fn write_to_temp_file<T, I>(temp_path: &Path, values: I) -> Result<()>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let file = File::create(temp_path).await?;
    let mut writer = JsonlWriter::new(file);
    writer.write_all(values).await?;
    writer.flush().await?;
    Ok(())
}
