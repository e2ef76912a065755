//! JSONL reading operations.
//!
//! [`JsonlReader`] reads one JSON record per line, tracking the 1-based line
//! number so that parse failures can be reported precisely. Blank lines are
//! skipped without producing a record or a warning.

use crate::error::{Error, Result};
use crate::warning::{Warning, WarningCollector};
use futures::stream::{self, Stream, StreamExt};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::pin::pin;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

/// Async reader for JSONL (JSON Lines) data.
///
/// # Examples
///
/// ```no_run
/// use graphwalk_jsonl::reader::JsonlReader;
/// use tokio::fs::File;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let file = File::open("graph.jsonl").await?;
/// let mut reader = JsonlReader::new(file);
/// while let Some(record) = reader.read_line::<serde_json::Value>().await? {
///     println!("{record}");
/// }
/// # Ok(())
/// # }
/// ```
pub struct JsonlReader<R> {
    reader: BufReader<R>,
    /// Number of physical lines consumed so far (0 before the first read).
    line_number: usize,
}

impl<R: AsyncRead + Unpin> JsonlReader<R> {
    /// Creates a new `JsonlReader` wrapping the given async reader.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
        }
    }

    /// Creates a new `JsonlReader` with a custom buffer capacity.
    #[must_use]
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity, reader),
            line_number: 0,
        }
    }

    /// Returns the 1-based number of the last line read, or 0 before any read.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Reads the next raw line into `buf`. Returns `false` at end of input.
    async fn next_raw_line(&mut self, buf: &mut String) -> std::io::Result<bool> {
        buf.clear();
        let read = self.reader.read_line(buf).await?;
        if read == 0 {
            return Ok(false);
        }
        self.line_number += 1;
        Ok(true)
    }

    /// Reads and deserializes the next non-blank line.
    ///
    /// Returns `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] with the offending line number if the line is
    /// not valid JSON for `T`, or [`Error::Io`] if reading fails.
    pub async fn read_line<T: DeserializeOwned>(&mut self) -> Result<Option<T>> {
        let mut buf = String::new();
        loop {
            if !self.next_raw_line(&mut buf).await? {
                return Ok(None);
            }
            let line = buf.trim();
            if line.is_empty() {
                continue;
            }
            return serde_json::from_str(line)
                .map(Some)
                .map_err(|e| Error::json_at(self.line_number, e));
        }
    }

    /// Converts the reader into a stream that skips malformed lines.
    ///
    /// Every line that fails to parse is recorded in the returned
    /// [`WarningCollector`] instead of ending the stream. A read error ends
    /// the stream and is recorded as [`Warning::SkippedLine`].
    pub fn stream_resilient<T>(self) -> (impl Stream<Item = T>, WarningCollector)
    where
        T: DeserializeOwned,
    {
        let warnings = WarningCollector::new();
        let collector = warnings.clone();

        let records = stream::unfold(self, move |mut reader| {
            let collector = collector.clone();
            async move {
                let mut buf = String::new();
                loop {
                    match reader.next_raw_line(&mut buf).await {
                        Ok(true) => {}
                        Ok(false) => return None,
                        Err(e) => {
                            collector.add(Warning::SkippedLine {
                                line_number: reader.line_number + 1,
                                reason: format!("read error: {e}"),
                            });
                            return None;
                        }
                    }

                    let line = buf.trim();
                    if line.is_empty() {
                        continue;
                    }

                    match serde_json::from_str::<T>(line) {
                        Ok(value) => return Some((value, reader)),
                        Err(e) => {
                            tracing::debug!(line = reader.line_number, error = %e, "Skipping malformed JSONL line");
                            collector.add(Warning::MalformedJson {
                                line_number: reader.line_number,
                                error: e.to_string(),
                            });
                        }
                    }
                }
            }
        });

        (records, warnings)
    }
}

/// Reads every valid record from a JSONL file, collecting warnings for the rest.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened. Malformed lines never
/// produce an error; they are returned as warnings.
pub async fn read_jsonl_resilient<T, P>(path: P) -> Result<(Vec<T>, Vec<Warning>)>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).await?;
    let (records, warnings) = JsonlReader::new(file).stream_resilient::<T>();
    let records: Vec<T> = pin!(records).collect().await;
    let warnings = warnings.into_warnings();

    if !warnings.is_empty() {
        tracing::debug!(
            path = %path.display(),
            count = warnings.len(),
            "Skipped malformed lines while loading JSONL file"
        );
    }

    Ok((records, warnings))
}
