//! JSONL writing operations.

use crate::error::{Error, Result};
use serde::Serialize;
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};

/// Buffered async writer that emits one JSON value per line.
///
/// Data is buffered; call [`flush`](Self::flush) before dropping the writer.
pub struct JsonlWriter<W> {
    writer: BufWriter<W>,
    records_written: usize,
}

impl<W: AsyncWrite + Unpin> JsonlWriter<W> {
    /// Creates a new `JsonlWriter` wrapping the given async writer.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            records_written: 0,
        }
    }

    /// Number of records written through this writer.
    #[must_use]
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Serializes `value` and writes it as a single line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if serialization fails, or [`Error::Io`] on write failure.
    pub async fn write<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let json = serde_json::to_string(value).map_err(|e| Error::json_at(0, e))?;
        self.writer.write_all(json.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.records_written += 1;
        Ok(())
    }

    /// Writes every value yielded by `values`, one per line.
    ///
    /// # Errors
    ///
    /// Stops at the first failing value; see [`write`](Self::write).
    pub async fn write_all<T, I>(&mut self, values: I) -> Result<()>
    where
        T: Serialize,
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.write(&value).await?;
        }
        Ok(())
    }

    /// Flushes buffered data to the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the flush fails.
    pub async fn flush(&mut self) -> Result<()> {
        self.writer.flush().await?;
        Ok(())
    }

    /// Consumes the writer, returning the underlying writer.
    ///
    /// Does not flush.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Edge {
        from: u64,
        to: u64,
    }

    #[tokio::test]
    async fn writes_one_record_per_line() {
        let mut writer = JsonlWriter::new(Vec::new());
        writer
            .write_all([Edge { from: 1, to: 2 }, Edge { from: 2, to: 3 }])
            .await
            .unwrap();
        writer.flush().await.unwrap();

        assert_eq!(writer.records_written(), 2);
        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(output, "{\"from\":1,\"to\":2}\n{\"from\":2,\"to\":3}\n");
    }

    #[tokio::test]
    async fn empty_input_writes_nothing() {
        let mut writer = JsonlWriter::new(Vec::new());
        writer.write_all(Vec::<Edge>::new()).await.unwrap();
        writer.flush().await.unwrap();
        assert!(writer.into_inner().is_empty());
    }
}
