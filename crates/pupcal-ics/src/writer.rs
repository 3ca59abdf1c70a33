//! The `DocumentWriter` trait and its `io::Write`-backed implementation.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::{CalendarDocument, IcsError, IcsResult};

/// Sink for rendered calendar documents.
pub trait DocumentWriter {
    /// Write one complete document.
    fn write_document(&mut self, doc: &CalendarDocument) -> IcsResult<()>;

    /// Flush the underlying handle.
    ///
    /// Idempotent once it succeeds; a failed flush leaves the writer open.
    fn finish(&mut self) -> IcsResult<()>;
}

/// Writes `.ics` text to any `io::Write`.
pub struct IcsWriter<W: Write> {
    inner:    W,
    finished: bool,
}

impl IcsWriter<BufWriter<File>> {
    /// Create (or truncate) the file at `path`.
    pub fn create(path: &Path) -> IcsResult<Self> {
        let file = File::create(path)?;
        debug!(path = %path.display(), "opened calendar output");
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> IcsWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, finished: false }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> DocumentWriter for IcsWriter<W> {
    fn write_document(&mut self, doc: &CalendarDocument) -> IcsResult<()> {
        if self.finished {
            return Err(IcsError::Finished);
        }
        self.inner.write_all(doc.render().as_bytes())?;
        Ok(())
    }

    fn finish(&mut self) -> IcsResult<()> {
        if self.finished {
            return Ok(());
        }
        self.inner.flush()?;
        self.finished = true;
        Ok(())
    }
}
