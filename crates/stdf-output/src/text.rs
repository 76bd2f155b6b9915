//! Delimited-text renderer: one line per record.
//!
//! ```text
//! FAR|2|4
//! PTR|100|1|2|0|0|1.5|VDD|...
//! ```

use std::io::Write;

use stdf_core::{Record, RenderConfig};

use crate::format::FieldFormatter;
use crate::sink::RecordSink;
use crate::OutputResult;

/// Writes every record as its tag followed by its formatted fields.
pub struct TextWriter<W: Write> {
    out:       W,
    delimiter: String,
    fmt:       FieldFormatter,
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W, config: &RenderConfig) -> Self {
        Self {
            out,
            delimiter: config.delimiter.clone(),
            fmt:       FieldFormatter::text(&config.delimiter),
        }
    }

    /// Render one record to a line, without the trailing newline.
    pub fn line(&self, record: &Record) -> OutputResult<String> {
        let fields = if record.rec_type.is_variadic() {
            vec![self.fmt.format(record, 0)?]
        } else {
            (0..record.descriptors().len())
                .map(|i| self.fmt.format(record, i))
                .collect::<OutputResult<Vec<_>>>()?
        };
        Ok(format!(
            "{}{}{}",
            record.rec_type.tag(),
            self.delimiter,
            fields.join(&self.delimiter)
        ))
    }

    /// Flush and hand back the destination.
    pub fn into_inner(mut self) -> OutputResult<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> RecordSink for TextWriter<W> {
    fn on_record(&mut self, record: &Record) -> OutputResult<()> {
        let line = self.line(record)?;
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    fn on_stream_end(&mut self) -> OutputResult<()> {
        self.out.flush()?;
        Ok(())
    }
}
