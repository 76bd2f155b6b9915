//! File-summary CSV renderer.
//!
//! Emits exactly one data row, when the MRR closes the file:
//!
//! ```csv
//! file_name,start_timestamp,end_timestamp,temperature_ran
//! "LOT7_FT_25C_WK12",1700000000,1700003600,"25C"
//! ```
//!
//! Timestamps are the raw seconds, not calendar text.

use std::io::Write;

use csv::Writer;
use stdf_core::{Record, RecordType};

use crate::csvio::{csv_writer, into_inner, write_header};
use crate::format::FieldFormatter;
use crate::sink::RecordSink;
use crate::state::FileSummary;
use crate::OutputResult;

pub const SUMMARY_HEADER: [&str; 4] = [
    "file_name",
    "start_timestamp",
    "end_timestamp",
    "temperature_ran",
];

/// Writes the file name, start/end time and test temperature of a file.
pub struct FileSummaryCsvWriter<W: Write> {
    out:  Writer<W>,
    fmt:  FieldFormatter,
    file: FileSummary,
}

impl<W: Write> FileSummaryCsvWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out:  csv_writer(out),
            fmt:  FieldFormatter::markup(),
            file: FileSummary::default(),
        }
    }

    pub fn summary(&self) -> &FileSummary {
        &self.file
    }

    /// Flush and hand back the destination.
    pub fn into_inner(self) -> OutputResult<W> {
        into_inner(self.out)
    }
}

impl<W: Write> RecordSink for FileSummaryCsvWriter<W> {
    fn on_stream_start(&mut self) -> OutputResult<()> {
        write_header(&mut self.out, &SUMMARY_HEADER)
    }

    fn on_record(&mut self, record: &Record) -> OutputResult<()> {
        match record.rec_type {
            RecordType::Mir => self.file.capture_header(record, &self.fmt),
            RecordType::Mrr => {
                self.file.capture_trailer(record)?;
                self.out.write_record(self.file.row().quoted().fields())?;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn on_stream_end(&mut self) -> OutputResult<()> {
        self.out.flush()?;
        Ok(())
    }
}
