//! Detailed per-part CSV renderer.
//!
//! Combines the per-result rows of [`CsvWriter`][crate::CsvWriter] with part
//! tracking and the file summary, writing to two destinations:
//!
//! - results: `file_name,sequence_no,part_no,test_number,head_num,site_number,test_text,result,pass_or_fail`
//! - summary: `file_name,start_timestamp,end_timestamp,temperature_ran`
//!
//! Every PIR starts a new part on its head/site.  A PTR is stamped with the
//! part currently running on its head/site; a PTR for a head/site that never
//! saw a PIR fails with [`OutputError::UnresolvedPart`][crate::OutputError].

use std::io::Write;

use csv::Writer;
use stdf_core::{Record, RecordType};

use crate::csvio::{csv_writer, into_inner, quoted, write_header};
use crate::format::FieldFormatter;
use crate::row::{head_site, TestResultRow};
use crate::sink::RecordSink;
use crate::state::CorrelationState;
use crate::summary::SUMMARY_HEADER;
use crate::OutputResult;

pub const DETAILED_HEADER: [&str; 9] = [
    "file_name",
    "sequence_no",
    "part_no",
    "test_number",
    "head_num",
    "site_number",
    "test_text",
    "result",
    "pass_or_fail",
];

/// Writes part-stamped result rows to `R` and the file summary to `S`.
pub struct DetailedCsvWriter<R: Write, S: Write> {
    results: Writer<R>,
    summary: Writer<S>,
    fmt:     FieldFormatter,
    state:   CorrelationState,
}

impl<R: Write, S: Write> DetailedCsvWriter<R, S> {
    pub fn new(results: R, summary: S) -> Self {
        Self {
            results: csv_writer(results),
            summary: csv_writer(summary),
            fmt:     FieldFormatter::markup(),
            state:   CorrelationState::default(),
        }
    }

    /// Read-only view of the correlation state.
    pub fn state(&self) -> &CorrelationState {
        &self.state
    }

    /// Flush both destinations and hand them back.
    pub fn into_inner(self) -> OutputResult<(R, S)> {
        Ok((into_inner(self.results)?, into_inner(self.summary)?))
    }

    fn write_result(&mut self, record: &Record) -> OutputResult<()> {
        let part = self.state.parts.lookup(head_site(record)?)?;
        let row = TestResultRow::from_record(record, &self.fmt)?;
        let file_name = quoted(self.state.file.file_name());
        let label = quoted(self.state.sequence.current());
        let part = part.to_string();
        let test_text = quoted(&row.test_text);
        let pass_or_fail = row.pass_or_fail.to_string();
        self.results.write_record([
            file_name.as_str(),
            label.as_str(),
            part.as_str(),
            row.test_num.as_str(),
            row.head_num.as_str(),
            row.site_num.as_str(),
            test_text.as_str(),
            row.result.as_str(),
            pass_or_fail.as_str(),
        ])?;
        Ok(())
    }
}

impl<R: Write, S: Write> RecordSink for DetailedCsvWriter<R, S> {
    fn on_stream_start(&mut self) -> OutputResult<()> {
        write_header(&mut self.summary, &SUMMARY_HEADER)?;
        write_header(&mut self.results, &DETAILED_HEADER)
    }

    fn on_record(&mut self, record: &Record) -> OutputResult<()> {
        match record.rec_type {
            RecordType::Bps => self.state.sequence.capture(record, &self.fmt),
            RecordType::Pir => {
                self.state.parts.assign(head_site(record)?);
                Ok(())
            }
            RecordType::Ptr => self.write_result(record),
            RecordType::Mir => self.state.file.capture_header(record, &self.fmt),
            RecordType::Mrr => {
                self.state.file.capture_trailer(record)?;
                self.summary.write_record(self.state.file.row().quoted().fields())?;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn on_stream_end(&mut self) -> OutputResult<()> {
        self.results.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
