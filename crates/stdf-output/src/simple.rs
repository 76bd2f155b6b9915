//! Per-result CSV renderer.
//!
//! One row per PTR, labelled with the sequence name of the most recent BPS:
//!
//! ```csv
//! sequence_no,test_number,head_num,site_number,test_text,result,pass_or_fail
//! "FLOW_A",100,1,2,"VDD leakage",1.5,1
//! ```

use std::io::Write;

use csv::Writer;
use stdf_core::{Record, RecordType};

use crate::csvio::{csv_writer, into_inner, quoted, write_header};
use crate::format::FieldFormatter;
use crate::row::TestResultRow;
use crate::sink::RecordSink;
use crate::state::SequenceLabel;
use crate::OutputResult;

pub const RESULT_HEADER: [&str; 7] = [
    "sequence_no",
    "test_number",
    "head_num",
    "site_number",
    "test_text",
    "result",
    "pass_or_fail",
];

/// Writes one CSV row per parametric test result.
pub struct CsvWriter<W: Write> {
    out:      Writer<W>,
    fmt:      FieldFormatter,
    sequence: SequenceLabel,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out:      csv_writer(out),
            fmt:      FieldFormatter::markup(),
            sequence: SequenceLabel::default(),
        }
    }

    /// Label attached to the next result row.
    pub fn sequence(&self) -> &SequenceLabel {
        &self.sequence
    }

    /// Flush and hand back the destination.
    pub fn into_inner(self) -> OutputResult<W> {
        into_inner(self.out)
    }
}

impl<W: Write> RecordSink for CsvWriter<W> {
    fn on_stream_start(&mut self) -> OutputResult<()> {
        write_header(&mut self.out, &RESULT_HEADER)
    }

    fn on_record(&mut self, record: &Record) -> OutputResult<()> {
        match record.rec_type {
            RecordType::Bps => self.sequence.capture(record, &self.fmt),
            RecordType::Ptr => {
                let row = TestResultRow::from_record(record, &self.fmt)?;
                let label = quoted(self.sequence.current());
                let test_text = quoted(&row.test_text);
                let pass_or_fail = row.pass_or_fail.to_string();
                self.out.write_record([
                    label.as_str(),
                    row.test_num.as_str(),
                    row.head_num.as_str(),
                    row.site_num.as_str(),
                    test_text.as_str(),
                    row.result.as_str(),
                    pass_or_fail.as_str(),
                ])?;
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
