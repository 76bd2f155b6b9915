//! Plain data rows written by the CSV renderers.

use stdf_core::{HeadSite, Record, StdfError};

use crate::csvio::quoted;
use crate::format::FieldFormatter;
use crate::OutputResult;

/// Pass/fail column value for a test flag reading.
///
/// A positive flag is coded `0`, anything else `1`.
#[inline]
pub fn pass_or_fail(test_flag: i64) -> u8 {
    if test_flag > 0 { 0 } else { 1 }
}

/// The columns of one parametric test result, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResultRow {
    pub test_num:     String,
    pub head_num:     String,
    pub site_num:     String,
    pub test_text:    String,
    pub result:       String,
    pub pass_or_fail: u8,
}

impl TestResultRow {
    /// Pull the result columns out of a PTR.
    ///
    /// An absent `TEST_FLG` reads as flag 0.
    pub fn from_record(record: &Record, fmt: &FieldFormatter) -> OutputResult<Self> {
        let test_flag = record.field("TEST_FLG")?.as_i64().unwrap_or(0);
        Ok(Self {
            test_num:     fmt.format_named(record, "TEST_NUM")?,
            head_num:     fmt.format_named(record, "HEAD_NUM")?,
            site_num:     fmt.format_named(record, "SITE_NUM")?,
            test_text:    fmt.format_named(record, "TEST_TXT")?,
            result:       fmt.format_named(record, "RESULT")?,
            pass_or_fail: pass_or_fail(test_flag),
        })
    }
}

/// Read the head/site key of a PIR or PTR.
pub fn head_site(record: &Record) -> OutputResult<HeadSite> {
    let read = |name: &'static str| -> Result<u8, StdfError> {
        record.field(name)?.as_u8().ok_or(StdfError::NotAnInteger {
            record: record.rec_type,
            field:  name,
        })
    };
    Ok(HeadSite::new(read("HEAD_NUM")?, read("SITE_NUM")?))
}

/// The single row of a file-summary table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileSummaryRow {
    pub file_name:       String,
    pub start_timestamp: String,
    pub end_timestamp:   String,
    pub temperature:     String,
}

impl FileSummaryRow {
    /// Copy with the text columns wrapped in CSV quotes.
    pub(crate) fn quoted(&self) -> Self {
        Self {
            file_name:       quoted(&self.file_name),
            start_timestamp: self.start_timestamp.clone(),
            end_timestamp:   self.end_timestamp.clone(),
            temperature:     quoted(&self.temperature),
        }
    }

    pub fn fields(&self) -> [&str; 4] {
        [
            self.file_name.as_str(),
            self.start_timestamp.as_str(),
            self.end_timestamp.as_str(),
            self.temperature.as_str(),
        ]
    }
}
