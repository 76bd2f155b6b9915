//! `stdf-output` — renderers for decoded STDF record streams.
//!
//! Five renderers are provided, all implementing [`RecordSink`]:
//!
//! | Renderer                 | Output                                               |
//! |--------------------------|------------------------------------------------------|
//! | [`TextWriter`]           | tag and fields on one delimited line per record      |
//! | [`XmlWriter`]            | `<Stdf>` wrapping one element per record             |
//! | [`CsvWriter`]            | one row per test result, labelled with its sequence  |
//! | [`FileSummaryCsvWriter`] | one row per file: name, start/end, temperature       |
//! | [`DetailedCsvWriter`]    | result rows stamped with part numbers, plus summary  |
//!
//! The first three are stateless apart from the sequence label; the last two
//! correlate fields across record types through [`CorrelationState`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use stdf_output::{render_stream, DetailedCsvWriter};
//!
//! let mut writer = DetailedCsvWriter::new(results_file, summary_file);
//! render_stream(&records, &mut writer)?;
//! ```
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                    |
//! |-----------|-----------------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for the head/site part table.   |

mod csvio;
pub mod detailed;
pub mod driver;
pub mod error;
pub mod escape;
pub mod format;
pub mod row;
pub mod simple;
pub mod sink;
pub mod state;
pub mod summary;
pub mod text;
pub mod xml;

#[cfg(test)]
mod tests;

pub use detailed::DetailedCsvWriter;
pub use driver::render_stream;
pub use error::{OutputError, OutputResult};
pub use format::FieldFormatter;
pub use row::{FileSummaryRow, TestResultRow};
pub use simple::CsvWriter;
pub use sink::{NoopSink, RecordSink, SinkFanout};
pub use state::{CorrelationState, FileSummary, PartTracker, SequenceLabel};
pub use summary::FileSummaryCsvWriter;
pub use text::TextWriter;
pub use xml::XmlWriter;
