//! CSV plumbing shared by the CSV renderers.
//!
//! Text columns (labels, test text, file name, temperature) are always quoted;
//! header names and numeric columns are written bare.  Quoting is decided per
//! column, so the writer itself never quotes.

use std::io::Write;

use csv::{QuoteStyle, Writer, WriterBuilder};

use crate::OutputResult;

pub(crate) fn csv_writer<W: Write>(out: W) -> Writer<W> {
    WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(out)
}

/// Wrap a text column in quotes, doubling any embedded quote.
pub(crate) fn quoted(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

pub(crate) fn write_header<W: Write>(out: &mut Writer<W>, header: &[&str]) -> OutputResult<()> {
    out.write_record(header)?;
    Ok(())
}

pub(crate) fn into_inner<W: Write>(out: Writer<W>) -> OutputResult<W> {
    out.into_inner().map_err(|e| e.into_error().into())
}
