//! `render_stream` — pushes a record sequence through a [`RecordSink`].

use std::borrow::Borrow;

use stdf_core::Record;
use tracing::debug;

use crate::{OutputResult, RecordSink};

/// Drive one rendering session: start, every record in order, end.
///
/// Stops at the first error; `on_stream_end` is not called in that case.
/// Returns the number of records delivered.
///
/// ```rust,ignore
/// let mut text = TextWriter::new(std::io::stdout(), &RenderConfig::default());
/// render_stream(&records, &mut text)?;
/// ```
pub fn render_stream<I, S>(records: I, sink: &mut S) -> OutputResult<usize>
where
    I:       IntoIterator,
    I::Item: Borrow<Record>,
    S:       RecordSink + ?Sized,
{
    debug!("record stream started");
    sink.on_stream_start()?;

    let mut count = 0usize;
    for record in records {
        sink.on_record(record.borrow())?;
        count += 1;
    }

    sink.on_stream_end()?;
    debug!(records = count, "record stream finished");
    Ok(count)
}
