//! The `RecordSink` trait implemented by every renderer.

use stdf_core::Record;

use crate::OutputResult;

/// Lifecycle hooks invoked by [`render_stream`][crate::render_stream] (or any
/// other driver) for one rendering session.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Record types a sink does not handle must be
/// ignored, never reported as errors.
pub trait RecordSink {
    /// Called once before the first record.  Write headers or preambles here.
    fn on_stream_start(&mut self) -> OutputResult<()> {
        Ok(())
    }

    /// Called once per record, in arrival order.
    fn on_record(&mut self, _record: &Record) -> OutputResult<()> {
        Ok(())
    }

    /// Called once after the last record.  Write trailers and flush.
    fn on_stream_end(&mut self) -> OutputResult<()> {
        Ok(())
    }
}

impl<S: RecordSink + ?Sized> RecordSink for &mut S {
    fn on_stream_start(&mut self) -> OutputResult<()> {
        (**self).on_stream_start()
    }

    fn on_record(&mut self, record: &Record) -> OutputResult<()> {
        (**self).on_record(record)
    }

    fn on_stream_end(&mut self) -> OutputResult<()> {
        (**self).on_stream_end()
    }
}

impl<S: RecordSink + ?Sized> RecordSink for Box<S> {
    fn on_stream_start(&mut self) -> OutputResult<()> {
        (**self).on_stream_start()
    }

    fn on_record(&mut self, record: &Record) -> OutputResult<()> {
        (**self).on_record(record)
    }

    fn on_stream_end(&mut self) -> OutputResult<()> {
        (**self).on_stream_end()
    }
}

/// A [`RecordSink`] that does nothing.
pub struct NoopSink;

impl RecordSink for NoopSink {}

/// Forwards every hook to each inner sink, in insertion order.
///
/// Lets one pass over a record stream feed several renderers.  The first
/// error from any inner sink stops the hook and is returned.
#[derive(Default)]
pub struct SinkFanout<'a> {
    sinks: Vec<Box<dyn RecordSink + 'a>>,
}

impl<'a> SinkFanout<'a> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Add a sink.  Pass `&mut renderer` to keep ownership with the caller.
    pub fn push(&mut self, sink: impl RecordSink + 'a) -> &mut Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl RecordSink for SinkFanout<'_> {
    fn on_stream_start(&mut self) -> OutputResult<()> {
        self.sinks.iter_mut().try_for_each(|s| s.on_stream_start())
    }

    fn on_record(&mut self, record: &Record) -> OutputResult<()> {
        self.sinks.iter_mut().try_for_each(|s| s.on_record(record))
    }

    fn on_stream_end(&mut self) -> OutputResult<()> {
        self.sinks.iter_mut().try_for_each(|s| s.on_stream_end())
    }
}
