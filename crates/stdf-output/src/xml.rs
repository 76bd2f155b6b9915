//! XML renderer: one self-closing element per record inside a root element.
//!
//! ```text
//! <Stdf>
//! <Far CPU_TYPE="2" STDF_VER="4"/>
//! </Stdf>
//! ```

use std::io::Write;

use stdf_core::{Record, RenderConfig};

use crate::escape::quote_attr;
use crate::format::FieldFormatter;
use crate::sink::RecordSink;
use crate::OutputResult;

/// Attribute name used for the joined values of a variadic record.
pub const VARIADIC_ATTR: &str = "GEN_DATA";

/// Writes records as XML elements named after the record type.
pub struct XmlWriter<W: Write> {
    out:  W,
    root: String,
    fmt:  FieldFormatter,
}

impl<W: Write> XmlWriter<W> {
    pub fn new(out: W, config: &RenderConfig) -> Self {
        Self {
            out,
            root: config.root_element.clone(),
            fmt:  FieldFormatter::markup(),
        }
    }

    /// Render one record to a self-closing element, without the newline.
    pub fn element(&self, record: &Record) -> OutputResult<String> {
        let mut element = format!("<{}", record.rec_type.name());
        if record.rec_type.is_variadic() {
            let value = self.fmt.format(record, 0)?;
            element.push_str(&format!(" {VARIADIC_ATTR}={}", quote_attr(&value)));
        } else {
            for (i, field) in record.descriptors().iter().enumerate() {
                let value = self.fmt.format(record, i)?;
                element.push_str(&format!(" {}={}", field.name, quote_attr(&value)));
            }
        }
        element.push_str("/>");
        Ok(element)
    }

    /// Flush and hand back the destination.
    pub fn into_inner(mut self) -> OutputResult<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> RecordSink for XmlWriter<W> {
    fn on_stream_start(&mut self) -> OutputResult<()> {
        writeln!(self.out, "<{}>", self.root)?;
        Ok(())
    }

    fn on_record(&mut self, record: &Record) -> OutputResult<()> {
        let element = self.element(record)?;
        writeln!(self.out, "{element}")?;
        Ok(())
    }

    fn on_stream_end(&mut self) -> OutputResult<()> {
        writeln!(self.out, "</{}>", self.root)?;
        self.out.flush()?;
        Ok(())
    }
}
