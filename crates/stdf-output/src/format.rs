//! Type-driven field formatting shared by every renderer.
//!
//! Rules, first match wins:
//!
//! 1. absent value → empty string
//! 2. variadic record (GDR) → every value, joined with the separator
//! 3. array type code → elements joined with `,`; `B1`/`N1` elements as two
//!    uppercase hex digits, anything else in decimal
//! 4. `*_T` field of MIR/MRR → local date-time text
//! 5. anything else → the value's plain text
//!
//! The encodings differ only in the rule-2 separator and the rule-4 pattern.

use stdf_core::time::{MARKUP_DATE_PATTERN, TEXT_DATE_PATTERN};
use stdf_core::{FieldDescriptor, FieldValue, Record, RecordType, StdfError, Timestamp, TypeCode};

use crate::OutputResult;

/// Turns one field of a record into display text.
#[derive(Clone, Debug)]
pub struct FieldFormatter {
    separator:    String,
    date_pattern: &'static str,
}

impl FieldFormatter {
    /// Formatter for the delimited-text encoding.
    pub fn text(delimiter: &str) -> Self {
        Self { separator: delimiter.to_owned(), date_pattern: TEXT_DATE_PATTERN }
    }

    /// Formatter for the XML and CSV encodings.
    pub fn markup() -> Self {
        Self { separator: ";".to_owned(), date_pattern: MARKUP_DATE_PATTERN }
    }

    /// Format field `index` of `record`.
    ///
    /// `index` is ignored for the variadic record type.
    pub fn format(&self, record: &Record, index: usize) -> OutputResult<String> {
        if record.rec_type.is_variadic() {
            return Ok(self.format_variadic(&record.values));
        }
        let descriptors = record.descriptors();
        let descriptor = descriptors.get(index).ok_or(StdfError::FieldIndex {
            record: record.rec_type,
            index,
            len:    descriptors.len(),
        })?;
        let value = record.value(index)?;
        Ok(self.format_value(record.rec_type, descriptor, value))
    }

    /// Format the field called `name`.
    pub fn format_named(&self, record: &Record, name: &'static str) -> OutputResult<String> {
        self.format(record, record.index_of(name)?)
    }

    /// Format one fixed-layout value given its descriptor.
    pub fn format_value(
        &self,
        rec_type:   RecordType,
        descriptor: &FieldDescriptor,
        value:      &FieldValue,
    ) -> String {
        if value.is_null() {
            return String::new();
        }
        if let Some(element) = descriptor.type_code.element() {
            return format_array(value, element);
        }
        if rec_type.is_file_bound() && descriptor.is_date_time() {
            if let Some(secs) = value.as_i64().and_then(|v| u32::try_from(v).ok()) {
                return Timestamp(secs).format_local(self.date_pattern);
            }
        }
        value.to_string()
    }

    /// Join self-describing values with this encoding's separator.
    pub fn format_variadic(&self, values: &[FieldValue]) -> String {
        values
            .iter()
            .map(FieldValue::to_string)
            .collect::<Vec<_>>()
            .join(&self.separator)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn format_array(value: &FieldValue, element: TypeCode) -> String {
    let hex = element.is_one_byte_numeric();
    match value {
        FieldValue::Array(items) => items
            .iter()
            .map(|item| format_element(item, hex))
            .collect::<Vec<_>>()
            .join(","),
        FieldValue::Bytes(bytes) => bytes
            .iter()
            .map(|b| format_element(&FieldValue::from(*b), hex))
            .collect::<Vec<_>>()
            .join(","),
        scalar => format_element(scalar, hex),
    }
}

fn format_element(item: &FieldValue, hex: bool) -> String {
    match item.as_i64() {
        Some(n) if hex => format!("{n:02X}"),
        _ => item.to_string(),
    }
}
