//! Cross-record memory for the correlating CSV renderers.
//!
//! Each piece of state has one `capture_*`/`assign` entry point, called when
//! the record kind that feeds it arrives, and read-only accessors used when a
//! later, unrelated record is emitted.  State lives exactly as long as the
//! renderer that owns it.

use stdf_core::{HeadSite, Record};
use tracing::{error, trace, warn};

use crate::escape::escape_attr;
use crate::format::FieldFormatter;
use crate::row::FileSummaryRow;
use crate::{OutputError, OutputResult};

#[cfg(feature = "fx-hash")]
type PartMap = rustc_hash::FxHashMap<HeadSite, u32>;
#[cfg(not(feature = "fx-hash"))]
type PartMap = std::collections::HashMap<HeadSite, u32>;

// ── SequenceLabel ─────────────────────────────────────────────────────────────

/// The `SEQ_NAME` of the most recent BPS, attribute-escaped.
#[derive(Debug, Default, Clone)]
pub struct SequenceLabel {
    current: Option<String>,
}

impl SequenceLabel {
    /// Remember the sequence name carried by `record`.
    ///
    /// Records whose type has no `SEQ_NAME` field leave the label untouched.
    pub fn capture(&mut self, record: &Record, fmt: &FieldFormatter) -> OutputResult<()> {
        if record.rec_type.position("SEQ_NAME").is_none() {
            return Ok(());
        }
        let label = escape_attr(&fmt.format_named(record, "SEQ_NAME")?);
        trace!(%label, "sequence label captured");
        self.current = Some(label);
        Ok(())
    }

    /// Current label; empty before the first capture.
    pub fn current(&self) -> &str {
        self.current.as_deref().unwrap_or("")
    }

    pub fn is_set(&self) -> bool {
        self.current.is_some()
    }
}

// ── PartTracker ───────────────────────────────────────────────────────────────

/// Sequential part numbers keyed by head/site.
///
/// Numbers start at 1 and only ever increase.  A second part on the same
/// head/site replaces that key's number with the next one.
#[derive(Debug, Clone)]
pub struct PartTracker {
    parts: PartMap,
    next:  u32,
}

impl Default for PartTracker {
    fn default() -> Self {
        Self { parts: PartMap::default(), next: 1 }
    }
}

impl PartTracker {
    /// Start a new part on `key` and return its number.
    pub fn assign(&mut self, key: HeadSite) -> u32 {
        let part = self.next;
        self.next += 1;
        self.parts.insert(key, part);
        trace!(%key, part, "part assigned");
        part
    }

    /// Part currently running on `key`.
    pub fn lookup(&self, key: HeadSite) -> OutputResult<u32> {
        match self.parts.get(&key) {
            Some(&part) => Ok(part),
            None => {
                error!(%key, "test result for head/site with no part record");
                Err(OutputError::UnresolvedPart(key))
            }
        }
    }

    /// Number of distinct head/site keys seen.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

// ── FileSummary ───────────────────────────────────────────────────────────────

/// File name, temperature and start/end times from the MIR and MRR.
#[derive(Debug, Default, Clone)]
pub struct FileSummary {
    file_name:   Option<String>,
    temperature: Option<String>,
    start:       Option<String>,
    end:         Option<String>,
}

impl FileSummary {
    /// Capture `USER_TXT` and `START_T` from a MIR.
    ///
    /// The temperature is the third `_`-separated segment of `USER_TXT`; when
    /// there is none it stays unset and a warning is logged.
    pub fn capture_header(&mut self, record: &Record, fmt: &FieldFormatter) -> OutputResult<()> {
        let user_text = fmt.format_named(record, "USER_TXT")?;
        self.temperature = temperature_token(&user_text).map(str::to_owned);
        if self.temperature.is_none() {
            warn!(user_text = %user_text, "no temperature found in USER_TXT");
        }
        self.start = Some(record.field("START_T")?.to_string());
        self.file_name = Some(user_text);
        Ok(())
    }

    /// Capture `FINISH_T` from an MRR.
    pub fn capture_trailer(&mut self, record: &Record) -> OutputResult<()> {
        self.end = Some(record.field("FINISH_T")?.to_string());
        Ok(())
    }

    /// File name; empty before the MIR.
    pub fn file_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or("")
    }

    pub fn temperature(&self) -> Option<&str> {
        self.temperature.as_deref()
    }

    /// The summary as it stands; unset values are empty.
    pub fn row(&self) -> FileSummaryRow {
        FileSummaryRow {
            file_name:       self.file_name().to_owned(),
            start_timestamp: self.start.clone().unwrap_or_default(),
            end_timestamp:   self.end.clone().unwrap_or_default(),
            temperature:     self.temperature.clone().unwrap_or_default(),
        }
    }
}

/// Third `_`-separated segment of `text`, if any.
pub fn temperature_token(text: &str) -> Option<&str> {
    text.split('_').nth(2)
}

// ── CorrelationState ──────────────────────────────────────────────────────────

/// Everything a correlating renderer remembers between records.
#[derive(Debug, Default, Clone)]
pub struct CorrelationState {
    pub sequence: SequenceLabel,
    pub parts:    PartTracker,
    pub file:     FileSummary,
}
