//! Record timestamps.
//!
//! STDF stores date-time fields as unsigned 32-bit Unix seconds.  They are
//! kept raw in the record and only turned into calendar text at render time,
//! in the local time zone of the rendering process.

use std::fmt;

use chrono::{Local, TimeZone};

/// Date-time pattern used by the delimited-text renderer.
pub const TEXT_DATE_PATTERN: &str = "%H:%M:%S %d-%b-%Y";

/// Date-time pattern used by the XML and CSV renderers.
pub const MARKUP_DATE_PATTERN: &str = "%H:%M:%ST%d-%b-%Y";

/// Seconds since the Unix epoch, as stored in a date-time field.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub u32);

impl Timestamp {
    /// Render in local time with a `strftime`-style `pattern`.
    ///
    /// Falls back to the raw seconds if the local zone cannot represent the
    /// instant unambiguously.
    pub fn format_local(self, pattern: &str) -> String {
        match Local.timestamp_opt(i64::from(self.0), 0).single() {
            Some(dt) => dt.format(pattern).to_string(),
            None => self.0.to_string(),
        }
    }
}

impl From<u32> for Timestamp {
    #[inline]
    fn from(secs: u32) -> Self {
        Timestamp(secs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
