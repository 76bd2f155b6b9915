//! Decoded records and their types.

use std::fmt;
use std::str::FromStr;

use crate::schema::{self, FieldDescriptor};
use crate::{StdfError, StdfResult};

// ── RecordType ───────────────────────────────────────────────────────────────

/// Every STDF V4 record kind.
///
/// Dispatch in the renderers matches on this enum; the tag and element name
/// strings are output only.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordType {
    Far, Atr, Mir, Mrr, Pcr, Hbr, Sbr, Pmr, Pgr, Plr, Rdr, Sdr, Wir,
    Wrr, Wcr, Pir, Prr, Tsr, Ptr, Mpr, Ftr, Bps, Eps, Gdr, Dtr,
}

impl RecordType {
    pub const ALL: [RecordType; 25] = [
        RecordType::Far, RecordType::Atr, RecordType::Mir, RecordType::Mrr,
        RecordType::Pcr, RecordType::Hbr, RecordType::Sbr, RecordType::Pmr,
        RecordType::Pgr, RecordType::Plr, RecordType::Rdr, RecordType::Sdr,
        RecordType::Wir, RecordType::Wrr, RecordType::Wcr, RecordType::Pir,
        RecordType::Prr, RecordType::Tsr, RecordType::Ptr, RecordType::Mpr,
        RecordType::Ftr, RecordType::Bps, RecordType::Eps, RecordType::Gdr,
        RecordType::Dtr,
    ];

    /// Uppercase tag, e.g. `PTR`.
    pub fn tag(self) -> &'static str {
        match self {
            RecordType::Far => "FAR",
            RecordType::Atr => "ATR",
            RecordType::Mir => "MIR",
            RecordType::Mrr => "MRR",
            RecordType::Pcr => "PCR",
            RecordType::Hbr => "HBR",
            RecordType::Sbr => "SBR",
            RecordType::Pmr => "PMR",
            RecordType::Pgr => "PGR",
            RecordType::Plr => "PLR",
            RecordType::Rdr => "RDR",
            RecordType::Sdr => "SDR",
            RecordType::Wir => "WIR",
            RecordType::Wrr => "WRR",
            RecordType::Wcr => "WCR",
            RecordType::Pir => "PIR",
            RecordType::Prr => "PRR",
            RecordType::Tsr => "TSR",
            RecordType::Ptr => "PTR",
            RecordType::Mpr => "MPR",
            RecordType::Ftr => "FTR",
            RecordType::Bps => "BPS",
            RecordType::Eps => "EPS",
            RecordType::Gdr => "GDR",
            RecordType::Dtr => "DTR",
        }
    }

    /// Capitalised element name, e.g. `Ptr`.
    pub fn name(self) -> &'static str {
        match self {
            RecordType::Far => "Far",
            RecordType::Atr => "Atr",
            RecordType::Mir => "Mir",
            RecordType::Mrr => "Mrr",
            RecordType::Pcr => "Pcr",
            RecordType::Hbr => "Hbr",
            RecordType::Sbr => "Sbr",
            RecordType::Pmr => "Pmr",
            RecordType::Pgr => "Pgr",
            RecordType::Plr => "Plr",
            RecordType::Rdr => "Rdr",
            RecordType::Sdr => "Sdr",
            RecordType::Wir => "Wir",
            RecordType::Wrr => "Wrr",
            RecordType::Wcr => "Wcr",
            RecordType::Pir => "Pir",
            RecordType::Prr => "Prr",
            RecordType::Tsr => "Tsr",
            RecordType::Ptr => "Ptr",
            RecordType::Mpr => "Mpr",
            RecordType::Ftr => "Ftr",
            RecordType::Bps => "Bps",
            RecordType::Eps => "Eps",
            RecordType::Gdr => "Gdr",
            RecordType::Dtr => "Dtr",
        }
    }

    /// The schema's field list for this type.
    pub fn fields(self) -> &'static [FieldDescriptor] {
        match self {
            RecordType::Far => schema::FAR,
            RecordType::Atr => schema::ATR,
            RecordType::Mir => schema::MIR,
            RecordType::Mrr => schema::MRR,
            RecordType::Pcr => schema::PCR,
            RecordType::Hbr => schema::HBR,
            RecordType::Sbr => schema::SBR,
            RecordType::Pmr => schema::PMR,
            RecordType::Pgr => schema::PGR,
            RecordType::Plr => schema::PLR,
            RecordType::Rdr => schema::RDR,
            RecordType::Sdr => schema::SDR,
            RecordType::Wir => schema::WIR,
            RecordType::Wrr => schema::WRR,
            RecordType::Wcr => schema::WCR,
            RecordType::Pir => schema::PIR,
            RecordType::Prr => schema::PRR,
            RecordType::Tsr => schema::TSR,
            RecordType::Ptr => schema::PTR,
            RecordType::Mpr => schema::MPR,
            RecordType::Ftr => schema::FTR,
            RecordType::Bps => schema::BPS,
            RecordType::Eps => schema::EPS,
            RecordType::Gdr => schema::GDR,
            RecordType::Dtr => schema::DTR,
        }
    }

    /// GDR has no fixed layout: every value describes itself.
    #[inline]
    pub fn is_variadic(self) -> bool {
        self == RecordType::Gdr
    }

    /// MIR and MRR open and close a file and carry its timing metadata.
    #[inline]
    pub fn is_file_bound(self) -> bool {
        matches!(self, RecordType::Mir | RecordType::Mrr)
    }

    /// Index of the field called `name`, if this type has one.
    pub fn position(self, name: &str) -> Option<usize> {
        self.fields().iter().position(|f| f.name == name)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for RecordType {
    type Err = StdfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordType::ALL
            .into_iter()
            .find(|t| t.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| StdfError::UnknownRecordType(s.to_owned()))
    }
}

// ── FieldValue ───────────────────────────────────────────────────────────────

/// One decoded field value.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldValue {
    /// Absent / missing-data marker.
    #[default]
    Null,
    Unsigned(u64),
    Signed(i64),
    Real(f32),
    Double(f64),
    Text(String),
    /// `Bn` / `Dn` payload.
    Bytes(Vec<u8>),
    /// `k`-typed array.
    Array(Vec<FieldValue>),
}

impl FieldValue {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Integer reading of the value; `None` for non-integers and overflow.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            FieldValue::Unsigned(u) => i64::try_from(u).ok(),
            FieldValue::Signed(i) => Some(i),
            _ => None,
        }
    }

    /// Narrow an integer value to `u8` (head and site numbers).
    pub fn as_u8(&self) -> Option<u8> {
        self.as_i64().and_then(|v| u8::try_from(v).ok())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Unsigned(v) => write!(f, "{v}"),
            FieldValue::Signed(v) => write!(f, "{v}"),
            FieldValue::Real(v) => write!(f, "{v}"),
            FieldValue::Double(v) => write!(f, "{v}"),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Bytes(bytes) => {
                for (i, b) in bytes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{b}")?;
                }
                Ok(())
            }
            FieldValue::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

macro_rules! value_from {
    ($variant:ident($inner:ty) <= $($src:ty),*) => {
        $(
            impl From<$src> for FieldValue {
                #[inline]
                fn from(v: $src) -> Self {
                    FieldValue::$variant(<$inner>::from(v))
                }
            }
        )*
    };
}

value_from!(Unsigned(u64) <= u8, u16, u32, u64);
value_from!(Signed(i64) <= i8, i16, i32, i64);

impl From<f32> for FieldValue {
    fn from(v: f32) -> Self {
        FieldValue::Real(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Double(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(FieldValue::Null, Into::into)
    }
}

// ── Record ───────────────────────────────────────────────────────────────────

/// A decoded record: its type plus one value per schema field.
///
/// For the variadic type ([`RecordType::Gdr`]) `values` holds the generic
/// data items themselves and is not matched against the schema.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    pub rec_type: RecordType,
    pub values:   Vec<FieldValue>,
}

impl Record {
    pub fn new(rec_type: RecordType, values: Vec<FieldValue>) -> Self {
        Self { rec_type, values }
    }

    /// A record with every schema field set to [`FieldValue::Null`].
    pub fn empty(rec_type: RecordType) -> Self {
        let len = if rec_type.is_variadic() { 0 } else { rec_type.fields().len() };
        Self { rec_type, values: vec![FieldValue::Null; len] }
    }

    /// Builder-style [`set`][Self::set].
    pub fn with(mut self, name: &'static str, value: impl Into<FieldValue>) -> StdfResult<Self> {
        self.set(name, value)?;
        Ok(self)
    }

    /// Overwrite the value of the field called `name`.
    pub fn set(&mut self, name: &'static str, value: impl Into<FieldValue>) -> StdfResult<()> {
        let index = self.index_of(name)?;
        let len = self.values.len();
        let slot = self.values.get_mut(index).ok_or(StdfError::FieldIndex {
            record: self.rec_type,
            index,
            len,
        })?;
        *slot = value.into();
        Ok(())
    }

    #[inline]
    pub fn descriptors(&self) -> &'static [FieldDescriptor] {
        self.rec_type.fields()
    }

    /// Index of the field called `name`.
    pub fn index_of(&self, name: &'static str) -> StdfResult<usize> {
        self.rec_type.position(name).ok_or(StdfError::MissingField {
            record: self.rec_type,
            field:  name,
        })
    }

    /// Value at position `index`.
    pub fn value(&self, index: usize) -> StdfResult<&FieldValue> {
        self.values.get(index).ok_or(StdfError::FieldIndex {
            record: self.rec_type,
            index,
            len:    self.values.len(),
        })
    }

    /// Value of the field called `name`.
    pub fn field(&self, name: &'static str) -> StdfResult<&FieldValue> {
        self.value(self.index_of(name)?)
    }
}
