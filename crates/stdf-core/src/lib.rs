//! `stdf-core` — the record model shared by every `stdf-*` crate.
//!
//! Records arrive here already decoded.  This crate only describes them: which
//! kind of record it is, what its fields are called, and which type code the
//! schema assigns to each field.  Rendering lives in `stdf-output`.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`record`]      | `RecordType`, `Record`, `FieldValue`                  |
//! | [`schema`]      | `FieldDescriptor`, `TypeCode`, the STDF V4 table      |
//! | [`ids`]         | `HeadSite` correlation key                            |
//! | [`time`]        | `Timestamp` and the local date-time patterns          |
//! | [`config`]      | `RenderConfig`                                        |
//! | [`error`]       | `StdfError`, `StdfResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the public data types.   |

pub mod config;
pub mod error;
pub mod ids;
pub mod record;
pub mod schema;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::RenderConfig;
pub use error::{StdfError, StdfResult};
pub use ids::HeadSite;
pub use record::{FieldValue, Record, RecordType};
pub use schema::{FieldDescriptor, TypeCode};
pub use time::Timestamp;
