//! Course-record to iCalendar transformation engine.
//!
//! Two pure stages: [`normalize`] turns raw scraped course records into
//! [`event::NormalizedEvent`]s, and [`ics`] encodes them as an RFC 5545
//! calendar document. Nothing here performs I/O; reading records and
//! writing the .ics file belong to the caller.

pub mod error;
pub mod event;
pub mod ics;
pub mod normalize;
pub mod record;

pub use error::{ExportError, ExportResult};
