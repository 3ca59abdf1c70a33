//! `pupcal-ics` — calendar-file output for the pupcal generator.
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`escape`]   | `escape_text` (RFC 5545 TEXT escaping)                     |
//! | [`event`]    | `CalendarEvent`, `UidCategory`, `format_event`             |
//! | [`document`] | `CalendarDocument` (header, events, footer)                |
//! | [`writer`]   | `DocumentWriter` trait, `IcsWriter<W>`                     |
//! | [`error`]    | `IcsError`, `IcsResult`                                    |
//!
//! # Usage
//!
//! ```rust,ignore
//! use pupcal_ics::{CalendarDocument, DocumentWriter, IcsWriter};
//!
//! let mut doc = CalendarDocument::new("puppy-ics", "0.1.0", "stabyhoun-schedule");
//! doc.push(event);
//! let mut w = IcsWriter::create(Path::new("schedule.ics"))?;
//! w.write_document(&doc)?;
//! w.finish()?;
//! ```

pub mod document;
pub mod error;
pub mod escape;
pub mod event;
pub mod writer;


pub use document::CalendarDocument;
pub use error::{IcsError, IcsResult};
pub use escape::escape_text;
pub use event::{CalendarEvent, UidCategory, format_event};
pub use writer::{DocumentWriter, IcsWriter};

/// Line terminator required by RFC 5545.
pub const CRLF: &str = "\r\n";
