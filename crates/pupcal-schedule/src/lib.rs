//! `pupcal-schedule` — builds the calendar document for one schedule.
//!
//! # Day loop (summary)
//!
//! ```text
//! birth event
//! for date in arrival..=end:
//!     fact  = rotation.next()            // exactly once per day
//!     walk event (annotation = fact)
//!     if Monday:       age-in-weeks event
//!     if anniversary:  birthday event
//!     if feeding:      one event per meal
//! ```
//!
//! [`ScheduleGenerator`] is pure (config + pack → document).  [`generate`]
//! adds language resolution and file output on top.

pub mod error;
pub mod generator;
pub mod report;

#[cfg(test)]
mod tests;

pub use error::{ScheduleError, ScheduleResult};
pub use generator::{ScheduleGenerator, generate, write_document};
pub use report::{EventCounts, GenerationReport};
