//! `pupcal-core` — foundational types for the `pupcal` schedule generator.
//!
//! This crate is a dependency of every other `pupcal-*` crate.  It has no
//! `pupcal-*` dependencies and knows nothing about text or file formats; it
//! only answers questions about dates.
//!
//! # What lives here
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`config`]    | `ScheduleConfig`, `FeedingPlan`, `FactOrder`, `LeapDayPolicy` |
//! | [`rules`]     | walking minutes, weekly milestones, anniversaries          |
//! | [`rotation`]  | `FactRotation` (once-per-day fact index)                   |
//! | [`error`]     | `CoreError`, `CoreResult`                                  |

pub mod config;
pub mod error;
pub mod rotation;
pub mod rules;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{FactOrder, FeedingPlan, LeapDayPolicy, ScheduleConfig};
pub use error::{CoreError, CoreResult};
pub use rotation::FactRotation;
pub use rules::{
    age_in_days, age_in_weeks, is_anniversary, is_weekly_milestone, minutes_for_age_months,
    walking_minutes, years_elapsed,
};
