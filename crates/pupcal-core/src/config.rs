//! Schedule configuration.
//!
//! Every value the generator depends on lives in [`ScheduleConfig`], which is
//! passed explicitly into the generator.  [`ScheduleConfig::default`]
//! reproduces the stock schedule; a TOML file may override any subset of
//! fields:
//!
//! ```toml
//! name         = "Fimme"
//! birth_date   = "2025-12-26"
//! arrival_date = "2026-02-21"
//! end_date     = "2026-12-25"
//! leap_day     = "feb28"
//! fact_order   = { shuffled = { seed = 7 } }
//!
//! [feeding]
//! meals       = 3
//! grams_start = 200
//! grams_end   = 280
//! ```

use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

// ── Defaults ──────────────────────────────────────────────────────────────────

pub const DEFAULT_NAME: &str = "Fimme";
pub const DEFAULT_UID_NAMESPACE: &str = "stabyhoun-schedule";
pub const DEFAULT_PRODUCT_ID: &str = "puppy-ics";
pub const DEFAULT_OUTPUT: &str = "stabyhoun_puppy_schedule.ics";

pub const DEFAULT_BIRTH_DATE: NaiveDate = ymd(2025, 12, 26);
pub const DEFAULT_ARRIVAL_DATE: NaiveDate = ymd(2026, 2, 21);

/// The stock schedule runs for 52 weeks after birth.
pub const DEFAULT_SPAN_WEEKS: i64 = 52;

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(d) => d,
        None => panic!("invalid default date"),
    }
}

// ── Policy enums ──────────────────────────────────────────────────────────────

/// Which date counts as the anniversary of a Feb-29 birth in a non-leap year.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeapDayPolicy {
    /// Celebrate on Feb 28.
    #[default]
    Feb28,
    /// Celebrate on Mar 1.
    Mar1,
    /// No anniversary that year.
    Skip,
}

/// Order in which the fact list is walked by the daily rotation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactOrder {
    /// `facts[(N - 1) mod len]` on day `N`.
    #[default]
    Sequential,
    /// A fixed permutation drawn once from `seed`, then walked like `Sequential`.
    Shuffled { seed: u64 },
}

/// Optional daily feeding reminders.
///
/// Daily grams are interpolated linearly from `grams_start` on the arrival
/// date to `grams_end` on the end date and split evenly over `meals`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedingPlan {
    pub meals:       u8,
    pub grams_start: u32,
    pub grams_end:   u32,
}

impl Default for FeedingPlan {
    fn default() -> Self {
        Self { meals: 3, grams_start: 200, grams_end: 280 }
    }
}

impl FeedingPlan {
    /// Daily grams for `day_index` (0 = arrival) in a range of `total_days`.
    pub fn daily_grams(&self, day_index: i64, total_days: i64) -> f64 {
        let t = if total_days <= 0 { 1.0 } else { day_index as f64 / total_days as f64 };
        let start = f64::from(self.grams_start);
        let end = f64::from(self.grams_end);
        start + t * (end - start)
    }
}

// ── ScheduleConfig ────────────────────────────────────────────────────────────

/// Everything the generator needs to know about one schedule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Display name interpolated into every message.
    pub name: String,

    /// Date of the single birth event and the origin of all age arithmetic.
    pub birth_date: NaiveDate,

    /// First day with a walk event.
    pub arrival_date: NaiveDate,

    /// Last day with a walk event (inclusive).
    pub end_date: NaiveDate,

    /// Emit anniversary events.
    pub birthdays: bool,

    pub leap_day: LeapDayPolicy,

    pub fact_order: FactOrder,

    pub feeding: Option<FeedingPlan>,

    /// Right-hand side of every event UID (`{date}-{suffix}@{uid_namespace}`).
    pub uid_namespace: String,

    /// Product identifier embedded in `PRODID`.
    pub product_id: String,

    /// Version string embedded in `PRODID`.
    pub product_version: String,

    /// Output file path.
    pub output: PathBuf,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            name:            DEFAULT_NAME.to_owned(),
            birth_date:      DEFAULT_BIRTH_DATE,
            arrival_date:    DEFAULT_ARRIVAL_DATE,
            end_date:        DEFAULT_BIRTH_DATE + Duration::weeks(DEFAULT_SPAN_WEEKS),
            birthdays:       true,
            leap_day:        LeapDayPolicy::default(),
            fact_order:      FactOrder::default(),
            feeding:         None,
            uid_namespace:   DEFAULT_UID_NAMESPACE.to_owned(),
            product_id:      DEFAULT_PRODUCT_ID.to_owned(),
            product_version: env!("CARGO_PKG_VERSION").to_owned(),
            output:          PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl ScheduleConfig {
    /// Load and validate a TOML configuration file.
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Parse and validate a TOML document.  Absent fields take their defaults.
    pub fn from_toml_str(text: &str) -> CoreResult<Self> {
        let config: ScheduleConfig =
            toml::from_str(text).map_err(|e| CoreError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field invariants.
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Config("name must not be empty".into()));
        }
        if self.arrival_date < self.birth_date {
            return Err(CoreError::Config(format!(
                "arrival_date {} is before birth_date {}",
                self.arrival_date, self.birth_date
            )));
        }
        if self.end_date < self.arrival_date {
            return Err(CoreError::Config(format!(
                "end_date {} is before arrival_date {}",
                self.end_date, self.arrival_date
            )));
        }
        if self.uid_namespace.trim().is_empty() {
            return Err(CoreError::Config("uid_namespace must not be empty".into()));
        }
        if let Some(feeding) = &self.feeding {
            if feeding.meals == 0 {
                return Err(CoreError::Config("feeding.meals must be at least 1".into()));
            }
        }
        Ok(())
    }

    /// Iterate every date from arrival through end, inclusive.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end_date;
        self.arrival_date.iter_days().take_while(move |d| *d <= end)
    }

    /// Number of days in the walk range (inclusive of both ends).
    pub fn day_count(&self) -> i64 {
        (self.end_date - self.arrival_date).num_days() + 1
    }
}
