//! All-day calendar events.
//!
//! # Block layout
//!
//! ```text
//! BEGIN:VEVENT
//! DTSTART;VALUE=DATE:20260221
//! DTEND;VALUE=DATE:20260222          ← exclusive end (start + 1 day)
//! SUMMARY:…
//! DESCRIPTION:…
//! COMMENT:…                          ← only when an annotation is set
//! URL:…                              ← only when a URL is set
//! UID:20260221-walk@stabyhoun-schedule
//! STATUS:CONFIRMED
//! TRANSP:TRANSPARENT
//! END:VEVENT
//! ```
//!
//! The UID depends only on the date, the category, and the namespace, so
//! regenerating a schedule yields the same identifiers and calendar clients
//! update events in place on re-import.

use std::fmt;

use chrono::{Days, NaiveDate};

use crate::{CRLF, escape_text};

const DATE_FORMAT: &str = "%Y%m%d";

/// The category part of an event UID.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UidCategory {
    Birth,
    Walk,
    Age,
    Birthday,
    /// Meal `m` (0-based) of a feeding day.
    Feed(u8),
}

impl fmt::Display for UidCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Birth => f.write_str("birth"),
            Self::Walk => f.write_str("walk"),
            Self::Age => f.write_str("age"),
            Self::Birthday => f.write_str("birthday"),
            Self::Feed(m) => write!(f, "feed-{m}"),
        }
    }
}

/// One all-day event.  Text fields hold unescaped text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarEvent {
    pub date:        NaiveDate,
    pub summary:     String,
    pub description: String,
    pub annotation:  Option<String>,
    pub url:         Option<String>,
    pub category:    UidCategory,
}

impl CalendarEvent {
    pub fn new(
        date:        NaiveDate,
        category:    UidCategory,
        summary:     impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            summary: summary.into(),
            description: description.into(),
            annotation: None,
            url: None,
            category,
        }
    }

    /// Attach a `COMMENT` annotation.
    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    /// Attach a `URL`.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// `{yyyymmdd}-{category}@{namespace}`.
    pub fn uid(&self, namespace: &str) -> String {
        format!("{}-{}@{}", self.date.format(DATE_FORMAT), self.category, namespace)
    }

    /// Append this event's CRLF-terminated block to `out`.
    pub fn write_block(&self, namespace: &str, out: &mut String) {
        let start = self.date.format(DATE_FORMAT).to_string();
        let end = self
            .date
            .checked_add_days(Days::new(1))
            .unwrap_or(NaiveDate::MAX)
            .format(DATE_FORMAT)
            .to_string();

        line(out, "BEGIN:VEVENT", "");
        line(out, "DTSTART;VALUE=DATE:", &start);
        line(out, "DTEND;VALUE=DATE:", &end);
        line(out, "SUMMARY:", &escape_text(&self.summary));
        line(out, "DESCRIPTION:", &escape_text(&self.description));
        if let Some(annotation) = &self.annotation {
            line(out, "COMMENT:", &escape_text(annotation));
        }
        if let Some(url) = &self.url {
            line(out, "URL:", &escape_text(url));
        }
        line(out, "UID:", &self.uid(namespace));
        line(out, "STATUS:CONFIRMED", "");
        line(out, "TRANSP:TRANSPARENT", "");
        line(out, "END:VEVENT", "");
    }
}

fn line(out: &mut String, name: &str, value: &str) {
    out.push_str(name);
    out.push_str(value);
    out.push_str(CRLF);
}

/// Render one event as a self-contained block.
pub fn format_event(event: &CalendarEvent, namespace: &str) -> String {
    let mut out = String::with_capacity(256);
    event.write_block(namespace, &mut out);
    out
}
