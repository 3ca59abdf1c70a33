//! Summary of a completed generation run.

use std::fmt;
use std::path::PathBuf;

use pupcal_ics::{CalendarDocument, UidCategory};

/// Events emitted per category.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EventCounts {
    pub birth:    usize,
    pub walk:     usize,
    pub age:      usize,
    pub birthday: usize,
    pub feed:     usize,
}

impl EventCounts {
    pub fn of(doc: &CalendarDocument) -> Self {
        let mut counts = Self::default();
        for event in doc.events() {
            match event.category {
                UidCategory::Birth => counts.birth += 1,
                UidCategory::Walk => counts.walk += 1,
                UidCategory::Age => counts.age += 1,
                UidCategory::Birthday => counts.birthday += 1,
                UidCategory::Feed(_) => counts.feed += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.birth + self.walk + self.age + self.birthday + self.feed
    }
}

impl fmt::Display for EventCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} events (birth={} walk={} age={} birthday={} feed={})",
            self.total(),
            self.birth,
            self.walk,
            self.age,
            self.birthday,
            self.feed
        )
    }
}

/// What [`generate`](crate::generate) produced.
#[derive(Clone, Debug)]
pub struct GenerationReport {
    pub output:   PathBuf,
    /// Language code of the pack actually used.
    pub language: String,
    pub counts:   EventCounts,
    /// Localized success message naming the output file.
    pub message:  String,
}
