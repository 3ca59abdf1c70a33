//! A complete `VCALENDAR` document.

use crate::{CRLF, CalendarEvent, UidCategory};

/// Ordered events wrapped in the calendar header and footer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarDocument {
    product_id:      String,
    product_version: String,
    namespace:       String,
    events:          Vec<CalendarEvent>,
}

impl CalendarDocument {
    pub fn new(
        product_id:      impl Into<String>,
        product_version: impl Into<String>,
        namespace:       impl Into<String>,
    ) -> Self {
        Self {
            product_id:      product_id.into(),
            product_version: product_version.into(),
            namespace:       namespace.into(),
            events:          Vec::new(),
        }
    }

    pub fn push(&mut self, event: CalendarEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Number of events in `category`.
    pub fn count(&self, category: UidCategory) -> usize {
        self.events.iter().filter(|e| e.category == category).count()
    }

    /// `PRODID` value.
    pub fn prodid(&self) -> String {
        format!("-//{}//{}//EN", self.product_id, self.product_version)
    }

    /// Render the whole document; every line, footer included, ends in CRLF.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(128 + self.events.len() * 320);
        let prodid = format!("PRODID:{}", self.prodid());
        for line in [
            "BEGIN:VCALENDAR",
            "VERSION:2.0",
            prodid.as_str(),
            "CALSCALE:GREGORIAN",
            "METHOD:PUBLISH",
        ] {
            out.push_str(line);
            out.push_str(CRLF);
        }
        for event in &self.events {
            event.write_block(&self.namespace, &mut out);
        }
        out.push_str("END:VCALENDAR");
        out.push_str(CRLF);
        out
    }
}
