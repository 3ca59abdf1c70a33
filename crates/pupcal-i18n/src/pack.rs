//! Language-pack data: raw JSON shape and the resolved pack.
//!
//! # JSON format
//!
//! Both fields are optional.  `facts` entries may be plain strings or
//! objects with an optional source.
//!
//! ```json
//! {
//!   "strings": {
//!     "walk_summary": "{name} - Wandeling: {mins} min (x2)",
//!     "fact_source_default_label": "Rasvereniging"
//!   },
//!   "facts": [
//!     "Plain fact.",
//!     { "text": "Sourced fact.", "sourceLabel": "NVS", "sourceUrl": "https://example.org" }
//!   ]
//! }
//! ```
//!
//! `fact_source_default_label` / `fact_source_default_url` in `strings`
//! apply to entries of the same pack that carry no source of their own.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::warn;

use crate::facts::DEFAULT_FACTS;
use crate::{Message, MessageKey, Template};

pub const DEFAULT_SOURCE_LABEL_KEY: &str = "fact_source_default_label";
pub const DEFAULT_SOURCE_URL_KEY: &str = "fact_source_default_url";

// ── RawPack ───────────────────────────────────────────────────────────────────

/// A language pack exactly as read from JSON.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawPack {
    #[serde(default)]
    pub strings: BTreeMap<String, String>,

    /// Kept as raw values so one bad entry drops only itself.
    #[serde(default)]
    pub facts: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFact {
    Text(String),
    Entry {
        text:         String,
        #[serde(rename = "sourceLabel", default)]
        source_label: Option<String>,
        #[serde(rename = "sourceUrl", default)]
        source_url:   Option<String>,
    },
}

impl RawPack {
    /// Convert `facts` into entries, applying this pack's default source.
    pub fn fact_entries(&self, code: &str) -> Vec<FactEntry> {
        let default_label = self.strings.get(DEFAULT_SOURCE_LABEL_KEY);
        let default_url = self.strings.get(DEFAULT_SOURCE_URL_KEY);

        self.facts
            .iter()
            .enumerate()
            .filter_map(|(i, value)| match RawFact::deserialize(value) {
                Ok(RawFact::Text(text)) => Some(FactEntry {
                    text,
                    source_label: default_label.cloned(),
                    source_url:   default_url.cloned(),
                }),
                Ok(RawFact::Entry { text, source_label, source_url }) => Some(FactEntry {
                    text,
                    source_label: source_label.or_else(|| default_label.cloned()),
                    source_url:   source_url.or_else(|| default_url.cloned()),
                }),
                Err(e) => {
                    warn!(pack = code, index = i, error = %e, "dropping malformed fact entry");
                    None
                }
            })
            .collect()
    }
}

// ── FactEntry ─────────────────────────────────────────────────────────────────

/// One trivia fact with an optional attribution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FactEntry {
    pub text:         String,
    pub source_label: Option<String>,
    pub source_url:   Option<String>,
}

impl FactEntry {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), source_label: None, source_url: None }
    }

    /// Human-readable attribution: `label`, `label (url)`, or `url`.
    pub fn source_text(&self) -> Option<String> {
        match (&self.source_label, &self.source_url) {
            (Some(label), Some(url)) => Some(format!("{label} ({url})")),
            (Some(label), None) => Some(label.clone()),
            (None, Some(url)) => Some(url.clone()),
            (None, None) => None,
        }
    }
}

// ── LocalePack ────────────────────────────────────────────────────────────────

/// A fully resolved language pack.
///
/// Holds one validated template per [`MessageKey`] and a non-empty fact
/// list.  Immutable once built by the resolver.
#[derive(Clone, Debug)]
pub struct LocalePack {
    code:      String,
    templates: [Template; MessageKey::COUNT],
    facts:     Vec<FactEntry>,
}

impl LocalePack {
    /// The compiled-in English pack.
    pub fn english() -> Self {
        Self {
            code:      crate::BASE_LANG.to_owned(),
            templates: std::array::from_fn(|i| Template::builtin(MessageKey::ALL[i])),
            facts:     DEFAULT_FACTS.iter().map(|t| FactEntry::plain(*t)).collect(),
        }
    }

    /// Language code of the highest tier that contributed to this pack.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn facts(&self) -> &[FactEntry] {
        &self.facts
    }

    pub fn template(&self, key: MessageKey) -> &Template {
        &self.templates[key.index()]
    }

    /// Render `message` with this pack's template for its key.
    pub fn render(&self, message: &Message<'_>) -> String {
        self.template(message.key()).render(message)
    }

    pub(crate) fn set_code(&mut self, code: &str) {
        self.code = code.to_owned();
    }

    pub(crate) fn set_template(&mut self, template: Template) {
        let idx = template.key().index();
        self.templates[idx] = template;
    }

    /// Replace the fact list; an empty list is ignored.
    pub(crate) fn replace_facts(&mut self, facts: Vec<FactEntry>) -> bool {
        if facts.is_empty() {
            return false;
        }
        self.facts = facts;
        true
    }
}
