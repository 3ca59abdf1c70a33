//! Parsed message templates.
//!
//! A template is a sequence of literal text and `{placeholder}` slots.
//! `{{` and `}}` produce literal braces.  Parsing validates the slots
//! against the key's allowed and required sets, so once a [`Template`]
//! exists, rendering it with the matching [`Message`] cannot fail.

use crate::{I18nError, I18nResult, Message, MessageKey, Placeholder};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Text(String),
    Slot(Placeholder),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    key:      MessageKey,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse `text` as the template for `key`.
    pub fn parse(key: MessageKey, text: &str) -> I18nResult<Self> {
        let fail = |reason: String| I18nError::Template { key: key.name(), reason };

        let segments = lex(text).map_err(fail)?;

        for seg in &segments {
            if let Segment::Slot(slot) = seg {
                if !key.allowed().contains(slot) {
                    return Err(fail(format!("placeholder {slot} is not available here")));
                }
            }
        }
        for required in key.required() {
            if !segments.contains(&Segment::Slot(*required)) {
                return Err(fail(format!("missing required placeholder {required}")));
            }
        }

        Ok(Self { key, segments })
    }

    /// The compiled-in English template for `key`.
    pub fn builtin(key: MessageKey) -> Self {
        Self::parse(key, key.default_text()).unwrap_or_else(|_| Self {
            key,
            segments: vec![Segment::Text(key.default_text().to_owned())],
        })
    }

    pub fn key(&self) -> MessageKey {
        self.key
    }

    /// Placeholders referenced by this template, in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = Placeholder> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Slot(p) => Some(*p),
            Segment::Text(_) => None,
        })
    }

    /// Substitute `message`'s arguments into the template.
    ///
    /// A slot the message does not carry renders as its literal `{name}`;
    /// this only happens when a template is rendered with another key's
    /// message.
    pub fn render(&self, message: &Message<'_>) -> String {
        let mut out = String::new();
        for seg in &self.segments {
            match seg {
                Segment::Text(t) => out.push_str(t),
                Segment::Slot(p) => match message.arg(*p) {
                    Some(v) => out.push_str(&v),
                    None => out.push_str(&p.to_string()),
                },
            }
        }
        out
    }
}

fn lex(text: &str) -> Result<Vec<Segment>, String> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                literal.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                literal.push('}');
            }
            '{' => {
                let mut ident = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(ch) => ident.push(ch),
                        None => return Err(format!("unclosed '{{' before {ident:?}")),
                    }
                }
                let slot = Placeholder::from_name(&ident)
                    .ok_or_else(|| format!("unknown placeholder {{{ident}}}"))?;
                if !literal.is_empty() {
                    segments.push(Segment::Text(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Slot(slot));
            }
            '}' => return Err("unmatched '}'".to_owned()),
            _ => literal.push(c),
        }
    }
    if !literal.is_empty() {
        segments.push(Segment::Text(literal));
    }
    Ok(segments)
}
