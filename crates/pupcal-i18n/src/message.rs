//! Message keys, placeholders, and typed message arguments.
//!
//! Every message the generator renders is a [`MessageKey`].  A key knows:
//!
//! - its JSON name in a language pack (`"walk_summary"`),
//! - its compiled-in English text,
//! - which placeholders a template for it may use (`allowed`),
//! - which placeholders a template for it must use (`required`).
//!
//! [`Message`] pairs a key with its argument values, so a call site cannot
//! forget an argument or pass one the key does not take.

use std::fmt;

// ── Placeholder ───────────────────────────────────────────────────────────────

/// A named `{slot}` inside a template.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Name,
    Mins,
    Fact,
    Source,
    Weeks,
    N,
    Grams,
    Meal,
    Meals,
    Daily,
    Filename,
}

impl Placeholder {
    pub fn from_name(s: &str) -> Option<Self> {
        Some(match s {
            "name" => Self::Name,
            "mins" => Self::Mins,
            "fact" => Self::Fact,
            "source" => Self::Source,
            "weeks" => Self::Weeks,
            "n" => Self::N,
            "grams" => Self::Grams,
            "meal" => Self::Meal,
            "meals" => Self::Meals,
            "daily" => Self::Daily,
            "filename" => Self::Filename,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Mins => "mins",
            Self::Fact => "fact",
            Self::Source => "source",
            Self::Weeks => "weeks",
            Self::N => "n",
            Self::Grams => "grams",
            Self::Meal => "meal",
            Self::Meals => "meals",
            Self::Daily => "daily",
            Self::Filename => "filename",
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.as_str())
    }
}

// ── MessageKey ────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MessageKey {
    BirthSummary,
    BirthDesc,
    WalkSummary,
    WalkRule,
    TodaysFact,
    Source,
    FactSource,
    AgeSummary,
    AgeDesc,
    BirthdaySummaryFirst,
    BirthdaySummaryNth,
    BirthdayDesc,
    FeedSummary,
    FeedDesc,
    Success,
}

impl MessageKey {
    pub const COUNT: usize = 15;

    /// Every key, in discriminant order.
    pub const ALL: [MessageKey; Self::COUNT] = [
        Self::BirthSummary,
        Self::BirthDesc,
        Self::WalkSummary,
        Self::WalkRule,
        Self::TodaysFact,
        Self::Source,
        Self::FactSource,
        Self::AgeSummary,
        Self::AgeDesc,
        Self::BirthdaySummaryFirst,
        Self::BirthdaySummaryNth,
        Self::BirthdayDesc,
        Self::FeedSummary,
        Self::FeedDesc,
        Self::Success,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Key name used in language-pack JSON.
    pub fn name(self) -> &'static str {
        match self {
            Self::BirthSummary => "birth_summary",
            Self::BirthDesc => "birth_desc",
            Self::WalkSummary => "walk_summary",
            Self::WalkRule => "walk_rule",
            Self::TodaysFact => "todays_fact",
            Self::Source => "source",
            Self::FactSource => "fact_source",
            Self::AgeSummary => "age_summary",
            Self::AgeDesc => "age_desc",
            Self::BirthdaySummaryFirst => "birthday_summary_1",
            Self::BirthdaySummaryNth => "birthday_summary_n",
            Self::BirthdayDesc => "birthday_desc",
            Self::FeedSummary => "feed_summary",
            Self::FeedDesc => "feed_desc",
            Self::Success => "success",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == s)
    }

    /// Compiled-in English text.
    pub fn default_text(self) -> &'static str {
        match self {
            Self::BirthSummary => "{name} was born!",
            Self::BirthDesc => "{name} the Stabyhoun was born on this day.",
            Self::WalkSummary => "{name} - Walk: {mins} mins (x2)",
            Self::WalkRule => "Rule: {mins} minutes per walk, twice a day.",
            Self::TodaysFact => "Today's fact: {fact}",
            Self::Source => "Source: 5-minute rule (Puppy Culture/Kennel Clubs).",
            Self::FactSource => "Fact source: {source}",
            Self::AgeSummary => "{name} is {weeks} Weeks Old Today!",
            Self::AgeDesc => "{name} the Stabyhoun is now {weeks} weeks old.",
            Self::BirthdaySummaryFirst => "{name}'s 1st Birthday!",
            Self::BirthdaySummaryNth => "{name}'s {n}th Birthday!",
            Self::BirthdayDesc => "Happy birthday to {name}!",
            Self::FeedSummary => "{name} - Feeding ({grams}g)",
            Self::FeedDesc => "Meal {meal}/{meals}, ~{grams}g. Daily total: {daily}g.",
            Self::Success => "Success! '{filename}' has been created.",
        }
    }

    /// Placeholders a template for this key may reference.
    pub fn allowed(self) -> &'static [Placeholder] {
        use Placeholder as P;
        match self {
            Self::BirthSummary | Self::BirthDesc => &[P::Name],
            Self::WalkSummary => &[P::Name, P::Mins],
            Self::WalkRule => &[P::Mins],
            Self::TodaysFact => &[P::Fact],
            Self::Source => &[],
            Self::FactSource => &[P::Source],
            Self::AgeSummary | Self::AgeDesc => &[P::Name, P::Weeks],
            Self::BirthdaySummaryFirst | Self::BirthdayDesc => &[P::Name],
            Self::BirthdaySummaryNth => &[P::Name, P::N],
            Self::FeedSummary => &[P::Name, P::Grams],
            Self::FeedDesc => &[P::Meal, P::Meals, P::Grams, P::Daily],
            Self::Success => &[P::Filename],
        }
    }

    /// Placeholders a template for this key must reference.
    ///
    /// These carry the value the message exists to convey; a translation
    /// that drops one would silently lose information.
    pub fn required(self) -> &'static [Placeholder] {
        use Placeholder as P;
        match self {
            Self::WalkSummary | Self::WalkRule => &[P::Mins],
            Self::TodaysFact => &[P::Fact],
            Self::FactSource => &[P::Source],
            Self::AgeSummary | Self::AgeDesc => &[P::Weeks],
            Self::BirthdaySummaryNth => &[P::N],
            Self::FeedSummary | Self::FeedDesc => &[P::Grams],
            Self::Success => &[P::Filename],
            _ => &[],
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Message ───────────────────────────────────────────────────────────────────

/// A message key together with the values for every placeholder it allows.
#[derive(Clone, Debug)]
pub enum Message<'a> {
    BirthSummary { name: &'a str },
    BirthDesc { name: &'a str },
    WalkSummary { name: &'a str, mins: u32 },
    WalkRule { mins: u32 },
    TodaysFact { fact: &'a str },
    Source,
    FactSource { source: &'a str },
    AgeSummary { name: &'a str, weeks: i64 },
    AgeDesc { name: &'a str, weeks: i64 },
    BirthdaySummaryFirst { name: &'a str },
    BirthdaySummaryNth { name: &'a str, n: i64 },
    BirthdayDesc { name: &'a str },
    FeedSummary { name: &'a str, grams: i64 },
    FeedDesc { meal: u32, meals: u32, grams: i64, daily: i64 },
    Success { filename: &'a str },
}

impl Message<'_> {
    pub fn key(&self) -> MessageKey {
        match self {
            Self::BirthSummary { .. } => MessageKey::BirthSummary,
            Self::BirthDesc { .. } => MessageKey::BirthDesc,
            Self::WalkSummary { .. } => MessageKey::WalkSummary,
            Self::WalkRule { .. } => MessageKey::WalkRule,
            Self::TodaysFact { .. } => MessageKey::TodaysFact,
            Self::Source => MessageKey::Source,
            Self::FactSource { .. } => MessageKey::FactSource,
            Self::AgeSummary { .. } => MessageKey::AgeSummary,
            Self::AgeDesc { .. } => MessageKey::AgeDesc,
            Self::BirthdaySummaryFirst { .. } => MessageKey::BirthdaySummaryFirst,
            Self::BirthdaySummaryNth { .. } => MessageKey::BirthdaySummaryNth,
            Self::BirthdayDesc { .. } => MessageKey::BirthdayDesc,
            Self::FeedSummary { .. } => MessageKey::FeedSummary,
            Self::FeedDesc { .. } => MessageKey::FeedDesc,
            Self::Success { .. } => MessageKey::Success,
        }
    }

    /// Value for `slot`, or `None` when this message does not carry it.
    pub fn arg(&self, slot: Placeholder) -> Option<String> {
        use Placeholder as P;
        let value = match (self, slot) {
            (
                Self::BirthSummary { name }
                | Self::BirthDesc { name }
                | Self::WalkSummary { name, .. }
                | Self::AgeSummary { name, .. }
                | Self::AgeDesc { name, .. }
                | Self::BirthdaySummaryFirst { name }
                | Self::BirthdaySummaryNth { name, .. }
                | Self::BirthdayDesc { name }
                | Self::FeedSummary { name, .. },
                P::Name,
            ) => (*name).to_owned(),
            (Self::WalkSummary { mins, .. } | Self::WalkRule { mins }, P::Mins) => mins.to_string(),
            (Self::TodaysFact { fact }, P::Fact) => (*fact).to_owned(),
            (Self::FactSource { source }, P::Source) => (*source).to_owned(),
            (Self::AgeSummary { weeks, .. } | Self::AgeDesc { weeks, .. }, P::Weeks) => {
                weeks.to_string()
            }
            (Self::BirthdaySummaryNth { n, .. }, P::N) => n.to_string(),
            (Self::FeedSummary { grams, .. } | Self::FeedDesc { grams, .. }, P::Grams) => {
                grams.to_string()
            }
            (Self::FeedDesc { meal, .. }, P::Meal) => meal.to_string(),
            (Self::FeedDesc { meals, .. }, P::Meals) => meals.to_string(),
            (Self::FeedDesc { daily, .. }, P::Daily) => daily.to_string(),
            (Self::Success { filename }, P::Filename) => (*filename).to_owned(),
            _ => return None,
        };
        Some(value)
    }
}
