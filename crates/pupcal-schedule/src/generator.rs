//! Schedule generation.

use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info};

use pupcal_core::{
    FactRotation, FeedingPlan, ScheduleConfig, age_in_weeks, is_anniversary, is_weekly_milestone,
    walking_minutes, years_elapsed,
};
use pupcal_i18n::{FactEntry, LocalePack, Message, PackSource, resolve};
use pupcal_ics::{CalendarDocument, CalendarEvent, DocumentWriter, IcsWriter, UidCategory};

use crate::{EventCounts, GenerationReport, ScheduleResult};

/// Separator between paragraphs of a walk description.
const PARAGRAPH: &str = "\n\n";

/// Builds the calendar document for one validated config and language pack.
pub struct ScheduleGenerator<'a> {
    config: &'a ScheduleConfig,
    pack:   &'a LocalePack,
}

impl<'a> ScheduleGenerator<'a> {
    /// Validate `config` and pair it with `pack`.
    pub fn new(config: &'a ScheduleConfig, pack: &'a LocalePack) -> ScheduleResult<Self> {
        config.validate()?;
        Ok(Self { config, pack })
    }

    /// Produce every event, in emission order.
    pub fn build(&self) -> CalendarDocument {
        let cfg = self.config;
        let mut doc =
            CalendarDocument::new(&cfg.product_id, &cfg.product_version, &cfg.uid_namespace);

        doc.push(self.birth_event());

        let facts = self.pack.facts();
        let mut rotation = FactRotation::new(facts.len(), cfg.fact_order);

        for date in cfg.days() {
            let fact = rotation.next_index().and_then(|i| facts.get(i));
            doc.push(self.walk_event(date, fact));

            if is_weekly_milestone(date) {
                doc.push(self.age_event(date));
            }

            if cfg.birthdays && is_anniversary(date, cfg.birth_date, cfg.leap_day) {
                doc.push(self.birthday_event(date));
            }

            if let Some(plan) = &cfg.feeding {
                for event in self.feeding_events(date, plan) {
                    doc.push(event);
                }
            }
        }

        debug!(days = rotation.days_advanced(), events = doc.events().len(), "schedule built");
        doc
    }

    fn render(&self, message: Message<'_>) -> String {
        self.pack.render(&message)
    }

    fn birth_event(&self) -> CalendarEvent {
        let name = self.config.name.as_str();
        let desc = self.render(Message::BirthDesc { name });
        CalendarEvent::new(
            self.config.birth_date,
            UidCategory::Birth,
            self.render(Message::BirthSummary { name }),
            desc.clone(),
        )
        .with_annotation(desc)
    }

    fn walk_event(&self, date: NaiveDate, fact: Option<&FactEntry>) -> CalendarEvent {
        let name = self.config.name.as_str();
        let mins = walking_minutes(date, self.config.birth_date);
        let fact_text = fact.map_or("", |f| f.text.as_str());

        let mut desc = self.render(Message::WalkRule { mins });
        desc.push_str(PARAGRAPH);
        desc.push_str(&self.render(Message::TodaysFact { fact: fact_text }));
        desc.push_str(PARAGRAPH);
        desc.push_str(&self.render(Message::Source));
        if let Some(source) = fact.and_then(FactEntry::source_text) {
            desc.push_str(PARAGRAPH);
            desc.push_str(&self.render(Message::FactSource { source: &source }));
        }

        let mut event = CalendarEvent::new(
            date,
            UidCategory::Walk,
            self.render(Message::WalkSummary { name, mins }),
            desc,
        )
        .with_annotation(fact_text);
        if let Some(url) = fact.and_then(|f| f.source_url.as_deref()) {
            event = event.with_url(url);
        }
        event
    }

    fn age_event(&self, date: NaiveDate) -> CalendarEvent {
        let name = self.config.name.as_str();
        let weeks = age_in_weeks(date, self.config.birth_date);
        let desc = self.render(Message::AgeDesc { name, weeks });
        CalendarEvent::new(
            date,
            UidCategory::Age,
            self.render(Message::AgeSummary { name, weeks }),
            desc.clone(),
        )
        .with_annotation(desc)
    }

    fn birthday_event(&self, date: NaiveDate) -> CalendarEvent {
        let name = self.config.name.as_str();
        let n = years_elapsed(date, self.config.birth_date);
        let summary = if n == 1 {
            self.render(Message::BirthdaySummaryFirst { name })
        } else {
            self.render(Message::BirthdaySummaryNth { name, n })
        };
        let desc = self.render(Message::BirthdayDesc { name });
        CalendarEvent::new(date, UidCategory::Birthday, summary, desc.clone()).with_annotation(desc)
    }

    fn feeding_events(&self, date: NaiveDate, plan: &FeedingPlan) -> Vec<CalendarEvent> {
        let cfg = self.config;
        let day_index = (date - cfg.arrival_date).num_days();
        let total_days = (cfg.end_date - cfg.arrival_date).num_days();
        let daily = plan.daily_grams(day_index, total_days);
        let per_meal = daily / f64::from(plan.meals);
        let grams = per_meal.round() as i64;
        let meals = u32::from(plan.meals);

        (0..plan.meals)
            .map(|m| {
                let desc = self.render(Message::FeedDesc {
                    meal: u32::from(m) + 1,
                    meals,
                    grams,
                    daily: daily.round() as i64,
                });
                CalendarEvent::new(
                    date,
                    UidCategory::Feed(m),
                    self.render(Message::FeedSummary { name: &cfg.name, grams }),
                    desc.clone(),
                )
                .with_annotation(desc)
            })
            .collect()
    }
}

/// Write `doc` to `path`, flushing before returning.
pub fn write_document(doc: &CalendarDocument, path: &Path) -> ScheduleResult<()> {
    let mut writer = IcsWriter::create(path)?;
    writer.write_document(doc)?;
    writer.finish()?;
    Ok(())
}

/// Resolve `lang`, build the schedule, and write it to `config.output`.
pub fn generate(
    config: &ScheduleConfig,
    lang:   &str,
    source: &dyn PackSource,
) -> ScheduleResult<GenerationReport> {
    let pack = resolve(lang, source)?;
    let doc = ScheduleGenerator::new(config, &pack)?.build();
    write_document(&doc, &config.output)?;

    let counts = EventCounts::of(&doc);
    let filename = config.output.display().to_string();
    info!(output = %filename, language = pack.code(), %counts, "schedule written");

    Ok(GenerationReport {
        output: config.output.clone(),
        language: pack.code().to_owned(),
        counts,
        message: pack.render(&Message::Success { filename: &filename }),
    })
}
