//! Unit tests for pupcal-schedule.

use chrono::NaiveDate;

use pupcal_core::ScheduleConfig;
use pupcal_i18n::{LocalePack, MemorySource, NoPacks, resolve};
use pupcal_ics::{CalendarDocument, CalendarEvent, UidCategory};

use crate::ScheduleGenerator;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn build(config: &ScheduleConfig, pack: &LocalePack) -> CalendarDocument {
    ScheduleGenerator::new(config, pack).unwrap().build()
}

fn stock() -> CalendarDocument {
    build(&ScheduleConfig::default(), &LocalePack::english())
}

fn of(doc: &CalendarDocument, category: UidCategory) -> Vec<&CalendarEvent> {
    doc.events().iter().filter(|e| e.category == category).collect()
}

/// Stock dates, but running through the second birthday.
fn two_year_config() -> ScheduleConfig {
    ScheduleConfig { end_date: day(2028, 1, 31), ..ScheduleConfig::default() }
}

// ── Stock schedule ────────────────────────────────────────────────────────────

#[cfg(test)]
mod stock_schedule {
    use super::*;

    #[test]
    fn first_event_is_birth() {
        let doc = stock();
        let first = &doc.events()[0];
        assert_eq!(first.category, UidCategory::Birth);
        assert_eq!(first.date, day(2025, 12, 26));
        assert_eq!(first.summary, "Fimme was born!");
        assert_eq!(first.annotation.as_deref(), Some("Fimme the Stabyhoun was born on this day."));
        assert_eq!(of(&doc, UidCategory::Birth).len(), 1);
    }

    #[test]
    fn first_walk_is_arrival_day_at_ten_minutes() {
        let doc = stock();
        let walk = &doc.events()[1];
        assert_eq!(walk.category, UidCategory::Walk);
        assert_eq!(walk.date, day(2026, 2, 21));
        assert_eq!(walk.summary, "Fimme - Walk: 10 mins (x2)");
        assert!(walk.description.starts_with("Rule: 10 minutes per walk, twice a day.\n\n"));
        assert!(walk.description.ends_with("\n\nSource: 5-minute rule (Puppy Culture/Kennel Clubs)."));
    }

    #[test]
    fn exactly_one_walk_per_day() {
        let config = ScheduleConfig::default();
        let doc = build(&config, &LocalePack::english());
        let walks = of(&doc, UidCategory::Walk);
        let expected: Vec<NaiveDate> = config.days().collect();
        let got: Vec<NaiveDate> = walks.iter().map(|e| e.date).collect();
        assert_eq!(got, expected);
        assert_eq!(walks.len(), 308);
    }

    #[test]
    fn weekly_milestones_on_mondays() {
        let doc = stock();
        let ages = of(&doc, UidCategory::Age);
        assert_eq!(ages.len(), 44);
        assert_eq!(ages[0].date, day(2026, 2, 23));
        assert_eq!(ages[0].summary, "Fimme is 8 Weeks Old Today!");
        assert_eq!(ages[0].description, "Fimme the Stabyhoun is now 8 weeks old.");
    }

    #[test]
    fn milestone_follows_walk_on_same_day() {
        let doc = stock();
        let idx = doc
            .events()
            .iter()
            .position(|e| e.category == UidCategory::Age)
            .unwrap();
        let prev = &doc.events()[idx - 1];
        assert_eq!(prev.category, UidCategory::Walk);
        assert_eq!(prev.date, doc.events()[idx].date);
    }

    #[test]
    fn stock_range_ends_the_day_before_first_birthday() {
        let doc = stock();
        assert!(of(&doc, UidCategory::Birthday).is_empty());
        assert_eq!(of(&doc, UidCategory::Walk).last().unwrap().date, day(2026, 12, 25));
    }

    #[test]
    fn walking_minutes_never_decrease() {
        let doc = stock();
        let mins: Vec<u32> = of(&doc, UidCategory::Walk)
            .iter()
            .map(|e| {
                let rest = e.summary.split("Walk: ").nth(1).unwrap();
                rest.split(' ').next().unwrap().parse().unwrap()
            })
            .collect();
        assert!(mins.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(mins.first(), Some(&10));
        assert_eq!(mins.last(), Some(&30));
    }

    #[test]
    fn no_feeding_by_default() {
        assert!(stock().events().iter().all(|e| !matches!(e.category, UidCategory::Feed(_))));
    }
}

// ── Fact rotation ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod facts {
    use super::*;
    use pupcal_core::FactOrder;

    #[test]
    fn day_n_gets_fact_n_minus_one_mod_len() {
        let pack = LocalePack::english();
        let facts = pack.facts();
        let doc = stock();
        for (n, walk) in of(&doc, UidCategory::Walk).iter().enumerate() {
            let expected = &facts[n % facts.len()].text;
            assert_eq!(walk.annotation.as_ref(), Some(expected), "day {}", n + 1);
            assert!(walk.description.contains(expected.as_str()));
        }
    }

    #[test]
    fn rotation_ignores_other_events_on_the_day() {
        // Mondays add an age event; the fact sequence must not skip.
        let source = MemorySource::new().with("en", r#"{"facts": ["A", "B", "C"]}"#);
        let pack = resolve("en", &source).unwrap();
        let doc = build(&ScheduleConfig::default(), &pack);
        let seq: String = of(&doc, UidCategory::Walk)
            .iter()
            .take(9)
            .map(|e| e.annotation.clone().unwrap())
            .collect();
        assert_eq!(seq, "ABCABCABC");
    }

    #[test]
    fn shuffled_order_is_reproducible_permutation() {
        let config = ScheduleConfig {
            fact_order: FactOrder::Shuffled { seed: 11 },
            ..ScheduleConfig::default()
        };
        let pack = LocalePack::english();
        let a = build(&config, &pack);
        let b = build(&config, &pack);
        assert_eq!(a.render(), b.render());

        let len = pack.facts().len();
        let mut first_cycle: Vec<String> = of(&a, UidCategory::Walk)
            .iter()
            .take(len)
            .map(|e| e.annotation.clone().unwrap())
            .collect();
        first_cycle.sort();
        let mut all: Vec<String> = pack.facts().iter().map(|f| f.text.clone()).collect();
        all.sort();
        assert_eq!(first_cycle, all);
    }

    #[test]
    fn sourced_fact_adds_paragraph_and_url() {
        let source = MemorySource::new().with(
            "en",
            r#"{"facts": [{"text": "Dogs sweat through paws.", "sourceLabel": "Vet", "sourceUrl": "https://example.org/paws"}]}"#,
        );
        let pack = resolve("en", &source).unwrap();
        let doc = build(&ScheduleConfig::default(), &pack);
        let walk = of(&doc, UidCategory::Walk)[0];
        assert!(walk.description.ends_with("\n\nFact source: Vet (https://example.org/paws)"));
        assert_eq!(walk.url.as_deref(), Some("https://example.org/paws"));
        assert!(doc.render().contains("\r\nURL:https://example.org/paws\r\n"));
    }
}

// ── Birthdays ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod birthdays {
    use super::*;
    use pupcal_core::LeapDayPolicy;

    #[test]
    fn ordinals() {
        let doc = build(&two_year_config(), &LocalePack::english());
        let bdays = of(&doc, UidCategory::Birthday);
        assert_eq!(bdays.len(), 2);
        assert_eq!(bdays[0].date, day(2026, 12, 26));
        assert_eq!(bdays[0].summary, "Fimme's 1st Birthday!");
        assert_eq!(bdays[1].date, day(2027, 12, 26));
        assert_eq!(bdays[1].summary, "Fimme's 2th Birthday!");
        assert_eq!(bdays[1].description, "Happy birthday to Fimme!");
    }

    #[test]
    fn toggle_off() {
        let config = ScheduleConfig { birthdays: false, ..two_year_config() };
        let doc = build(&config, &LocalePack::english());
        assert!(of(&doc, UidCategory::Birthday).is_empty());
    }

    #[test]
    fn leap_day_birth() {
        let base = ScheduleConfig {
            birth_date:   day(2024, 2, 29),
            arrival_date: day(2024, 4, 1),
            end_date:     day(2025, 4, 1),
            ..ScheduleConfig::default()
        };

        let doc = build(&base, &LocalePack::english());
        let bdays = of(&doc, UidCategory::Birthday);
        assert_eq!(bdays.len(), 1);
        assert_eq!(bdays[0].date, day(2025, 2, 28));
        assert_eq!(bdays[0].summary, "Fimme's 1st Birthday!");

        let mar1 = ScheduleConfig { leap_day: LeapDayPolicy::Mar1, ..base.clone() };
        let doc = build(&mar1, &LocalePack::english());
        assert_eq!(of(&doc, UidCategory::Birthday)[0].date, day(2025, 3, 1));

        let skip = ScheduleConfig { leap_day: LeapDayPolicy::Skip, ..base };
        let doc = build(&skip, &LocalePack::english());
        assert!(of(&doc, UidCategory::Birthday).is_empty());
    }
}

// ── Feeding ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod feeding {
    use super::*;
    use pupcal_core::FeedingPlan;

    fn config() -> ScheduleConfig {
        ScheduleConfig {
            feeding: Some(FeedingPlan { meals: 3, grams_start: 200, grams_end: 280 }),
            ..ScheduleConfig::default()
        }
    }

    #[test]
    fn one_event_per_meal_per_day() {
        let config = config();
        let doc = build(&config, &LocalePack::english());
        let feeds: Vec<_> =
            doc.events().iter().filter(|e| matches!(e.category, UidCategory::Feed(_))).collect();
        assert_eq!(feeds.len(), 3 * config.days().count());
        assert_eq!(feeds[0].category, UidCategory::Feed(0));
        assert_eq!(feeds[2].category, UidCategory::Feed(2));
    }

    #[test]
    fn grams_interpolate_from_start_to_end() {
        let doc = build(&config(), &LocalePack::english());
        let feeds: Vec<_> =
            doc.events().iter().filter(|e| matches!(e.category, UidCategory::Feed(_))).collect();

        assert_eq!(feeds[0].summary, "Fimme - Feeding (67g)");
        assert_eq!(feeds[0].description, "Meal 1/3, ~67g. Daily total: 200g.");
        assert_eq!(feeds[2].description, "Meal 3/3, ~67g. Daily total: 200g.");

        let last = feeds.last().unwrap();
        assert_eq!(last.summary, "Fimme - Feeding (93g)");
        assert_eq!(last.description, "Meal 3/3, ~93g. Daily total: 280g.");
    }

    #[test]
    fn feed_uids_are_distinct_per_meal() {
        let doc = build(&config(), &LocalePack::english());
        let text = doc.render();
        assert!(text.contains("UID:20260221-feed-0@stabyhoun-schedule"));
        assert!(text.contains("UID:20260221-feed-1@stabyhoun-schedule"));
        assert!(text.contains("UID:20260221-feed-2@stabyhoun-schedule"));
    }
}

// ── Localization ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod localized {
    use super::*;

    #[test]
    fn overlay_messages_reach_events() {
        let source = MemorySource::new().with(
            "nl",
            r#"{"strings": {"walk_summary": "{name} - Wandeling: {mins} min (x2)"}, "facts": ["Feit."]}"#,
        );
        let pack = resolve("nl_NL", &source).unwrap();
        let doc = build(&ScheduleConfig::default(), &pack);
        let walk = of(&doc, UidCategory::Walk)[0];
        assert_eq!(walk.summary, "Fimme - Wandeling: 10 min (x2)");
        assert_eq!(walk.annotation.as_deref(), Some("Feit."));
        // Untranslated keys keep English.
        assert_eq!(doc.events()[0].summary, "Fimme was born!");
    }

    #[test]
    fn name_with_reserved_characters_is_escaped_in_output() {
        let config = ScheduleConfig { name: "Bo, Jr.; \\o/".into(), ..ScheduleConfig::default() };
        let doc = build(&config, &LocalePack::english());
        assert!(doc.render().contains("SUMMARY:Bo\\, Jr.\\; \\\\o/ was born!\r\n"));
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod output {
    use super::*;
    use crate::{ScheduleError, generate};

    fn config_in(dir: &std::path::Path) -> ScheduleConfig {
        ScheduleConfig { output: dir.join("schedule.ics"), ..ScheduleConfig::default() }
    }

    #[test]
    fn build_is_idempotent() {
        assert_eq!(stock().render(), stock().render());
    }

    #[test]
    fn generate_writes_file_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let report = generate(&config, "en", &NoPacks).unwrap();

        let text = std::fs::read_to_string(&config.output).unwrap();
        assert_eq!(text, stock().render());
        assert!(text.contains(&format!("PRODID:-//puppy-ics//{}//EN", config.product_version)));

        assert_eq!(report.output, config.output);
        assert_eq!(report.language, "en");
        assert_eq!(report.counts.birth, 1);
        assert_eq!(report.counts.walk, 308);
        assert_eq!(report.counts.age, 44);
        assert_eq!(report.counts.total(), 353);
        assert_eq!(
            report.message,
            format!("Success! '{}' has been created.", config.output.display())
        );
    }

    #[test]
    fn regenerating_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        generate(&config, "en", &NoPacks).unwrap();
        let first = std::fs::read(&config.output).unwrap();
        generate(&config, "en", &NoPacks).unwrap();
        let second = std::fs::read(&config.output).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_language_still_generates() {
        let dir = tempfile::tempdir().unwrap();
        let report = generate(&config_in(dir.path()), "tlh", &NoPacks).unwrap();
        assert_eq!(report.language, "en");
    }

    #[test]
    fn unwritable_output_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScheduleConfig {
            output: dir.path().join("no-such-dir").join("schedule.ics"),
            ..ScheduleConfig::default()
        };
        let err = generate(&config, "en", &NoPacks).unwrap_err();
        assert!(matches!(err, ScheduleError::Ics(_)));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ScheduleConfig { end_date: day(2026, 1, 1), ..ScheduleConfig::default() };
        let pack = LocalePack::english();
        assert!(matches!(
            ScheduleGenerator::new(&config, &pack),
            Err(ScheduleError::Core(_))
        ));
    }
}
