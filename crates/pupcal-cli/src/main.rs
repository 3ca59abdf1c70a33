//! pupcal — writes the puppy walking schedule as an `.ics` calendar file.
//!
//! ```text
//! pupcal                      # stock schedule, language from $LANGUAGE
//! pupcal --lang nl            # Dutch pack from ./i18n/nl.json
//! pupcal -c fimme.toml -o out.ics
//! ```
//!
//! Set `RUST_LOG=debug` for resolution and generation details on stderr.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pupcal_core::ScheduleConfig;
use pupcal_i18n::DirSource;
use pupcal_schedule::generate;

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_LANG:     &str = "en";
const DEFAULT_I18N_DIR: &str = "i18n";
const DEFAULT_LOG:      &str = "warn";

// ── Arguments ─────────────────────────────────────────────────────────────────

/// Generate the puppy walking schedule as an iCalendar file.
#[derive(Parser, Debug)]
#[command(name = "pupcal")]
#[command(version, about, long_about = None)]
struct Args {
    /// Language code (e.g. en, nl). Defaults to $LANGUAGE, else en.
    #[arg(short, long, default_value_t = default_lang())]
    lang: String,

    /// TOML schedule configuration; stock schedule when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding `{lang}.json` language packs
    #[arg(long, default_value = DEFAULT_I18N_DIR)]
    i18n_dir: PathBuf,

    /// Output file (overrides the configured one)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn default_lang() -> String {
    lang_from_env(std::env::var("LANGUAGE").ok().as_deref())
}

/// First `LANGUAGE` entry with its region stripped, e.g. `nl_NL:en` → `nl`.
fn lang_from_env(value: Option<&str>) -> String {
    value
        .and_then(|v| {
            let first = v.split(':').next()?.split('_').next()?.trim();
            (!first.is_empty()).then(|| first.to_owned())
        })
        .unwrap_or_else(|| DEFAULT_LANG.to_owned())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let mut config = match &args.config {
        Some(path) => ScheduleConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ScheduleConfig::default(),
    };
    if let Some(output) = args.output {
        config.output = output;
    }

    let source = DirSource::new(&args.i18n_dir);
    let report = generate(&config, &args.lang, &source)
        .with_context(|| format!("generating {}", config.output.display()))?;

    tracing::debug!(counts = %report.counts, language = %report.language, "done");
    println!("{}", report.message);
    Ok(())
}
