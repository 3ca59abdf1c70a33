//! Two-tier language resolution.
//!
//! # Precedence (lowest to highest)
//!
//! 1. compiled-in defaults ([`LocalePack::english`])
//! 2. the `en` pack from the source, if any
//! 3. the pack for the requested code, if it is not `en` and exists
//!
//! Messages override key by key.  A tier's fact list replaces the current
//! one only when non-empty.  Within a tier, a template that fails
//! validation is dropped with a warning and the lower tier's template stays.
//!
//! # Failure modes
//!
//! | Failure                     | Behavior                         |
//! |-----------------------------|----------------------------------|
//! | Unknown language code       | English                          |
//! | Pack file missing           | tier skipped                     |
//! | Pack JSON malformed         | warning, tier skipped            |
//! | Bad template / fact entry   | warning, entry skipped           |
//! | Other I/O error             | `I18nError::Io` returned         |

use tracing::{debug, warn};

use crate::pack::{DEFAULT_SOURCE_LABEL_KEY, DEFAULT_SOURCE_URL_KEY};
use crate::{I18nError, I18nResult, LocalePack, MessageKey, PackSource, RawPack, Template};

/// The language every pack falls back to.
pub const BASE_LANG: &str = "en";

/// Reduce a locale string to a bare lowercase language code.
///
/// `"nl_NL.UTF-8"` → `"nl"`, `"EN-us"` → `"en"`.  Empty or non-alphanumeric
/// codes become [`BASE_LANG`], which also keeps the code safe to use as a
/// file stem.
pub fn normalize_lang(lang: &str) -> String {
    let code = lang
        .trim()
        .split(['_', '-', '.', '@'])
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();
    if code.is_empty() || !code.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return BASE_LANG.to_owned();
    }
    code
}

/// Resolve the pack for `lang` from `source`.
pub fn resolve(lang: &str, source: &dyn PackSource) -> I18nResult<LocalePack> {
    let code = normalize_lang(lang);
    let base = load_tier(source, BASE_LANG)?;
    let overlay = if code == BASE_LANG {
        None
    } else {
        load_tier(source, &code)?
    };

    let pack = merge_tiers(base.as_ref(), overlay.as_ref().map(|p| (code.as_str(), p)));
    debug!(requested = lang, resolved = pack.code(), facts = pack.facts().len(), "language resolved");
    Ok(pack)
}

/// Apply the base tier and an optional `(code, pack)` overlay on top of the
/// compiled-in defaults.
pub fn merge_tiers(base: Option<&RawPack>, overlay: Option<(&str, &RawPack)>) -> LocalePack {
    let mut pack = LocalePack::english();
    if let Some(raw) = base {
        apply_tier(&mut pack, BASE_LANG, raw);
    }
    if let Some((code, raw)) = overlay {
        apply_tier(&mut pack, code, raw);
        pack.set_code(code);
    }
    pack
}

fn load_tier(source: &dyn PackSource, code: &str) -> I18nResult<Option<RawPack>> {
    let Some(bytes) = source.read_pack(code)? else {
        debug!(pack = code, "language pack not found");
        return Ok(None);
    };
    match serde_json::from_slice::<RawPack>(&bytes) {
        Ok(raw) => Ok(Some(raw)),
        Err(e) => {
            let err = I18nError::Malformed { code: code.to_owned(), source: e };
            warn!(error = %err, "ignoring language pack");
            Ok(None)
        }
    }
}

fn apply_tier(pack: &mut LocalePack, code: &str, raw: &RawPack) {
    for (name, text) in &raw.strings {
        let Some(key) = MessageKey::from_name(name) else {
            if name != DEFAULT_SOURCE_LABEL_KEY && name != DEFAULT_SOURCE_URL_KEY {
                debug!(pack = code, key = %name, "ignoring unknown message key");
            }
            continue;
        };
        match Template::parse(key, text) {
            Ok(t) => pack.set_template(t),
            Err(e) => warn!(pack = code, error = %e, "keeping fallback template"),
        }
    }

    if !pack.replace_facts(raw.fact_entries(code)) {
        debug!(pack = code, "no facts supplied; keeping fallback facts");
    }
}
