//! `pupcal-i18n` — message templates and language packs.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`message`]  | `MessageKey`, `Placeholder`, `Message` (typed arguments)  |
//! | [`template`] | `Template` (parsed and validated at load time)            |
//! | [`pack`]     | `LocalePack`, `FactEntry`, `RawPack` (JSON shape)         |
//! | [`source`]   | `PackSource` trait, `DirSource`, `MemorySource`, `NoPacks` |
//! | [`resolver`] | `normalize_lang`, `resolve`, `merge_tiers`                |
//! | [`facts`]    | compiled-in English fact list                             |
//! | [`error`]    | `I18nError`, `I18nResult<T>`                              |
//!
//! # Resolution model (summary)
//!
//! ```text
//! compiled defaults  <  en.json  <  {code}.json
//! ```
//!
//! Each tier overrides messages key by key and replaces the fact list only
//! when it supplies a non-empty one.  Every [`MessageKey`] has a compiled-in
//! default, so a resolved [`LocalePack`] can always render every message.

pub mod error;
pub mod facts;
pub mod message;
pub mod pack;
pub mod resolver;
pub mod source;
pub mod template;


pub use error::{I18nError, I18nResult};
pub use message::{Message, MessageKey, Placeholder};
pub use pack::{FactEntry, LocalePack, RawPack};
pub use resolver::{BASE_LANG, merge_tiers, normalize_lang, resolve};
pub use source::{DirSource, MemorySource, NoPacks, PackSource};
pub use template::Template;
