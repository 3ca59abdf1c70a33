//! Where language packs come from.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::I18nResult;

/// A provider of raw language-pack JSON, keyed by normalized language code.
///
/// Sources hand back bytes; decoding (UTF-8 included) happens in the
/// resolver, so undecodable content counts as a malformed pack.
pub trait PackSource {
    /// JSON bytes for `code`, or `Ok(None)` when no such pack exists.
    fn read_pack(&self, code: &str) -> I18nResult<Option<Vec<u8>>>;
}

/// Reads `{dir}/{code}.json`.  A missing file is an absent pack.
#[derive(Clone, Debug)]
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl PackSource for DirSource {
    fn read_pack(&self, code: &str) -> I18nResult<Option<Vec<u8>>> {
        let path = self.dir.join(format!("{code}.json"));
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory packs, for tests and embedding.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    packs: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, code: impl Into<String>, json: impl Into<String>) -> Self {
        self.packs.insert(code.into(), json.into());
        self
    }
}

impl PackSource for MemorySource {
    fn read_pack(&self, code: &str) -> I18nResult<Option<Vec<u8>>> {
        Ok(self.packs.get(code).map(|json| json.as_bytes().to_vec()))
    }
}

/// No packs at all; resolution yields the compiled-in English pack.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoPacks;

impl PackSource for NoPacks {
    fn read_pack(&self, _code: &str) -> I18nResult<Option<Vec<u8>>> {
        Ok(None)
    }
}
