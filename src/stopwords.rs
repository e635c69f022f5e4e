//! The stopword exclusion list.
//!
//! Loaded once at tokenizer startup and read-only afterwards. A missing or
//! unreadable list degrades to an empty set with a warning rather than
//! failing the stage.

use anyhow::Result;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::warn;

/// An immutable set of lowercase words excluded from counting.
#[derive(Clone, Debug, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// An empty set; nothing gets excluded.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the set from whitespace-delimited words read off `reader`.
    /// Words are lowercased so membership tests work on cleaned tokens.
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        let words = buf
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        Ok(Self { words })
    }

    /// Loads the set from the file at `path`.
    ///
    /// Read failures are reported on the diagnostics channel and yield an
    /// empty set (non-fatal).
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let loaded = File::open(path)
            .map_err(anyhow::Error::from)
            .and_then(Self::from_reader);
        match loaded {
            Ok(set) => set,
            Err(err) => {
                warn!("failed to load stopword list {}: {err}", path.display());
                Self::empty()
            }
        }
    }

    /// Membership test for a cleaned (lowercase) word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set excludes nothing.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
