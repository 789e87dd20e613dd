use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{QuizError, Result};

const SEPARATOR: &str = " - ";

/// Word → definition mapping loaded from a `word - definition` file.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    entries: BTreeMap<String, String>,
}

impl Dictionary {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| QuizError::io(path, e))?;
        let dictionary = Self::parse(&content, path)?;
        tracing::info!(
            path = %path.display(),
            words = dictionary.len(),
            "dictionary loaded"
        );
        Ok(dictionary)
    }

    /// Parse dictionary text. `origin` only labels errors.
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        let mut entries = BTreeMap::new();
        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let Some((word, definition)) = line.split_once(SEPARATOR) else {
                return Err(QuizError::Parse {
                    path: PathBuf::from(origin),
                    line: idx + 1,
                    content: line.to_string(),
                });
            };
            entries.insert(word.trim().to_lowercase(), definition.trim().to_string());
        }
        Ok(Self { entries })
    }

    pub fn definition(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
