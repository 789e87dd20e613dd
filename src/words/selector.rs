use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{QuizError, Result};
use crate::words::dictionary::Dictionary;

/// Requested size of the bounded set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleSize {
    All,
    Count(usize),
}

impl FromStr for SampleSize {
    type Err = ();

    /// Blank, `all` and `-1` mean the whole set.
    fn from_str(s: &str) -> std::result::Result<Self, ()> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") || s == "-1" {
            return Ok(SampleSize::All);
        }
        s.parse::<usize>().map(SampleSize::Count).map_err(|_| ())
    }
}

/// Words picked from a list file plus the list words the dictionary lacks.
#[derive(Clone, Debug, Default)]
pub struct ListSelection {
    pub words: Vec<String>,
    pub missing: Vec<String>,
}

pub fn select_all(dictionary: &Dictionary) -> Vec<String> {
    dictionary.words().map(str::to_string).collect()
}

pub fn select_by_letter(dictionary: &Dictionary, letter: char) -> Vec<String> {
    let letter = letter.to_lowercase().collect::<String>();
    dictionary
        .words()
        .filter(|w| {
            w.chars()
                .next()
                .is_some_and(|first| first.to_lowercase().eq(letter.chars()))
        })
        .map(str::to_string)
        .collect()
}

/// Keep list order, drop repeats, and report words the dictionary lacks.
pub fn select_from_list(dictionary: &Dictionary, list_words: &[String]) -> ListSelection {
    let mut seen = HashSet::new();
    let mut selection = ListSelection::default();
    for word in list_words {
        if !seen.insert(word.as_str()) {
            continue;
        }
        if dictionary.contains(word) {
            selection.words.push(word.clone());
        } else {
            selection.missing.push(word.clone());
        }
    }
    selection
}

/// Draw `size` words without replacement.
pub fn sample<R: Rng + ?Sized>(
    words: &[String],
    size: SampleSize,
    rng: &mut R,
) -> Result<Vec<String>> {
    match size {
        SampleSize::All => Ok(words.to_vec()),
        SampleSize::Count(n) if n > words.len() => Err(QuizError::InsufficientPopulation {
            requested: n,
            available: words.len(),
        }),
        SampleSize::Count(n) => Ok(words.choose_multiple(rng, n).cloned().collect()),
    }
}

/// `*.list` files in `dir`, sorted by name.
pub fn discover_lists(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| QuizError::io(dir, e))?;
    let mut lists: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(".list"))
        })
        .collect();
    lists.sort();
    Ok(lists)
}

pub fn load_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| QuizError::io(path, e))?;
    Ok(content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect())
}
