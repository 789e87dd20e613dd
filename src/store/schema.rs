use std::fmt;

use chrono::NaiveDateTime;

use crate::error::QuizError;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Width of a formatted `TIMESTAMP_FORMAT` value.
pub const TIMESTAMP_WIDTH: usize = 19;

/// One judged answer: `<timestamp> word=<word>,correct=<y|n>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRecord {
    pub timestamp: NaiveDateTime,
    pub word: String,
    pub correct: bool,
}

impl ResultRecord {
    /// Parse one log line. `line_no` is 1-based and only labels errors.
    pub fn parse(line: &str, line_no: usize) -> Result<Self, QuizError> {
        let malformed = |reason: &str| QuizError::MalformedEntry {
            line: line_no,
            reason: reason.to_string(),
        };

        let (stamp, rest) = match (line.get(..TIMESTAMP_WIDTH), line.get(TIMESTAMP_WIDTH..)) {
            (Some(stamp), Some(rest)) => (stamp, rest),
            _ => return Err(malformed("line shorter than a timestamp")),
        };
        let timestamp = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT)
            .map_err(|e| malformed(&format!("bad timestamp {stamp:?}: {e}")))?;
        let payload = rest
            .strip_prefix(' ')
            .ok_or_else(|| malformed("missing space after timestamp"))?;

        let (word_field, correct_field) = payload
            .rsplit_once(',')
            .ok_or_else(|| malformed("expected `word=<word>,correct=<y|n>`"))?;
        let word = word_field
            .strip_prefix("word=")
            .filter(|w| !w.is_empty())
            .ok_or_else(|| malformed("missing `word=` field"))?;
        let correct = match correct_field.strip_prefix("correct=") {
            Some("y") => true,
            Some("n") => false,
            _ => return Err(malformed("`correct=` must be y or n")),
        };

        Ok(Self {
            timestamp,
            word: word.to_string(),
            correct,
        })
    }
}

impl fmt::Display for ResultRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} word={},correct={}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.word,
            if self.correct { 'y' } else { 'n' }
        )
    }
}
