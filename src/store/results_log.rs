use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{QuizError, Result};
use crate::store::clock::LogClock;
use crate::store::schema::ResultRecord;
use crate::store::stats::{SkippedLine, Stats};

/// Append-only text log of judged answers.
pub struct ResultsLog {
    path: PathBuf,
    clock: LogClock,
}

impl ResultsLog {
    pub fn new(path: PathBuf, clock: LogClock) -> Self {
        Self { path, clock }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, word: &str, correct: bool) -> Result<ResultRecord> {
        self.append_at(word, correct, self.clock.now())
    }

    pub fn append_at(
        &self,
        word: &str,
        correct: bool,
        timestamp: NaiveDateTime,
    ) -> Result<ResultRecord> {
        let record = ResultRecord {
            timestamp,
            word: word.to_string(),
            correct,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| QuizError::io(&self.path, e))?;
        writeln!(file, "{record}").map_err(|e| QuizError::io(&self.path, e))?;
        tracing::debug!(word, correct, "result appended");
        Ok(record)
    }

    pub fn summarize(&self) -> Result<Stats> {
        self.summarize_on(self.clock.today())
    }

    /// Malformed lines are skipped and listed in `Stats::skipped`. A missing
    /// log is an empty one.
    pub fn summarize_on(&self, today: NaiveDate) -> Result<Stats> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(QuizError::io(&self.path, e)),
        };

        let mut stats = Stats::default();
        for (idx, raw) in content.split(|&b| b == b'\n').enumerate() {
            let parsed = match std::str::from_utf8(raw) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => ResultRecord::parse(line.trim_end_matches('\r'), idx + 1),
                Err(_) => Err(QuizError::MalformedEntry {
                    line: idx + 1,
                    reason: "invalid UTF-8".to_string(),
                }),
            };
            match parsed {
                Ok(record) => stats.record(&record, today),
                Err(QuizError::MalformedEntry { line, reason }) => {
                    tracing::warn!(path = %self.path.display(), line, %reason, "skipping results entry");
                    stats.skipped.push(SkippedLine { line, reason });
                }
                Err(e) => return Err(e),
            }
        }
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use tempfile::TempDir;

    fn make_test_log() -> (TempDir, ResultsLog) {
        let dir = TempDir::new().unwrap();
        let log = ResultsLog::new(dir.path().join("results.txt"), LogClock::default());
        (dir, log)
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn append_then_summarize_counts_outcomes() {
        let (_dir, log) = make_test_log();
        log.append("lucid", true).unwrap();
        log.append("lucid", false).unwrap();

        let stats = log.summarize().unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.correct, 1);
        assert_eq!(stats.incorrect, 1);
        assert_eq!(stats.today, 2);
        assert!(stats.skipped.is_empty());
    }

    #[test]
    fn appended_lines_match_log_format() {
        let (_dir, log) = make_test_log();
        log.append("lucid", true).unwrap();
        log.append("zeal", false).unwrap();

        let content = fs::read_to_string(log.path()).unwrap();
        let re = Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} word=[a-z]+,correct=[yn]$").unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| re.is_match(l)), "{content}");
        assert!(lines[0].ends_with("word=lucid,correct=y"));
        assert!(lines[1].ends_with("word=zeal,correct=n"));
    }

    #[test]
    fn no_entries_today_counts_zero() {
        let (_dir, log) = make_test_log();
        let then = day(2020, 1, 1).and_hms_opt(8, 0, 0).unwrap();
        log.append_at("apt", true, then).unwrap();

        let stats = log.summarize_on(day(2024, 6, 1)).unwrap();
        assert_eq!(stats.total, 1);
        assert_eq!(stats.today, 0);
    }

    #[test]
    fn missing_log_is_empty() {
        let (_dir, log) = make_test_log();
        let stats = log.summarize().unwrap();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.today, 0);
    }

    #[test]
    fn malformed_lines_are_skipped_not_fatal() {
        let (_dir, log) = make_test_log();
        fs::write(
            log.path(),
            "2024-06-01 10:00:00 word=apt,correct=y\n\
             this line is garbage\n\
             \n\
             2024-06-01 10:01:00 word=boon,correct=x\n\
             2024-05-31 23:59:59 word=curt,correct=n\n",
        )
        .unwrap();

        let stats = log.summarize_on(day(2024, 6, 1)).unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.correct, 1);
        assert_eq!(stats.incorrect, 1);
        assert_eq!(stats.today, 1);
        let skipped: Vec<usize> = stats.skipped.iter().map(|s| s.line).collect();
        assert_eq!(skipped, vec![2, 4]);
    }

    #[test]
    fn invalid_utf8_line_is_skipped_not_fatal() {
        let (_dir, log) = make_test_log();
        let mut bytes = b"2024-06-01 10:00:00 word=apt,correct=y\n".to_vec();
        bytes.extend_from_slice(b"2024-06-01 10:01:00 word=caf\xE9,correct=n\n");
        bytes.extend_from_slice(b"2024-06-01 10:02:00 word=boon,correct=y\n");
        fs::write(log.path(), bytes).unwrap();

        let stats = log.summarize_on(day(2024, 6, 1)).unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.correct, 2);
        assert_eq!(stats.today, 2);
        assert_eq!(stats.skipped.len(), 1);
        assert_eq!(stats.skipped[0].line, 2);
        assert_eq!(stats.skipped[0].reason, "invalid UTF-8");
    }

    #[test]
    fn append_to_unwritable_path_is_io_error() {
        let dir = TempDir::new().unwrap();
        let log = ResultsLog::new(dir.path().join("missing").join("results.txt"), LogClock::default());
        let err = log.append("apt", true).unwrap_err();
        assert!(matches!(err, QuizError::Io { .. }));
    }
}
