use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::store::schema::ResultRecord;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WordTally {
    pub attempts: usize,
    pub correct: usize,
}

impl WordTally {
    pub fn incorrect(&self) -> usize {
        self.attempts - self.correct
    }
}

/// A log line left out of the statistics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedLine {
    pub line: usize,
    pub reason: String,
}

#[derive(Clone, Debug, Default)]
pub struct Stats {
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub today: usize,
    pub per_word: BTreeMap<String, WordTally>,
    pub skipped: Vec<SkippedLine>,
}

impl Stats {
    pub fn record(&mut self, record: &ResultRecord, today: NaiveDate) {
        self.total += 1;
        if record.correct {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }
        if record.timestamp.date() == today {
            self.today += 1;
        }
        let tally = self.per_word.entry(record.word.clone()).or_default();
        tally.attempts += 1;
        if record.correct {
            tally.correct += 1;
        }
    }

    /// Percentage of correct answers, 0 when nothing was recorded.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64 * 100.0
    }

    /// Words with at least one miss, most misses first, ties by word.
    pub fn most_missed(&self, limit: usize) -> Vec<(&str, WordTally)> {
        let mut missed: Vec<(&str, WordTally)> = self
            .per_word
            .iter()
            .filter(|(_, t)| t.incorrect() > 0)
            .map(|(w, t)| (w.as_str(), *t))
            .collect();
        missed.sort_by(|a, b| b.1.incorrect().cmp(&a.1.incorrect()).then(a.0.cmp(b.0)));
        missed.truncate(limit);
        missed
    }
}
