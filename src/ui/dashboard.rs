use std::io::{self, Write};

use crate::store::stats::Stats;
use crate::ui::theme;

const MOST_MISSED_LIMIT: usize = 5;

/// Plain-text results summary.
pub fn render(out: &mut dyn Write, stats: &Stats) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", theme::info("Results"))?;
    writeln!(out, "  Total:     {}", stats.total)?;
    writeln!(
        out,
        "  Correct:   {} ({:.1}%)",
        stats.correct,
        stats.accuracy()
    )?;
    writeln!(out, "  Incorrect: {}", stats.incorrect)?;
    writeln!(out, "  Today:     {}", stats.today)?;

    let missed = stats.most_missed(MOST_MISSED_LIMIT);
    if !missed.is_empty() {
        writeln!(out, "{}", theme::info("Most missed"))?;
        for (word, tally) in missed {
            writeln!(
                out,
                "  {word}: {} of {} wrong",
                tally.incorrect(),
                tally.attempts
            )?;
        }
    }

    if !stats.skipped.is_empty() {
        let note = format!(
            "Skipped {} malformed line(s) in the results log",
            stats.skipped.len()
        );
        writeln!(out, "{}", theme::highlight(note))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::stats::{SkippedLine, WordTally};

    #[test]
    fn renders_totals_and_missed_words() {
        let mut stats = Stats {
            total: 4,
            correct: 3,
            incorrect: 1,
            today: 0,
            ..Default::default()
        };
        stats
            .per_word
            .insert("apt".to_string(), WordTally { attempts: 2, correct: 1 });
        let mut out = Vec::new();
        render(&mut out, &stats).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Total:     4"));
        assert!(text.contains("(75.0%)"));
        assert!(text.contains("Today:     0"));
        assert!(text.contains("apt: 1 of 2 wrong"));
        assert!(!text.contains("malformed"));
    }

    #[test]
    fn mentions_skipped_lines() {
        let stats = Stats {
            skipped: vec![SkippedLine {
                line: 3,
                reason: "bad".to_string(),
            }],
            ..Default::default()
        };
        let mut out = Vec::new();
        render(&mut out, &stats).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Skipped 1 malformed line(s)"));
    }
}
