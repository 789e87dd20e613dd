use std::io::{self, Write};

use rand::Rng;

use crate::console::{self, Console, Key};
use crate::error::Result;
use crate::external::lookup::DefinitionLookup;
use crate::external::speech::Speaker;
use crate::session::command::{Command, Judgement};
use crate::session::pool::{Round, WordPool};
use crate::store::results_log::ResultsLog;
use crate::ui::{menu, theme};
use crate::words::dictionary::Dictionary;

/// How a quiz session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// Back to the main menu.
    Menu,
    /// Leave the program.
    Quit,
}

/// Per-session settings fixed at construction.
pub struct SessionOptions<'a> {
    /// Judge every revealed word and append the outcome to `log`.
    pub ranked: bool,
    pub log: &'a ResultsLog,
    pub speaker: &'a dyn Speaker,
    pub lookup: Option<&'a dyn DefinitionLookup>,
}

enum RankInput {
    Judged(Judgement),
    Quit,
}

pub struct QuizSession<'a, R> {
    pool: WordPool<R>,
    dictionary: &'a Dictionary,
    options: SessionOptions<'a>,
}

impl<'a, R: Rng> QuizSession<'a, R> {
    /// Fails with `EmptySet` when there is nothing to drill.
    pub fn new(
        words: Vec<String>,
        dictionary: &'a Dictionary,
        options: SessionOptions<'a>,
        rng: R,
    ) -> Result<Self> {
        Ok(Self {
            pool: WordPool::new(words, rng)?,
            dictionary,
            options,
        })
    }

    /// Drill until the user leaves. Only console failures are errors.
    pub fn run(&mut self, console: &mut dyn Console) -> io::Result<SessionEnd> {
        menu::render(console.out(), "Quiz mode options:", menu::QUIZ_HELP)?;
        let heading = format!("Set contains {} words:", self.pool.len());
        writeln!(console.out(), "{}", theme::info(heading.as_str()))?;
        writeln!(console.out(), "{}", self.pool.words().join(", "))?;

        loop {
            let round = self.pool.next_round();
            if round.reloaded {
                writeln!(console.out(), "{}", theme::info("Reloading words"))?;
            }
            match self.present(console, &round)? {
                Some(end) => return Ok(end),
                None if !self.options.ranked => {}
                None => {
                    if let RankInput::Quit = self.rank(console, &round.word)? {
                        return Ok(SessionEnd::Quit);
                    }
                }
            }
        }
    }

    /// Await commands for one word. `None` means it was revealed.
    fn present(&self, console: &mut dyn Console, round: &Round) -> io::Result<Option<SessionEnd>> {
        let question = format!(
            "[{}/{} #{}] {} [enter/q/m/h/s] ",
            round.position,
            self.pool.len(),
            round.number,
            theme::highlight(round.word.as_str())
        );
        loop {
            let command = console::prompt_key(
                console,
                &question,
                Some("Unknown command, press h for help"),
                Command::from_key,
            )?;
            match command {
                Command::Quit => return Ok(Some(SessionEnd::Quit)),
                Command::Menu => return Ok(Some(SessionEnd::Menu)),
                Command::Help => menu::render(console.out(), "Quiz mode options:", menu::QUIZ_HELP)?,
                Command::Speak => {
                    if let Err(e) = self.options.speaker.speak(&round.word) {
                        tracing::debug!(word = %round.word, error = %e, "speech failed");
                    }
                }
                Command::Reveal => {
                    self.reveal(console.out(), &round.word)?;
                    return Ok(None);
                }
            }
        }
    }

    fn reveal(&self, out: &mut dyn Write, word: &str) -> io::Result<()> {
        match self.dictionary.definition(word) {
            Some(definition) => writeln!(out, "{}", theme::definition(definition))?,
            None => writeln!(out, "{}", theme::dim("(no definition)"))?,
        }
        let Some(lookup) = self.options.lookup else {
            return Ok(());
        };
        match lookup.define(word) {
            Ok(senses) => {
                for sense in senses {
                    match sense.part_of_speech {
                        Some(pos) => writeln!(out, "  ({pos}) {}", sense.definition)?,
                        None => writeln!(out, "  {}", sense.definition)?,
                    }
                }
            }
            Err(e) => {
                tracing::warn!(word, error = %e, "definition lookup failed");
                writeln!(out, "{}", theme::dim(format!("lookup unavailable: {e}")))?;
            }
        }
        Ok(())
    }

    fn rank(&self, console: &mut dyn Console, word: &str) -> io::Result<RankInput> {
        let input = console::prompt_key(console, "Correct? [y/n/s] ", Some("Answer y, n or s"), |key| match key {
            Key::Interrupt => Some(RankInput::Quit),
            key => Judgement::from_key(key).map(RankInput::Judged),
        })?;
        if let RankInput::Judged(judgement) = &input {
            if let Some(correct) = judgement.outcome() {
                if let Err(e) = self.options.log.append(word, correct) {
                    tracing::error!(error = %e, "could not record result");
                    writeln!(
                        console.out(),
                        "{}",
                        theme::highlight(format!("Could not record result: {e}"))
                    )?;
                }
            }
        }
        Ok(input)
    }
}
