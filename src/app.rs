use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::Config;
use crate::console::{self, Console, Key};
use crate::error::QuizError;
use crate::external::lookup::{DefinitionLookup, LookupSettings};
use crate::external::speech::CommandSpeaker;
use crate::session::quiz::{QuizSession, SessionEnd, SessionOptions};
use crate::store::clock::LogClock;
use crate::store::results_log::ResultsLog;
use crate::ui::menu::{self, MenuAction, Scope};
use crate::ui::{dashboard, theme};
use crate::words::dictionary::Dictionary;
use crate::words::selector::{self, SampleSize};

pub struct App {
    pub config: Config,
    dictionary: Dictionary,
    log: ResultsLog,
    speaker: CommandSpeaker,
    lookup: LookupSettings,
    rng: SmallRng,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self::with_rng(config, SmallRng::from_entropy())
    }

    pub fn with_rng(config: Config, rng: SmallRng) -> Self {
        let clock = LogClock::from_offset_minutes(config.utc_offset_minutes);
        let log = ResultsLog::new(config.results_path.clone(), clock);
        let speaker = CommandSpeaker::new(&config.speech_command);
        Self {
            config,
            dictionary: Dictionary::default(),
            log,
            speaker,
            lookup: LookupSettings::default(),
            rng,
        }
    }

    /// Main menu loop. Returns when the user quits.
    pub fn run(&mut self, console: &mut dyn Console) -> Result<()> {
        self.reload_dictionary(console.out())?;
        loop {
            menu::render(console.out(), "Select mode:", menu::MAIN_MENU)?;
            let action = console::prompt_key(console, "> ", Some("Unknown option"), |key| match key {
                Key::Char(ch) => MenuAction::from_char(ch),
                Key::Interrupt => Some(MenuAction::Quit),
                _ => None,
            })
            .context("reading menu choice")?;

            match action {
                MenuAction::Quiz { scope, ranked } => {
                    if self.start_quiz(console, scope, ranked)? == SessionEnd::Quit {
                        return Ok(());
                    }
                }
                MenuAction::Results => self.show_results(console.out())?,
                MenuAction::ReloadDictionary => self.reload_dictionary(console.out())?,
                MenuAction::LookupSettings => self.configure_lookup(console)?,
                MenuAction::Quit => return Ok(()),
            }
        }
    }

    /// A failed load keeps whatever was loaded before.
    fn reload_dictionary(&mut self, out: &mut dyn Write) -> io::Result<()> {
        match Dictionary::load(&self.config.dictionary_path) {
            Ok(dictionary) => {
                self.dictionary = dictionary;
                let note = format!("Dictionary loaded: {} words.", self.dictionary.len());
                writeln!(out, "{}", theme::info(note))
            }
            Err(e) => {
                tracing::error!(error = %e, "dictionary load failed");
                writeln!(out, "{}", theme::highlight(format!("Could not load dictionary: {e}")))
            }
        }
    }

    fn show_results(&self, out: &mut dyn Write) -> io::Result<()> {
        match self.log.summarize() {
            Ok(stats) => dashboard::render(out, &stats),
            Err(e) => writeln!(out, "{}", theme::highlight(format!("Could not read results: {e}"))),
        }
    }

    fn configure_lookup(&mut self, console: &mut dyn Console) -> io::Result<()> {
        if !cfg!(feature = "network") {
            writeln!(
                console.out(),
                "{}",
                theme::dim("Definition lookup is not available in this build.")
            )?;
        }
        let status = if self.lookup.enabled { "on" } else { "off" };
        writeln!(console.out(), "Definition lookup is {status}.")?;
        let token = console::prompt_line(console, "Access token (blank to turn off): ")?;
        if token.is_empty() {
            self.lookup = LookupSettings::default();
            writeln!(console.out(), "{}", theme::info("Definition lookup off."))
        } else {
            self.lookup = LookupSettings {
                enabled: true,
                token: Some(token),
            };
            writeln!(console.out(), "{}", theme::info("Definition lookup on."))
        }
    }

    /// Select, sample and drill. Selection problems end the attempt, not the program.
    fn start_quiz(
        &mut self,
        console: &mut dyn Console,
        scope: Scope,
        ranked: bool,
    ) -> io::Result<SessionEnd> {
        let Some(words) = self.select_words(console, scope)? else {
            return Ok(SessionEnd::Menu);
        };
        let size = prompt_sample_size(console)?;
        let words = match selector::sample(&words, size, &mut self.rng) {
            Ok(words) => words,
            Err(e) => return report(console.out(), &e),
        };

        let lookup = self.lookup.client(&self.config.lookup_url);
        let options = SessionOptions {
            ranked,
            log: &self.log,
            speaker: &self.speaker,
            lookup: lookup.as_ref().map(|l| l as &dyn DefinitionLookup),
        };
        let mut session = match QuizSession::new(words, &self.dictionary, options, &mut self.rng) {
            Ok(session) => session,
            Err(e) => return report(console.out(), &e),
        };
        tracing::info!(ranked, ?scope, "quiz started");
        session.run(console)
    }

    /// `None` when the user ended up with nothing to choose from, or backed
    /// out with Ctrl-C.
    fn select_words(
        &mut self,
        console: &mut dyn Console,
        scope: Scope,
    ) -> io::Result<Option<Vec<String>>> {
        match scope {
            Scope::All => Ok(Some(selector::select_all(&self.dictionary))),
            Scope::Letter => {
                let letter = console::prompt_key(console, "Which letter? ", Some("Type a letter a-z"), |key| match key {
                    Key::Char(ch) if ch.is_ascii_alphabetic() => Some(Some(ch.to_ascii_lowercase())),
                    Key::Interrupt => Some(None),
                    _ => None,
                })?;
                Ok(letter.map(|letter| selector::select_by_letter(&self.dictionary, letter)))
            }
            Scope::List => {
                let Some(path) = self.choose_list(console)? else {
                    return Ok(None);
                };
                let list_words = match selector::load_list(&path) {
                    Ok(words) => words,
                    Err(e) => {
                        report(console.out(), &e)?;
                        return Ok(None);
                    }
                };
                let selection = selector::select_from_list(&self.dictionary, &list_words);
                for word in &selection.missing {
                    let warning = format!("{word} is not in the dictionary");
                    writeln!(console.out(), "{}", theme::highlight(warning))?;
                }
                Ok(Some(selection.words))
            }
        }
    }

    fn choose_list(&self, console: &mut dyn Console) -> io::Result<Option<PathBuf>> {
        let lists = match selector::discover_lists(&self.config.lists_dir) {
            Ok(lists) => lists,
            Err(e) => {
                report(console.out(), &e)?;
                return Ok(None);
            }
        };
        if lists.is_empty() {
            let note = format!("No .list files in {}", self.config.lists_dir.display());
            writeln!(console.out(), "{}", theme::highlight(note))?;
            return Ok(None);
        }
        for (i, path) in lists.iter().enumerate() {
            let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
            writeln!(console.out(), "({}) {name}", i + 1)?;
        }

        let count = lists.len();
        let index = if count <= 9 {
            let choice = console::prompt_key(console, "Which list? ", Some("No such list"), |key| match key {
                Key::Char(ch) => ch
                    .to_digit(10)
                    .map(|d| d as usize)
                    .filter(|d| (1..=count).contains(d))
                    .map(Some),
                Key::Interrupt => Some(None),
                _ => None,
            })?;
            let Some(index) = choice else {
                return Ok(None);
            };
            index
        } else {
            loop {
                let answer = console::prompt_line(console, "Which list? ")?;
                match answer.parse::<usize>() {
                    Ok(n) if (1..=count).contains(&n) => break n,
                    _ => writeln!(console.out(), "{}", theme::highlight("No such list"))?,
                }
            }
        };
        Ok(lists.into_iter().nth(index - 1))
    }
}

fn prompt_sample_size(console: &mut dyn Console) -> io::Result<SampleSize> {
    loop {
        let answer = console::prompt_line(console, "How many words to quiz? [all] ")?;
        match answer.parse::<SampleSize>() {
            Ok(size) => return Ok(size),
            Err(()) => writeln!(console.out(), "{}", theme::highlight("Must be numeric"))?,
        }
    }
}

fn report(out: &mut dyn Write, error: &QuizError) -> io::Result<SessionEnd> {
    let message = match error {
        QuizError::EmptySet => "No words to quiz".to_string(),
        other => other.to_string(),
    };
    writeln!(out, "{}", theme::highlight(message))?;
    Ok(SessionEnd::Menu)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::console::scripted::ScriptedConsole;
    use tempfile::TempDir;

    fn make_test_app(words: &str) -> (TempDir, App) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("words.txt"), words).unwrap();
        let config = Config {
            dictionary_path: dir.path().join("words.txt"),
            results_path: dir.path().join("results.txt"),
            lists_dir: dir.path().to_path_buf(),
            speech_command: "definitely-not-a-real-tts-binary-xyz".to_string(),
            ..Config::default()
        };
        let app = App::with_rng(config, SmallRng::seed_from_u64(11));
        (dir, app)
    }

    #[test]
    fn quit_from_main_menu() {
        let (_dir, mut app) = make_test_app("apt - suitable\n");
        let mut console = ScriptedConsole::new().typed("q");
        app.run(&mut console).unwrap();
        assert!(console.output().contains("Dictionary loaded: 1 words."));
    }

    #[test]
    fn broken_dictionary_is_reported_and_quiz_refuses_to_start() {
        let (_dir, mut app) = make_test_app("apt suitable\n");
        let mut console = ScriptedConsole::new().typed("2").lines([""]).typed("q");
        app.run(&mut console).unwrap();
        let output = console.output();
        assert!(output.contains("Could not load dictionary"));
        assert!(output.contains("No words to quiz"));
    }

    #[test]
    fn letter_without_words_returns_to_menu() {
        let (_dir, mut app) = make_test_app("apt - suitable\nboon - benefit\n");
        let mut console = ScriptedConsole::new().typed("4z").lines(["all"]).typed("q");
        app.run(&mut console).unwrap();
        assert!(console.output().contains("No words to quiz"));
    }

    #[test]
    fn oversized_sample_returns_to_menu() {
        let (_dir, mut app) = make_test_app("apt - suitable\nboon - benefit\n");
        let mut console = ScriptedConsole::new().typed("2").lines(["5"]).typed("q");
        app.run(&mut console).unwrap();
        assert!(console.output().contains("cannot pick 5 words from a set of 2"));
    }

    #[test]
    fn non_numeric_count_reprompts() {
        let (_dir, mut app) = make_test_app("apt - suitable\n");
        let mut console = ScriptedConsole::new()
            .typed("2")
            .lines(["lots", "1"])
            .typed("m")
            .typed("q");
        app.run(&mut console).unwrap();
        let output = console.output();
        assert!(output.contains("Must be numeric"));
        assert!(output.contains("Set contains 1 words:"));
    }

    #[test]
    fn list_quiz_warns_about_missing_words() {
        let (dir, mut app) = make_test_app("apt - suitable\nboon - benefit\n");
        fs::write(dir.path().join("week1.list"), "boon\nzeal\n").unwrap();
        let mut console = ScriptedConsole::new()
            .typed("61")
            .lines([""])
            .typed("m")
            .typed("q");
        app.run(&mut console).unwrap();
        let output = console.output();
        assert!(output.contains("(1) week1.list"));
        assert!(output.contains("zeal is not in the dictionary"));
        assert!(output.contains("Set contains 1 words:"));
        assert!(output.contains("boon"));
    }

    #[test]
    fn interrupt_at_letter_prompt_returns_to_menu() {
        let (_dir, mut app) = make_test_app("apt - suitable\n");
        let mut console = ScriptedConsole::new()
            .typed("3")
            .keys([Key::Char('1'), Key::Interrupt])
            .typed("q");
        app.run(&mut console).unwrap();
        assert_eq!(console.remaining_keys(), 0);
        let output = console.output();
        assert_eq!(output.matches("Type a letter a-z").count(), 1);
        assert!(!output.contains("How many words"));
        assert_eq!(output.matches("Select mode:").count(), 2);
    }

    #[test]
    fn interrupt_at_list_prompt_returns_to_menu() {
        let (dir, mut app) = make_test_app("apt - suitable\n");
        fs::write(dir.path().join("week1.list"), "apt\n").unwrap();
        let mut console = ScriptedConsole::new()
            .typed("5")
            .keys([Key::Char('7'), Key::Interrupt])
            .typed("q");
        app.run(&mut console).unwrap();
        assert_eq!(console.remaining_keys(), 0);
        let output = console.output();
        assert_eq!(output.matches("No such list").count(), 1);
        assert!(!output.contains("How many words"));
    }

    #[test]
    fn unknown_menu_key_is_hinted() {
        let (_dir, mut app) = make_test_app("apt - suitable\n");
        let mut console = ScriptedConsole::new().typed("xq");
        app.run(&mut console).unwrap();
        assert!(console.output().contains("Unknown option"));
    }

    #[test]
    fn no_list_files_returns_to_menu() {
        let (_dir, mut app) = make_test_app("apt - suitable\n");
        let mut console = ScriptedConsole::new().typed("5").typed("q");
        app.run(&mut console).unwrap();
        assert!(console.output().contains("No .list files"));
    }

    #[test]
    fn quit_inside_quiz_ends_run() {
        let (_dir, mut app) = make_test_app("apt - suitable\n");
        let mut console = ScriptedConsole::new().typed("1").lines([""]).typed("q");
        app.run(&mut console).unwrap();
        assert_eq!(console.remaining_keys(), 0);
    }

    #[test]
    fn lookup_settings_toggle() {
        let (_dir, mut app) = make_test_app("apt - suitable\n");
        let mut console = ScriptedConsole::new()
            .typed("o")
            .lines(["secret-token"])
            .typed("o")
            .lines([""])
            .typed("q");
        app.run(&mut console).unwrap();
        let output = console.output();
        assert!(output.contains("Definition lookup on."));
        assert!(output.contains("Definition lookup off."));
        assert!(!app.lookup.enabled);
    }

    #[test]
    fn reload_picks_up_edits() {
        let (dir, mut app) = make_test_app("apt - suitable\n");
        let path = dir.path().join("words.txt");
        let mut console = ScriptedConsole::new().typed("l").typed("q");
        fs::write(&path, "apt - suitable\nboon - benefit\n").unwrap();
        app.run(&mut console).unwrap();
        assert!(console.output().contains("Dictionary loaded: 2 words."));
        assert_eq!(app.dictionary.len(), 2);
    }
}
