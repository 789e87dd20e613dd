use std::collections::VecDeque;
use std::io::{self, Write};

use crate::console::{Console, Key};

/// Console fed from queued keys and lines, capturing everything printed.
/// Running out of input is an `UnexpectedEof` error, so a script that is too
/// short ends the run instead of hanging.
#[derive(Default)]
pub struct ScriptedConsole {
    keys: VecDeque<Key>,
    lines: VecDeque<String>,
    output: Vec<u8>,
}

impl ScriptedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.keys.extend(keys);
        self
    }

    /// Queue `Key::Char` presses for every character of `chars`.
    pub fn typed(self, chars: &str) -> Self {
        self.keys(chars.chars().map(Key::Char))
    }

    pub fn lines<S: Into<String>>(mut self, lines: impl IntoIterator<Item = S>) -> Self {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    pub fn remaining_keys(&self) -> usize {
        self.keys.len()
    }
}

fn exhausted(what: &str) -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, format!("script has no more {what}"))
}

impl Console for ScriptedConsole {
    fn read_key(&mut self) -> io::Result<Key> {
        self.keys.pop_front().ok_or_else(|| exhausted("keys"))
    }

    fn read_line(&mut self) -> io::Result<String> {
        let line = self.lines.pop_front().ok_or_else(|| exhausted("lines"))?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn out(&mut self) -> &mut dyn Write {
        &mut self.output
    }
}
