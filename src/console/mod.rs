pub mod scripted;
pub mod terminal;

use std::io::{self, Write};

/// A single keypress as the quiz sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    /// Ctrl-C, or the terminal going away mid-read.
    Interrupt,
    Other,
}

/// Blocking user input plus somewhere to print.
pub trait Console {
    /// Read one keypress without waiting for Enter.
    fn read_key(&mut self) -> io::Result<Key>;

    /// Read one line, without its trailing newline.
    fn read_line(&mut self) -> io::Result<String>;

    fn out(&mut self) -> &mut dyn Write;
}

/// Print `question` and read keys until `accept` maps one to a value.
/// `incorrect` is printed after every rejected key.
pub fn prompt_key<T>(
    console: &mut dyn Console,
    question: &str,
    incorrect: Option<&str>,
    mut accept: impl FnMut(Key) -> Option<T>,
) -> io::Result<T> {
    loop {
        write!(console.out(), "{question}")?;
        console.out().flush()?;
        let key = console.read_key()?;
        if let Some(value) = accept(key) {
            return Ok(value);
        }
        if let Some(message) = incorrect {
            writeln!(console.out(), "{message}")?;
        }
    }
}

/// Print `question` and return the trimmed answer line.
pub fn prompt_line(console: &mut dyn Console, question: &str) -> io::Result<String> {
    write!(console.out(), "{question}")?;
    console.out().flush()?;
    Ok(console.read_line()?.trim().to_string())
}
