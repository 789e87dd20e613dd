use std::io::{self, BufRead, Stdout, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use crate::console::{Console, Key};

/// The real terminal. Raw mode is held only for the duration of a single
/// keypress read; everything else is ordinary line-buffered I/O.
pub struct Terminal {
    stdout: Stdout,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

fn map_key(key: KeyEvent) -> Key {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Key::Interrupt;
    }
    match key.code {
        KeyCode::Char(ch) => Key::Char(ch),
        KeyCode::Enter => Key::Enter,
        _ => Key::Other,
    }
}

impl Console for Terminal {
    fn read_key(&mut self) -> io::Result<Key> {
        let key = {
            let _raw = RawModeGuard::enable()?;
            loop {
                // Only presses count; some terminals also report release/repeat.
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        break map_key(key);
                    }
                }
            }
        };
        // Echo the key the way a cooked terminal would.
        match key {
            Key::Char(ch) => writeln!(self.stdout, "{ch}")?,
            _ => writeln!(self.stdout)?,
        }
        Ok(key)
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn out(&mut self) -> &mut dyn Write {
        &mut self.stdout
    }
}
