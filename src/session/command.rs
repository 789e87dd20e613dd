use crate::console::Key;

/// What the user can do while a word is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal,
    Speak,
    Help,
    Menu,
    Quit,
}

impl Command {
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Enter => Some(Command::Reveal),
            Key::Interrupt => Some(Command::Quit),
            Key::Char(ch) => match ch.to_ascii_lowercase() {
                'q' => Some(Command::Quit),
                'm' => Some(Command::Menu),
                'h' | '?' => Some(Command::Help),
                's' => Some(Command::Speak),
                _ => None,
            },
            Key::Other => None,
        }
    }
}

/// Self-assessment after a reveal in ranked mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Judgement {
    Correct,
    Incorrect,
    Skip,
}

impl Judgement {
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Char(ch) => match ch.to_ascii_lowercase() {
                'y' => Some(Judgement::Correct),
                'n' => Some(Judgement::Incorrect),
                's' => Some(Judgement::Skip),
                _ => None,
            },
            _ => None,
        }
    }

    /// The recorded outcome, or `None` when nothing is written.
    pub fn outcome(self) -> Option<bool> {
        match self {
            Judgement::Correct => Some(true),
            Judgement::Incorrect => Some(false),
            Judgement::Skip => None,
        }
    }
}
