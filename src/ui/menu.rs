use std::io::{self, Write};

use crate::ui::theme;

pub struct MenuItem {
    pub key: char,
    pub label: &'static str,
}

/// What a main menu key selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Quiz { scope: Scope, ranked: bool },
    Results,
    ReloadDictionary,
    LookupSettings,
    Quit,
}

/// Which words a quiz draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    All,
    Letter,
    List,
}

pub const MAIN_MENU: &[MenuItem] = &[
    MenuItem { key: '1', label: "All words, ranked" },
    MenuItem { key: '2', label: "All words, unranked" },
    MenuItem { key: '3', label: "Only one starting letter, ranked" },
    MenuItem { key: '4', label: "Only one starting letter, unranked" },
    MenuItem { key: '5', label: "From word list, ranked" },
    MenuItem { key: '6', label: "From word list, unranked" },
    MenuItem { key: 'r', label: "Results" },
    MenuItem { key: 'l', label: "Reload dictionary" },
    MenuItem { key: 'o', label: "Online definition lookup" },
    MenuItem { key: 'q', label: "Quit" },
];

pub const QUIZ_HELP: &[MenuItem] = &[
    MenuItem { key: '⏎', label: "Reveal definition" },
    MenuItem { key: 's', label: "Speak word" },
    MenuItem { key: 'm', label: "Main menu" },
    MenuItem { key: 'q', label: "Quit" },
    MenuItem { key: 'h', label: "Help (or ?)" },
];

impl MenuAction {
    pub fn from_char(ch: char) -> Option<Self> {
        let quiz = |scope, ranked| Some(MenuAction::Quiz { scope, ranked });
        match ch.to_ascii_lowercase() {
            '1' => quiz(Scope::All, true),
            '2' => quiz(Scope::All, false),
            '3' => quiz(Scope::Letter, true),
            '4' => quiz(Scope::Letter, false),
            '5' => quiz(Scope::List, true),
            '6' => quiz(Scope::List, false),
            'r' => Some(MenuAction::Results),
            'l' => Some(MenuAction::ReloadDictionary),
            'o' => Some(MenuAction::LookupSettings),
            'q' => Some(MenuAction::Quit),
            _ => None,
        }
    }
}

pub fn render(out: &mut dyn Write, title: &str, items: &[MenuItem]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", theme::info(title))?;
    writeln!(out)?;
    for item in items {
        writeln!(out, "({}) {}", item.key.to_ascii_uppercase(), item.label)?;
    }
    writeln!(out)
}
