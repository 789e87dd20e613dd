use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Largest UTC offset chrono's `FixedOffset` accepts, in minutes.
const MAX_OFFSET_MINUTES: i32 = 18 * 60;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_dictionary_path")]
    pub dictionary_path: PathBuf,
    #[serde(default = "default_results_path")]
    pub results_path: PathBuf,
    #[serde(default = "default_lists_dir")]
    pub lists_dir: PathBuf,
    #[serde(default = "default_speech_command")]
    pub speech_command: String,
    #[serde(default = "default_lookup_url")]
    pub lookup_url: String,
    /// Fixed zone for results timestamps. Unset means the system local zone.
    #[serde(default)]
    pub utc_offset_minutes: Option<i32>,
}

fn default_dictionary_path() -> PathBuf {
    PathBuf::from("words.txt")
}
fn default_results_path() -> PathBuf {
    PathBuf::from("results.txt")
}
fn default_lists_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_speech_command() -> String {
    "say".to_string()
}
fn default_lookup_url() -> String {
    "https://wordsapiv1.p.rapidapi.com/words/{word}".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary_path: default_dictionary_path(),
            results_path: default_results_path(),
            lists_dir: default_lists_dir(),
            speech_command: default_speech_command(),
            lookup_url: default_lookup_url(),
            utc_offset_minutes: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            let mut config: Config = toml::from_str(&content)
                .with_context(|| format!("parsing {}", path.display()))?;
            config.validate();
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lexdrill")
            .join("config.toml")
    }

    /// Restore blank fields to their defaults and clamp the UTC offset into
    /// the range chrono accepts.
    pub fn validate(&mut self) {
        if self.dictionary_path.as_os_str().is_empty() {
            self.dictionary_path = default_dictionary_path();
        }
        if self.results_path.as_os_str().is_empty() {
            self.results_path = default_results_path();
        }
        if self.lists_dir.as_os_str().is_empty() {
            self.lists_dir = default_lists_dir();
        }
        if self.speech_command.trim().is_empty() {
            self.speech_command = default_speech_command();
        }
        if !self.lookup_url.contains("{word}") {
            self.lookup_url = default_lookup_url();
        }
        if let Some(offset) = self.utc_offset_minutes.as_mut() {
            *offset = (*offset).clamp(-MAX_OFFSET_MINUTES, MAX_OFFSET_MINUTES);
        }
    }
}
