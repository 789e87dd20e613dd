use std::process::{Command, Stdio};

use crate::error::{QuizError, Result};

pub trait Speaker {
    fn speak(&self, word: &str) -> Result<()>;
}

/// Runs a text-to-speech program with the word as its last argument.
/// Output is discarded and the exit status only reported, never acted on.
pub struct CommandSpeaker {
    program: String,
    args: Vec<String>,
}

impl CommandSpeaker {
    /// `command` is split on whitespace: program first, then fixed arguments.
    pub fn new(command: &str) -> Self {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next().unwrap_or_default();
        Self {
            program,
            args: parts.collect(),
        }
    }
}

impl Speaker for CommandSpeaker {
    fn speak(&self, word: &str) -> Result<()> {
        if self.program.is_empty() {
            return Err(QuizError::External("no speech command configured".to_string()));
        }
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(word)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| QuizError::External(format!("{}: {e}", self.program)))?;
        if status.success() {
            Ok(())
        } else {
            Err(QuizError::External(format!("{} exited with {status}", self.program)))
        }
    }
}
