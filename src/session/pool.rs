use rand::Rng;

use crate::error::{QuizError, Result};

/// One presented word and where it sits in the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Round {
    pub word: String,
    /// 1-based position within the current pass over the set.
    pub position: usize,
    /// 1-based count of rounds since the session started. Not reset on reload.
    pub number: usize,
    /// The pool was refilled before this draw.
    pub reloaded: bool,
}

/// The bounded set and the words not yet shown in the current pass.
pub struct WordPool<R> {
    words: Vec<String>,
    remaining: Vec<String>,
    rounds: usize,
    rng: R,
}

impl<R: Rng> WordPool<R> {
    pub fn new(words: Vec<String>, rng: R) -> Result<Self> {
        if words.is_empty() {
            return Err(QuizError::EmptySet);
        }
        Ok(Self {
            words,
            remaining: Vec::new(),
            rounds: 0,
            rng,
        })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// Refill when exhausted, then draw one word uniformly without replacement.
    pub fn next_round(&mut self) -> Round {
        let reloaded = self.remaining.is_empty();
        if reloaded {
            self.remaining = self.words.clone();
        }
        let idx = self.rng.gen_range(0..self.remaining.len());
        let word = self.remaining.swap_remove(idx);
        self.rounds += 1;
        Round {
            word,
            position: self.words.len() - self.remaining.len(),
            number: self.rounds,
            reloaded,
        }
    }
}
