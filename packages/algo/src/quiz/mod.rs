//! Quiz Generator
//!
//! Builds multiple-choice questions from a [`WordBank`] level. Every
//! question has four distinct options, one of them the target word.
//! Randomness comes from the caller so tests and demos can pin a seed.

pub mod decoration;
pub mod word_bank;

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::QuizError;
use crate::types::{
    LevelSummary, QuizQuestion, QuizSet, DEFAULT_QUIZ_SIZE, OPTIONS_PER_QUESTION,
};

pub use decoration::{Decorations, EmojiTable, UNKNOWN_THEME_EMOJI, UNKNOWN_WORD_EMOJI};
pub use word_bank::{WordBank, WordLevel};

/// Deterministic generator for reproducible quizzes.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOptions {
    pub count: usize,
    /// Draw target words without replacement. Off by default: a quiz may
    /// ask the same word twice.
    pub distinct_targets: bool,
}

impl QuizOptions {
    pub fn with_count(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }
}

impl Default for QuizOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_QUIZ_SIZE,
            distinct_targets: false,
        }
    }
}

#[derive(Clone)]
pub struct QuizGenerator {
    bank: Arc<WordBank>,
    decorations: Arc<dyn Decorations>,
}

impl QuizGenerator {
    pub fn new(bank: Arc<WordBank>, decorations: Arc<dyn Decorations>) -> Self {
        Self { bank, decorations }
    }

    pub fn builtin() -> Self {
        Self::new(Arc::new(WordBank::builtin()), Arc::new(EmojiTable::builtin()))
    }

    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    pub fn levels(&self) -> BTreeMap<String, LevelSummary> {
        self.bank
            .levels()
            .map(|(id, level)| {
                (
                    id.to_string(),
                    LevelSummary {
                        theme: level.theme.clone(),
                        emoji: self.decorations.theme_emoji(&level.theme),
                        word_count: level.words.len(),
                    },
                )
            })
            .collect()
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        level: &str,
        options: QuizOptions,
        rng: &mut R,
    ) -> Result<QuizSet, QuizError> {
        let entry = self
            .bank
            .get(level)
            .ok_or_else(|| QuizError::LevelNotFound(level.to_string()))?;

        let available = entry.distinct_words();
        if available < OPTIONS_PER_QUESTION {
            return Err(QuizError::InsufficientWords {
                level: level.to_string(),
                available,
                required: OPTIONS_PER_QUESTION,
            });
        }

        let targets = if options.distinct_targets {
            if options.count > available {
                return Err(QuizError::InsufficientWords {
                    level: level.to_string(),
                    available,
                    required: options.count,
                });
            }
            let mut pool = unique_in_order(&entry.words);
            pool.shuffle(rng);
            pool.truncate(options.count);
            pool
        } else {
            (0..options.count)
                .map(|_| pick(&entry.words, rng))
                .collect()
        };

        let questions = targets
            .into_iter()
            .enumerate()
            .map(|(index, word)| QuizQuestion {
                id: index + 1,
                emoji: self.decorations.word_emoji(word),
                options: build_options(word, &entry.words, rng),
                word: word.to_string(),
            })
            .collect();

        Ok(QuizSet {
            level: level.to_string(),
            theme: entry.theme.clone(),
            emoji: self.decorations.theme_emoji(&entry.theme),
            questions,
        })
    }
}

/// Target plus distractors drawn by rejection sampling, then shuffled.
/// Callers guarantee `words` holds at least four distinct entries.
fn build_options<R: Rng + ?Sized>(target: &str, words: &[String], rng: &mut R) -> Vec<String> {
    let mut options = vec![target.to_string()];
    while options.len() < OPTIONS_PER_QUESTION {
        let candidate = pick(words, rng);
        if !options.iter().any(|existing| existing == candidate) {
            options.push(candidate.to_string());
        }
    }
    options.shuffle(rng);
    options
}

fn pick<'a, R: Rng + ?Sized>(words: &'a [String], rng: &mut R) -> &'a str {
    &words[rng.gen_range(0..words.len())]
}

fn unique_in_order(words: &[String]) -> Vec<&str> {
    let mut seen = HashSet::new();
    words
        .iter()
        .filter(|w| seen.insert(w.as_str()))
        .map(String::as_str)
        .collect()
}
