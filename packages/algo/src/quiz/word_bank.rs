//! Themed word lists keyed by level id.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{QuizError, WordBankError};
use crate::types::OPTIONS_PER_QUESTION;

const EVERYDAY_OBJECTS: [&str; 10] = [
    "apple", "banana", "cat", "dog", "elephant", "fish", "house", "book", "pen", "car",
];

const COLORS_AND_SHAPES: [&str; 10] = [
    "red",
    "blue",
    "green",
    "yellow",
    "circle",
    "square",
    "triangle",
    "rectangle",
    "oval",
    "star",
];

const SCHOOL_ITEMS: [&str; 10] = [
    "pencil",
    "notebook",
    "teacher",
    "student",
    "classroom",
    "desk",
    "chair",
    "backpack",
    "ruler",
    "eraser",
];

const ANIMALS: [&str; 10] = [
    "lion", "tiger", "bear", "giraffe", "monkey", "zebra", "penguin", "kangaroo", "dolphin",
    "whale",
];

const FOOD: [&str; 10] = [
    "pizza", "burger", "pasta", "rice", "bread", "cheese", "milk", "juice", "water", "cookie",
];

/// One level of the word bank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordLevel {
    pub theme: String,
    pub words: Vec<String>,
}

impl WordLevel {
    pub fn new(theme: impl Into<String>, words: &[&str]) -> Self {
        Self {
            theme: theme.into(),
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    pub fn distinct_words(&self) -> usize {
        self.words.iter().collect::<HashSet<_>>().len()
    }
}

/// Immutable level table, shared read-only after startup.
///
/// JSON shape: `{"level1": {"theme": "...", "words": ["..."]}}`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordBank {
    levels: BTreeMap<String, WordLevel>,
}

impl WordBank {
    pub fn new(levels: BTreeMap<String, WordLevel>) -> Self {
        Self { levels }
    }

    /// The five themed levels the app ships with.
    pub fn builtin() -> Self {
        let levels = [
            ("level1", WordLevel::new("Everyday Objects", &EVERYDAY_OBJECTS)),
            ("level2", WordLevel::new("Colors and Shapes", &COLORS_AND_SHAPES)),
            ("level3", WordLevel::new("School Items", &SCHOOL_ITEMS)),
            ("level4", WordLevel::new("Animals", &ANIMALS)),
            ("level5", WordLevel::new("Food", &FOOD)),
        ];

        Self {
            levels: levels
                .into_iter()
                .map(|(id, level)| (id.to_string(), level))
                .collect(),
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, WordBankError> {
        let bank: WordBank = serde_json::from_str(raw)?;
        if bank.levels.is_empty() {
            return Err(WordBankError::Empty);
        }
        Ok(bank)
    }

    pub fn get(&self, level: &str) -> Option<&WordLevel> {
        self.levels.get(level)
    }

    pub fn levels(&self) -> impl Iterator<Item = (&str, &WordLevel)> {
        self.levels.iter().map(|(id, level)| (id.as_str(), level))
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Levels that cannot fill a four-option question.
    pub fn validate(&self) -> Vec<QuizError> {
        self.levels
            .iter()
            .filter_map(|(id, level)| {
                let available = level.distinct_words();
                (available < OPTIONS_PER_QUESTION).then(|| QuizError::InsufficientWords {
                    level: id.clone(),
                    available,
                    required: OPTIONS_PER_QUESTION,
                })
            })
            .collect()
    }
}
