//! Emoji decoration for words and themes.
//!
//! Pure lookups; unmapped entries get a fixed fallback.

use std::collections::HashMap;

pub const UNKNOWN_WORD_EMOJI: &str = "❓";
pub const UNKNOWN_THEME_EMOJI: &str = "📚";

pub trait Decorations: Send + Sync {
    fn word_emoji(&self, word: &str) -> String;
    fn theme_emoji(&self, theme: &str) -> String;
}

#[derive(Debug, Clone, Default)]
pub struct EmojiTable {
    words: HashMap<String, String>,
    themes: HashMap<String, String>,
}

impl EmojiTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let themes = [
            ("Everyday Objects", "🏠"),
            ("Colors and Shapes", "🎨"),
            ("School Items", "🏫"),
            ("Animals", "🦁"),
            ("Food", "🍕"),
        ];
        let words = [
            ("apple", "🍎"),
            ("banana", "🍌"),
            ("cat", "🐱"),
            ("dog", "🐶"),
            ("elephant", "🐘"),
            ("fish", "🐟"),
            ("house", "🏠"),
            ("book", "📚"),
            ("pen", "🖊️"),
            ("car", "🚗"),
            ("red", "🔴"),
            ("blue", "🔵"),
            ("green", "🟢"),
            ("yellow", "🟡"),
            ("circle", "⭕"),
            ("square", "🟥"),
            ("triangle", "🔺"),
            ("rectangle", "🟩"),
            ("star", "⭐"),
            ("pencil", "✏️"),
            ("teacher", "👩‍🏫"),
            ("student", "👨‍🎓"),
            ("classroom", "🏫"),
            ("desk", "🪑"),
            ("chair", "💺"),
            ("backpack", "🎒"),
            ("lion", "🦁"),
            ("tiger", "🐯"),
            ("bear", "🐻"),
            ("giraffe", "🦒"),
            ("monkey", "🐵"),
            ("zebra", "🦓"),
            ("penguin", "🐧"),
            ("dolphin", "🐬"),
            ("whale", "🐋"),
            ("pizza", "🍕"),
            ("burger", "🍔"),
            ("pasta", "🍝"),
            ("bread", "🍞"),
            ("cheese", "🧀"),
            ("milk", "🥛"),
            ("juice", "🧃"),
            ("water", "💧"),
            ("cookie", "🍪"),
        ];

        let mut table = Self::new();
        for (word, emoji) in words {
            table = table.with_word(word, emoji);
        }
        for (theme, emoji) in themes {
            table = table.with_theme(theme, emoji);
        }
        table
    }

    pub fn with_word(mut self, word: impl Into<String>, emoji: impl Into<String>) -> Self {
        self.words.insert(word.into(), emoji.into());
        self
    }

    pub fn with_theme(mut self, theme: impl Into<String>, emoji: impl Into<String>) -> Self {
        self.themes.insert(theme.into(), emoji.into());
        self
    }
}

impl Decorations for EmojiTable {
    fn word_emoji(&self, word: &str) -> String {
        self.words
            .get(word)
            .cloned()
            .unwrap_or_else(|| UNKNOWN_WORD_EMOJI.to_string())
    }

    fn theme_emoji(&self, theme: &str) -> String {
        self.themes
            .get(theme)
            .cloned()
            .unwrap_or_else(|| UNKNOWN_THEME_EMOJI.to_string())
    }
}
