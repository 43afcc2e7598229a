//! # nvld-algo - vocabulary learning core logic
//!
//! Pure Rust, I/O-free building blocks behind the NVLD vocabulary service:
//!
//! - **Difficulty Advisor** - threshold rule from activity time to next grade
//! - **Performance Aggregator** - per-user score statistics and suggestion
//! - **Quiz Generator** - four-option questions from a themed word bank
//!
//! Every operation is a synchronous function over immutable inputs; quiz
//! generation takes the random source as an argument.
//!
//! ## Modules
//!
//! - [`difficulty`] - [`DifficultyPolicy`] profiles and [`DifficultyAdvisor`]
//! - [`performance`] - [`aggregate`] and [`compare`]
//! - [`quiz`] - [`QuizGenerator`], [`WordBank`], emoji [`Decorations`]
//! - [`types`] - shared result types and constants
//! - [`error`] - error enums
//!
//! ## Example
//!
//! ```rust
//! use nvld_algo::{quiz, DifficultyAdvisor, DifficultyPolicy, QuizGenerator, QuizOptions};
//!
//! let advisor = DifficultyAdvisor::new(DifficultyPolicy::quick_check());
//! assert_eq!(advisor.recommend(3, 20).adjusted_grade, 4);
//!
//! let generator = QuizGenerator::builtin();
//! let mut rng = quiz::seeded_rng(42);
//! let set = generator.generate("level1", QuizOptions::default(), &mut rng).unwrap();
//! assert_eq!(set.questions.len(), 10);
//! ```

pub mod difficulty;
pub mod error;
pub mod performance;
pub mod quiz;
pub mod types;

pub use types::*;

pub use difficulty::{AdjustmentReport, DifficultyAdvisor, DifficultyPolicy, Pace, StatusStyle};
pub use error::{PolicyError, QuizError, WordBankError};
pub use performance::{aggregate, compare, suggestion_for};
pub use quiz::{Decorations, EmojiTable, QuizGenerator, QuizOptions, WordBank, WordLevel};
