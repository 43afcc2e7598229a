use std::sync::Arc;
use std::time::{Instant, SystemTime};

use nvld_algo::quiz::seeded_rng;
use nvld_algo::{DifficultyAdvisor, EmojiTable, QuizGenerator};
use rand::{RngCore, SeedableRng};

use crate::auth::{hasher_for, PasswordHasher};
use crate::config::{Config, ConfigError};
use crate::db::{MemoryStore, RecordStore, UserStore};

#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    started_at_system: SystemTime,
    advisor: Arc<DifficultyAdvisor>,
    quiz: QuizGenerator,
    quiz_seed: Option<u64>,
    records: Arc<dyn RecordStore>,
    users: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
}

impl AppState {
    pub fn new(
        advisor: DifficultyAdvisor,
        quiz: QuizGenerator,
        records: Arc<dyn RecordStore>,
        users: Arc<dyn UserStore>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            started_at: Instant::now(),
            started_at_system: SystemTime::now(),
            advisor: Arc::new(advisor),
            quiz,
            quiz_seed: None,
            records,
            users,
            hasher,
        }
    }

    /// Wires the in-memory store, the configured hasher and word bank.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        config.difficulty.validate()?;

        let bank = config.load_word_bank()?;
        for problem in bank.validate() {
            tracing::warn!(error = %problem, "word bank level cannot produce quizzes");
        }

        let store = Arc::new(MemoryStore::new());
        let quiz = QuizGenerator::new(Arc::new(bank), Arc::new(EmojiTable::builtin()));

        let state = Self::new(
            DifficultyAdvisor::new(config.difficulty.clone()),
            quiz,
            Arc::clone(&store) as Arc<dyn RecordStore>,
            store,
            hasher_for(config.hasher, config.bcrypt_cost),
        );
        Ok(state.with_quiz_seed(config.quiz_seed))
    }

    pub fn with_quiz_seed(mut self, seed: Option<u64>) -> Self {
        self.quiz_seed = seed;
        self
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn started_at_system(&self) -> SystemTime {
        self.started_at_system
    }

    pub fn advisor(&self) -> &DifficultyAdvisor {
        &self.advisor
    }

    pub fn quiz(&self) -> &QuizGenerator {
        &self.quiz
    }

    /// Per-request random source; seeded when a quiz seed is configured.
    pub fn quiz_rng(&self) -> Box<dyn RngCore + Send> {
        match self.quiz_seed {
            Some(seed) => Box::new(seeded_rng(seed)),
            None => Box::new(rand::rngs::StdRng::from_entropy()),
        }
    }

    pub fn records(&self) -> &dyn RecordStore {
        self.records.as_ref()
    }

    pub fn users(&self) -> &dyn UserStore {
        self.users.as_ref()
    }

    pub fn hasher(&self) -> &dyn PasswordHasher {
        self.hasher.as_ref()
    }
}
