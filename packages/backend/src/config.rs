use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use nvld_algo::{
    AdjustmentReport, DifficultyPolicy, PolicyError, StatusStyle, WordBank, WordBankError,
};
use thiserror::Error;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_BCRYPT_COST: u32 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read word bank {path}: {source}")]
    WordBankIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    WordBank(#[from] WordBankError),
    #[error("invalid difficulty policy: {0}")]
    Policy(#[from] PolicyError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HasherKind {
    Bcrypt,
    /// Unsalted SHA-256 hex digests, for accounts imported from the older
    /// deployment.
    Sha256,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    /// Directory for the rolling log file; `None` keeps logs on stdout only.
    pub log_dir: Option<PathBuf>,
    pub difficulty: DifficultyPolicy,
    pub hasher: HasherKind,
    pub bcrypt_cost: u32,
    pub word_bank_path: Option<PathBuf>,
    /// Reseeds every quiz request with this value, so each request gets the
    /// identical quiz. Unset means fresh randomness per request.
    pub quiz_seed: Option<u64>,
    /// Values that could not be parsed and fell back to defaults. Logged once
    /// tracing is up.
    pub warnings: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut warnings = Vec::new();
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let port = parse_or(&mut warnings, "PORT", get("PORT"), DEFAULT_PORT);
        let host = parse_or(
            &mut warnings,
            "HOST",
            get("HOST"),
            IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
        );
        let log_level = get("RUST_LOG").unwrap_or_else(|| "info".to_string());
        let log_dir = get("ENABLE_FILE_LOGS")
            .filter(|flag| flag == "true" || flag == "1")
            .map(|_| PathBuf::from(get("LOG_DIR").unwrap_or_else(|| "./logs".to_string())));

        let profile = match get("DIFFICULTY_PROFILE").as_deref() {
            None | Some("quick-check") | Some("quick_check") => DifficultyPolicy::quick_check(),
            Some("activity") => DifficultyPolicy::activity(),
            Some(other) => {
                warnings.push(format!(
                    "unknown DIFFICULTY_PROFILE {other:?}, using quick-check"
                ));
                DifficultyPolicy::quick_check()
            }
        };

        // Unset or unknown keeps the profile's own choice.
        let mut difficulty = profile;
        match get("DIFFICULTY_STATUS_STYLE").as_deref() {
            None => {}
            Some("directional") => difficulty.status_style = StatusStyle::Directional,
            Some("constant") => difficulty.status_style = StatusStyle::Constant,
            Some(other) => warnings.push(format!(
                "unknown DIFFICULTY_STATUS_STYLE {other:?}, keeping the profile default"
            )),
        }
        match get("DIFFICULTY_ADJUSTMENT_REPORT").as_deref() {
            None => {}
            Some("intended") => difficulty.adjustment_report = AdjustmentReport::Intended,
            Some("applied") => difficulty.adjustment_report = AdjustmentReport::Applied,
            Some(other) => warnings.push(format!(
                "unknown DIFFICULTY_ADJUSTMENT_REPORT {other:?}, keeping the profile default"
            )),
        }

        let hasher = match get("PASSWORD_HASHER").as_deref() {
            None | Some("bcrypt") => HasherKind::Bcrypt,
            Some("sha256") => HasherKind::Sha256,
            Some(other) => {
                warnings.push(format!("unknown PASSWORD_HASHER {other:?}, using bcrypt"));
                HasherKind::Bcrypt
            }
        };

        let bcrypt_cost = parse_or(
            &mut warnings,
            "BCRYPT_COST",
            get("BCRYPT_COST"),
            DEFAULT_BCRYPT_COST,
        );
        let quiz_seed = get("QUIZ_SEED").and_then(|raw| match raw.parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                warnings.push(format!("invalid QUIZ_SEED {raw:?}, ignoring"));
                None
            }
        });

        Self {
            host,
            port,
            log_level,
            log_dir,
            difficulty,
            hasher,
            bcrypt_cost,
            word_bank_path: get("WORD_BANK_PATH").map(PathBuf::from),
            quiz_seed,
            warnings,
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn load_word_bank(&self) -> Result<WordBank, ConfigError> {
        match &self.word_bank_path {
            Some(path) => load_word_bank_file(path),
            None => Ok(WordBank::builtin()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn load_word_bank_file(path: &Path) -> Result<WordBank, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::WordBankIo {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(WordBank::from_json_str(&raw)?)
}

fn parse_or<T: std::str::FromStr>(
    warnings: &mut Vec<String>,
    key: &str,
    raw: Option<String>,
    default: T,
) -> T {
    match raw {
        None => default,
        Some(raw) => raw.parse::<T>().unwrap_or_else(|_| {
            warnings.push(format!("invalid {key} {raw:?}, using default"));
            default
        }),
    }
}
