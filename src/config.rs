//! Application configuration
//!
//! `config/<env>.yaml` holds the logging settings and a `bench` section. Every
//! field has a default, so a partial file or no file at all still loads.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use thiserror::Error;

use crate::bench::sample::Bounds;
use crate::bench::trials::TrialParams;
use crate::core_types::{DEFAULT_TRIALS, MAX_TRIALS, Seed};
use crate::error::BenchError;
use crate::solver::SubarrayMode;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    /// Keep every Nth trial latency
    pub sample_rate: usize,
    /// Emit per-trial events (target `TRIAL`)
    pub enable_tracing: bool,
    pub bench: BenchConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: "./logs".to_string(),
            log_file: "subarray_bench.log".to_string(),
            use_json: false,
            rotation: "never".to_string(),
            sample_rate: 1,
            enable_tracing: false,
            bench: BenchConfig::default(),
        }
    }
}

/// Benchmark parameters as written in YAML.
///
/// Signed fields so a negative value is reported as such instead of failing
/// to deserialize. [`BenchConfig::to_params`] does the validation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BenchConfig {
    pub length: i64,
    pub initial_seed: Seed,
    pub min_value: i64,
    pub max_value: i64,
    pub trials: i64,
    pub mode: SubarrayMode,
    /// 0 = sequential, otherwise parallel solver threads
    pub workers: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            length: 10_000,
            initial_seed: 42,
            min_value: -10,
            max_value: 10,
            trials: DEFAULT_TRIALS as i64,
            mode: SubarrayMode::NonEmpty,
            workers: 0,
        }
    }
}

impl BenchConfig {
    /// Validate into run parameters.
    ///
    /// # Errors
    /// * `NegativeLength` - `length < 0`
    /// * `EmptySequence` - `length == 0`
    /// * `InvertedBounds` - `min_value > max_value`
    /// * `NegativeTrials` - `trials < 0`
    /// * `TooManyTrials` - `trials > MAX_TRIALS`
    pub fn to_params(&self) -> Result<TrialParams, BenchError> {
        if self.length < 0 {
            return Err(BenchError::NegativeLength(self.length));
        }
        if self.length == 0 {
            return Err(BenchError::EmptySequence);
        }
        let bounds = Bounds::new(self.min_value, self.max_value)?;
        let requested =
            u64::try_from(self.trials).map_err(|_| BenchError::NegativeTrials(self.trials))?;
        let trials = u32::try_from(requested)
            .ok()
            .filter(|&t| t <= MAX_TRIALS)
            .ok_or(BenchError::TooManyTrials {
                requested,
                max: MAX_TRIALS,
            })?;
        let len =
            usize::try_from(self.length).map_err(|_| BenchError::NegativeLength(self.length))?;

        Ok(TrialParams::new(len, bounds, self.initial_seed)
            .with_trials(trials)
            .with_mode(self.mode))
    }
}

impl AppConfig {
    /// Load `config/<env>.yaml`. A missing file means built-in defaults.
    pub fn load(env: &str) -> Result<Self, ConfigError> {
        let config_path = format!("config/{}.yaml", env);
        match fs::read_to_string(&config_path) {
            Ok(content) => Self::from_yaml_str(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: config_path,
                source,
            }),
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }
}
