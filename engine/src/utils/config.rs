// FICHIER : engine/src/utils/config.rs

use crate::genetics::operators::selection::DEFAULT_ELIMINATION_RATIO;
use crate::genetics::types::DegeneratePolicy;
use crate::utils::env;
use crate::utils::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Variables d'environnement reconnues (surchargent le fichier JSON).
pub const ENV_POPULATION_SIZE: &str = "EVOLVE_POPULATION_SIZE";
pub const ENV_SEED: &str = "EVOLVE_SEED";
pub const ENV_ELIMINATION_RATIO: &str = "EVOLVE_ELIMINATION_RATIO";
pub const ENV_PARALLEL: &str = "EVOLVE_PARALLEL";
pub const ENV_PARALLEL_BREEDING: &str = "EVOLVE_PARALLEL_BREEDING";
pub const ENV_LOG_LEVEL: &str = "EVOLVE_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "EVOLVE_LOG_DIR";

pub const DEFAULT_POPULATION_SIZE: usize = 100;
pub const DEFAULT_SEED: u64 = 0;

/// Configuration d'une population et de son environnement d'exécution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvolutionConfig {
    #[serde(default = "default_population_size")]
    pub population_size: usize,

    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Fraction éliminée à chaque génération (0.5 = moitié la moins adaptée).
    #[serde(default = "default_elimination_ratio")]
    pub elimination_ratio: f64,

    #[serde(default)]
    pub degenerate_policy: DegeneratePolicy,

    /// Évaluation de la fitness sur le pool rayon.
    #[serde(default)]
    pub parallel_evaluation: bool,

    /// Reproduction parallèle (un flux aléatoire dérivé par enfant).
    #[serde(default)]
    pub parallel_breeding: bool,

    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    /// Filtre par défaut quand RUST_LOG est absent (ex: "info", "evolve=debug").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Dossier des logs JSON (rotation quotidienne). Aucun fichier si `None`.
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

// --- HELPERS SERDE ---

fn default_population_size() -> usize {
    DEFAULT_POPULATION_SIZE
}
fn default_seed() -> u64 {
    DEFAULT_SEED
}
fn default_elimination_ratio() -> f64 {
    DEFAULT_ELIMINATION_RATIO
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_dir: None,
        }
    }
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            seed: DEFAULT_SEED,
            elimination_ratio: DEFAULT_ELIMINATION_RATIO,
            degenerate_policy: DegeneratePolicy::default(),
            parallel_evaluation: false,
            parallel_breeding: false,
            log: LogConfig::default(),
        }
    }
}

impl EvolutionConfig {
    pub fn new(population_size: usize, seed: u64) -> Self {
        Self {
            population_size,
            seed,
            ..Default::default()
        }
    }

    /// Chaîne complète : fichier (optionnel) -> variables d'environnement -> validation.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_json_file(p)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Lecture impossible de {:?} : {}", path, e))
        })?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(size) = env::get_parsed_optional::<usize>(ENV_POPULATION_SIZE)? {
            self.population_size = size;
        }
        if let Some(seed) = env::get_parsed_optional::<u64>(ENV_SEED)? {
            self.seed = seed;
        }
        if let Some(ratio) = env::get_parsed_optional::<f64>(ENV_ELIMINATION_RATIO)? {
            self.elimination_ratio = ratio;
        }
        if env::get_optional(ENV_PARALLEL).is_some() {
            self.parallel_evaluation = env::is_enabled(ENV_PARALLEL);
        }
        if env::get_optional(ENV_PARALLEL_BREEDING).is_some() {
            self.parallel_breeding = env::is_enabled(ENV_PARALLEL_BREEDING);
        }
        if let Some(level) = env::get_optional(ENV_LOG_LEVEL) {
            self.log.level = level;
        }
        if let Some(dir) = env::get_optional(ENV_LOG_DIR) {
            self.log.log_dir = Some(PathBuf::from(dir));
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(AppError::Config(
                "population_size doit être strictement positif".to_string(),
            ));
        }
        if !(self.elimination_ratio > 0.0 && self.elimination_ratio < 1.0) {
            return Err(AppError::Config(format!(
                "elimination_ratio hors de ]0, 1[ : {}",
                self.elimination_ratio
            )));
        }
        Ok(())
    }
}
