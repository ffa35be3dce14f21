// FICHIER : engine/src/utils/mod.rs

// =========================================================================
//  EVOLVE UTILS - Foundation Layer
// =========================================================================

pub mod config;
pub mod env;
pub mod error;
pub mod logger;

/// **Application Context** : Accès Config/Log/Env.
pub mod context {
    pub use super::config::{EvolutionConfig, LogConfig};
    pub use super::env::{get, get_or, is_enabled};
    pub use super::logger::init_logging;
}

/// **Le Prélude** : À utiliser via `use crate::utils::prelude::*;`
pub mod prelude {
    pub use super::config::EvolutionConfig;
    pub use super::error::{AppError, Result};
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::{json, Value};
    pub use std::cmp::Ordering;
    pub use tracing::{debug, error, info, instrument, warn};
}

pub use config::EvolutionConfig;
pub use error::{AppError, Result};
pub use logger::init_logging;
