//! Moteur d'évolution générationnelle reproductible.
//!
//! Une [`Population`] d'agents est évaluée, tronquée à sa moitié la plus adaptée,
//! puis complétée par croisement et mutation. Tout l'aléa passe par un
//! [`SeededRandom`] possédé par la population : même graine, même run.

pub mod genetics;
pub mod utils;

pub use genetics::population::Population;
pub use genetics::random::SeededRandom;
pub use genetics::traits::{Agent, Evaluator, Genome};
pub use genetics::types::{DegeneratePolicy, GenerationStats, Individual};
pub use utils::{AppError, EvolutionConfig, Result};
