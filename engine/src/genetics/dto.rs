use super::types::GenerationStats;
use crate::utils::prelude::*;

// --- Sorties & Feedback ---

/// Une ligne de rapport par génération (flux JSON du CLI).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GenerationReport {
    pub generation: usize,
    pub best_fitness: f64,
    pub mean_fitness: f64,
    pub worst_fitness: f64,
    pub population_size: usize,
    /// Diversité : distance génétique moyenne au meilleur survivant
    pub diversity: f64,
    pub duration_ms: u128,
}

impl GenerationReport {
    pub fn from_stats(
        stats: &GenerationStats,
        population_size: usize,
        diversity: f64,
        duration_ms: u128,
    ) -> Self {
        Self {
            generation: stats.generation,
            best_fitness: stats.best,
            mean_fitness: stats.mean,
            worst_fitness: stats.worst,
            population_size,
            diversity,
            duration_ms,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Nombre maximal de générations atteint
    MaxGenerations,
    /// Fitness cible atteinte ou dépassée
    TargetReached,
}

/// Résumé final d'un run.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RunSummary {
    pub problem: String,
    pub seed: u64,
    pub generations: usize,
    /// Absente si aucune génération n'a tourné
    pub best_fitness: Option<f64>,
    pub stop_reason: StopReason,
    pub duration_ms: u128,
    /// Génome du champion, sérialisé tel quel
    pub champion: Value,
}
