// FICHIER : engine/src/genetics/types.rs

use super::random::SeededRandom;
use super::traits::{Agent, Evaluator, Genome};
use crate::utils::prelude::*;
use std::fmt;
use std::sync::Arc;

/// Comportement quand la troncature ne laisse qu'un seul survivant.
/// L'appariement "tirer deux index distincts" ne peut alors jamais aboutir.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Échec explicite (`AppError::DegeneratePopulation`).
    #[default]
    Fail,
    /// Reproduction asexuée : copie du survivant unique, puis mutation.
    CloneSurvivor,
}

/// Statistiques de fitness relevées à la phase d'évaluation d'une génération.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Numéro de la génération (1 pour la première évaluation).
    pub generation: usize,
    pub best: f64,
    pub mean: f64,
    pub worst: f64,
    /// Nombre d'agents évalués avant troncature.
    pub evaluated: usize,
    pub survivors: usize,
}

impl GenerationStats {
    /// Agrège les fitness évaluées (ordre indifférent). `None` si la liste est vide.
    pub fn from_fitnesses(generation: usize, fitnesses: &[f64], survivors: usize) -> Option<Self> {
        let first = *fitnesses.first()?;
        let (best, worst) = fitnesses.iter().fold((first, first), |(hi, lo), &f| {
            (
                if f.total_cmp(&hi).is_gt() { f } else { hi },
                if f.total_cmp(&lo).is_lt() { f } else { lo },
            )
        });
        let mean = fitnesses.iter().sum::<f64>() / fitnesses.len() as f64;
        Some(Self {
            generation,
            best,
            mean,
            worst,
            evaluated: fitnesses.len(),
            survivors,
        })
    }
}

/// Un individu dans la population : un génome + sa performance + l'évaluateur partagé.
/// Implémentation par composition du trait [`Agent`].
pub struct Individual<G, E> {
    pub genome: G,
    fitness: Option<f64>,
    evaluator: Arc<E>,
}

impl<G, E> Individual<G, E> {
    pub fn new(genome: G, evaluator: E) -> Self {
        Self::with_evaluator(genome, Arc::new(evaluator))
    }

    pub fn with_evaluator(genome: G, evaluator: Arc<E>) -> Self {
        Self {
            genome,
            fitness: None,
            evaluator,
        }
    }

    pub fn evaluator(&self) -> &Arc<E> {
        &self.evaluator
    }
}

impl<G: Clone, E> Clone for Individual<G, E> {
    fn clone(&self) -> Self {
        Self {
            genome: self.genome.clone(),
            fitness: self.fitness,
            evaluator: Arc::clone(&self.evaluator),
        }
    }
}

impl<G: fmt::Debug, E> fmt::Debug for Individual<G, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Individual")
            .field("genome", &self.genome)
            .field("fitness", &self.fitness)
            .finish_non_exhaustive()
    }
}

impl<G, E> Agent for Individual<G, E>
where
    G: Genome,
    E: Evaluator<G>,
{
    type Genome = G;

    fn genome(&self) -> &G {
        &self.genome
    }

    fn copy(&self) -> Self {
        self.clone()
    }

    fn compute_fitness(&mut self) -> Result<()> {
        let score = self.evaluator.evaluate(&self.genome)?;
        if score.is_nan() {
            return Err(AppError::plugin(
                self.evaluator.name(),
                "l'évaluateur a renvoyé NaN",
            ));
        }
        self.fitness = Some(score);
        Ok(())
    }

    fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    fn crossover(&self, other: &Self, rng: &mut SeededRandom) -> Result<Self> {
        let genome = self.genome.crossover(&other.genome, rng)?;
        Ok(Self::with_evaluator(genome, Arc::clone(&self.evaluator)))
    }

    fn mutate(&mut self, rng: &mut SeededRandom) -> Result<()> {
        self.genome.mutate(rng)?;
        // Le score mémorisé ne décrit plus ce génome
        self.fitness = None;
        Ok(())
    }
}
