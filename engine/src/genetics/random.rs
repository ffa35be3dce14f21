// FICHIER : engine/src/genetics/random.rs

use crate::utils::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_distr::{Distribution, Normal};

/// Source pseudo-aléatoire déterministe, possédée par une population.
///
/// Deux sources construites avec la même graine et sollicitées par la même
/// séquence d'appels produisent exactement les mêmes tirages.
/// Implémente `RngCore` : les opérateurs génériques (`operators::*`) l'acceptent directement.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Graine de construction (le flux, lui, a pu avancer).
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Entier uniforme dans `[0, bound)`.
    pub fn next_int(&mut self, bound: usize) -> Result<usize> {
        if bound == 0 {
            return Err(AppError::InvalidArgument(
                "next_int : la borne doit être strictement positive".to_string(),
            ));
        }
        Ok(self.rng.random_range(0..bound))
    }

    /// Réel uniforme dans `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Réel uniforme dans `[low, high)`.
    pub fn next_range(&mut self, low: f64, high: f64) -> Result<f64> {
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(AppError::InvalidArgument(format!(
                "next_range : intervalle invalide [{}, {})",
                low, high
            )));
        }
        Ok(self.rng.random_range(low..high))
    }

    /// `true` avec la probabilité `p` (bornée à [0, 1], NaN => false).
    pub fn next_bool(&mut self, p: f64) -> bool {
        if p.is_nan() {
            return false;
        }
        self.rng.random_bool(p.clamp(0.0, 1.0))
    }

    pub fn next_gaussian(&mut self, mean: f64, std_dev: f64) -> Result<f64> {
        // Normal::new n'écarte que les écarts-types non finis
        if !(std_dev.is_finite() && std_dev >= 0.0) {
            return Err(AppError::InvalidArgument(format!(
                "next_gaussian : écart-type invalide ({})",
                std_dev
            )));
        }
        let normal = Normal::new(mean, std_dev).map_err(|e| {
            AppError::InvalidArgument(format!(
                "next_gaussian : paramètres invalides (mean={}, std_dev={}) : {}",
                mean, std_dev, e
            ))
        })?;
        Ok(normal.sample(&mut self.rng))
    }

    /// Tire une graine sur ce flux et ouvre un flux indépendant.
    /// Sert à partitionner l'aléa par enfant lors de la reproduction parallèle.
    pub fn derive_stream(&mut self) -> SeededRandom {
        SeededRandom::new(self.rng.next_u64())
    }
}

impl RngCore for SeededRandom {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.rng.fill_bytes(dst)
    }
}
