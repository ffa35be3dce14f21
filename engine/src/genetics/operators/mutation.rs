use crate::utils::prelude::*;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Inverse chaque bit avec la probabilité `mutation_rate`.
pub fn flip_mutation<R: Rng + ?Sized>(genes: &mut [bool], mutation_rate: f64, rng: &mut R) {
    let rate = mutation_rate.clamp(0.0, 1.0);
    for gene in genes.iter_mut() {
        if rng.random::<f64>() < rate {
            *gene = !*gene;
        }
    }
}

/// Ajoute un bruit N(0, sigma) à chaque gène avec la probabilité `mutation_rate`.
pub fn gaussian_mutation<R: Rng + ?Sized>(
    genes: &mut [f64],
    mutation_rate: f64,
    sigma: f64,
    rng: &mut R,
) -> Result<()> {
    if !(sigma.is_finite() && sigma >= 0.0) {
        return Err(AppError::InvalidArgument(format!(
            "Sigma invalide ({}) : doit être fini et positif",
            sigma
        )));
    }
    let normal = Normal::new(0.0, sigma)
        .map_err(|e| AppError::InvalidArgument(format!("Sigma invalide ({}) : {}", sigma, e)))?;
    for gene in genes.iter_mut() {
        if rng.random::<f64>() < mutation_rate {
            *gene += normal.sample(rng);
        }
    }
    Ok(())
}
