use crate::utils::prelude::*;
use rand::Rng;

fn check_same_len<T>(parent1: &[T], parent2: &[T]) -> Result<()> {
    if parent1.len() != parent2.len() {
        return Err(AppError::InvalidArgument(format!(
            "Taille des parents incompatible : {} vs {}",
            parent1.len(),
            parent2.len()
        )));
    }
    Ok(())
}

/// Début de `parent1`, fin de `parent2`, coupure tirée dans `[1, len)`.
pub fn single_point_crossover<T: Clone, R: Rng + ?Sized>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> Result<Vec<T>> {
    check_same_len(parent1, parent2)?;
    let len = parent1.len();
    if len < 2 {
        return Ok(parent1.to_vec());
    }

    let split_idx = rng.random_range(1..len);

    let mut child = Vec::with_capacity(len);
    child.extend_from_slice(&parent1[..split_idx]);
    child.extend_from_slice(&parent2[split_idx..]);

    Ok(child)
}

/// Chaque gène vient de l'un ou l'autre parent avec probabilité 1/2.
pub fn uniform_crossover<T: Clone, R: Rng + ?Sized>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> Result<Vec<T>> {
    check_same_len(parent1, parent2)?;

    Ok(parent1
        .iter()
        .zip(parent2.iter())
        .map(|(g1, g2)| {
            if rng.random_bool(0.5) {
                g1.clone()
            } else {
                g2.clone()
            }
        })
        .collect())
}
