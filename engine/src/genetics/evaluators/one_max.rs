use crate::genetics::genomes::BitStringGenome;
use crate::genetics::traits::Evaluator;
use crate::utils::prelude::*;

/// OneMax : la fitness est le nombre de bits à 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct OneMaxEvaluator;

impl Evaluator<BitStringGenome> for OneMaxEvaluator {
    fn name(&self) -> String {
        "one-max".to_string()
    }

    fn evaluate(&self, genome: &BitStringGenome) -> Result<f64> {
        Ok(genome.ones() as f64)
    }
}
