pub mod dto;
pub mod evaluators;
pub mod genomes;
pub mod operators;
pub mod population;
pub mod random;
pub mod traits;
pub mod types;

pub use population::Population;
pub use random::SeededRandom;
pub use traits::{Agent, Evaluator, Genome};
pub use types::{DegeneratePolicy, GenerationStats, Individual};
