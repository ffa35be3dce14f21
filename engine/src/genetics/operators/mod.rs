pub mod crossover;
pub mod mutation;
pub mod selection;

pub use selection::{TruncationSelection, DEFAULT_ELIMINATION_RATIO};
