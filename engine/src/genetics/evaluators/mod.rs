pub mod one_max;
pub mod sphere;
pub mod xor;

pub use one_max::OneMaxEvaluator;
pub use sphere::SphereEvaluator;
pub use xor::XorEvaluator;
