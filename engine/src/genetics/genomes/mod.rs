pub mod bit_string;
pub mod neural_network;
pub mod real_vector;

pub use bit_string::BitStringGenome;
pub use neural_network::NeuralNetworkGenome;
pub use real_vector::RealVectorGenome;
