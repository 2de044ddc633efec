pub mod distributions;
pub mod markov_chain;

pub use distributions::{sample_categorical, sample_gaussian};
pub use markov_chain::MarkovChain;
