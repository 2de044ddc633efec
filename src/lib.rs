pub mod error;
pub mod mdp;
pub mod prob;

pub use error::{Error, Result};
pub use mdp::{solve, Mdp, ValueIterationConfig, ValueIterationResult};
pub use prob::{sample_categorical, sample_gaussian, MarkovChain};
