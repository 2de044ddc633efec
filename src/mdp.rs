pub mod value_iteration;

pub use value_iteration::{solve, Mdp, ValueIterationConfig, ValueIterationResult};
