use ndarray::Array2;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::error::{Error, Result};

/// Tolerance applied when checking that a probability row sums to 1.
const ROW_SUM_TOLERANCE: f64 = 1e-9;

/// A finite discrete-time Markov chain over states `0..n_states`.
///
/// The transition matrix is row-stochastic: `transitions[[i, j]]` is the
/// probability of moving to state `j` from state `i`.
#[derive(Debug, Clone)]
pub struct MarkovChain {
    transitions: Array2<f64>,
}

impl MarkovChain {
    /// Builds a chain from a row-stochastic transition matrix.
    ///
    /// # Returns
    ///
    /// * `Ok(MarkovChain)` - A validated chain
    /// * `Err(Error::InvalidInput)` - If the matrix is empty, not square,
    ///   contains a negative or non-finite entry, or has a row that does
    ///   not sum to 1
    pub fn new(transitions: Array2<f64>) -> Result<Self> {
        let (rows, cols) = transitions.dim();
        if rows == 0 {
            return Err(Error::InvalidInput(
                "transition matrix must not be empty".to_string(),
            ));
        }
        if rows != cols {
            return Err(Error::InvalidInput(format!(
                "transition matrix must be square, got {}x{}",
                rows, cols
            )));
        }
        for (i, row) in transitions.rows().into_iter().enumerate() {
            if row.iter().any(|p| !p.is_finite() || *p < 0.0) {
                return Err(Error::InvalidInput(format!(
                    "row {} contains a negative or non-finite probability",
                    i
                )));
            }
            let sum = row.sum();
            if (sum - 1.0).abs() > ROW_SUM_TOLERANCE {
                return Err(Error::InvalidInput(format!(
                    "row {} sums to {}, expected 1",
                    i, sum
                )));
            }
        }

        Ok(MarkovChain { transitions })
    }

    pub fn n_states(&self) -> usize {
        self.transitions.nrows()
    }

    /// Simulates a trajectory of `n_steps` transitions starting from
    /// `initial_state`. The returned sequence has length `n_steps + 1` and
    /// begins with `initial_state`; each step depends only on the current
    /// state.
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        initial_state: usize,
        n_steps: usize,
    ) -> Result<Vec<usize>> {
        if initial_state >= self.n_states() {
            return Err(Error::InvalidInput(format!(
                "initial state {} is out of range for {} states",
                initial_state,
                self.n_states()
            )));
        }

        let mut trajectory = Vec::with_capacity(n_steps + 1);
        trajectory.push(initial_state);
        let mut current = initial_state;
        for _ in 0..n_steps {
            let row = self.transitions.row(current);
            let dist =
                WeightedIndex::new(row.iter()).map_err(|e| Error::InvalidInput(e.to_string()))?;
            current = dist.sample(rng);
            trajectory.push(current);
        }

        Ok(trajectory)
    }
}
