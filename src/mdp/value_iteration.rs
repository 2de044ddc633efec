use ndarray::{s, Array2, Array3};

use crate::error::{Error, Result};

/// Tolerance applied when checking that a probability row sums to 1.
const ROW_SUM_TOLERANCE: f64 = 1e-9;

/// A finite Markov decision process with tabular transitions and rewards.
///
/// States and actions are dense indices `0..n_states` and `0..n_actions`.
/// The specification is immutable once constructed; [`solve`] never
/// mutates it.
#[derive(Debug, Clone)]
pub struct Mdp {
    transitions: Array3<f64>,
    rewards: Array2<f64>,
    gamma: f64,
}

impl Mdp {
    /// Builds an MDP specification.
    ///
    /// # Arguments
    ///
    /// * `transitions` - `transitions[[s, a, s']]` is `P(s' | s, a)`. Every
    ///   `(s, a)` row must be a probability distribution over next states.
    /// * `rewards` - `rewards[[s, a]]` is the expected immediate reward for
    ///   taking action `a` in state `s`.
    /// * `gamma` - Discount factor in `[0, 1)`.
    ///
    /// # Returns
    ///
    /// * `Ok(Mdp)` - A validated specification
    /// * `Err(Error::InvalidInput)` - If the arrays have inconsistent
    ///   dimensions, a probability row is invalid, a reward is non-finite,
    ///   or `gamma` is out of range
    pub fn new(transitions: Array3<f64>, rewards: Array2<f64>, gamma: f64) -> Result<Self> {
        let (n_states, n_actions, n_next) = transitions.dim();
        if n_states == 0 {
            return Err(Error::InvalidInput(
                "MDP must have at least one state".to_string(),
            ));
        }
        if n_actions == 0 {
            return Err(Error::InvalidInput(
                "MDP must have at least one action".to_string(),
            ));
        }
        if n_next != n_states {
            return Err(Error::InvalidInput(format!(
                "transition tensor is {}x{}x{}, expected the last axis to have {} states",
                n_states, n_actions, n_next, n_states
            )));
        }
        if rewards.dim() != (n_states, n_actions) {
            return Err(Error::InvalidInput(format!(
                "reward matrix is {}x{}, expected {}x{}",
                rewards.nrows(),
                rewards.ncols(),
                n_states,
                n_actions
            )));
        }
        if !(0.0..1.0).contains(&gamma) {
            return Err(Error::InvalidInput(format!(
                "discount factor must be in [0, 1), got {}",
                gamma
            )));
        }
        if rewards.iter().any(|r| !r.is_finite()) {
            return Err(Error::InvalidInput(
                "rewards must be finite".to_string(),
            ));
        }
        for state in 0..n_states {
            for action in 0..n_actions {
                let row = transitions.slice(s![state, action, ..]);
                if row.iter().any(|p| !p.is_finite() || *p < 0.0) {
                    return Err(Error::InvalidInput(format!(
                        "transition probabilities for state {} action {} contain a negative or non-finite entry",
                        state, action
                    )));
                }
                let sum = row.sum();
                if (sum - 1.0).abs() > ROW_SUM_TOLERANCE {
                    return Err(Error::InvalidInput(format!(
                        "transition probabilities for state {} action {} sum to {}, expected 1",
                        state, action, sum
                    )));
                }
            }
        }

        Ok(Mdp {
            transitions,
            rewards,
            gamma,
        })
    }

    pub fn n_states(&self) -> usize {
        self.transitions.dim().0
    }

    pub fn n_actions(&self) -> usize {
        self.transitions.dim().1
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

/// Configuration options for the value-iteration solver.
#[derive(Debug, Clone)]
pub struct ValueIterationConfig {
    /// Convergence threshold on the largest per-state value change in a sweep
    pub theta: f64,
    /// Maximum number of sweeps before giving up
    pub max_iterations: usize,
}

impl Default for ValueIterationConfig {
    fn default() -> Self {
        Self {
            theta: 1e-6,
            max_iterations: 10_000,
        }
    }
}

/// Result of a value-iteration solve.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueIterationResult {
    /// The state-value function at termination
    pub values: Vec<f64>,
    /// Greedy policy with respect to `values`; ties go to the lowest action index
    pub policy: Vec<usize>,
    /// Number of completed sweeps
    pub iterations: usize,
    /// Whether the largest value change fell below `theta` within the sweep budget
    pub converged: bool,
}

/// Computes the optimal state-value function and greedy policy for a finite
/// MDP by iterating the Bellman optimality backup
/// `V(s) = max_a [R(s,a) + gamma * sum_s' P(s'|s,a) * V(s')]`
/// until the largest per-state change in a sweep falls below
/// `config.theta`, or `config.max_iterations` sweeps have run.
///
/// Values are updated in place within a sweep, so later states in a sweep
/// see earlier states' fresh values; each state's `delta` contribution is
/// measured against its own pre-update value. Hitting the sweep budget is
/// not an error: the current values are returned with `converged` set to
/// `false`.
///
/// All loops run in ascending index order, so identical inputs produce
/// bit-identical results.
///
/// # Examples
///
/// ```
/// use ndarray::{Array2, Array3};
/// use rl_foundations::mdp::{solve, Mdp, ValueIterationConfig};
///
/// // One state, one action, self-loop paying 1.
/// let mut transitions = Array3::zeros((1, 1, 1));
/// transitions[[0, 0, 0]] = 1.0;
/// let mut rewards = Array2::zeros((1, 1));
/// rewards[[0, 0]] = 1.0;
///
/// let mdp = Mdp::new(transitions, rewards, 0.5).unwrap();
/// let result = solve(&mdp, &ValueIterationConfig::default());
///
/// assert!(result.converged);
/// assert!((result.values[0] - 2.0).abs() < 1e-5);
/// ```
#[must_use]
pub fn solve(mdp: &Mdp, config: &ValueIterationConfig) -> ValueIterationResult {
    let n_states = mdp.n_states();
    let mut values = vec![0.0; n_states];
    let mut iterations = 0;
    let mut converged = false;

    while iterations < config.max_iterations {
        let mut delta: f64 = 0.0;
        for state in 0..n_states {
            let v_new = q_values(mdp, state, &values)
                .into_iter()
                .fold(f64::NEG_INFINITY, f64::max);
            delta = delta.max((v_new - values[state]).abs());
            values[state] = v_new;
        }
        iterations += 1;
        log::debug!("sweep {}: delta = {:e}", iterations, delta);

        if delta < config.theta {
            converged = true;
            log::info!("value iteration converged in {} iterations", iterations);
            break;
        }
    }

    if !converged {
        log::warn!(
            "value iteration stopped after {} sweeps without reaching theta = {:e}",
            config.max_iterations,
            config.theta
        );
    }

    let policy = (0..n_states)
        .map(|state| argmax(&q_values(mdp, state, &values)))
        .collect();

    ValueIterationResult {
        values,
        policy,
        iterations,
        converged,
    }
}

/// One-step lookahead: `Q(s,a) = R(s,a) + gamma * sum_s' P(s'|s,a) * V(s')`.
fn q_values(mdp: &Mdp, state: usize, values: &[f64]) -> Vec<f64> {
    (0..mdp.n_actions())
        .map(|action| {
            let expected: f64 = mdp
                .transitions
                .slice(s![state, action, ..])
                .iter()
                .zip(values)
                .map(|(p, v)| p * v)
                .sum();
            mdp.rewards[[state, action]] + mdp.gamma * expected
        })
        .collect()
}

/// Index of the first maximum, so ties resolve to the lowest action.
fn argmax(q: &[f64]) -> usize {
    let mut best_action = 0;
    let mut best_value = f64::NEG_INFINITY;
    for (action, &value) in q.iter().enumerate() {
        if value > best_value {
            best_value = value;
            best_action = action;
        }
    }
    best_action
}
