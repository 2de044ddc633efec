use ndarray::{Array2, Array3};
use rl_foundations::mdp::{solve, Mdp, ValueIterationConfig};

/// Solves a 4-state linear MDP: S0 -> S1 -> S2 -> S3 (goal), with actions
/// `stay` (self-loop, -0.1) and `forward` (+1.0 into the goal, -0.1
/// otherwise, self-loop at the goal).
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Simple 4-state MDP");
    println!("States: S0 -> S1 -> S2 -> S3 (goal)");

    let n_states = 4;
    let n_actions = 2;
    let mut transitions = Array3::zeros((n_states, n_actions, n_states));
    let mut rewards = Array2::zeros((n_states, n_actions));

    // Action 0: stay in place for a small penalty.
    for s in 0..n_states {
        transitions[[s, 0, s]] = 1.0;
        rewards[[s, 0]] = -0.1;
    }

    // Action 1: move forward; the goal state absorbs.
    for s in 0..n_states - 1 {
        transitions[[s, 1, s + 1]] = 1.0;
        rewards[[s, 1]] = if s + 1 == n_states - 1 { 1.0 } else { -0.1 };
    }
    transitions[[n_states - 1, 1, n_states - 1]] = 1.0;

    let mdp = Mdp::new(transitions, rewards, 0.99)?;
    let result = solve(&mdp, &ValueIterationConfig::default());

    if result.converged {
        println!("\nConverged in {} iterations", result.iterations);
    } else {
        println!("\nStopped after {} iterations without converging", result.iterations);
    }

    let rounded: Vec<f64> = result
        .values
        .iter()
        .map(|v| (v * 1000.0).round() / 1000.0)
        .collect();
    let action_names = ["stay", "forward"];
    let named: Vec<&str> = result.policy.iter().map(|&a| action_names[a]).collect();

    println!("Optimal Values: {:?}", rounded);
    println!("Optimal Policy: {:?}", named);

    Ok(())
}
