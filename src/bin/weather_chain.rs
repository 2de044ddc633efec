use ndarray::array;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rl_foundations::prob::MarkovChain;

/// Simulates a three-state weather model (Sunny, Cloudy, Rainy) for 20
/// steps starting from Sunny.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let chain = MarkovChain::new(array![
        [0.7, 0.2, 0.1],
        [0.3, 0.5, 0.2],
        [0.2, 0.3, 0.5],
    ])?;

    let state_names = ["Sunny", "Cloudy", "Rainy"];
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    let trajectory = chain.simulate(&mut rng, 0, 20)?;

    println!("Weather trajectory:");
    let named: Vec<&str> = trajectory.iter().map(|&s| state_names[s]).collect();
    println!("{}", named.join(" -> "));

    Ok(())
}
