use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rl_foundations::prob::{sample_categorical, sample_gaussian};

/// Draws a handful of Gaussian and categorical samples from a seeded
/// generator.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = ChaCha20Rng::seed_from_u64(2024);

    // Gaussian policy over continuous actions.
    let actions = sample_gaussian(&mut rng, 0.0, 1.0, 5)?;
    let rounded: Vec<f64> = actions.iter().map(|a| (a * 1000.0).round() / 1000.0).collect();
    println!("Gaussian samples: {:?}", rounded);

    // Categorical policy over discrete actions.
    let probs = [0.1, 0.3, 0.4, 0.2];
    let actions = sample_categorical(&mut rng, &probs, 5)?;
    println!("Categorical samples: {:?}", actions);

    Ok(())
}
