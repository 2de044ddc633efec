use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use rand_distr::Normal;

use crate::error::{Error, Result};

/// Draws `n` samples from the Gaussian distribution `N(mu, sigma^2)`.
///
/// The generator is supplied by the caller, so seeding it makes the draws
/// reproducible.
///
/// # Returns
///
/// * `Ok(Vec<f64>)` - The `n` samples
/// * `Err(Error::InvalidInput)` - If `mu` is non-finite or `sigma` is not
///   a positive finite number
pub fn sample_gaussian<R: Rng + ?Sized>(
    rng: &mut R,
    mu: f64,
    sigma: f64,
    n: usize,
) -> Result<Vec<f64>> {
    if !mu.is_finite() {
        return Err(Error::InvalidInput(format!(
            "mean must be finite, got {}",
            mu
        )));
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(Error::InvalidInput(format!(
            "standard deviation must be positive and finite, got {}",
            sigma
        )));
    }

    let normal = Normal::new(mu, sigma).map_err(|e| Error::InvalidInput(e.to_string()))?;
    Ok((0..n).map(|_| normal.sample(rng)).collect())
}

/// Draws `n` indices from `0..probs.len()`, each index weighted by its
/// entry in `probs`. Weights must be finite and non-negative with a
/// positive sum; they do not need to be normalized.
pub fn sample_categorical<R: Rng + ?Sized>(
    rng: &mut R,
    probs: &[f64],
    n: usize,
) -> Result<Vec<usize>> {
    if probs.is_empty() {
        return Err(Error::InvalidInput(
            "probability vector must not be empty".to_string(),
        ));
    }
    if probs.iter().any(|p| !p.is_finite() || *p < 0.0) {
        return Err(Error::InvalidInput(
            "probabilities must be finite and non-negative".to_string(),
        ));
    }

    let dist = WeightedIndex::new(probs).map_err(|e| Error::InvalidInput(e.to_string()))?;
    Ok((0..n).map(|_| dist.sample(rng)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_gaussian_returns_requested_count() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let samples = sample_gaussian(&mut rng, 0.0, 1.0, 5).unwrap();
        assert_eq!(samples.len(), 5);
    }

    #[test]
    fn test_gaussian_is_reproducible_under_a_fixed_seed() {
        let mut rng1 = ChaCha20Rng::seed_from_u64(42);
        let mut rng2 = ChaCha20Rng::seed_from_u64(42);

        let a = sample_gaussian(&mut rng1, 1.0, 2.0, 10).unwrap();
        let b = sample_gaussian(&mut rng2, 1.0, 2.0, 10).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_gaussian_sample_moments() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let samples = sample_gaussian(&mut rng, 2.0, 0.5, 20_000).unwrap();

        let mean: f64 = samples.iter().sum::<f64>() / samples.len() as f64;
        let var: f64 =
            samples.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / samples.len() as f64;

        assert!((mean - 2.0).abs() < 0.02);
        assert!((var.sqrt() - 0.5).abs() < 0.02);
    }

    #[test]
    fn test_gaussian_rejects_bad_sigma() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        for sigma in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = sample_gaussian(&mut rng, 0.0, sigma, 1);
            assert!(matches!(result, Err(Error::InvalidInput(_))));
        }
    }

    #[test]
    fn test_gaussian_rejects_non_finite_mean() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let result = sample_gaussian(&mut rng, f64::NAN, 1.0, 1);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_categorical_one_hot_always_returns_hot_index() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let samples = sample_categorical(&mut rng, &[0.0, 1.0, 0.0], 50).unwrap();
        assert!(samples.iter().all(|&s| s == 1));
    }

    #[test]
    fn test_categorical_samples_are_in_range() {
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        let probs = [0.1, 0.3, 0.4, 0.2];
        let samples = sample_categorical(&mut rng, &probs, 100).unwrap();

        assert_eq!(samples.len(), 100);
        assert!(samples.iter().all(|&s| s < probs.len()));
    }

    #[test]
    fn test_categorical_is_reproducible_under_a_fixed_seed() {
        let mut rng1 = ChaCha20Rng::seed_from_u64(11);
        let mut rng2 = ChaCha20Rng::seed_from_u64(11);

        let a = sample_categorical(&mut rng1, &[0.25, 0.25, 0.5], 20).unwrap();
        let b = sample_categorical(&mut rng2, &[0.25, 0.25, 0.5], 20).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_categorical_rejects_bad_weights() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);

        assert!(matches!(
            sample_categorical(&mut rng, &[], 1),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            sample_categorical(&mut rng, &[0.5, -0.5], 1),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            sample_categorical(&mut rng, &[0.0, 0.0], 1),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            sample_categorical(&mut rng, &[f64::NAN, 1.0], 1),
            Err(Error::InvalidInput(_))
        ));
    }
}
