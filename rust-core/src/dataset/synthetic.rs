//! Synthetic placeholder signals shown before any file is loaded

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::axis::{Axis, AxisSeries};
use super::DatasetConfig;

/// Tone frequency (Hz) of each axis' placeholder signal
pub const TONE_HZ: AxisSeries<f64> = AxisSeries { x: 50.0, y: 175.0, z: 67.0 };

/// Largest placeholder record generated per axis
pub const MAX_SAMPLES: usize = 1 << 24;

/// Number of samples `i * period` strictly below `duration`
///
/// `None` when the count exceeds [`MAX_SAMPLES`] or is not finite.
pub(crate) fn sample_count(duration: f64, period: f64) -> Option<usize> {
    if duration.is_nan() || duration <= 0.0 {
        return Some(0);
    }
    // Guard against 5.0 / 0.001 landing a hair above 5000
    let ratio = duration / period;
    if !ratio.is_finite() || ratio > MAX_SAMPLES as f64 {
        return None;
    }
    let rounded = ratio.round();
    let count = if (ratio - rounded).abs() < 1e-9 * rounded.max(1.0) {
        rounded as usize
    } else {
        ratio.ceil() as usize
    };
    (count <= MAX_SAMPLES).then_some(count)
}

/// Standard normal sample (Box-Muller)
fn gaussian(rng: &mut StdRng) -> f64 {
    let u1: f64 = rng.gen_range(f64::EPSILON..1.0);
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// `n` samples per axis: one tone plus Gaussian noise
pub(crate) fn generate(config: &DatasetConfig, n: usize) -> AxisSeries<Vec<f64>> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    AxisSeries::from_fn(|axis: Axis| {
        let omega = 2.0 * PI * TONE_HZ[axis];
        (0..n)
            .map(|i| {
                let t = i as f64 * config.sampling_period;
                (omega * t).sin() + config.noise_amplitude * gaussian(&mut rng)
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count() {
        assert_eq!(sample_count(5.0, 0.001), Some(5000));
        assert_eq!(sample_count(5.0, 0.002), Some(2500));
        assert_eq!(sample_count(1.0, 0.3), Some(4));
        assert_eq!(sample_count(0.0, 0.001), Some(0));
    }

    #[test]
    fn test_sample_count_bounded() {
        assert_eq!(sample_count(MAX_SAMPLES as f64, 1.0), Some(MAX_SAMPLES));
        assert_eq!(sample_count(MAX_SAMPLES as f64 + 1.0, 1.0), None);
        assert_eq!(sample_count(5.0, 1e-300), None);
        assert_eq!(sample_count(5.0, f64::MIN_POSITIVE), None);
    }

    #[test]
    fn test_generate_equal_lengths() {
        let config = DatasetConfig {
            seed: Some(7),
            ..DatasetConfig::default()
        };
        let n = sample_count(config.duration, config.sampling_period).unwrap();
        let series = generate(&config, n);

        assert_eq!(series.x.len(), 5000);
        assert_eq!(series.y.len(), 5000);
        assert_eq!(series.z.len(), 5000);
    }

    #[test]
    fn test_generate_seeded_is_repeatable() {
        let config = DatasetConfig {
            duration: 0.1,
            seed: Some(42),
            ..DatasetConfig::default()
        };
        assert_eq!(generate(&config, 100), generate(&config, 100));
    }

    #[test]
    fn test_generate_without_noise() {
        let config = DatasetConfig {
            duration: 0.01,
            noise_amplitude: 0.0,
            seed: Some(1),
            ..DatasetConfig::default()
        };
        let n = sample_count(config.duration, config.sampling_period).unwrap();
        let series = generate(&config, n);

        // 50 Hz at 1 kHz: quarter period after 5 samples
        assert!((series.x[5] - 1.0).abs() < 1e-12);
        assert_eq!(series.y[0], 0.0);
    }
}
