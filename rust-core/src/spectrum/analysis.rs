//! Time-domain helpers: DC offset, time base, RMS and vector resultant

use crate::error::{validate_period, Result, SpectralError};

fn mean(series: &[f64], what: &str) -> Result<f64> {
    if series.is_empty() {
        return Err(SpectralError::InvalidInput(format!(
            "cannot compute {what} of an empty series"
        )));
    }
    Ok(series.iter().sum::<f64>() / series.len() as f64)
}

/// Subtract the arithmetic mean from every sample
///
/// # Returns
/// New series of identical length with zero mean (up to rounding)
pub fn remove_dc_offset(series: &[f64]) -> Result<Vec<f64>> {
    let dc_offset = mean(series, "the DC offset")?;
    Ok(series.iter().map(|&s| s - dc_offset).collect())
}

/// Generate `length` timestamps `0, period, 2*period, ...`
///
/// `length = 0` yields an empty vector; the period is validated regardless.
pub fn generate_time_base(length: usize, period: f64) -> Result<Vec<f64>> {
    validate_period(period)?;
    Ok(time_base(length, period))
}

/// Time base for an already validated period
pub(crate) fn time_base(length: usize, period: f64) -> Vec<f64> {
    (0..length).map(|i| i as f64 * period).collect()
}

/// Root mean square: `sqrt(mean(x^2))`
pub fn compute_rms(series: &[f64]) -> Result<f64> {
    let squares: Vec<f64> = series.iter().map(|&s| s * s).collect();
    Ok(mean(&squares, "the RMS")?.sqrt())
}

/// Elementwise Euclidean norm of three equally long axis series
pub fn compute_resultant(x: &[f64], y: &[f64], z: &[f64]) -> Result<Vec<f64>> {
    if x.len() != y.len() || x.len() != z.len() {
        return Err(SpectralError::DimensionMismatch {
            x: x.len(),
            y: y.len(),
            z: z.len(),
        });
    }

    Ok(x.iter()
        .zip(y)
        .zip(z)
        .map(|((&i, &j), &k)| (i * i + j * j + k * k).sqrt())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_dc_offset() {
        let centered = remove_dc_offset(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(centered, vec![-1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_remove_dc_offset_idempotent() {
        let signal: Vec<f64> = (0..257).map(|i| 4.5 + (i as f64 * 0.37).sin() * 1.3).collect();

        let once = remove_dc_offset(&signal).unwrap();
        let twice = remove_dc_offset(&once).unwrap();

        let residual_mean = once.iter().sum::<f64>() / once.len() as f64;
        assert!(residual_mean.abs() < 1e-12);
        for (a, b) in once.iter().zip(&twice) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_remove_dc_offset_empty() {
        assert!(matches!(remove_dc_offset(&[]), Err(SpectralError::InvalidInput(_))));
    }

    #[test]
    fn test_time_base() {
        let t = generate_time_base(4, 0.25).unwrap();
        assert_eq!(t, vec![0.0, 0.25, 0.5, 0.75]);

        assert!(generate_time_base(0, 0.25).unwrap().is_empty());

        for n in [0, 1, 17, 1000] {
            assert_eq!(generate_time_base(n, 0.002).unwrap().len(), n);
        }
    }

    #[test]
    fn test_time_base_rejects_period() {
        for n in [0, 1, 10] {
            assert!(matches!(generate_time_base(n, 0.0), Err(SpectralError::InvalidInput(_))));
            assert!(matches!(generate_time_base(n, -0.1), Err(SpectralError::InvalidInput(_))));
        }
    }

    #[test]
    fn test_rms() {
        assert!((compute_rms(&[3.0, -3.0, 3.0, -3.0]).unwrap() - 3.0).abs() < 1e-12);

        // Full sine periods have RMS amplitude / sqrt(2)
        let sine: Vec<f64> = (0..1000)
            .map(|i| 2.0 * (2.0 * std::f64::consts::PI * i as f64 / 100.0).sin())
            .collect();
        assert!((compute_rms(&sine).unwrap() - 2.0 / 2f64.sqrt()).abs() < 1e-9);

        assert!(matches!(compute_rms(&[]), Err(SpectralError::InvalidInput(_))));
    }

    #[test]
    fn test_resultant() {
        let r = compute_resultant(&[3.0, 0.0], &[4.0, 0.0], &[0.0, 2.0]).unwrap();
        assert_eq!(r, vec![5.0, 2.0]);

        assert!(compute_resultant(&[], &[], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_resultant_mismatch() {
        let err = compute_resultant(&[1.0, 2.0, 3.0], &[1.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, SpectralError::DimensionMismatch { x: 3, y: 2, z: 3 }));
    }
}
