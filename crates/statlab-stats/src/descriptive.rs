//! Descriptive statistics over `f64` samples.
//!
//! All functions expect the caller to have filtered missing values already;
//! a sample slice is always treated as complete data.

/// Computes the arithmetic mean.
///
/// # Returns
///
/// * `Some(mean)` - if the sample contains at least one value
/// * `None` - if the sample is empty
///
/// # Examples
///
/// ```
/// # use statlab_stats::descriptive::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
/// assert_eq!(mean(&[]), None);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Computes the median, averaging the two middle order statistics for
/// even-length samples.
///
/// The input does not need to be sorted.
///
/// # Returns
///
/// * `Some(median)` - if the sample contains at least one value
/// * `None` - if the sample is empty
///
/// # Examples
///
/// ```
/// # use statlab_stats::descriptive::median;
/// assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
/// assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
/// ```
#[must_use]
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Computes the population variance (divisor `n`).
///
/// # Returns
///
/// * `Some(variance)` - if the sample contains at least one value
/// * `None` - if the sample is empty
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn population_variance(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;
    let sum_sq = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    Some(sum_sq / values.len() as f64)
}

/// Computes the population standard deviation (divisor `n`).
///
/// # Returns
///
/// * `Some(std_dev)` - if the sample contains at least one value
/// * `None` - if the sample is empty
#[must_use]
pub fn population_std(values: &[f64]) -> Option<f64> {
    population_variance(values).map(f64::sqrt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_of_empty_sample() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_mean_of_single_value() {
        assert_eq!(mean(&[7.5]), Some(7.5));
    }

    #[test]
    fn test_median_odd_length() {
        assert_eq!(median(&[5.0, 1.0, 3.0]), Some(3.0));
    }

    #[test]
    fn test_median_even_length_interpolates() {
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
    }

    #[test]
    fn test_population_variance() {
        // values 2, 4, 6: mean 4, squared deviations 4 + 0 + 4, variance 8/3
        let variance = population_variance(&[2.0, 4.0, 6.0]).unwrap();
        assert!((variance - 8.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_population_std_of_constant_sample() {
        assert_eq!(population_std(&[3.0, 3.0, 3.0]), Some(0.0));
    }
}
