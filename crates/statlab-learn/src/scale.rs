//! Per-feature standardization.

use statlab_stats::descriptive::{mean, population_std};

/// Standardizes each feature column in place to zero mean and unit
/// variance (population standard deviation, divisor `n`).
///
/// Zero-variance columns are centered but left undivided, so constant
/// features become all-zero instead of NaN.
///
/// # Panics
///
/// Panics if the rows are ragged (unequal lengths).
pub fn standardize(rows: &mut [Vec<f64>]) {
    let Some(width) = rows.first().map(Vec::len) else {
        return;
    };
    assert!(
        rows.iter().all(|row| row.len() == width),
        "feature rows must have equal length"
    );

    for column in 0..width {
        let values: Vec<f64> = rows.iter().map(|row| row[column]).collect();
        let center = mean(&values).unwrap_or(0.0);
        let spread = population_std(&values).unwrap_or(0.0);
        let divisor = if spread == 0.0 { 1.0 } else { spread };
        for row in rows.iter_mut() {
            row[column] = (row[column] - center) / divisor;
        }
    }
}

#[cfg(test)]
mod tests {
    use statlab_stats::descriptive::{mean, population_std};

    use super::*;

    #[test]
    fn test_standardized_columns_have_zero_mean_unit_std() {
        let mut rows = vec![
            vec![1.0, 10.0],
            vec![2.0, 20.0],
            vec![3.0, 30.0],
            vec![4.0, 40.0],
        ];
        standardize(&mut rows);

        for column in 0..2 {
            let values: Vec<f64> = rows.iter().map(|row| row[column]).collect();
            assert!(mean(&values).unwrap().abs() < 1e-12);
            assert!((population_std(&values).unwrap() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_constant_column_becomes_zero() {
        let mut rows = vec![vec![5.0, 1.0], vec![5.0, 2.0], vec![5.0, 3.0]];
        standardize(&mut rows);
        assert!(rows.iter().all(|row| row[0] == 0.0));
    }

    #[test]
    fn test_empty_input_is_a_no_op() {
        let mut rows: Vec<Vec<f64>> = Vec::new();
        standardize(&mut rows);
        assert!(rows.is_empty());
    }
}
