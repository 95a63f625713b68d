//! Cross-validated scoring.

use statlab_stats::descriptive::mean;

use crate::kfold::KFold;
use crate::knn::{KnnClassifier, KnnRegressor};

/// Mean classification accuracy of `model` across the folds.
///
/// Each fold trains on its train indices and scores the held-out test
/// rows; fold scores are averaged unweighted.
///
/// # Panics
///
/// Panics if `x` and `y` differ in length or there are fewer rows than
/// folds.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn cross_val_accuracy(
    model: &KnnClassifier,
    x: &[Vec<f64>],
    y: &[i64],
    folds: &KFold,
) -> f64 {
    assert_eq!(x.len(), y.len(), "features and labels must pair up");
    let scores: Vec<f64> = folds
        .split(x.len())
        .iter()
        .map(|fold| {
            let (train_x, train_y) = gather(x, y, &fold.train);
            let correct = fold
                .test
                .iter()
                .filter(|&&index| model.predict(&train_x, &train_y, &x[index]) == y[index])
                .count();
            correct as f64 / fold.test.len() as f64
        })
        .collect();
    mean(&scores).unwrap_or(0.0)
}

/// Mean negative mean-squared-error of `model` across the folds.
///
/// Negated so that higher is better, which lets maximizing sweeps treat
/// classification and regression scores uniformly.
///
/// # Panics
///
/// Panics if `x` and `y` differ in length or there are fewer rows than
/// folds.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn cross_val_neg_mse(model: &KnnRegressor, x: &[Vec<f64>], y: &[f64], folds: &KFold) -> f64 {
    assert_eq!(x.len(), y.len(), "features and targets must pair up");
    let scores: Vec<f64> = folds
        .split(x.len())
        .iter()
        .map(|fold| {
            let (train_x, train_y) = gather(x, y, &fold.train);
            let squared_error: f64 = fold
                .test
                .iter()
                .map(|&index| {
                    let prediction = model.predict(&train_x, &train_y, &x[index]);
                    (prediction - y[index]).powi(2)
                })
                .sum();
            -(squared_error / fold.test.len() as f64)
        })
        .collect();
    mean(&scores).unwrap_or(0.0)
}

fn gather<T: Copy>(x: &[Vec<f64>], y: &[T], indices: &[usize]) -> (Vec<Vec<f64>>, Vec<T>) {
    indices.iter().map(|&i| (x[i].clone(), y[i])).unzip()
}

#[cfg(test)]
mod tests {
    use crate::distance::Distance;

    use super::*;

    fn two_clusters() -> (Vec<Vec<f64>>, Vec<i64>) {
        let x: Vec<Vec<f64>> = (0..20)
            .map(|i| vec![f64::from(i) + if i >= 10 { 100.0 } else { 0.0 }])
            .collect();
        let y: Vec<i64> = (0..20).map(|i| i64::from(i >= 10)).collect();
        (x, y)
    }

    #[test]
    fn test_accuracy_on_well_separated_clusters() {
        let (x, y) = two_clusters();
        let folds = KFold::shuffled(5, 42);
        let score = cross_val_accuracy(&KnnClassifier::new(3), &x, &y, &folds);
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_accuracy_is_reproducible() {
        let (x, y) = two_clusters();
        let folds = KFold::shuffled(5, 42);
        let model = KnnClassifier::new(3);
        let first = cross_val_accuracy(&model, &x, &y, &folds);
        let second = cross_val_accuracy(&model, &x, &y, &folds);
        assert!((first - second).abs() < f64::EPSILON);
    }

    #[test]
    fn test_neg_mse_is_nonpositive_and_near_zero_for_smooth_target() {
        let x: Vec<Vec<f64>> = (0..30).map(|i| vec![f64::from(i)]).collect();
        let y: Vec<f64> = (0..30).map(|i| f64::from(i) * 2.0).collect();
        let folds = KFold::shuffled(5, 42);
        let model = KnnRegressor::new(3, Distance::Minkowski(2.0));
        let score = cross_val_neg_mse(&model, &x, &y, &folds);
        assert!(score <= 0.0);
        assert!(score > -50.0);
    }
}
