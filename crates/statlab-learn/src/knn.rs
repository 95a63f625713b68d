//! K-nearest-neighbor models.
//!
//! Both models are lazy learners: there is no fitted state, prediction
//! takes the training data directly. The neighbor search is a stable sort
//! over distances, so equal distances keep the lower training-row index
//! and every prediction is deterministic.

use statlab_stats::counts::ValueCounts;

use crate::distance::Distance;

/// The `k` nearest `(row index, distance)` pairs, ascending by distance.
///
/// When fewer than `k` training rows exist, all of them are returned.
fn nearest_neighbors(
    metric: Distance,
    train_x: &[Vec<f64>],
    query: &[f64],
    k: usize,
) -> Vec<(usize, f64)> {
    let mut scored: Vec<(usize, f64)> = train_x
        .iter()
        .enumerate()
        .map(|(index, row)| (index, metric.compute(row, query)))
        .collect();
    scored.sort_by(|a, b| a.1.total_cmp(&b.1));
    scored.truncate(k);
    scored
}

/// Majority-vote classifier over the `k` nearest training rows.
#[derive(Debug, Clone, Copy)]
pub struct KnnClassifier {
    k: usize,
    metric: Distance,
}

impl KnnClassifier {
    /// Creates a classifier using Euclidean distance.
    ///
    /// # Panics
    ///
    /// Panics if `k == 0`.
    #[must_use]
    pub fn new(k: usize) -> Self {
        assert!(k >= 1, "k must be at least 1");
        Self {
            k,
            metric: Distance::Euclidean,
        }
    }

    /// Replaces the distance metric.
    #[must_use]
    pub fn with_metric(mut self, metric: Distance) -> Self {
        self.metric = metric;
        self
    }

    /// Predicts the label of `query` by majority vote among its `k`
    /// nearest training rows. Vote ties go to the label whose first voter
    /// is nearest.
    ///
    /// # Panics
    ///
    /// Panics if the training set is empty or `train_x` and `train_y`
    /// differ in length.
    #[must_use]
    pub fn predict(&self, train_x: &[Vec<f64>], train_y: &[i64], query: &[f64]) -> i64 {
        assert_eq!(
            train_x.len(),
            train_y.len(),
            "features and labels must pair up"
        );
        assert!(!train_x.is_empty(), "training set must not be empty");

        let neighbors = nearest_neighbors(self.metric, train_x, query, self.k);
        // neighbors are in ascending distance order, so first-seen-wins
        // tie-breaking resolves toward the nearest voter
        let votes: ValueCounts<i64> = neighbors.iter().map(|&(index, _)| train_y[index]).collect();
        *votes.most_frequent().unwrap()
    }
}

/// Inverse-distance-weighted regressor over the `k` nearest training rows.
#[derive(Debug, Clone, Copy)]
pub struct KnnRegressor {
    k: usize,
    metric: Distance,
}

impl KnnRegressor {
    /// # Panics
    ///
    /// Panics if `k == 0`.
    #[must_use]
    pub fn new(k: usize, metric: Distance) -> Self {
        assert!(k >= 1, "k must be at least 1");
        Self { k, metric }
    }

    /// Predicts the target of `query` as the inverse-distance-weighted
    /// mean of its `k` nearest targets. Exact matches (distance zero)
    /// short-circuit to the plain mean of the matching targets.
    ///
    /// # Panics
    ///
    /// Panics if the training set is empty or `train_x` and `train_y`
    /// differ in length.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn predict(&self, train_x: &[Vec<f64>], train_y: &[f64], query: &[f64]) -> f64 {
        assert_eq!(
            train_x.len(),
            train_y.len(),
            "features and targets must pair up"
        );
        assert!(!train_x.is_empty(), "training set must not be empty");

        let neighbors = nearest_neighbors(self.metric, train_x, query, self.k);
        let exact: Vec<f64> = neighbors
            .iter()
            .filter(|&&(_, distance)| distance == 0.0)
            .map(|&(index, _)| train_y[index])
            .collect();
        if !exact.is_empty() {
            return exact.iter().sum::<f64>() / exact.len() as f64;
        }

        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;
        for &(index, distance) in &neighbors {
            let weight = 1.0 / distance;
            weighted_sum += weight * train_y[index];
            total_weight += weight;
        }
        weighted_sum / total_weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_data() -> (Vec<Vec<f64>>, Vec<i64>) {
        let x: Vec<Vec<f64>> = (0..10).map(|i| vec![f64::from(i)]).collect();
        let y: Vec<i64> = (0..10).map(|i| i64::from(i >= 5)).collect();
        (x, y)
    }

    #[test]
    fn test_classifier_predicts_local_majority() {
        let (x, y) = line_data();
        let model = KnnClassifier::new(3);
        assert_eq!(model.predict(&x, &y, &[0.9]), 0);
        assert_eq!(model.predict(&x, &y, &[8.2]), 1);
    }

    #[test]
    fn test_classifier_vote_tie_goes_to_nearest() {
        let x = vec![vec![0.0], vec![1.0], vec![10.0], vec![11.0]];
        let y = vec![0, 0, 1, 1];
        // query at 4.0: neighbors are rows 1, 0, 2, 3; with k = 4 the vote
        // is tied 2-2 and label 0 owns the nearest voter
        let model = KnnClassifier::new(4);
        assert_eq!(model.predict(&x, &y, &[4.0]), 0);
    }

    #[test]
    fn test_classifier_with_manhattan_metric() {
        let x = vec![vec![0.0, 0.0], vec![3.0, 3.0]];
        let y = vec![0, 1];
        let model = KnnClassifier::new(1).with_metric(Distance::Minkowski(1.0));
        // (2, 0) is Manhattan distance 2 from row 0 and 4 from row 1
        assert_eq!(model.predict(&x, &y, &[2.0, 0.0]), 0);
    }

    #[test]
    fn test_classifier_with_k_larger_than_training_set() {
        let x = vec![vec![0.0], vec![1.0], vec![2.0]];
        let y = vec![1, 1, 0];
        let model = KnnClassifier::new(50);
        assert_eq!(model.predict(&x, &y, &[0.5]), 1);
    }

    #[test]
    fn test_regressor_weights_by_inverse_distance() {
        let x = vec![vec![0.0], vec![2.0]];
        let y = vec![0.0, 3.0];
        // query at 0.5: weights 2 and 2/3, prediction (2*0 + 2/3*3) / (2 + 2/3)
        let model = KnnRegressor::new(2, Distance::Euclidean);
        let prediction = model.predict(&x, &y, &[0.5]);
        assert!((prediction - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_regressor_exact_match_short_circuits() {
        let x = vec![vec![1.0], vec![1.0], vec![5.0]];
        let y = vec![10.0, 20.0, 99.0];
        let model = KnnRegressor::new(3, Distance::Euclidean);
        // both zero-distance targets average; the distant row is ignored
        assert!((model.predict(&x, &y, &[1.0]) - 15.0).abs() < 1e-12);
    }
}
