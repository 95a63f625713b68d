//! CART decision-tree classification with feature importances.

/// A fitted CART classification tree.
///
/// Splits minimize weighted Gini impurity and the tree is grown until
/// every leaf is pure or no split separates the remaining rows. Feature
/// scanning order, ascending threshold order, and a strict improvement
/// rule make fitting fully deterministic: there is no random tie-breaking,
/// so refitting on identical data yields an identical tree.
///
/// Feature importances are the impurity decrease attributed to each
/// feature, weighted by the share of rows reaching the split and
/// normalized to sum to one.
#[derive(Debug, Clone)]
pub struct DecisionTree {
    root: Node,
    importances: Vec<f64>,
}

#[derive(Debug, Clone)]
enum Node {
    Leaf {
        label: i64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

struct SplitCandidate {
    feature: usize,
    threshold: f64,
    weighted_impurity: f64,
}

impl DecisionTree {
    /// Fits a tree on feature rows `x` against labels `y`.
    ///
    /// # Panics
    ///
    /// Panics if the training set is empty, `x` and `y` differ in length,
    /// or the feature rows are ragged.
    #[must_use]
    pub fn fit(x: &[Vec<f64>], y: &[i64]) -> Self {
        assert_eq!(x.len(), y.len(), "features and labels must pair up");
        assert!(!x.is_empty(), "training set must not be empty");
        let n_features = x[0].len();
        assert!(
            x.iter().all(|row| row.len() == n_features),
            "feature rows must have equal length"
        );

        let labels = distinct_labels(y);
        let indices: Vec<usize> = (0..x.len()).collect();
        let mut importances = vec![0.0; n_features];
        let root = grow(x, y, &labels, indices, x.len(), &mut importances);

        let total: f64 = importances.iter().sum();
        if total > 0.0 {
            for importance in &mut importances {
                *importance /= total;
            }
        }

        Self { root, importances }
    }

    /// Predicts the label for one feature row.
    #[must_use]
    pub fn predict(&self, row: &[f64]) -> i64 {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { label } => return *label,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if row[*feature] <= *threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }

    /// Normalized per-feature importance scores, in feature order.
    #[must_use]
    pub fn feature_importances(&self) -> &[f64] {
        &self.importances
    }
}

fn distinct_labels(y: &[i64]) -> Vec<i64> {
    let mut labels = Vec::new();
    for &label in y {
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    labels
}

fn label_position(labels: &[i64], label: i64) -> usize {
    labels
        .iter()
        .position(|&known| known == label)
        .expect("label seen during fit")
}

fn label_counts(y: &[i64], labels: &[i64], indices: &[usize]) -> Vec<usize> {
    let mut counts = vec![0; labels.len()];
    for &index in indices {
        counts[label_position(labels, y[index])] += 1;
    }
    counts
}

#[expect(clippy::cast_precision_loss)]
fn gini(counts: &[usize], total: usize) -> f64 {
    let total = total as f64;
    1.0 - counts
        .iter()
        .map(|&count| {
            let p = count as f64 / total;
            p * p
        })
        .sum::<f64>()
}

/// Majority label; count ties keep the label seen earliest in the data.
fn majority(counts: &[usize], labels: &[i64]) -> i64 {
    let mut best = 0;
    for (position, &count) in counts.iter().enumerate() {
        if count > counts[best] {
            best = position;
        }
    }
    labels[best]
}

#[expect(clippy::cast_precision_loss)]
fn best_split(
    x: &[Vec<f64>],
    y: &[i64],
    labels: &[i64],
    indices: &[usize],
) -> Option<SplitCandidate> {
    let n = indices.len();
    let n_features = x[indices[0]].len();
    let total_counts = label_counts(y, labels, indices);

    let mut best: Option<SplitCandidate> = None;
    let mut order = indices.to_vec();
    for feature in 0..n_features {
        order.sort_by(|&a, &b| x[a][feature].total_cmp(&x[b][feature]));

        let mut left_counts = vec![0; labels.len()];
        let mut right_counts = total_counts.clone();
        for position in 0..n - 1 {
            let row = order[position];
            let label = label_position(labels, y[row]);
            left_counts[label] += 1;
            right_counts[label] -= 1;

            // a boundary only exists between distinct adjacent values
            let value = x[row][feature];
            let next = x[order[position + 1]][feature];
            if value == next {
                continue;
            }

            let n_left = position + 1;
            let n_right = n - n_left;
            let weighted_impurity = (n_left as f64 * gini(&left_counts, n_left)
                + n_right as f64 * gini(&right_counts, n_right))
                / n as f64;
            if best
                .as_ref()
                .is_none_or(|candidate| weighted_impurity < candidate.weighted_impurity)
            {
                best = Some(SplitCandidate {
                    feature,
                    threshold: (value + next) / 2.0,
                    weighted_impurity,
                });
            }
        }
    }
    best
}

#[expect(clippy::cast_precision_loss)]
fn grow(
    x: &[Vec<f64>],
    y: &[i64],
    labels: &[i64],
    indices: Vec<usize>,
    n_total: usize,
    importances: &mut [f64],
) -> Node {
    let counts = label_counts(y, labels, &indices);
    let impurity = gini(&counts, indices.len());
    let label = majority(&counts, labels);
    if impurity == 0.0 {
        return Node::Leaf { label };
    }
    let Some(split) = best_split(x, y, labels, &indices) else {
        // impure but inseparable (identical feature rows, mixed labels)
        return Node::Leaf { label };
    };

    let node_size = indices.len();
    let (left_indices, right_indices): (Vec<usize>, Vec<usize>) = indices
        .into_iter()
        .partition(|&index| x[index][split.feature] <= split.threshold);

    let node_weight = node_size as f64 / n_total as f64;
    importances[split.feature] += node_weight * (impurity - split.weighted_impurity);

    Node::Split {
        feature: split.feature,
        threshold: split.threshold,
        left: Box::new(grow(x, y, labels, left_indices, n_total, importances)),
        right: Box::new(grow(x, y, labels, right_indices, n_total, importances)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feature 0 is constant noise, feature 1 separates the labels.
    fn separable() -> (Vec<Vec<f64>>, Vec<i64>) {
        let x = vec![
            vec![1.0, 0.0],
            vec![1.0, 1.0],
            vec![1.0, 2.0],
            vec![1.0, 10.0],
            vec![1.0, 11.0],
            vec![1.0, 12.0],
        ];
        let y = vec![0, 0, 0, 1, 1, 1];
        (x, y)
    }

    #[test]
    fn test_predicts_training_data_exactly() {
        let (x, y) = separable();
        let tree = DecisionTree::fit(&x, &y);
        for (row, &label) in x.iter().zip(&y) {
            assert_eq!(tree.predict(row), label);
        }
    }

    #[test]
    fn test_importance_goes_to_the_separating_feature() {
        let (x, y) = separable();
        let tree = DecisionTree::fit(&x, &y);
        let importances = tree.feature_importances();
        assert!((importances[1] - 1.0).abs() < 1e-12);
        assert_eq!(importances[0], 0.0);
    }

    #[test]
    fn test_importances_sum_to_one() {
        // both features needed: feature 0 splits off the high block,
        // feature 1 separates the rest
        let x = vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![0.0, 5.0],
            vec![0.0, 6.0],
            vec![9.0, 0.0],
            vec![9.0, 6.0],
        ];
        let y = vec![0, 0, 1, 1, 0, 0];
        let tree = DecisionTree::fit(&x, &y);
        let total: f64 = tree.feature_importances().iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert!(tree.feature_importances().iter().all(|&i| i >= 0.0));
    }

    #[test]
    fn test_fit_is_deterministic() {
        let (x, y) = separable();
        let first = DecisionTree::fit(&x, &y);
        let second = DecisionTree::fit(&x, &y);
        assert_eq!(first.feature_importances(), second.feature_importances());
        for row in &x {
            assert_eq!(first.predict(row), second.predict(row));
        }
    }

    #[test]
    fn test_inseparable_rows_become_a_majority_leaf() {
        let x = vec![vec![1.0], vec![1.0], vec![1.0]];
        let y = vec![0, 0, 1];
        let tree = DecisionTree::fit(&x, &y);
        assert_eq!(tree.predict(&[1.0]), 0);
        assert_eq!(tree.feature_importances(), [0.0]);
    }

    #[test]
    fn test_single_class_is_a_leaf() {
        let x = vec![vec![1.0], vec![2.0]];
        let y = vec![7, 7];
        let tree = DecisionTree::fit(&x, &y);
        assert_eq!(tree.predict(&[5.0]), 7);
    }
}
