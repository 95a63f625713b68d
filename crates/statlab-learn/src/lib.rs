//! Model fitting and selection for the Statlab tasks.
//!
//! This crate covers the modelling side of the analysis tasks:
//!
//! - [`kfold`]: seeded, shuffled k-fold splitting over row indices
//! - [`scale`]: per-feature standardization (zero mean, unit variance)
//! - [`distance`]: Euclidean and Minkowski distance metrics
//! - [`knn`]: k-nearest-neighbor classification and distance-weighted
//!   regression
//! - [`tree`]: a CART decision-tree classifier with feature importances
//! - [`validate`]: cross-validated scoring (accuracy, negative MSE)
//! - [`search`]: best-so-far tracking and evenly spaced parameter grids
//!
//! Everything is deterministic: fold shuffling uses an explicitly seeded
//! generator, the tree has no random tie-breaking, and the best-so-far
//! tracker keeps the first candidate on score ties.
//!
//! # Examples
//!
//! Picking the neighbor count for a classifier by cross-validation:
//!
//! ```
//! use statlab_learn::kfold::KFold;
//! use statlab_learn::knn::KnnClassifier;
//! use statlab_learn::search::Best;
//! use statlab_learn::validate::cross_val_accuracy;
//!
//! let x: Vec<Vec<f64>> = (0..20).map(|i| vec![f64::from(i)]).collect();
//! let y: Vec<i64> = (0..20).map(|i| i64::from(i >= 10)).collect();
//!
//! let folds = KFold::shuffled(5, 42);
//! let mut best = Best::new(1, 0.0);
//! for k in 1..=5 {
//!     let score = cross_val_accuracy(&KnnClassifier::new(k), &x, &y, &folds);
//!     best.observe(k, score);
//! }
//! assert!(best.score() > 0.5);
//! ```

pub mod distance;
pub mod kfold;
pub mod knn;
pub mod scale;
pub mod search;
pub mod tree;
pub mod validate;
