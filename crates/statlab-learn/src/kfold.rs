//! K-fold cross-validation splitting.

use rand::SeedableRng as _;
use rand::seq::SliceRandom as _;
use rand_pcg::Pcg64;

/// Train/test row indices for one cross-validation fold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fold {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Splits row indices into `k` folds, each used once as the test set.
///
/// Folds are contiguous chunks of the index sequence; when the sample
/// count does not divide evenly, the first `n mod k` folds receive one
/// extra row. With [`KFold::shuffled`], the index sequence is permuted by
/// a generator seeded from a fixed value first, so the same seed always
/// produces the same folds.
#[derive(Debug, Clone)]
pub struct KFold {
    n_splits: usize,
    shuffle_seed: Option<u64>,
}

impl KFold {
    /// Unshuffled folds over the natural row order.
    ///
    /// # Panics
    ///
    /// Panics if `n_splits < 2`.
    #[must_use]
    pub fn new(n_splits: usize) -> Self {
        assert!(n_splits >= 2, "cross-validation needs at least 2 folds");
        Self {
            n_splits,
            shuffle_seed: None,
        }
    }

    /// Folds over a seed-shuffled permutation of the row order.
    ///
    /// # Panics
    ///
    /// Panics if `n_splits < 2`.
    #[must_use]
    pub fn shuffled(n_splits: usize, seed: u64) -> Self {
        let mut kfold = Self::new(n_splits);
        kfold.shuffle_seed = Some(seed);
        kfold
    }

    /// Number of folds.
    #[must_use]
    pub fn n_splits(&self) -> usize {
        self.n_splits
    }

    /// Produces the folds for a dataset of `n_samples` rows.
    ///
    /// # Panics
    ///
    /// Panics if `n_samples < n_splits` (some fold would be empty).
    #[must_use]
    pub fn split(&self, n_samples: usize) -> Vec<Fold> {
        assert!(
            n_samples >= self.n_splits,
            "need at least one sample per fold"
        );

        let mut indices: Vec<usize> = (0..n_samples).collect();
        if let Some(seed) = self.shuffle_seed {
            let mut rng = Pcg64::seed_from_u64(seed);
            indices.shuffle(&mut rng);
        }

        let base = n_samples / self.n_splits;
        let extras = n_samples % self.n_splits;
        let mut folds = Vec::with_capacity(self.n_splits);
        let mut start = 0;
        for fold_index in 0..self.n_splits {
            let stop = start + base + usize::from(fold_index < extras);
            let test = indices[start..stop].to_vec();
            let train = indices[..start]
                .iter()
                .chain(&indices[stop..])
                .copied()
                .collect();
            folds.push(Fold { train, test });
            start = stop;
        }
        folds
    }
}
