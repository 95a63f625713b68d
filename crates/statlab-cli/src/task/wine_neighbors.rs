//! Selects the neighbor count for wine cultivar classification, before and
//! after feature standardization.

use statlab_learn::{
    kfold::KFold, knn::KnnClassifier, scale::standardize, search::Best,
    validate::cross_val_accuracy,
};
use statlab_table::LoadOptions;

use super::{TaskContext, TaskError, computation};

const FOLDS: usize = 5;
const SHUFFLE_SEED: u64 = 42;
const MAX_NEIGHBORS: usize = 50;

#[expect(clippy::cast_possible_truncation)]
pub(crate) fn run(ctx: &mut TaskContext) -> Result<(), TaskError> {
    let table = ctx.load_csv("wine.data", &LoadOptions::headerless())?;

    // column 0 is the cultivar label, the rest are features
    let y = table
        .numeric_at(0)?
        .into_iter()
        .map(|cell| cell.map(|label| label as i64))
        .collect::<Option<Vec<i64>>>()
        .ok_or_else(|| computation("missing cultivar label"))?;

    let columns = (1..table.width())
        .map(|index| table.numeric_at(index))
        .collect::<Result<Vec<_>, _>>()?;
    let mut x = Vec::with_capacity(table.len());
    for row in 0..table.len() {
        let features = columns
            .iter()
            .map(|column| column[row])
            .collect::<Option<Vec<f64>>>()
            .ok_or_else(|| computation("missing feature value"))?;
        x.push(features);
    }

    let folds = KFold::shuffled(FOLDS, SHUFFLE_SEED);

    let raw = sweep_neighbor_count(&x, &y, &folds);
    ctx.save_answer("1.txt", &raw.param().to_string())?;
    ctx.save_answer("2.txt", &format!("{:.2}", raw.score()))?;

    let mut scaled = x.clone();
    standardize(&mut scaled);
    let rescaled = sweep_neighbor_count(&scaled, &y, &folds);
    ctx.save_answer("3.txt", &rescaled.param().to_string())?;
    ctx.save_answer("4.txt", &format!("{:.2}", rescaled.score()))?;

    Ok(())
}

fn sweep_neighbor_count(x: &[Vec<f64>], y: &[i64], folds: &KFold) -> Best<usize> {
    let mut best = Best::new(1, 0.0);
    for k in 1..=MAX_NEIGHBORS {
        let score = cross_val_accuracy(&KnnClassifier::new(k), x, y, folds);
        best.observe(k, score);
    }
    best
}
