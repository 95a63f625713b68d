//! Selects the Minkowski distance order for a distance-weighted
//! housing-price regressor.

use statlab_learn::{
    distance::Distance,
    kfold::KFold,
    knn::KnnRegressor,
    scale::standardize,
    search::{Best, linspace},
    validate::cross_val_neg_mse,
};
use statlab_table::LoadOptions;

use super::{TaskContext, TaskError, computation};

const TARGET: &str = "MEDV";
const FOLDS: usize = 5;
const SHUFFLE_SEED: u64 = 42;
const NEIGHBORS: usize = 5;
const GRID_POINTS: usize = 200;

pub(crate) fn run(ctx: &mut TaskContext) -> Result<(), TaskError> {
    let table = ctx.load_csv("boston.csv", &LoadOptions::default())?;

    let y = table
        .numeric(TARGET)?
        .into_iter()
        .collect::<Option<Vec<f64>>>()
        .ok_or_else(|| computation("missing median value"))?;

    // features are every column except the target, in header order
    let feature_names: Vec<&String> = table
        .headers()
        .iter()
        .filter(|&name| name != TARGET)
        .collect();
    let columns = feature_names
        .iter()
        .map(|name| table.numeric(name))
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
    standardize(&mut x);

    let folds = KFold::shuffled(FOLDS, SHUFFLE_SEED);
    let mut best = Best::new(1.0, f64::NEG_INFINITY);
    for order in linspace(1.0, 10.0, GRID_POINTS) {
        let model = KnnRegressor::new(NEIGHBORS, Distance::Minkowski(order));
        let score = cross_val_neg_mse(&model, &x, &y, &folds);
        best.observe(order, score);
    }

    ctx.save_answer("1.txt", &format!("{:.1}", best.param()))?;
    ctx.save_answer("2.txt", &format!("{:.1}", best.score().abs()))?;

    Ok(())
}
