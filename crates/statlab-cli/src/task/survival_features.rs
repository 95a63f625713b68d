//! Ranks survival predictors by decision-tree feature importance.

use statlab_learn::tree::DecisionTree;
use statlab_table::LoadOptions;

use super::{TaskContext, TaskError, computation};

const FEATURES: [&str; 4] = ["Pclass", "Fare", "Age", "Sex"];
const TARGET: &str = "Survived";

#[expect(clippy::cast_possible_truncation)]
pub(crate) fn run(ctx: &mut TaskContext) -> Result<(), TaskError> {
    let options = LoadOptions::default().columns(FEATURES.iter().copied().chain([TARGET]));
    let table = ctx.load_csv("titanic.csv", &options)?;

    let pclass = table.numeric("Pclass")?;
    let fare = table.numeric("Fare")?;
    let age = table.numeric("Age")?;
    let survived = table.numeric(TARGET)?;
    let sex: Vec<Option<f64>> = table
        .text("Sex")?
        .iter()
        .map(|&cell| match cell {
            "male" => Some(0.0),
            "female" => Some(1.0),
            _ => None,
        })
        .collect();

    // keep only the rows with every feature and the target present
    let mut x = Vec::with_capacity(table.len());
    let mut y = Vec::with_capacity(table.len());
    for row in 0..table.len() {
        let (Some(class), Some(fare), Some(age), Some(sex), Some(target)) =
            (pclass[row], fare[row], age[row], sex[row], survived[row])
        else {
            continue;
        };
        x.push(vec![class, fare, age, sex]);
        y.push(target as i64);
    }
    if x.is_empty() {
        return Err(computation("no complete rows to fit the tree on"));
    }

    let tree = DecisionTree::fit(&x, &y);
    let mut ranked: Vec<(&str, f64)> = FEATURES
        .iter()
        .copied()
        .zip(tree.feature_importances().iter().copied())
        .collect();
    // stable sort: importance ties keep feature declaration order
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    let top_two: Vec<&str> = ranked.iter().take(2).map(|&(name, _)| name).collect();
    ctx.save_answer("1.txt", &top_two.join(" "))?;

    Ok(())
}
