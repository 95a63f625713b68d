//! Descriptive statistics over the passenger manifest.

use statlab_stats::{
    correlation::pearson,
    counts::ValueCounts,
    descriptive::{mean, median},
};
use statlab_table::LoadOptions;

use super::{TaskContext, TaskError, computation, first_name::extract_first_name};

pub(crate) fn run(ctx: &mut TaskContext) -> Result<(), TaskError> {
    let table = ctx.load_csv("titanic.csv", &LoadOptions::default())?;

    // 1. passengers by sex
    let sex = table.text("Sex")?;
    let sex_counts: ValueCounts<&str> = sex.iter().copied().collect();
    ctx.save_answer(
        "1.txt",
        &format!("{} {}", sex_counts.get("male"), sex_counts.get("female")),
    )?;

    // 2. share of survivors (%)
    let survived: Vec<f64> = table.numeric("Survived")?.into_iter().flatten().collect();
    let survived_share =
        mean(&survived).ok_or_else(|| computation("no survival records"))? * 100.0;
    ctx.save_answer("2.txt", &format!("{survived_share:.2}"))?;

    // 3. share of first-class passengers (%)
    let first_class: Vec<f64> = table
        .numeric("Pclass")?
        .into_iter()
        .flatten()
        .map(|class| if class == 1.0 { 1.0 } else { 0.0 })
        .collect();
    let first_class_share =
        mean(&first_class).ok_or_else(|| computation("no class records"))? * 100.0;
    ctx.save_answer("3.txt", &format!("{first_class_share:.2}"))?;

    // 4. mean and median age over the rows where age is known
    let age: Vec<f64> = table.numeric("Age")?.into_iter().flatten().collect();
    let mean_age = mean(&age).ok_or_else(|| computation("no age records"))?;
    let median_age = median(&age).ok_or_else(|| computation("no age records"))?;
    ctx.save_answer("4.txt", &format!("{mean_age:.2} {median_age:.2}"))?;

    // 5. correlation between sibling/spouse and parent/child counts
    let sibsp = table.numeric("SibSp")?;
    let parch = table.numeric("Parch")?;
    let (xs, ys): (Vec<f64>, Vec<f64>) = sibsp
        .into_iter()
        .zip(parch)
        .filter_map(|(a, b)| Some((a?, b?)))
        .unzip();
    let correlation = pearson(&xs, &ys)
        .ok_or_else(|| computation("correlation of SibSp and Parch is undefined"))?;
    ctx.save_answer("5.txt", &format!("{correlation:.2}"))?;

    // 6. most frequent female first name
    let names = table.text("Name")?;
    let name_counts: ValueCounts<&str> = sex
        .iter()
        .zip(&names)
        .filter(|&(&sex, _)| sex == "female")
        .filter_map(|(_, name)| extract_first_name(name))
        .collect();
    let most_common = name_counts
        .most_frequent()
        .ok_or_else(|| computation("no extractable female first names"))?;
    ctx.save_answer("6.txt", most_common)?;

    Ok(())
}
