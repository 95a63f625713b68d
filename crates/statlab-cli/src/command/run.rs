use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::report::{RunReport, TaskReport, TaskStatus};
use crate::task::{MANIFEST, TaskContext, TaskDef, TaskError};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RunArg {
    /// Directory holding the input datasets
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,
    /// Root directory for answer files
    #[arg(long, default_value = "answers")]
    answers_dir: PathBuf,
    /// Write a JSON run report to this path
    #[arg(long)]
    summary: Option<PathBuf>,
}

impl Default for RunArg {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            answers_dir: PathBuf::from("answers"),
            summary: None,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TaskArg {
    /// Manifest name of the task to run
    name: String,
    /// Directory holding the input datasets
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,
    /// Root directory for answer files
    #[arg(long, default_value = "answers")]
    answers_dir: PathBuf,
}

#[derive(Debug)]
struct Outcome {
    name: &'static str,
    answers: Vec<PathBuf>,
    error: Option<TaskError>,
}

/// Runs every manifest task in order, isolating failures so one broken
/// task never stops the batch. Errors are captured per task and surfaced
/// in the end-of-run summary; the batch fails (non-zero exit) if any task
/// failed.
pub(crate) fn run_batch(arg: &RunArg) -> anyhow::Result<()> {
    let started_at = Utc::now();
    let total = MANIFEST.len();

    let mut outcomes = Vec::with_capacity(total);
    for (index, def) in MANIFEST.iter().enumerate() {
        eprintln!("[{}/{total}] {}", index + 1, def.name);
        outcomes.push(execute(def, &arg.data_dir, &arg.answers_dir));
    }

    let failed = outcomes.iter().filter(|o| o.error.is_some()).count();
    eprintln!("{} passed, {failed} failed", total - failed);
    for outcome in &outcomes {
        if let Some(error) = &outcome.error {
            eprintln!("  {}: {error}", outcome.name);
        }
    }

    if let Some(path) = &arg.summary {
        build_report(started_at, outcomes).save(path)?;
        eprintln!("run report written to {}", path.display());
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {total} tasks failed");
    }
    Ok(())
}

/// Runs one task by manifest name.
pub(crate) fn run_single(arg: &TaskArg) -> anyhow::Result<()> {
    let def = MANIFEST
        .iter()
        .find(|def| def.name == arg.name)
        .ok_or_else(|| {
            let names: Vec<&str> = MANIFEST.iter().map(|def| def.name).collect();
            anyhow::anyhow!(
                "unknown task '{}' (expected one of: {})",
                arg.name,
                names.join(", ")
            )
        })?;

    let outcome = execute(def, &arg.data_dir, &arg.answers_dir);
    match outcome.error {
        Some(error) => {
            Err(anyhow::Error::new(error).context(format!("task '{}' failed", def.name)))
        }
        None => Ok(()),
    }
}

fn execute(def: &TaskDef, data_dir: &Path, answers_dir: &Path) -> Outcome {
    let mut ctx = TaskContext::new(data_dir, answers_dir, def.name);
    let result = (def.run)(&mut ctx);
    let answers = ctx.into_written();
    match result {
        Ok(()) => {
            println!(
                "task \"{}\" finished, answers saved to \"{}\"",
                def.name,
                answers_dir.join(def.name).display()
            );
            Outcome {
                name: def.name,
                answers,
                error: None,
            }
        }
        Err(error) => Outcome {
            name: def.name,
            answers,
            error: Some(error),
        },
    }
}

fn build_report(started_at: chrono::DateTime<Utc>, outcomes: Vec<Outcome>) -> RunReport {
    let passed = outcomes.iter().filter(|o| o.error.is_none()).count();
    let failed = outcomes.len() - passed;
    let tasks = outcomes
        .into_iter()
        .map(|outcome| TaskReport {
            name: outcome.name.to_string(),
            status: if outcome.error.is_some() {
                TaskStatus::Failed
            } else {
                TaskStatus::Ok
            },
            error: outcome.error.map(|e| e.to_string()),
            answers: outcome.answers,
        })
        .collect();
    RunReport {
        started_at,
        finished_at: Utc::now(),
        passed,
        failed,
        tasks,
    }
}
