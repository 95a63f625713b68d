//! The task manifest and the context tasks run in.

use std::{
    fs,
    path::{Path, PathBuf},
};

use statlab_table::{LoadOptions, Table, TableError};

mod first_name;
mod housing_metric;
mod passengers;
mod survival_features;
mod wine_neighbors;

/// One registered analysis task.
pub(crate) struct TaskDef {
    /// Stable manifest name; doubles as the answer folder name.
    pub name: &'static str,
    /// One-line description for `statlab list`.
    pub summary: &'static str,
    pub run: fn(&mut TaskContext) -> Result<(), TaskError>,
}

/// Every task, in execution order (lexicographic by name).
pub(crate) const MANIFEST: &[TaskDef] = &[
    TaskDef {
        name: "housing_metric",
        summary: "best Minkowski order for a distance-weighted housing-price regressor",
        run: housing_metric::run,
    },
    TaskDef {
        name: "passengers",
        summary: "descriptive statistics over the passenger manifest",
        run: passengers::run,
    },
    TaskDef {
        name: "survival_features",
        summary: "top survival predictors ranked by decision-tree importance",
        run: survival_features::run,
    },
    TaskDef {
        name: "wine_neighbors",
        summary: "neighbor count selection for wine cultivar classification",
        run: wine_neighbors::run,
    },
];

/// Errors a task can surface to the runner.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub(crate) enum TaskError {
    #[display("{_0}")]
    Data(TableError),
    #[display("computation failed: {what}")]
    Computation { what: String },
    #[display("failed to write answer {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl From<TableError> for TaskError {
    fn from(error: TableError) -> Self {
        Self::Data(error)
    }
}

pub(crate) fn computation(what: impl Into<String>) -> TaskError {
    TaskError::Computation { what: what.into() }
}

/// Everything a task needs from its environment: where the datasets live,
/// where answers go, and which task it is. The task name is threaded in
/// explicitly by the runner; tasks never infer their own identity.
#[derive(Debug)]
pub(crate) struct TaskContext {
    data_dir: PathBuf,
    answers_dir: PathBuf,
    task_name: &'static str,
    written: Vec<PathBuf>,
}

impl TaskContext {
    pub fn new(data_dir: &Path, answers_dir: &Path, task_name: &'static str) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            answers_dir: answers_dir.to_path_buf(),
            task_name,
            written: Vec::new(),
        }
    }

    /// Loads a dataset relative to the data directory.
    pub fn load_csv(&self, relative: &str, options: &LoadOptions) -> Result<Table, TaskError> {
        Ok(statlab_table::load_csv(&self.data_dir, relative, options)?)
    }

    /// Writes one answer payload verbatim (UTF-8, no trailing newline) to
    /// `<answers_dir>/<task_name>/<file_name>`, creating directories as
    /// needed and overwriting any previous file.
    pub fn save_answer(&mut self, file_name: &str, payload: &str) -> Result<PathBuf, TaskError> {
        let folder = self.answers_dir.join(self.task_name);
        fs::create_dir_all(&folder).map_err(|source| TaskError::Write {
            path: folder.clone(),
            source,
        })?;

        let path = folder.join(file_name);
        fs::write(&path, payload).map_err(|source| TaskError::Write {
            path: path.clone(),
            source,
        })?;
        self.written.push(path.clone());
        Ok(path)
    }

    /// Answer files written so far, in write order.
    pub fn into_written(self) -> Vec<PathBuf> {
        self.written
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_manifest_is_sorted_by_name() {
        let names: Vec<&str> = MANIFEST.iter().map(|def| def.name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_save_answer_round_trip_without_newline() {
        let dir = TempDir::new().unwrap();
        let mut ctx = TaskContext::new(dir.path(), &dir.path().join("answers"), "demo");

        let path = ctx.save_answer("1.txt", "42.00").unwrap();
        assert_eq!(path, dir.path().join("answers").join("demo").join("1.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "42.00");
    }

    #[test]
    fn test_save_answer_overwrites() {
        let dir = TempDir::new().unwrap();
        let mut ctx = TaskContext::new(dir.path(), &dir.path().join("answers"), "demo");

        ctx.save_answer("1.txt", "first").unwrap();
        let path = ctx.save_answer("1.txt", "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        assert_eq!(ctx.into_written().len(), 2);
    }

    #[test]
    fn test_missing_dataset_maps_to_data_error() {
        let dir = TempDir::new().unwrap();
        let ctx = TaskContext::new(dir.path(), &dir.path().join("answers"), "demo");

        let err = ctx
            .load_csv("absent.csv", &LoadOptions::default())
            .unwrap_err();
        assert!(matches!(err, TaskError::Data(TableError::DataNotFound { .. })));
    }
}
