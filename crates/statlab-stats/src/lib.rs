//! Statistical primitives for the Statlab tasks.
//!
//! This crate provides the small set of statistics the analysis tasks rely
//! on:
//!
//! - **Descriptive statistics**: mean, median, population variance and
//!   standard deviation
//! - **Correlation**: Pearson correlation between two paired samples
//! - **Value counts**: frequency table preserving first-seen order, with a
//!   deterministic most-frequent query
//!
//! Statistics that are undefined on their input (empty data, zero variance)
//! return `None`; callers decide whether that is an error.
//!
//! # Examples
//!
//! ## Central tendency
//!
//! ```
//! use statlab_stats::descriptive::{mean, median};
//!
//! let values = [1.0, 2.0, 3.0, 4.0];
//! assert_eq!(mean(&values), Some(2.5));
//! assert_eq!(median(&values), Some(2.5));
//! ```
//!
//! ## Counting categorical values
//!
//! ```
//! use statlab_stats::counts::ValueCounts;
//!
//! let counts: ValueCounts<&str> = ["male", "male", "female"].into_iter().collect();
//! assert_eq!(counts.get("male"), 2);
//! assert_eq!(counts.most_frequent(), Some(&"male"));
//! ```

pub mod correlation;
pub mod counts;
pub mod descriptive;
