//! Grading a whole class at once.
//!
//! This module reads a CSV roster of student inputs, grades every row,
//! and summarises the cohort: how many students landed on each mention,
//! the pass rate, and the mean and spread of the final grades.

pub mod aggregate;
pub mod roster;
pub mod types;
