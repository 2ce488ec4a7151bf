//! # CollegeFit
//!
//! A college recommendation engine: filters a tabular dataset of
//! institutions against a student's stated preferences and financial
//! constraints, scores the survivors with a fixed linear weighted sum,
//! and optionally generates a grounded advisory summary for a selected
//! result via an external generative-language service.
//!
//! ## Architecture
//!
//! - `data` - Dataset loading, schema validation, record types
//! - `ranking` - Hard filters and the weighted scoring engine
//! - `rag` - Context building and the generation service client
//! - `cli` - Command-line interface
//! - `utils` - Formatting helpers
//!
//! The ranking engine is a pure function of (dataset, query): it never
//! mutates the loaded dataset, and its scores are only comparable within
//! a single query's result set.

pub mod cli;
pub mod data;
pub mod rag;
pub mod ranking;
pub mod utils;

// Re-export commonly used types
pub use anyhow::{Error, Result};
