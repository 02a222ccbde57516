//! Core library for tally
//!
//! This crate implements the **Functional Core** of the tally application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The tally project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`tally_core`** (this crate): Pure transformation functions with zero I/O
//! - **`tally`**: File I/O, timing, and console output (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no clock reads, no printing
//! - **Deterministic**: Elapsed time is passed in by the caller
//! - **Testable**: Can be tested with simple fixture strings, no temp files required
//!
//! # Module Organization
//!
//! - [`input`]: Line-oriented parsing with per-line diagnostics
//! - [`stats`]: Descriptive statistics (mean, median, mode, variance, standard deviation)
//! - [`convert`]: Integer conversion to binary and hexadecimal
//! - [`words`]: Word extraction and frequency counting
//! - [`report`]: Shared value formatting for report files and console summaries
//!
//! # Example Usage
//!
//! ```rust
//! use tally_core::input::{parse_float, parse_lines};
//! use tally_core::stats::summarize;
//!
//! let parsed = parse_lines("1\n2\nbad\n3\n", parse_float);
//! let summary = summarize(&parsed);
//!
//! assert_eq!(summary.valid_count, 3);
//! assert_eq!(summary.invalid_count, 1);
//! assert_eq!(summary.median, Some(2.0));
//! ```

pub mod convert;
pub mod input;
pub mod report;
pub mod stats;
pub mod words;
