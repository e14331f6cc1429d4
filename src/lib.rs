//! # fermi
//!
//! fermi is a line-oriented Fermi-estimation calculator written in Rust.
//! A model is a sequence of assignments and expressions mixing plain scalars
//! with uncertain quantities written as ranges (`10 20`, `0.2 0.6 beta`). The
//! uncertain quantities are propagated by Monte Carlo sampling and summarised
//! as P10/P50/P90 percentiles.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

/// Defines the structure of a parsed line.
///
/// This module declares the `Expr` and `Statement` types built by the parser
/// and consumed by the evaluator. One `Statement` is produced per source line
/// and is never retained after that line has been executed.
pub mod ast;
/// Engine configuration.
///
/// Holds the sample count, the confidence-interval z-score, the numeric fit
/// budget and the optional fixed seed consumed by the distribution sampler.
pub mod config;
/// Distribution families and specifications.
///
/// This module describes how an uncertain literal is written (a 90%
/// confidence interval or explicit parameters), resolves it into concrete law
/// parameters, and draws fixed-size sample arrays from it.
///
/// # Responsibilities
/// - Closed-form confidence-interval fits for the normal and log-normal laws.
/// - A bounded numeric fit for the beta law, which has no closed form.
/// - Reproducible sampling from a per-engine random source.
pub mod distribution;
/// The line-by-line execution entry points.
///
/// The engine owns one evaluation context and converts every failure into a
/// per-line `LineResult::Error`, so a broken line never aborts a model.
pub mod engine;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing or evaluating a line, together with the coarse `ErrorKind`
/// taxonomy reported to callers.
pub mod error;
/// Orchestrates tokenizing, parsing and evaluating a single line.
///
/// # Responsibilities
/// - Converts expression text into typed tokens, collapsing range literals.
/// - Parses a line into a statement and an expression tree.
/// - Evaluates expressions over scalars and sample arrays.
pub mod interpreter;
/// Percentile statistics and display rendering.
///
/// Turns raw sample arrays back into P10/P50/P90 summaries and renders whole
/// models the way they are shown to users.
pub mod report;
/// General numeric utilities.
///
/// Houses the number lexicon: parsing and formatting of scalar literals with
/// `K`/`M`/`B` magnitude suffixes and percent notation.
pub mod util;

pub use crate::{
    config::EngineConfig,
    engine::{Engine, LineResult},
    error::{Error, ErrorKind},
    interpreter::value::core::Value,
};

/// Executes a whole model with a freshly constructed engine.
///
/// Every line of `source` yields exactly one `LineResult`, in input order. A
/// failing line is reported in place and never stops later lines from being
/// evaluated.
///
/// # Examples
/// ```
/// use fermi::{LineResult, Value, execute_model};
///
/// let results = execute_model("x = 10\ny = x * 2\n");
/// assert_eq!(results.len(), 2);
/// assert!(matches!(&results[1],
///                  LineResult::Assignment { name, value: Value::Scalar(v), .. }
///                  if name == "y" && *v == 20.0));
///
/// // An unknown variable only fails its own line.
/// let results = execute_model("households = population / 2.5");
/// assert!(results[0].is_error());
/// ```
#[must_use]
pub fn execute_model(source: &str) -> Vec<LineResult> {
    Engine::new().execute_model(source)
}
