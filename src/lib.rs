//! Totals a JSON sales record against a JSON price catalogue.
//!
//! The pipeline runs strictly in order: [`loader`] parses both documents,
//! [`catalogue`] indexes prices by title, [`engine`] accumulates the cost of
//! each sale, and [`report`] renders and writes the result. Malformed items
//! along the way are reported through a [`diagnostics::DiagnosticSink`] and
//! skipped.

pub mod app;
pub mod args;
pub mod catalogue;
pub mod diagnostics;
pub mod engine;
pub mod errors;
pub mod loader;
pub mod report;
pub mod shape;
