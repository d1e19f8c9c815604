// src/lib.rs

//! Reproducible samples of mined refactorings.
//!
//! Reads refactorings per project from the dataset database, draws a seeded
//! subset without replacement and writes each sampled refactoring, with the
//! regions it touches, to a per-project text file for manual review.

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod runner;
pub mod sampler;
pub mod store;

pub use error::{Result, SamplerError};
