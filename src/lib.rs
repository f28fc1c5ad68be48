//! Plots for Wigner 3j/6j/9j accuracy benchmarks.
//!
//! A benchmark log holds one block of statistics rows per evaluated
//! implementation. [`bench`] splits the log into blocks and reshapes them
//! into matrices, [`plot`] turns matrix columns into log-scale error curves,
//! and [`pipeline`] runs both for one configured benchmark kind.

pub mod bench;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod plot;

pub use error::{Result, WigplotError};
