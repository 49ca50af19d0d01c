//! Medir - percentile, smoothing, and trend analysis for benchmark latency logs
//!
//! This library parses latency measurements written by an external benchmark
//! harness (one integer per line, or `opcode value` pairs demultiplexed by
//! operation) and reduces them to percentile reports, sliding-window
//! smoothed series, least-squares trends, and histogram bin counts for a
//! downstream rendering layer.

pub mod cli;
pub mod csv_output;
pub mod discover;
pub mod error;
pub mod json_output;
pub mod parse;
pub mod pipeline;
pub mod stats;
pub mod text_output;
