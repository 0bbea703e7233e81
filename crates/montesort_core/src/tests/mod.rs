//! Integration tests for the experiment drivers
//!
//! Tests are organized by topic:
//! - `monte_carlo` - Area estimation sweep, bounding rectangles, convergence
//! - `sort_bench` - Case enumeration, sort correctness on generated inputs, timing rows
//! - `determinism` - Seed reproducibility across both experiments
