//! courtlog-engine
//!
//! Milestone detection over the attended-games log.
//!
//! Architectural decisions:
//! - Deterministic replay: same records in, identical badges and summary
//!   out, regardless of input order (the engine sorts).
//! - One forward pass, no lookahead. A badge depends only on games that
//!   sort before its game.
//! - Missing data skips the rules that need it; there is no error path
//!   through the pass.
//! - State belongs to one pass. `run` consumes the engine, so a rerun
//!   rebuilds from scratch instead of double counting.
//!
//! Pure logic: no I/O, no wall clock. Loading and export live in the
//! neighboring crates.

mod dates;
mod engine;
mod normalize;
mod types;

pub use dates::{day_gap, parse_date_sort};
pub use engine::MilestoneEngine;
pub use normalize::normalize;
pub use types::*;
