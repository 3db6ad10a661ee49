//! Heuristic cyclomatic complexity estimation for submitted code

pub mod estimator;
pub mod sanitizer;
pub mod scoring;

pub use estimator::{analyze_file, estimate_complexity, FileEstimate, HazelError};
pub use sanitizer::sanitize;
pub use scoring::score;
