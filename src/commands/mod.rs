//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod openers;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use openers::{OpenerRanking, rank_openers};
pub use simple::{run_simple, run_simple_with};
pub use solve::solve_word;
