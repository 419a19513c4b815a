//! Codebreaker
//!
//! A decision engine for five-letter codebreaking games: every guess is chosen
//! to maximize the expected information gained from its feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use codebreaker::core::{Pattern, Word};
//! use codebreaker::solver::{Solver, SolverConfig};
//! use codebreaker::wordlists::loader::words_from_slice;
//!
//! let words = words_from_slice(&["allot", "below", "lobby", "mixed"]);
//! let solver = Solver::new(&words, &words, SolverConfig::default());
//!
//! let outcome = solver.play(&Word::new("lobby").unwrap()).unwrap();
//! assert!(outcome.solved);
//!
//! // Feedback travels as letters for exact matches, '-' and '+' otherwise
//! let guess = Word::new("allot").unwrap();
//! let pattern = Pattern::calculate(&guess, &Word::new("lobby").unwrap());
//! assert_eq!(pattern.to_wire(&guess), "+-+-+");
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
