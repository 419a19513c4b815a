//! Guess selection
//!
//! One engine, configured through [`SolverConfig`]: entropy ranking for large
//! spaces, worst-case disambiguation near the end, and the optional variant
//! heuristics on top.

pub mod config;
pub mod disambiguator;
mod engine;
pub mod entropy;
pub mod opening;
mod search_space;
mod session;
pub mod variants;

pub use config::{EmptySpacePolicy, GuessPool, KNOWN_OPENERS, OpeningConfig, SolverConfig};
pub use engine::{GameOutcome, Solver};
pub use search_space::{SearchSpace, SpaceSnapshot};
pub use session::{Decision, DecisionSource, GameSession, GameStatus, TurnError, TurnRecord};
