//! Opening candidate ranking
//!
//! Scores the whole bounded opening pool against all possible answers, the
//! same pool the solver picks its first guess from.

use crate::solver::entropy::RankedGuess;
use crate::solver::opening::OpeningBook;
use crate::solver::{SearchSpace, Solver};

/// Ranked opening candidates
pub struct OpenerRanking {
    pub pool_size: usize,
    pub total_answers: usize,
    /// Best first, at most the requested count
    pub ranked: Vec<RankedGuess>,
}

/// Rank the opening pool and keep the best `count`
#[must_use]
pub fn rank_openers(solver: &Solver<'_>, count: usize) -> OpenerRanking {
    let book = OpeningBook::new(&solver.config().opening);
    let pool = book.candidate_pool(solver.answers());
    let space = SearchSpace::new(solver.answers());

    let mut ranked = solver.rank(&pool, &space);
    ranked.truncate(count);

    OpenerRanking {
        pool_size: pool.len(),
        total_answers: space.len(),
        ranked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::solver::SolverConfig;
    use crate::wordlists::loader::words_from_slice;

    fn answers() -> Vec<Word> {
        words_from_slice(&["spade", "space", "spark", "stale", "slate", "crane", "trace"])
    }

    #[test]
    fn best_opener_matches_solver_opening() {
        let answers = answers();
        let solver = Solver::new(&answers, &answers, SolverConfig::default());

        let ranking = rank_openers(&solver, 5);

        assert_eq!(ranking.ranked.len(), 5);
        assert_eq!(ranking.total_answers, answers.len());
        assert_eq!(ranking.ranked[0].word, solver.opening().unwrap());
    }

    #[test]
    fn count_larger_than_pool_returns_whole_pool() {
        let answers = answers();
        let solver = Solver::new(&answers, &answers, SolverConfig::default());

        let ranking = rank_openers(&solver, usize::MAX);

        assert_eq!(ranking.ranked.len(), ranking.pool_size);
        assert!(ranking.ranked.windows(2).all(|p| p[0].score >= p[1].score - 1e-9));
    }
}
