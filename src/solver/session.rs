//! Per-game state machine
//!
//! A session alternates between handing out a guess and receiving the
//! feedback for it. All mutable game state lives here; the [`Solver`] it
//! borrows is shared and read-only.

use super::config::{EmptySpacePolicy, GuessPool};
use super::disambiguator::Disambiguator;
use super::engine::Solver;
use super::entropy::Scoring;
use super::search_space::SearchSpace;
use super::variants::{DummyProbe, distinct_second_guess};
use crate::core::{Pattern, Word};
use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

/// Where a session is in its turn cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// No guess made yet
    AwaitingOpening,
    /// A guess is out; waiting for its feedback
    AwaitingFeedback,
    /// Feedback applied; ready to choose the next guess
    Deciding,
    Solved,
    /// Attempt budget used up without solving
    Exhausted,
    /// Feedback ruled out every possible answer
    Inconsistent,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted | Self::Inconsistent)
    }
}

/// The path that produced a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionSource {
    Opening,
    SingleCandidate,
    Disambiguation,
    Entropy,
    CoverageProxy,
    DistinctSecondGuess,
    DummyGuess,
}

impl DecisionSource {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Opening => "opening",
            Self::SingleCandidate => "single candidate",
            Self::Disambiguation => "disambiguation",
            Self::Entropy => "entropy",
            Self::CoverageProxy => "coverage",
            Self::DistinctSecondGuess => "distinct second guess",
            Self::DummyGuess => "dummy probe",
        }
    }
}

/// A guess handed out by [`GameSession::next_guess`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub word: Word,
    pub source: DecisionSource,
    /// Entropy in bits, or the coverage score for [`DecisionSource::CoverageProxy`]
    pub score: Option<f64>,
}

/// One completed turn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnRecord {
    pub guess: Word,
    pub pattern: Pattern,
    pub source: DecisionSource,
    pub score: Option<f64>,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Per-turn failures, reported to the caller instead of aborting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("a guess is still waiting for feedback")]
    NotAwaitingGuess,

    #[error("no guess is waiting for feedback")]
    NotAwaitingFeedback,

    #[error("the game is already over")]
    GameOver,

    #[error("feedback {wire} for {guess} rules out every possible answer", wire = .pattern.to_wire(.guess))]
    EmptySearchSpace { guess: Word, pattern: Pattern },

    #[error("no candidate guess available")]
    NoCandidate,
}

/// State of one game
///
/// # Examples
/// ```
/// use codebreaker::core::{Pattern, Word};
/// use codebreaker::solver::{GameStatus, Solver, SolverConfig};
/// use codebreaker::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["allot", "below", "lobby", "mixed"]);
/// let solver = Solver::new(&words, &words, SolverConfig::default());
/// let secret = Word::new("lobby").unwrap();
///
/// let mut session = solver.session();
/// while !session.status().is_terminal() {
///     let guess = session.next_guess().unwrap().word;
///     session.receive_feedback(Pattern::calculate(&guess, &secret)).unwrap();
/// }
/// assert_eq!(session.status(), GameStatus::Solved);
/// ```
#[derive(Debug)]
pub struct GameSession<'a> {
    solver: &'a Solver<'a>,
    space: SearchSpace,
    history: Vec<TurnRecord>,
    pending: Option<Decision>,
    status: GameStatus,
    rng: StdRng,
    probe: DummyProbe,
}

impl<'a> GameSession<'a> {
    pub(super) fn new(solver: &'a Solver<'a>) -> Self {
        Self {
            solver,
            space: SearchSpace::new(solver.answers()),
            history: Vec::new(),
            pending: None,
            status: if solver.config().max_attempts == 0 {
                GameStatus::Exhausted
            } else {
                GameStatus::AwaitingOpening
            },
            rng: StdRng::seed_from_u64(solver.config().seed),
            probe: DummyProbe::new(),
        }
    }

    /// Choose the next guess
    ///
    /// # Errors
    /// [`TurnError::NotAwaitingGuess`] while a guess is waiting for feedback,
    /// [`TurnError::GameOver`] after a terminal state, and
    /// [`TurnError::NoCandidate`] when nothing can be guessed.
    pub fn next_guess(&mut self) -> Result<Decision, TurnError> {
        let decision = match self.status {
            GameStatus::AwaitingOpening => Decision {
                word: self.solver.opening()?,
                source: DecisionSource::Opening,
                score: None,
            },
            GameStatus::Deciding => self.decide()?,
            GameStatus::AwaitingFeedback => return Err(TurnError::NotAwaitingGuess),
            GameStatus::Solved | GameStatus::Exhausted | GameStatus::Inconsistent => {
                return Err(TurnError::GameOver);
            }
        };

        debug!(
            "turn {}: {} via {} ({} candidates)",
            self.history.len() + 1,
            decision.word,
            decision.source.label(),
            self.space.len()
        );
        self.pending = Some(decision);
        self.status = GameStatus::AwaitingFeedback;
        Ok(decision)
    }

    /// Apply the feedback for the outstanding guess
    ///
    /// # Errors
    /// [`TurnError::EmptySearchSpace`] when the feedback leaves no possible
    /// answer and the policy is [`EmptySpacePolicy::Report`]; the session is
    /// then [`GameStatus::Inconsistent`].
    pub fn receive_feedback(&mut self, pattern: Pattern) -> Result<GameStatus, TurnError> {
        if self.status.is_terminal() {
            return Err(TurnError::GameOver);
        }
        let Some(decision) = self.pending.take() else {
            return Err(TurnError::NotAwaitingFeedback);
        };

        let candidates_before = self.space.len();
        self.space.filter(&decision.word, pattern);
        self.history.push(TurnRecord {
            guess: decision.word,
            pattern,
            source: decision.source,
            score: decision.score,
            candidates_before,
            candidates_after: self.space.len(),
        });

        if pattern.is_perfect() {
            self.status = GameStatus::Solved;
        } else if self.space.is_empty() {
            return self.handle_empty_space(decision.word, pattern);
        } else {
            self.status = self.continue_or_exhaust();
        }
        Ok(self.status)
    }

    /// Start over with the full answer list
    pub fn restart(&mut self) {
        *self = Self::new(self.solver);
    }

    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    #[must_use]
    pub const fn search_space(&self) -> &SearchSpace {
        &self.space
    }

    /// Guesses that have received feedback
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// The guess waiting for feedback, if any
    #[must_use]
    pub fn pending_guess(&self) -> Option<Word> {
        self.pending.map(|decision| decision.word)
    }

    fn continue_or_exhaust(&self) -> GameStatus {
        if self.history.len() >= self.solver.config().max_attempts {
            GameStatus::Exhausted
        } else {
            GameStatus::Deciding
        }
    }

    fn handle_empty_space(&mut self, guess: Word, pattern: Pattern) -> Result<GameStatus, TurnError> {
        let error = TurnError::EmptySearchSpace { guess, pattern };

        if self.solver.config().empty_space_policy == EmptySpacePolicy::ResetAndContinue {
            let untried: Vec<Word> = self
                .solver
                .answers()
                .iter()
                .filter(|word| !self.was_tried(word))
                .copied()
                .collect();
            if !untried.is_empty() {
                warn!("{error}; resetting to {} untried answers", untried.len());
                self.space.reset(&untried);
                self.status = self.continue_or_exhaust();
                return Ok(self.status);
            }
        }

        self.status = GameStatus::Inconsistent;
        Err(error)
    }

    fn was_tried(&self, word: &Word) -> bool {
        self.history.iter().any(|turn| turn.guess == *word)
    }

    /// Live candidates not guessed yet, or all of them if every one was tried
    fn untried_candidates(&self) -> Vec<Word> {
        let untried: Vec<Word> = self
            .space
            .words()
            .iter()
            .filter(|word| !self.was_tried(word))
            .copied()
            .collect();
        if untried.is_empty() {
            self.space.words().to_vec()
        } else {
            untried
        }
    }

    fn decide(&mut self) -> Result<Decision, TurnError> {
        let solver = self.solver;
        let config = solver.config();
        let ranker = solver.ranker();

        match self.space.words() {
            [] => return Err(TurnError::NoCandidate),
            [only] => {
                return Ok(Decision {
                    word: *only,
                    source: DecisionSource::SingleCandidate,
                    score: None,
                });
            }
            _ => {}
        }

        // the last guess has to be one that can win
        let final_attempt = self.history.len() + 1 >= config.max_attempts;
        let untried = self.untried_candidates();
        if final_attempt {
            debug!("final attempt, ranking {} candidates only", untried.len());
            return self.rank(&untried);
        }

        if config.distinct_second_guess
            && let [first] = self.history.as_slice()
            && let Some(ranked) = distinct_second_guess(&first.guess, first.pattern, &self.space, &ranker)
        {
            return Ok(Decision {
                word: ranked.word,
                source: DecisionSource::DistinctSecondGuess,
                score: Some(ranked.score),
            });
        }

        if config.dummy_guess
            && let Some(last) = self.history.last()
            && let Some(word) = self.probe.try_probe(last.pattern, self.history.len(), &untried)
        {
            return Ok(Decision {
                word,
                source: DecisionSource::DummyGuess,
                score: None,
            });
        }

        if self.space.len() <= config.disambiguation_threshold {
            let vocabulary = config
                .disambiguate_with_vocabulary
                .then(|| solver.vocabulary());
            let disambiguator =
                Disambiguator::new(ranker, config.disambiguation_budget, vocabulary);

            if let Some(found) = disambiguator.find(&self.space, &mut self.rng) {
                debug!(
                    "{} splits {} candidates, worst case {}",
                    found.word,
                    self.space.len(),
                    found.quality.max_partition
                );
                return Ok(Decision {
                    word: found.word,
                    source: DecisionSource::Disambiguation,
                    score: Some(ranker.partition(&found.word, &self.space).entropy()),
                });
            }
            debug!("no disambiguating guess within budget, ranking by entropy");
        }

        let pool: &[Word] = match config.guess_pool {
            GuessPool::Candidates => &untried,
            GuessPool::Vocabulary => solver.vocabulary(),
        };
        self.rank(pool)
    }

    fn rank(&self, pool: &[Word]) -> Result<Decision, TurnError> {
        let ranked = self
            .solver
            .ranker()
            .select_best(pool, &self.space)
            .ok_or(TurnError::NoCandidate)?;
        let source = match ranked.scoring {
            Scoring::Entropy => DecisionSource::Entropy,
            Scoring::CoverageProxy => DecisionSource::CoverageProxy,
        };

        Ok(Decision {
            word: ranked.word,
            source,
            score: Some(ranked.score),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::config::{OpeningConfig, SolverConfig};
    use crate::wordlists::loader::words_from_slice;

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    /// A pattern that no word in `answers` produces for `guess`
    fn impossible_pattern(guess: &Word, answers: &[Word]) -> Pattern {
        (0..Pattern::PERFECT.value())
            .map(Pattern::new)
            .find(|p| answers.iter().all(|a| Pattern::calculate(guess, a) != *p))
            .unwrap()
    }

    fn no_openers() -> SolverConfig {
        SolverConfig::default().with_opening(OpeningConfig {
            known_openers: Vec::new(),
            ..OpeningConfig::default()
        })
    }

    #[test]
    fn turn_order_is_enforced() {
        let words = words_from_slice(&["allot", "below", "lobby", "mixed"]);
        let solver = Solver::new(&words, &words, SolverConfig::default());
        let mut session = solver.session();

        assert_eq!(
            session.receive_feedback(Pattern::NONE),
            Err(TurnError::NotAwaitingFeedback)
        );
        let opening = session.next_guess().unwrap();
        assert_eq!(opening.source, DecisionSource::Opening);
        assert_eq!(session.pending_guess(), Some(opening.word));
        assert_eq!(session.next_guess(), Err(TurnError::NotAwaitingGuess));
    }

    #[test]
    fn allot_feedback_narrows_to_lobby() {
        let words = words_from_slice(&["allot", "below", "lobby", "mixed"]);
        let solver = Solver::new(&words, &words, SolverConfig::default());
        let mut session = solver.session();
        let _ = session.next_guess().unwrap();

        // steer the session onto ALLOT regardless of the computed opener
        session.pending = Some(Decision {
            word: w("allot"),
            source: DecisionSource::Opening,
            score: None,
        });
        let pattern = Pattern::parse_wire("+-+-+", &w("allot")).unwrap();

        assert_eq!(session.receive_feedback(pattern), Ok(GameStatus::Deciding));
        assert_eq!(session.search_space().words(), [w("lobby")]);

        let next = session.next_guess().unwrap();
        assert_eq!(next.word, w("lobby"));
        assert_eq!(next.source, DecisionSource::SingleCandidate);
        assert_eq!(session.receive_feedback(Pattern::PERFECT), Ok(GameStatus::Solved));
        assert_eq!(session.attempts(), 2);
    }

    #[test]
    fn terminal_states_reject_further_turns() {
        let words = words_from_slice(&["lobby"]);
        let solver = Solver::new(&words, &words, no_openers());
        let mut session = solver.session();

        assert_eq!(session.next_guess().unwrap().word, w("lobby"));
        session.receive_feedback(Pattern::PERFECT).unwrap();

        assert_eq!(session.next_guess(), Err(TurnError::GameOver));
        assert_eq!(session.receive_feedback(Pattern::PERFECT), Err(TurnError::GameOver));
    }

    #[test]
    fn empty_space_is_reported() {
        let words = words_from_slice(&["allot", "below", "lobby", "mixed"]);
        let solver = Solver::new(&words, &words, SolverConfig::default());
        let mut session = solver.session();

        let guess = session.next_guess().unwrap().word;
        let pattern = impossible_pattern(&guess, &words);

        assert_eq!(
            session.receive_feedback(pattern),
            Err(TurnError::EmptySearchSpace { guess, pattern })
        );
        assert_eq!(session.status(), GameStatus::Inconsistent);
        assert_eq!(session.history()[0].candidates_after, 0);
    }

    #[test]
    fn empty_space_can_reset_to_untried_answers() {
        let words = words_from_slice(&["allot", "below", "lobby", "mixed"]);
        let config = SolverConfig::default().with_empty_space_policy(EmptySpacePolicy::ResetAndContinue);
        let solver = Solver::new(&words, &words, config);
        let mut session = solver.session();

        let guess = session.next_guess().unwrap().word;
        let pattern = impossible_pattern(&guess, &words);

        assert_eq!(session.receive_feedback(pattern), Ok(GameStatus::Deciding));
        assert!(!session.search_space().contains(&guess));
        assert_eq!(
            session.search_space().len(),
            words.len() - usize::from(words.contains(&guess))
        );
    }

    #[test]
    fn restart_clears_the_game() {
        let words = words_from_slice(&["allot", "below", "lobby", "mixed"]);
        let solver = Solver::new(&words, &words, SolverConfig::default());
        let mut session = solver.session();

        let guess = session.next_guess().unwrap().word;
        session
            .receive_feedback(Pattern::calculate(&guess, &w("mixed")))
            .unwrap();
        session.restart();

        assert_eq!(session.status(), GameStatus::AwaitingOpening);
        assert!(session.history().is_empty());
        assert_eq!(session.search_space().len(), 4);
    }

    #[test]
    fn small_space_goes_to_disambiguator() {
        let words = words_from_slice(&["spade", "space", "spark", "mixed"]);
        let solver = Solver::new(&words, &words, SolverConfig::default());
        let mut session = solver.session();

        session.status = GameStatus::Deciding;
        session.space = SearchSpace::new(&words_from_slice(&["spade", "space", "spark"]));

        let decision = session.next_guess().unwrap();
        assert_eq!(decision.source, DecisionSource::Disambiguation);
        assert!(decision.score.is_some_and(|s| (s - 3f64.log2()).abs() < 1e-9));
    }

    #[test]
    fn zero_threshold_ranks_by_entropy() {
        let words = words_from_slice(&["spade", "space", "spark", "mixed"]);
        let config = SolverConfig::default().with_disambiguation_threshold(0);
        let solver = Solver::new(&words, &words, config);
        let mut session = solver.session();

        session.status = GameStatus::Deciding;
        let decision = session.next_guess().unwrap();
        assert_eq!(decision.source, DecisionSource::Entropy);
        assert!(words.contains(&decision.word));
    }

    #[test]
    fn dummy_probe_variant_is_used() {
        let words = words_from_slice(&["fight", "light", "might", "night", "sight", "tight"]);
        let config = SolverConfig::default().with_dummy_guess(true);
        let solver = Solver::new(&words, &words, config);
        let mut session = solver.session();
        let _ = session.next_guess().unwrap();

        session.pending = Some(Decision {
            word: w("fight"),
            source: DecisionSource::Opening,
            score: None,
        });
        session
            .receive_feedback(Pattern::calculate(&w("fight"), &w("night")))
            .unwrap();

        let decision = session.next_guess().unwrap();
        assert_eq!(decision.source, DecisionSource::DummyGuess);
        assert_eq!(decision.word.text(), "lmnst");
    }

    #[test]
    fn final_attempt_guesses_a_live_candidate() {
        let words = words_from_slice(&["fight", "light", "might", "night", "sight", "tight"]);
        let config = SolverConfig::default()
            .with_max_attempts(1)
            .with_distinct_second_guess(true)
            .with_dummy_guess(true);
        let solver = Solver::new(&words, &words, config);
        let mut session = solver.session();
        session.status = GameStatus::Deciding;

        let decision = session.next_guess().unwrap();

        assert!(session.search_space().contains(&decision.word));
        assert_eq!(decision.source, DecisionSource::Entropy);
    }

    #[test]
    fn final_attempt_can_win_every_game() {
        let words = words_from_slice(&["fight", "light", "might", "night", "sight", "tight"]);
        let solver = Solver::new(&words, &words, SolverConfig::default().with_max_attempts(2));

        for answer in &words {
            let outcome = solver.play(answer).unwrap();
            let last = outcome.turns.last().unwrap();
            if outcome.turns.len() == 2 {
                assert!(words.contains(&last.guess), "{} cannot win", last.guess);
                assert_ne!(last.source, DecisionSource::Disambiguation);
            }
        }
    }

    #[test]
    fn zero_attempts_never_guesses() {
        let words = words_from_slice(&["allot", "below", "lobby", "mixed"]);
        let solver = Solver::new(&words, &words, SolverConfig::default().with_max_attempts(0));
        let mut session = solver.session();

        assert_eq!(session.status(), GameStatus::Exhausted);
        assert_eq!(session.next_guess(), Err(TurnError::GameOver));

        let outcome = solver.play(&w("lobby")).unwrap();
        assert!(!outcome.solved);
        assert!(outcome.turns.is_empty());
    }
}
