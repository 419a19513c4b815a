use codebreaker::core::{Pattern, Word};
use codebreaker::solver::{
    DecisionSource, EmptySpacePolicy, GameStatus, OpeningConfig, SearchSpace, Solver, SolverConfig,
    TurnError,
};
use codebreaker::solver::opening::top_letters_per_position;
use codebreaker::wordlists::Vocabulary;

fn vocabulary(words: &[&str]) -> Vocabulary {
    Vocabulary::from_words(words.iter().copied()).unwrap()
}

fn w(text: &str) -> Word {
    Word::new(text).unwrap()
}

fn small_list() -> Vocabulary {
    vocabulary(&["allot", "below", "lobby", "mixed"])
}

fn larger_list() -> Vocabulary {
    vocabulary(&[
        "crane", "slate", "trace", "crate", "raise", "arise", "stare", "roast", "toast", "beast",
        "spade", "space", "spark", "fight", "light", "might", "night", "sight", "tight",
    ])
}

/// Drive a session against `answer` until it ends
fn play_out(solver: &Solver<'_>, answer: &Word) -> (GameStatus, Vec<Word>) {
    let mut session = solver.session();
    let mut guesses = Vec::new();
    while !session.status().is_terminal() {
        let decision = session.next_guess().unwrap();
        guesses.push(decision.word);
        session
            .receive_feedback(Pattern::calculate(&decision.word, answer))
            .unwrap();
    }
    (session.status(), guesses)
}

#[test]
fn guessing_the_secret_solves_in_one() {
    let answers = vocabulary(&["lobby"]);
    let all = small_list();
    let solver = Solver::new(all.words(), answers.words(), SolverConfig::default());

    let (status, guesses) = play_out(&solver, &w("lobby"));

    assert_eq!(status, GameStatus::Solved);
    assert_eq!(guesses, [w("lobby")]);
}

#[test]
fn allot_feedback_leaves_only_lobby() {
    let words = small_list();
    let guess = w("allot");
    let pattern = Pattern::calculate(&guess, &w("lobby"));
    assert_eq!(pattern.to_wire(&guess), "+-+-+");

    let space = SearchSpace::new(words.words()).filtered(&guess, pattern);
    assert_eq!(space.words(), [w("lobby")]);
}

#[test]
fn single_candidate_is_guessed_directly() {
    let words = small_list();
    let solver = Solver::new(words.words(), words.words(), SolverConfig::default());
    let mut session = solver.session();

    let opening = session.next_guess().unwrap().word;
    let answer = words.words().iter().find(|&&w| w != opening).copied().unwrap();
    session
        .receive_feedback(Pattern::calculate(&opening, &answer))
        .unwrap();

    if session.search_space().len() == 1 {
        let decision = session.next_guess().unwrap();
        assert_eq!(decision.source, DecisionSource::SingleCandidate);
        assert_eq!(decision.word, answer);
    }
}

#[test]
fn every_answer_is_solved_within_budget() {
    let words = larger_list();
    let solver = Solver::new(words.words(), words.words(), SolverConfig::default());

    for answer in words.words() {
        let (status, guesses) = play_out(&solver, answer);
        assert_eq!(status, GameStatus::Solved, "{answer} not solved: {guesses:?}");
        assert!(guesses.len() <= 6);
    }
}

#[test]
fn attempt_budget_exhausts_without_error() {
    let words = larger_list();
    let config = SolverConfig::default().with_max_attempts(1);
    let solver = Solver::new(words.words(), words.words(), config);
    let opening = solver.opening().unwrap();
    let answer = words.words().iter().find(|&&w| w != opening).copied().unwrap();

    let (status, guesses) = play_out(&solver, &answer);

    assert_eq!(status, GameStatus::Exhausted);
    assert_eq!(guesses.len(), 1);
}

#[test]
fn inconsistent_feedback_is_reported_or_recovered() {
    let words = small_list();
    let outsider = w("zzzzz");

    let strict = Solver::new(words.words(), words.words(), SolverConfig::default());
    let mut session = strict.session();
    let guess = session.next_guess().unwrap().word;
    let pattern = Pattern::calculate(&guess, &outsider);
    let result = session.receive_feedback(pattern);
    if session.search_space().is_empty() {
        assert_eq!(result, Err(TurnError::EmptySearchSpace { guess, pattern }));
        assert_eq!(session.status(), GameStatus::Inconsistent);
        assert_eq!(session.next_guess(), Err(TurnError::GameOver));
    }

    let lenient = Solver::new(
        words.words(),
        words.words(),
        SolverConfig::default().with_empty_space_policy(EmptySpacePolicy::ResetAndContinue),
    );
    let mut session = lenient.session();
    let guess = session.next_guess().unwrap().word;
    let status = session
        .receive_feedback(Pattern::calculate(&guess, &outsider))
        .unwrap();
    assert_eq!(status, GameStatus::Deciding);
    assert!(!session.search_space().is_empty());
    assert!(!session.search_space().contains(&guess));
}

#[test]
fn games_are_reproducible() {
    let words = larger_list();
    let config = SolverConfig::default().with_seed(42).with_dummy_guess(true);
    let first = Solver::new(words.words(), words.words(), config.clone());
    let second = Solver::new(words.words(), words.words(), config);

    for answer in words.words() {
        assert_eq!(first.play(answer).unwrap(), second.play(answer).unwrap());
    }
}

#[test]
fn sessions_share_one_solver_across_threads() {
    let words = larger_list();
    let solver = Solver::new(words.words(), words.words(), SolverConfig::default());
    let expected: Vec<_> = words
        .words()
        .iter()
        .map(|answer| solver.play(answer).unwrap())
        .collect();

    let shared = &solver;
    let parallel: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = words
            .words()
            .iter()
            .map(|answer| scope.spawn(move || shared.play(answer).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(parallel, expected);
    assert!(solver.cache_stats().hits > 0);
}

#[test]
fn variant_heuristics_still_solve() {
    let words = larger_list();
    let config = SolverConfig::default()
        .with_distinct_second_guess(true)
        .with_dummy_guess(true)
        .with_max_attempts(8);
    let solver = Solver::new(words.words(), words.words(), config);

    for answer in words.words() {
        let outcome = solver.play(answer).unwrap();
        assert!(outcome.solved, "{answer} not solved");
    }
}

#[test]
fn opening_pool_without_curated_words_comes_from_answers() {
    let words = larger_list();
    let config = SolverConfig::default().with_opening(OpeningConfig {
        known_openers: Vec::new(),
        top_letters_per_position: 1,
        ..OpeningConfig::default()
    });
    let solver = Solver::new(words.words(), words.words(), config);

    // one letter per position leaves exactly one candidate opener
    let top = top_letters_per_position(words.words(), 1);
    let opening = solver.opening().unwrap();
    for (position, letters) in top.iter().enumerate() {
        assert_eq!(opening.char_at(position), letters[0]);
    }
}
