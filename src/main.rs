//! Codebreaker - CLI
//!
//! Picks each guess of a five-letter codebreaking game by expected
//! information gain.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codebreaker::{
    commands::{analyze_word, rank_openers, run_benchmark, run_simple, solve_word},
    output::{print_analysis_result, print_benchmark_result, print_opener_ranking, print_solve_result},
    solver::{EmptySpacePolicy, GuessPool, Solver, SolverConfig},
    wordlists::{
        Vocabulary, WordWeights,
        loader::{load_from_file, load_weights_from_file},
    },
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "codebreaker",
    about = "Five-letter codebreaking solver driven by expected information gain",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Guessable words, one per line
    #[arg(short, long)]
    words: PathBuf,

    /// Possible answers, one per line (default: the guessable words)
    #[arg(short, long)]
    answers: Option<PathBuf>,

    /// Answer frequencies, `word<TAB>frequency`; enables frequency weighting
    #[arg(long)]
    weights: Option<PathBuf>,

    /// Seed for the disambiguator's letter arrangements
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Guesses allowed per game
    #[arg(long, default_value_t = 6)]
    max_attempts: usize,

    /// Largest search space handed to the disambiguator
    #[arg(long, default_value_t = 20)]
    threshold: usize,

    /// Rank the whole vocabulary instead of the remaining candidates
    #[arg(long)]
    vocabulary_pool: bool,

    /// Second guess probes the five most common unconfirmed letters
    #[arg(long)]
    distinct_second: bool,

    /// Probe unresolved positions when only one or two remain
    #[arg(long)]
    dummy: bool,

    /// Reset to the untried answers instead of stopping on inconsistent feedback
    #[arg(long)]
    reset_on_empty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Simple interactive mode
    Simple,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze the entropy of a specific word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Rank the opening candidates
    Openers {
        /// Number of openers to show
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of answers to play (default: all)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
}

impl Cli {
    fn solver_config(&self) -> SolverConfig {
        let guess_pool = if self.vocabulary_pool {
            GuessPool::Vocabulary
        } else {
            GuessPool::Candidates
        };
        let empty_space_policy = if self.reset_on_empty {
            EmptySpacePolicy::ResetAndContinue
        } else {
            EmptySpacePolicy::Report
        };

        SolverConfig::default()
            .with_max_attempts(self.max_attempts)
            .with_disambiguation_threshold(self.threshold)
            .with_seed(self.seed)
            .with_guess_pool(guess_pool)
            .with_distinct_second_guess(self.distinct_second)
            .with_dummy_guess(self.dummy)
            .with_empty_space_policy(empty_space_policy)
            .with_frequency_weighting(self.weights.is_some())
    }
}

fn load_vocabulary(path: &Path) -> Result<Vocabulary> {
    load_from_file(path).with_context(|| format!("failed to load word list {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let vocabulary = load_vocabulary(&cli.words)?;
    let answers = cli.answers.as_deref().map(load_vocabulary).transpose()?;
    let weights: Option<WordWeights> = cli
        .weights
        .as_deref()
        .map(|path| {
            load_weights_from_file(path)
                .with_context(|| format!("failed to load weights {}", path.display()))
        })
        .transpose()?;

    let answer_words = answers.as_ref().unwrap_or(&vocabulary).words();
    let mut solver = Solver::new(vocabulary.words(), answer_words, cli.solver_config());
    if let Some(weights) = &weights {
        solver = solver.with_weights(weights);
    }

    match cli.command {
        Commands::Simple => run_simple(&solver),
        Commands::Solve { word, verbose } => {
            let outcome = solve_word(&word, &solver)?;
            print_solve_result(&outcome, verbose);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &solver)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Openers { count } => {
            print_opener_ranking(&rank_openers(&solver, count));
            Ok(())
        }
        Commands::Benchmark { count } => {
            let targets = &answer_words[..count.unwrap_or(answer_words.len()).min(answer_words.len())];
            println!("Running benchmark on {} words...", targets.len());
            let result = run_benchmark(&solver, targets, true);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
