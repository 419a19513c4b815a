//! Simple interactive CLI mode
//!
//! Suggests a guess, reads the wire-format feedback the game showed, repeats.

use crate::core::{ABSENT_SYMBOL, PRESENT_SYMBOL, Pattern};
use crate::output::formatters::guess_count;
use crate::solver::{GameSession, GameStatus, Solver, TurnError};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Candidates are listed once at most this many remain
const LIST_LIMIT: usize = 10;

/// Run the interactive loop on stdin/stdout
///
/// # Errors
///
/// Returns an error on an I/O failure or when the solver has no guess to offer.
pub fn run_simple(solver: &Solver<'_>) -> Result<()> {
    let stdin = io::stdin();
    run_simple_with(solver, &mut stdin.lock(), &mut io::stdout())
}

/// Run the interactive loop on arbitrary streams
///
/// Stops on `quit` or end of input.
///
/// # Errors
///
/// Returns an error on an I/O failure or when the solver has no guess to offer.
pub fn run_simple_with<R: BufRead, W: Write>(solver: &Solver<'_>, input: &mut R, out: &mut W) -> Result<()> {
    writeln!(out, "{}", "Codebreaker - interactive mode".bright_cyan().bold())?;
    writeln!(out, "After each guess, enter the feedback pattern:")?;
    writeln!(out, "  - the letter itself for a correct position")?;
    writeln!(out, "  - '{PRESENT_SYMBOL}' for a letter elsewhere in the word")?;
    writeln!(out, "  - '{ABSENT_SYMBOL}' for a letter not in the word")?;
    writeln!(out, "Commands: 'win', 'new', 'quit'\n")?;

    let mut session = solver.session();

    loop {
        let decision = session.next_guess()?;
        let candidates = session.search_space();

        writeln!(out, "{}", "─".repeat(60))?;
        writeln!(
            out,
            "Turn {}: {} candidates remaining",
            session.attempts() + 1,
            candidates.len()
        )?;
        write!(
            out,
            "Suggested guess: {} ({}",
            decision.word.text().to_uppercase().bright_white().bold(),
            decision.source.label()
        )?;
        if let Some(score) = decision.score {
            write!(out, ", {score:.3}")?;
        }
        writeln!(out, ")")?;

        if candidates.len() <= LIST_LIMIT {
            let listed: Vec<&str> = candidates.words().iter().map(|w| w.text()).collect();
            writeln!(out, "Remaining: {}", listed.join(" "))?;
        }

        let pattern = loop {
            let Some(line) = prompt(input, out, "Feedback")? else {
                return Ok(());
            };
            match line.to_lowercase().as_str() {
                "quit" | "q" | "exit" => return Ok(()),
                "new" | "n" => break None,
                "win" => break Some(Pattern::PERFECT),
                text => match Pattern::parse_wire(text, &decision.word) {
                    Ok(pattern) => break Some(pattern),
                    Err(error) => writeln!(out, "{} {error}", "Invalid pattern:".red())?,
                },
            }
        };

        let Some(pattern) = pattern else {
            session.restart();
            writeln!(out, "\nNew game started!\n")?;
            continue;
        };

        match session.receive_feedback(pattern) {
            Ok(GameStatus::Solved) => {
                print_history(&session, out)?;
                writeln!(
                    out,
                    "{}",
                    format!("Solved in {}!", guess_count(session.attempts())).green().bold()
                )?;
                session.restart();
            }
            Ok(GameStatus::Exhausted) => {
                print_history(&session, out)?;
                writeln!(out, "{}", "Out of guesses.".red().bold())?;
                session.restart();
            }
            Ok(_) => {}
            Err(error @ TurnError::EmptySearchSpace { .. }) => {
                writeln!(out, "{} {error}", "No candidates remain!".red())?;
                writeln!(out, "Your feedback may be incorrect; starting over.\n")?;
                session.restart();
            }
            Err(error) => return Err(error.into()),
        }
    }
}

fn print_history<W: Write>(session: &GameSession<'_>, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    for (i, turn) in session.history().iter().enumerate() {
        writeln!(
            out,
            "  {}. {} {}",
            i + 1,
            turn.guess.text().to_uppercase(),
            turn.pattern.to_emoji()
        )?;
    }
    Ok(())
}

/// Read one trimmed line, `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> io::Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
