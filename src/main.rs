//! Binary entry point: reads a puzzle from stdin, prints the result to
//! stdout.
//!
//! The input is 81 whitespace-delimited cells (`1`–`9`, or `0`/`-` for
//! blanks). The solved grid (or the best candidate found, if the
//! generation budget runs out) is printed one row per line. Exit code
//! is nonzero for unreadable input and for runs that did not converge.

use std::io::Read;
use std::process::ExitCode;

use sudoku_evo::ga::{GaConfig, GaRunner};
use sudoku_evo::puzzle::Puzzle;

fn main() -> ExitCode {
    env_logger::init();

    let mut input = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("error: failed to read stdin: {err}");
        return ExitCode::FAILURE;
    }

    let puzzle = match Puzzle::parse(&input) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let result = match GaRunner::run(&puzzle, &GaConfig::default()) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    print!("{}", result.best.grid());

    if result.is_solved() {
        ExitCode::SUCCESS
    } else {
        eprintln!(
            "no solution within {} generations ({} restarts); best candidate has {} violations",
            result.generations, result.restarts, result.best_fitness
        );
        ExitCode::FAILURE
    }
}
