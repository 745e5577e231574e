//! Address book command shell.
//!
//! # Responsibility
//! - Run one command from arguments, or one command per stdin line.
//! - Keep the sample model in memory for the lifetime of the process.
//! - Print every result or error message on its own line.

use addressbook_core::{
    init_logging_with, parse_command, sample_persons, AddressBook, Command, LogConfig, Model,
    ModelManager,
};
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

const EXIT_WORD: &str = "exit";

fn main() -> ExitCode {
    configure_logging();

    let mut model = match seed_model() {
        Ok(model) => model,
        Err(err) => {
            eprintln!("failed to load sample contacts: {err}");
            return ExitCode::FAILURE;
        }
    };

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if !args.is_empty() {
        return if run_line(&mut model, args.join(" ").as_str()) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    print_persons(&model);
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("failed to read input: {err}");
                return ExitCode::FAILURE;
            }
        };
        let trimmed = line.trim();
        if trimmed == EXIT_WORD {
            break;
        }
        if !trimmed.is_empty() {
            run_line(&mut model, trimmed);
        }
        let _ = io::stdout().flush();
    }
    ExitCode::SUCCESS
}

fn configure_logging() {
    // Logging stays off unless a directory is configured.
    let config = match LogConfig::from_env() {
        Ok(Some(config)) => config,
        Ok(None) => return,
        Err(err) => {
            eprintln!("logging disabled: {err}");
            return;
        }
    };
    if let Err(err) = init_logging_with(config) {
        eprintln!("logging disabled: {err}");
    }
}

fn seed_model() -> Result<ModelManager, Box<dyn Error>> {
    let book = AddressBook::with_persons(sample_persons()?)?;
    Ok(ModelManager::new(book))
}

/// Executes one command line; returns whether it succeeded.
fn run_line(model: &mut ModelManager, line: &str) -> bool {
    let command = match parse_command(line) {
        Ok(command) => command,
        Err(err) => {
            println!("{err}");
            return false;
        }
    };

    match command.execute(model) {
        Ok(result) => {
            println!("{result}");
            print_persons(model);
            true
        }
        Err(err) => {
            println!("{err}");
            false
        }
    }
}

fn print_persons(model: &ModelManager) {
    for (offset, person) in model.filtered_person_list().iter().enumerate() {
        println!("{}. {person}", offset + 1);
    }
}
