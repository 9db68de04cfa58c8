//! Drives the Monkey front end from the command line: runs a source file or reads lines from the
//! prompt, reporting syntax errors to the standard error stream.

use std::{
    cell::Cell,
    fmt::Display,
    fs::File,
    io::{BufRead, ErrorKind, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

pub use clap::Parser;
use monkey_base::{
    diagnostic::Handler,
    log::{Message, Severity},
    source_file::SourceFile,
};
use monkey_lexical::lexer::Lexer;
use monkey_semantic::interpreter::{self, Node};
use monkey_syntax::parser;

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(name = "monkey", about = "Monkey programming language front end.")]
pub struct Argument {
    /// The source file to run. Lines are read from the standard input when no file is given.
    pub file: Option<PathBuf>,

    /// Prints out every token of the source instead of parsing it.
    #[clap(long = "dump-tokens")]
    pub dump_tokens: bool,

    /// Prints out the parsed program instead of evaluating it.
    #[clap(long = "dump-syntax")]
    pub dump_syntax: bool,
}

const PROMPT: &str = ">> ";

/// A struct that implements [`Handler`] but prints all the message to the standard error stream.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Printer {
    printed: Cell<bool>,
}

impl Printer {
    /// Creates a new [`Printer`].
    fn new() -> Self {
        Self {
            printed: Cell::new(false),
        }
    }

    fn has_printed(&self) -> bool { self.printed.get() }
}

impl<E: Display> Handler<E> for Printer {
    fn receive(&self, error: E) {
        eprintln!("{error}");
        self.printed.set(true);
    }
}

/// Runs the program with the given arguments.
pub fn run(argument: Argument) -> ExitCode {
    match &argument.file {
        Some(path) => run_file(path, &argument),
        None => run_prompt(&argument),
    }
}

fn report(path: &Path, error: impl Display) {
    let msg = Message::new(Severity::Error, format!("{}: {error}", path.display()));
    eprintln!("{msg}");
}

fn run_file(path: &Path, argument: &Argument) -> ExitCode {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(error) => {
            report(path, error);
            return ExitCode::FAILURE;
        }
    };

    let source_file = match SourceFile::load(file, path.to_path_buf()) {
        Ok(source_file) => source_file,
        Err(error) => {
            report(path, error);
            return ExitCode::FAILURE;
        }
    };

    if execute(&source_file, argument) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_prompt(argument: &Argument) -> ExitCode { prompt(std::io::stdin().lock(), argument) }

/// Executes every line read from `input` as its own program until the input ends.
fn prompt(mut input: impl BufRead, argument: &Argument) -> ExitCode {
    let mut line = String::new();

    loop {
        print!("{PROMPT}");
        if let Err(error) = std::io::stdout().flush() {
            eprintln!("{}", Message::new(Severity::Error, error));
            return ExitCode::FAILURE;
        }

        line.clear();
        match input.read_line(&mut line) {
            // end of input
            Ok(0) => return ExitCode::SUCCESS,
            Ok(_) => {
                let source_file = SourceFile::in_memory("<stdin>", line.as_str());

                // errors were already printed, the next line starts afresh
                execute(&source_file, argument);
            }

            // the offending line is consumed, so the loop can carry on
            Err(error) if error.kind() == ErrorKind::InvalidData => {
                eprintln!(
                    "{}",
                    Message::new(Severity::Warning, format!("<stdin>: skipped line, {error}"))
                );
            }
            Err(error) => {
                eprintln!("{}", Message::new(Severity::Error, error));
                return ExitCode::FAILURE;
            }
        }
    }
}

/// Lexes, parses and evaluates a single source, printing the result to the standard output.
///
/// Returns `false` if any syntax error was reported.
fn execute(source_file: &Arc<SourceFile>, argument: &Argument) -> bool {
    if argument.dump_tokens {
        for token in Lexer::new(source_file) {
            println!("{} {:?}", token.kind, token.literal());
        }

        return true;
    }

    let printer = Printer::new();

    let mut parser = parser::Parser::new(Lexer::new(source_file));
    let program = parser.parse_program(&printer);

    // early exit
    if printer.has_printed() {
        return false;
    }

    if argument.dump_syntax {
        println!("{program}");
        return true;
    }

    if let Some(value) = interpreter::evaluate(Node::Program(&program)) {
        println!("{value}");
    }

    true
}

#[cfg(test)]
mod tests;
