pub mod util;
pub mod interpreter;

use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use clap::Parser as ClapParser;
use thiserror::Error;

pub use crate::interpreter::ast::{BinaryOperator, Node, Program};
pub use crate::interpreter::environment::{Environment, EnvironmentError};
pub use crate::interpreter::evaluator::{evaluate, evaluate_program, RuntimeError};
pub use crate::interpreter::lexer::{tokenize, LexerError, Token, TokenPos, TokenType};
pub use crate::interpreter::parser::{parse, ParseError};
pub use crate::interpreter::value::Value;

pub const BANNER: &str = "Axle v0.1";

#[derive(ClapParser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Config {
    #[clap(help = "Source file to evaluate line by line; starts the prompt when omitted")]
    pub input: Option<PathBuf>,
    #[clap(long, help = "Print the parsed tree before each result")]
    pub ast: bool,
    #[clap(long, default_value = "> ", help = "Prompt shown before each line")]
    pub prompt: String,

    #[clap(short, long, help = "Print verbose log output")]
    pub verbose: bool,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    #[error("[{path}:{line}] {source}")]
    InFile {
        path: String,
        line: usize,
        source: Box<Error>,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence over
/// `verbose`. Calling this more than once has no effect.
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true).with_level(true))
        .with(filter)
        .try_init();
}

/// One interactive session: a single root environment shared by every line.
pub struct Session {
    environment: Rc<RefCell<Environment>>,
    print_ast: bool,
}

impl Session {
    pub fn new(print_ast: bool) -> Session {
        Session {
            environment: Environment::new_global(),
            print_ast,
        }
    }

    /// The root environment, for seeding bindings before the first line.
    pub fn environment(&self) -> Rc<RefCell<Environment>> {
        Rc::clone(&self.environment)
    }

    pub fn evaluate_line(&self, source: &str, out: &mut impl Write) -> Result<Value> {
        let program = parse(source)?;

        if self.print_ast {
            writeln!(out, "{}", program)?;
        }

        Ok(evaluate_program(&program, &self.environment)?)
    }
}

pub fn run(config: &Config) -> Result<()> {
    let stdout = std::io::stdout();

    match &config.input {
        Some(path) => {
            let source = std::fs::read_to_string(path)?;
            run_source(config, path, &source, &mut stdout.lock())
        },
        None => {
            let stdin = std::io::stdin();
            repl(config, &mut stdin.lock(), &mut stdout.lock(), &mut std::io::stderr())
        },
    }
}

/// Evaluates every non-blank line of `source` in one session and prints each
/// value. Stops at the first error.
pub fn run_source(config: &Config, path: &Path, source: &str, out: &mut impl Write) -> Result<()> {
    let session = Session::new(config.ast);

    for (index, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match session.evaluate_line(line, out) {
            Ok(value) => writeln!(out, "{}", value)?,
            Err(Error::Io(err)) => return Err(Error::Io(err)),
            Err(err) => return Err(Error::InFile {
                path: path.to_string_lossy().into_owned(),
                line: index + 1,
                source: Box::new(err),
            }),
        }
    }

    Ok(())
}

/// The read-eval-print loop. Ends on end of input, on an empty line, or on a
/// line containing `exit`. Errors are reported on `err` and the loop goes on.
pub fn repl(config: &Config, input: &mut impl BufRead, out: &mut impl Write, err: &mut impl Write) -> Result<()> {
    let session = Session::new(config.ast);
    let mut line = String::new();

    writeln!(out, "{}", BANNER)?;

    loop {
        write!(out, "{}", config.prompt)?;
        out.flush()?;

        line.clear();

        if input.read_line(&mut line)? == 0 {
            break;
        }

        let source = line.trim_end_matches(|c| c == '\n' || c == '\r');

        if source.is_empty() || source.contains("exit") {
            break;
        }

        match session.evaluate_line(source, out) {
            Ok(value) => writeln!(out, "{}", value)?,
            Err(Error::Io(io_error)) => return Err(Error::Io(io_error)),
            Err(error) => {
                tracing::debug!(%error, "line failed");
                writeln!(err, "Error: {}", error)?;
            },
        }
    }

    Ok(())
}
