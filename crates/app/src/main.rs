mod telemetry;

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::Question;
use quiz_services::auth::{DEFAULT_PASSWORD, DEFAULT_USERNAME};
use quiz_services::{
    CatalogError, Console, PlatformOutcome, QuizPlatform, QuizSession, StaticCredentials, catalog,
};
use tracing::{error, info};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyQuizPath,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyQuizPath => write!(f, "--quiz path cannot be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  quiz [run]   [--quiz <catalog.toml>]");
    eprintln!("  quiz check   [--quiz <catalog.toml>]");
    eprintln!();
    eprintln!("Without --quiz the built-in ten-question set is used.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_FILE, QUIZ_USERNAME, QUIZ_PASSWORD, LOG_LEVEL, LOG_FORMAT");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Run,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "run" => Some(Self::Run),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

struct Args {
    quiz_file: Option<PathBuf>,
    username: String,
    password: String,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut quiz_file = std::env::var_os("QUIZ_FILE")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        let username = std::env::var("QUIZ_USERNAME").unwrap_or_else(|_| DEFAULT_USERNAME.into());
        let password = std::env::var("QUIZ_PASSWORD").unwrap_or_else(|_| DEFAULT_PASSWORD.into());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--quiz" => {
                    let value = require_value(args, "--quiz")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyQuizPath);
                    }
                    quiz_file = Some(PathBuf::from(value));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            quiz_file,
            username,
            password,
        })
    }

    fn credentials(&self) -> StaticCredentials {
        StaticCredentials::new(self.username.clone(), self.password.clone())
    }
}

fn load_questions(path: Option<&Path>) -> Result<Vec<Question>, CatalogError> {
    match path {
        Some(path) => catalog::load(path),
        None => catalog::builtin(),
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    let cmd = match argv.first().map(String::as_str) {
        None => Command::Run,
        Some(first) if first.starts_with('-') => Command::Run,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            print_usage();
            ArgsError::UnknownArg(first.to_string())
        })?,
    };

    if argv.first().is_some_and(|first| !first.starts_with('-')) {
        argv.remove(0);
    }

    let parsed = Args::parse(&mut argv.into_iter()).map_err(|e| {
        print_usage();
        e
    })?;

    let questions = load_questions(parsed.quiz_file.as_deref())?;

    match cmd {
        Command::Check => {
            println!("catalog ok: {} questions", questions.len());
            Ok(())
        }
        Command::Run => {
            let session = QuizSession::with_questions(questions).with_clock(Clock::default());
            let mut platform = QuizPlatform::new(Arc::new(parsed.credentials()), session);

            let mut console = Console::stdio();
            match platform.run(&mut console)? {
                PlatformOutcome::Completed(summary) => {
                    let elapsed = summary.completed_at() - summary.started_at();
                    info!(
                        score = summary.score(),
                        total = summary.total(),
                        elapsed_secs = elapsed.num_seconds(),
                        "session finished"
                    );
                }
                PlatformOutcome::Rejected => info!("session ended at login"),
            }
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    telemetry::init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "quiz aborted");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
