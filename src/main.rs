use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use radixcalc::{
    error::Error,
    inspect_line,
    interpreter::parser::core::{DEFAULT_MAX_DEPTH, Limits},
};
use tracing_subscriber::EnvFilter;

/// radixcalc evaluates a single line of integer arithmetic with decimal,
/// octal, hexadecimal and binary literals.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the token stream to stderr before parsing.
    #[arg(short, long)]
    tokens: bool,

    /// Print the evaluated syntax tree to stderr.
    #[arg(short, long)]
    ast: bool,

    /// Maximum nesting of parentheses and prefix operators.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Log filter such as `debug` or `radixcalc=trace`. Defaults to `RUST_LOG`,
    /// then `warn`.
    #[arg(short, long)]
    log_level: Option<String>,

    /// The expression to evaluate. One line is read from standard input when
    /// omitted.
    expression: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_level.as_deref());

    let line = match &args.expression {
        Some(expression) => expression.clone(),
        None => match read_line() {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Failed to read an expression from standard input: {e}");
                return ExitCode::FAILURE;
            },
        },
    };

    match run(&line, &args) {
        Ok(value) => match write_value(value) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Failed to write the result: {e}");
                ExitCode::FAILURE
            },
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Logs go to stderr so stdout only ever carries the result.
fn init_logging(level: Option<&str>) {
    let filter = level.map_or_else(|| {
                                       EnvFilter::try_from_default_env()
                                           .unwrap_or_else(|_| EnvFilter::new("warn"))
                                   },
                                   EnvFilter::new);

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .with_target(true)
                             .init();
}

fn read_line() -> io::Result<String> {
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

fn run(line: &str, args: &Args) -> Result<i64, Error> {
    let report = inspect_line(line, Limits { max_depth: args.max_depth });

    if args.tokens {
        for token in &report.tokens {
            eprintln!("{token}");
        }
    }
    // Printed even on failure: the memoized values show how far evaluation got.
    if args.ast
       && let Some(ast) = &report.ast
    {
        eprint!("{ast}");
    }

    report.result
}

/// The value is written without a trailing newline.
fn write_value(value: i64) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{value}")?;
    stdout.flush()
}
