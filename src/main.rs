use std::{
    fs,
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use monkey::{
    Session,
    interpreter::evaluator::core::{DEFAULT_MAX_CALL_DEPTH, EvalConfig},
    repl,
};
use tracing_subscriber::EnvFilter;

/// monkey is an interpreter for the Monkey programming language. Without a
/// script it starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells monkey to treat the argument as a path to a file instead of a
    /// script.
    #[arg(short, long)]
    file: bool,

    /// How deeply function calls may nest before evaluation fails.
    #[arg(long, env = "MONKEY_MAX_CALL_DEPTH", default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_call_depth: usize,

    contents: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_env("MONKEY_LOG")
                                 .unwrap_or_else(|_| EnvFilter::new("warn")))
                             .with_writer(io::stderr)
                             .init();

    let args = Args::parse();
    let mut session = Session::with_config(EvalConfig { max_call_depth: args.max_call_depth });

    let Some(contents) = args.contents else {
        println!("Hello! This is the Monkey programming language!");
        println!("Feel free to type in commands");
        return match repl::start(io::stdin().lock(), io::stdout(), &mut session) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    match session.run(&script) {
        Ok(Some(value)) => {
            let failed = value.is_error();
            let mut stdout = io::stdout().lock();
            if writeln!(stdout, "{}", value.inspect()).is_err() || failed {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        },
        Ok(None) => ExitCode::SUCCESS,
        Err(errors) => {
            eprintln!("{errors}");
            ExitCode::FAILURE
        },
    }
}
