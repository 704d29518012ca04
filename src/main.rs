use clap::Parser;
use mimalloc::MiMalloc;
use natural_deduction_rs::{run, Error};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[command(name = "natural-deduction-rs")]
#[command(about = "Check a natural deduction proof script")]
struct Cli {
    /// Proof script to check; reads stdin when omitted
    script: Option<PathBuf>,
    /// Fail unless every goal of the script is closed
    #[arg(long)]
    complete: bool,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn read_script(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut s = String::new();
            io::stdin().read_to_string(&mut s)?;
            Ok(s)
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let s = match read_script(cli.script.as_ref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("cannot read script: {e}");
            return ExitCode::FAILURE;
        }
    };
    let state = match run(&s) {
        Ok(state) => state,
        Err(e @ Error::Rule { line, .. }) => {
            eprintln!("line {line}: {e}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    println!("{state}");
    if cli.complete && !state.is_complete() {
        tracing::warn!(
            open_goals = state.other_goals.len() + usize::from(state.current_goal.is_some()),
            "proof is not complete"
        );
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
