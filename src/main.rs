use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use seqlang::interpreter::{
    core::Interpreter,
    runtime::{BATCH_THRESHOLD, Runtime, RuntimeConfig, WORKER_COUNT},
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// seqlang interprets programs over numbers and integer sequences with `map`
/// and `reduce`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Program file to run. Reads the program from stdin when omitted.
    file: Option<PathBuf>,

    /// Also save the program output to this file.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Run every `map` on the calling thread.
    #[arg(long)]
    sequential: bool,

    /// Minimum sequence length for parallel `map`, and the batch size.
    #[arg(long, default_value_t = BATCH_THRESHOLD)]
    batch_threshold: usize,

    /// Number of worker threads for parallel `map`.
    #[arg(long, default_value_t = WORKER_COUNT)]
    workers: usize,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry().with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
                                  .with(filter)
                                  .init();

    let args = Args::parse();

    let source = match read_source(args.file.as_deref()) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to read the program: {e}");
            return ExitCode::FAILURE;
        },
    };

    let config = RuntimeConfig { batch_threshold: args.batch_threshold,
                                 worker_count:    args.workers,
                                 parallel:        !args.sequential, };
    let mut interpreter = Interpreter::with_config(config).unwrap_or_else(|error| {
        tracing::warn!(%error, "worker pool unavailable, running map sequentially");
        Interpreter::with_runtime(Runtime::sequential())
    });

    let result = interpreter.interpret(&source);

    if !result.output.is_empty() {
        println!("{}", result.output);
    }
    if !result.errors.is_empty() {
        eprintln!("{}", result.errors);
    }

    if let Some(path) = &args.output
       && let Err(e) = fs::write(path, &result.output)
    {
        eprintln!("Failed to save the output to '{}': {e}", path.display());
        return ExitCode::FAILURE;
    }

    if result.errors.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Reads the program from `file`, or from stdin if no file is given.
fn read_source(file: Option<&Path>) -> io::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        },
    }
}
