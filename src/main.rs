use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
    sync::Mutex,
};

use clap::Parser;
use golite::{DEFAULT_ITERATION_LIMIT, Options, run_with_options};
use tracing_subscriber::EnvFilter;

/// golite runs programs written in a small, statically typed subset of Go and
/// reports what they did.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells golite to treat `contents` as the path of a source file.
    #[arg(short, long)]
    file: bool,

    /// Prints only the lines written by `fmt.Println` instead of the record
    /// of every construct that ran. Errors are shown either way.
    #[arg(short, long)]
    output: bool,

    /// Maximum number of iterations of a single loop. 0 removes the limit.
    #[arg(long, default_value_t = DEFAULT_ITERATION_LIMIT)]
    max_iterations: u64,

    /// Writes log events to this file instead of standard error.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// The program, or its path with `--file`. Read from standard input when
    /// omitted.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(args.log_file.as_ref()) {
        eprintln!("Failed to open the log file: {e}");
        return ExitCode::from(2);
    }

    let source = match read_source(&args) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to read the program: {e}");
            return ExitCode::from(2);
        },
    };

    let limit = args.max_iterations;
    let options = Options { iteration_limit: (limit > 0).then_some(limit) };
    let outcome = run_with_options(&source, &options);

    if !outcome.is_success() {
        for line in outcome.lines() {
            eprintln!("{line}");
        }
        return ExitCode::from(1);
    }

    let lines = if args.output { outcome.printed() } else { outcome.lines() };
    for line in lines {
        println!("{line}");
    }
    ExitCode::SUCCESS
}

fn read_source(args: &Args) -> io::Result<String> {
    match &args.contents {
        Some(path) if args.file => fs::read_to_string(path),
        Some(contents) => Ok(contents.clone()),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        },
    }
}

fn init_logging(log_file: Option<&PathBuf>) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = fs::File::create(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        },
        None => builder.with_writer(io::stderr).init(),
    }
    Ok(())
}
