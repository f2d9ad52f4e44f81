//! Object Formatter CLI
//!
//! Usage:
//!   object-formatter [OPTIONS] [JOB]
//!
//! Options:
//!   -f, --format <FORMAT>    Template to use instead of the job's `format`
//!   -s, --sort-by <FIELD>    Order records by this field
//!   --check                  Report placeholders that would stay unresolved
//!   --demo                   Print the bundled walkthrough
//!   -v, --verbose            Log resolution misses to stderr
//!   -h, --help               Print help

use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use object_formatter::{check_report, demo, unresolved, Job, PrintError, RenderConfig};

#[derive(Parser)]
#[command(name = "object-formatter")]
#[command(about = "Render ${field} templates against TOML records")]
struct Cli {
    /// Job file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Template to use instead of the job's `format`
    #[arg(short, long)]
    format: Option<String>,

    /// Order records by this field
    #[arg(short, long)]
    sort_by: Option<String>,

    /// Report placeholders that would stay unresolved instead of rendering
    #[arg(long)]
    check: bool,

    /// Print the bundled walkthrough
    #[arg(long)]
    demo: bool,

    /// Log resolution misses to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.demo {
        let mut out = io::stdout().lock();
        return finish(demo::run(&mut out).and_then(|()| Ok(out.flush()?)));
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return ExitCode::SUCCESS;
    }

    let source = match read_source(&cli.input) {
        Ok(source) => source,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::FAILURE;
        }
    };

    let mut job = match Job::from_str(&source) {
        Ok(job) => job,
        Err(e) => {
            eprintln!("Error loading job: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(format) = cli.format {
        job = job.with_format(format);
    }
    if let Some(field) = cli.sort_by {
        job = job.with_sort_by(field);
    }

    if cli.check {
        return check(&job);
    }

    let mut out = io::stdout().lock();
    let result = job
        .run(&mut out, &RenderConfig::default())
        .and_then(|()| Ok(out.flush()?));
    finish(result)
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "object_formatter=debug"
    } else {
        "object_formatter=warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn read_source(input: &Option<PathBuf>) -> Result<String, String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("Error reading file '{}': {}", path.display(), e)),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| format!("Error reading from stdin: {}", e))?;
            Ok(buffer)
        }
    }
}

/// Report every record with unresolved placeholders; fails if any were found
fn check(job: &Job) -> ExitCode {
    let mut clean = true;
    for (index, record) in job.records.iter().enumerate() {
        let missing = unresolved(record, &job.format);
        if missing.is_empty() {
            continue;
        }
        clean = false;
        eprint!(
            "{}",
            check_report(&job.format, &format!("record {}", index + 1), &missing)
        );
    }
    if clean {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn finish(result: Result<(), PrintError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_intro() {
    println!(
        r#"Object Formatter - render ${{field}} templates against records

USAGE:
    object-formatter [OPTIONS] [JOB]
    cat job.toml | object-formatter

OPTIONS:
    -f, --format     Template to use instead of the job's format
    -s, --sort-by    Order records by this field
    --check          Report placeholders that would stay unresolved
    --demo           Print the bundled walkthrough
    -v, --verbose    Log resolution misses to stderr
    -h, --help       Print help

JOB FILE:
    format = "${{name}}, ${{age}} years old"

    [[records]]
    name = "Carl Johnson"
    age = 37

Placeholders naming a field a record does not have are printed as written."#
    );
}
