//! Staff Records Binary
//!
//! Runs the interactive shell, or a single command against a data file.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use staff_records::shell::{write_selection, Session};
use staff_records::{Config, Result, Staff};
use tracing_subscriber::{fmt, EnvFilter};

/// Staff record book
#[derive(Parser, Debug)]
#[command(name = "staff")]
#[command(about = "Keep a list of workers in an XML file")]
#[command(version)]
struct Args {
    /// Log file
    #[arg(short, long, default_value = "workers.log")]
    log_file: PathBuf,

    /// Reference year used instead of the system clock
    #[arg(long)]
    as_of: Option<i32>,

    /// Run one command and exit; without one, start the interactive shell
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a worker to the data file, creating it if needed
    Add {
        /// The data file
        #[arg(short, long)]
        file: PathBuf,

        /// The worker's name
        #[arg(short, long)]
        name: String,

        /// The worker's post
        #[arg(short, long)]
        post: String,

        /// The year the worker joined
        #[arg(short, long, allow_negative_numbers = true)]
        year: i32,
    },

    /// Display all workers in the data file
    List {
        /// The data file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Select workers with at least the given tenure
    Select {
        /// The data file
        #[arg(short, long)]
        file: PathBuf,

        /// Minimum tenure in years
        #[arg(short, long, allow_negative_numbers = true)]
        period: i32,
    },
}

fn main() {
    let args = Args::parse();

    let mut builder = Config::builder().log_file(&args.log_file);
    if let Some(year) = args.as_of {
        builder = builder.reference_year(year);
    }
    let config = builder.build();

    if let Err(e) = init_logging(&config) {
        eprintln!("Failed to open log file {}: {}", config.log_file.display(), e);
        std::process::exit(1);
    }

    tracing::info!("staff v{}", staff_records::VERSION);

    let result = match args.command {
        None => run_shell(config),
        Some(command) => run_once(&config, command),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

/// Send log events to the configured file
fn init_logging(config: &Config) -> io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}

fn run_shell(config: Config) -> Result<()> {
    let stdin = io::stdin();
    let mut session = Session::new(config);
    session.run(stdin.lock(), io::stdout().lock(), io::stderr().lock())
}

fn run_once(config: &Config, command: Commands) -> Result<()> {
    let current_year = config.current_year();
    let mut staff = Staff::new();

    match command {
        Commands::Add {
            file,
            name,
            post,
            year,
        } => {
            if file.exists() {
                staff.load(&file)?;
            }
            staff.add(name.as_str(), post.as_str(), year, current_year)?;
            staff.save(&file)?;
            tracing::info!(%name, %post, year, file = %file.display(), "added worker");
        }
        Commands::List { file } => {
            staff.load(&file)?;
            println!("{}", staff);
            tracing::info!(file = %file.display(), "displayed workers");
        }
        Commands::Select { file, period } => {
            staff.load(&file)?;
            let selected = staff.select(period, current_year);
            write_selection(&mut io::stdout().lock(), &selected)?;
            tracing::info!(period, count = selected.len(), "selected workers by tenure");
        }
    }

    Ok(())
}
