use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{DataLoadError, MovieParser, UserParser};
use recommender::RunOutcome;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

const DEFAULT_OUTPUT: &str = "output/recommendations.txt";

/// movie-recs - genre-overlap movie recommendations
#[derive(Parser)]
#[command(name = "movie-recs")]
#[command(about = "Validate movie and user catalogs and recommend movies by shared genre", long_about = None)]
struct Cli {
    /// Path to the movies source (`Title,ID` / genres pairs)
    #[arg(short, long, global = true, default_value = "input/movies.txt")]
    movies: PathBuf,

    /// Path to the users source (`Name,ID` / liked ids pairs)
    #[arg(short, long, global = true, default_value = "input/users.txt")]
    users: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write recommendations (or an error report) to the output file
    Recommend {
        /// Where to write the report
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },

    /// Check both sources without writing a report
    Validate {
        /// Print the parsed catalogs as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Some(Commands::Recommend { output }) => handle_recommend(&cli.movies, &cli.users, &output),
        None => handle_recommend(&cli.movies, &cli.users, Path::new(DEFAULT_OUTPUT)),
        Some(Commands::Validate { json }) => handle_validate(&cli.movies, &cli.users, json),
    }
}

/// Handle the 'recommend' command
///
/// Both sources are opened before anything is written, so a missing input
/// leaves the output untouched.
fn handle_recommend(movies_path: &Path, users_path: &Path, output_path: &Path) -> Result<()> {
    let start = Instant::now();
    let movies = open_source(movies_path)?;
    let users = open_source(users_path)?;

    let mut report = Vec::new();
    let outcome = recommender::process(movies, users, &mut report)
        .context("Failed to read input sources")?;

    write_output(output_path, &report)?;
    info!("Run finished in {:?}", start.elapsed());

    match outcome {
        RunOutcome::Recommended { movies, users } => println!(
            "{} Recommendations for {} users ({} movies) written to {}",
            "✓".green(),
            users,
            movies,
            output_path.display()
        ),
        RunOutcome::Rejected(err) => println!(
            "{} {}\n  Error report written to {}",
            "✗".red(),
            err,
            output_path.display()
        ),
    }
    Ok(())
}

/// Handle the 'validate' command
fn handle_validate(movies_path: &Path, users_path: &Path, json: bool) -> Result<()> {
    let movies = match MovieParser::default().parse_file(movies_path) {
        Ok(movies) => movies,
        Err(err) => return report_load_failure(err, movies_path),
    };
    let users = match UserParser::default().parse_file(users_path) {
        Ok(users) => users,
        Err(err) => return report_load_failure(err, users_path),
    };

    if json {
        let dump = serde_json::json!({ "movies": movies, "users": users });
        println!("{}", serde_json::to_string_pretty(&dump)?);
    } else {
        println!(
            "{} {} movies and {} users are valid",
            "✓".green(),
            movies.len(),
            users.len()
        );
    }
    Ok(())
}

/// Rejected input is printed and turned into a failing exit status; I/O
/// errors pass through with the path attached.
fn report_load_failure(err: DataLoadError, path: &Path) -> Result<()> {
    if let Some(rejected) = err.as_validation() {
        println!("{} {}", "✗".red(), rejected);
        bail!("{} was rejected", path.display());
    }
    Err(err).with_context(|| format!("Failed to load {}", path.display()))
}

fn open_source(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(BufReader::new(file))
}

fn write_output(path: &Path, report: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, report).with_context(|| format!("Failed to write {}", path.display()))
}
