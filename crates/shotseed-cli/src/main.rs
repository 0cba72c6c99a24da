use clap::Parser;
use rand::Rng;
use shotseed_core::Error as CoreError;
use shotseed_generate::generate_all;
use shotseed_load::{PgOptions, PostgresSink, Sink, SinkError};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("record error: {0}")]
    Record(#[from] CoreError),
    #[error("sink error: {0}")]
    Sink(#[from] SinkError),
    #[error("logging setup failed: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "shotseed", version, about = "ShotGrid demo data seeder")]
struct Cli {
    /// Seed for reproducible runs; a random one is drawn when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging()?;
    run(cli).await
}

fn init_logging() -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| CliError::Logging(err.to_string()))
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    tracing::info!(seed, explicit = cli.seed.is_some(), "seed resolved");

    println!("{}", "=".repeat(50));
    println!("ShotGrid Demo Data Generator");
    println!("{}", "=".repeat(50));

    println!("\nGenerating data...");
    let data = generate_all(seed);
    let summary = data.summary();
    println!("  -> {} users", summary.users);
    println!("  -> 1 project: {}", data.project.name);
    println!("  -> {} episodes", summary.episodes);
    println!("  -> {} shots", summary.shots);
    println!("  -> {} tasks", summary.tasks);

    println!("\nInserting into database...");
    let options = PgOptions::from_env();
    tracing::info!(url = %options.redacted_url(), "connecting to store");

    let sink = match PostgresSink::connect(&options).await {
        Ok(sink) => sink,
        Err(err) => {
            report_connection_failure(&err);
            return Ok(());
        }
    };

    sink.ensure_tables().await?;
    for (table, records) in data.batches()? {
        let rows = sink.upsert(table, &records).await?;
        println!("  Inserted {rows} records into {}", table.table_name());
    }
    sink.close().await;

    println!("\nDemo data loaded successfully!");
    println!("\nQuick Stats:");
    println!("   Project: {} - {}", data.project.code, data.project.name);
    println!("   Episodes: {}", summary.episodes);
    println!("   Total Shots: {}", summary.shots);
    println!("   Total Tasks: {}", summary.tasks);
    println!("   Team Size: {} artists", summary.users);

    Ok(())
}

/// Connection failure is expected when the demo stack is down, so it ends
/// the run with a hint instead of an error exit.
fn report_connection_failure(err: &SinkError) {
    tracing::error!(error = %err, "database connection failed");
    eprintln!("\nDatabase connection failed: {err}");
    eprintln!("\nMake sure the Docker stack is running:");
    eprintln!("  docker-compose up -d");
    eprintln!("  # Wait 30 seconds for Postgres to initialize");
    eprintln!("  shotseed");
}
