//! Specdeck CLI.
//!
//! Provides the `serve` subcommand for the documentation portal server and
//! `convert` for normalizing a definition file offline.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

mod api;
mod db;
mod error;
mod server;

#[derive(Parser, Debug)]
#[command(name = "specdeck", about = "Specdeck API documentation portal", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the documentation portal HTTP server.
    Serve {
        /// Listen address.
        #[arg(long, default_value = "127.0.0.1:8080")]
        listen: SocketAddr,

        /// PostgreSQL database URL.
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,

        /// Run database migrations on startup.
        #[arg(long, default_value_t = true)]
        migrate: bool,
    },

    /// Normalize a definition file and print the resulting document.
    Convert {
        /// Path to a .json/.yaml/.yml file.
        file: PathBuf,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            listen,
            database_url,
            migrate,
        } => {
            // Initialize tracing
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::from_default_env()
                        .add_directive("info".parse().expect("valid log directive")),
                )
                .init();

            let rt = tokio::runtime::Runtime::new().expect("Failed to create runtime");
            rt.block_on(async {
                match run_server(listen, &database_url, migrate).await {
                    Ok(()) => ExitCode::SUCCESS,
                    Err(e) => {
                        eprintln!("error: {}", e);
                        ExitCode::from(1)
                    }
                }
            })
        }

        Command::Convert { file, format } => convert_file(&file, format),
    }
}

async fn run_server(listen: SocketAddr, database_url: &str, migrate: bool) -> anyhow::Result<()> {
    let pool = db::create_pool(database_url).await?;

    if migrate {
        db::run_migrations(&pool).await?;
    }

    server::run(server::ServerConfig {
        listen_addr: listen,
        pool,
    })
    .await
}

/// Offline normalization: read, parse by extension, normalize, print.
///
/// Exit codes: 0 = success, 1 = load/convert error, 3 = unreadable file.
fn convert_file(file: &Path, format: OutputFormat) -> ExitCode {
    let text = match std::fs::read_to_string(file) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: cannot read {}: {}", file.display(), e);
            return ExitCode::from(3);
        }
    };

    let file_type = file
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_else(|| "unknown".to_string());

    let normalized = match specdeck_normalizer::parse_document(&text, &file_type)
        .and_then(specdeck_normalizer::normalize)
    {
        Ok(normalized) => normalized,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(1);
        }
    };

    for warning in &normalized.warnings {
        eprintln!("warning: {}", warning);
    }

    let rendered = match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&normalized.document).expect("document serializes")
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(&normalized.document).expect("document serializes")
        }
    };
    println!("{}", rendered);
    ExitCode::SUCCESS
}
