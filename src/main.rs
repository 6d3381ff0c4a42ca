use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wsjf::config::AppConfig;
use wsjf::models::{CreateInitiativeInput, Factor, FactorCatalogue};
use wsjf::session::Prioritizer;
use wsjf::{api, render};

#[derive(Parser)]
#[command(name = "wsjf")]
#[command(about = "Rank initiatives by Weighted Shortest Job First")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Interface to bind when serving
    #[arg(long, global = true, env = "WSJF_HOST")]
    host: Option<String>,

    /// Port for HTTP API
    #[arg(short, long, global = true, env = "WSJF_PORT")]
    port: Option<u16>,
}

impl Cli {
    /// Server settings with any `--host`/`--port` (or env) overrides applied.
    fn server_config(&self, config: AppConfig) -> AppConfig {
        config.with_overrides(self.host.clone(), self.port)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server (the default)
    Serve,
    /// Rank initiatives read from a JSON file
    Rank {
        /// JSON array of initiative drafts, or `-` for stdin
        file: PathBuf,

        /// User Value weight (1-10)
        #[arg(long)]
        uv: Option<u8>,

        /// Time Criticality weight (1-10)
        #[arg(long)]
        tc: Option<u8>,

        /// Risk Reduction weight (1-10)
        #[arg(long)]
        rr: Option<u8>,

        /// Compliance weight (1-10)
        #[arg(long)]
        cr: Option<u8>,

        /// Print the ranking as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the scoring factors and what each score means
    Factors,
}

/// Initialize tracing with output to stderr (for CLI output modes) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "wsjf=debug,tower_http=debug".into()),
    );

    if use_stderr {
        // Keep stdout clean for the rendered table or JSON
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let use_stderr = !matches!(cli.command, None | Some(Commands::Serve));
    init_tracing(use_stderr);

    let config = cli.server_config(AppConfig::load());

    match cli.command {
        None | Some(Commands::Serve) => {
            serve(config).await?;
        }
        Some(Commands::Rank {
            file,
            uv,
            tc,
            rr,
            cr,
            json,
        }) => {
            let mut session = Prioritizer::with_weights(config.weights);
            let overrides = [
                (Factor::Uv, uv),
                (Factor::Tc, tc),
                (Factor::Rr, rr),
                (Factor::Cr, cr),
            ];
            for (factor, value) in overrides {
                if let Some(value) = value {
                    session.set_weight(factor, value)?;
                }
            }

            for (i, draft) in read_drafts(&file)?.into_iter().enumerate() {
                if let Err(e) = session.add_initiative(draft) {
                    tracing::warn!("Skipping entry {}: {}", i + 1, e);
                }
            }

            let ranked = session.get_ranked();
            if json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else {
                print!("{}", render::render_table(&ranked));
            }
        }
        Some(Commands::Factors) => {
            print!("{}", render::render_factors(&FactorCatalogue::build()));
        }
    }

    Ok(())
}

async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let addr = config.bind_addr();
    tracing::info!("Starting WSJF server on {}", addr);

    let app = api::create_router(Prioritizer::with_weights(config.weights));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("WSJF server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

fn read_drafts(file: &Path) -> anyhow::Result<Vec<CreateInitiativeInput>> {
    let content = if file == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?
    };

    serde_json::from_str(&content).context("Expected a JSON array of initiative drafts")
}
