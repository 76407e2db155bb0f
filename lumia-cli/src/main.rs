use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser, Debug, Clone)]
#[command(name = "lumia-alerts")]
#[command(author, version, about = "Inspect, validate and replay overlay alert payloads")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// List every alert kind in declaration order
    Kinds {
        /// Only kinds whose wire string starts with this platform prefix, e.g. "kick"
        #[arg(long)]
        platform: Option<String>,

        /// Print JSON instead of a table
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Print the payload schema for one kind
    Schema {
        kind: String,
    },

    /// Validate one alert payload read from a JSON file
    Validate {
        file: PathBuf,

        /// Kind to validate against. Defaults to the payload's own `alert` key.
        #[arg(long)]
        kind: Option<String>,
    },

    /// Replay newline-delimited overlay frames through the event bus
    Replay {
        file: PathBuf,

        /// Per-subscriber queue depth
        #[arg(long, env = "LUMIA_BUS_BUFFER")]
        buffer: Option<usize>,
    },
}

fn init_tracing() {
    let _ = tracing_log::LogTracer::init();
    let filter = EnvFilter::from_default_env()
        .add_directive("lumia=info".parse().unwrap_or_default());
    let sub = fmt().with_env_filter(filter).with_writer(std::io::stderr).finish();
    let _ = tracing::subscriber::set_global_default(sub);
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();
    init_tracing();
    let args = Args::parse();
    info!("lumia-alerts starting. command={:?}", args.command);

    let ok = match args.command {
        Command::Kinds { platform, json } => commands::kinds(platform.as_deref(), json)?,
        Command::Schema { kind } => commands::schema(&kind)?,
        Command::Validate { file, kind } => commands::validate(&file, kind.as_deref())?,
        Command::Replay { file, buffer } => commands::replay(&file, buffer).await?,
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
