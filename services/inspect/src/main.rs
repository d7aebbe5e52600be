use std::io::Read;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

use common::{DecodeConfig, DecodeMode};
use models::{CreateUserCommand, CreateUserResult, GetUserQuery, GetUserResult, Model};

#[derive(Parser)]
#[command(name = "inspect", version, about = "Decode and validate shadow-id payloads")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Backend operation a payload belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Kind {
    CreateUser,
    GetUser,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a result payload and print it normalized
    Decode {
        kind: Kind,
        /// Path to the payload file, stdin when omitted or `-`
        path: Option<String>,
        /// Overrides SHADOW_ID_DECODE_MODE
        #[arg(long)]
        mode: Option<DecodeMode>,
    },
    /// Validate a request payload
    Validate {
        kind: Kind,
        /// Path to the payload file, stdin when omitted or `-`
        path: Option<String>,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decode { kind, path, mode } => {
            let mode = match mode {
                Some(mode) => mode,
                None => DecodeConfig::from_env()?.mode,
            };
            let payload = read_payload(path.as_deref())?;
            println!("{}", decode_payload(kind, payload, mode)?);
        }
        Commands::Validate { kind, path } => {
            let payload = read_payload(path.as_deref())?;
            println!("{}", validate_payload(kind, payload)?);
            info!(?kind, "payload is valid");
        }
    }

    Ok(())
}

fn read_payload(path: Option<&str>) -> Result<String> {
    match path {
        None | Some("-") => {
            let mut payload = String::new();
            std::io::stdin()
                .read_to_string(&mut payload)
                .context("Failed to read payload from stdin")?;
            Ok(payload)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read payload file {}", path)),
    }
}

fn decode_payload(kind: Kind, payload: String, mode: DecodeMode) -> Result<String> {
    match kind {
        Kind::CreateUser => render::<CreateUserResult>(payload, mode),
        Kind::GetUser => render::<GetUserResult>(payload, mode),
    }
}

fn render<M: Model>(payload: String, mode: DecodeMode) -> Result<String> {
    let model = M::decode_with(payload, mode)
        .with_context(|| format!("Failed to decode {} ({} mode)", M::NAME, mode))?;

    let missing = model.missing_fields();
    if !missing.is_empty() {
        warn!(model = M::NAME, ?missing, "payload is missing fields");
    }

    Ok(serde_json::to_string_pretty(&model.to_value()?)?)
}

fn validate_payload(kind: Kind, payload: String) -> Result<String> {
    let normalized = match kind {
        Kind::CreateUser => {
            let command = CreateUserCommand::from_source(payload)?;
            command.validate()?;
            serde_json::to_string_pretty(&command)?
        }
        Kind::GetUser => {
            let query = GetUserQuery::from_source(payload)?;
            query.validate()?;
            serde_json::to_string_pretty(&query)?
        }
    };

    Ok(normalized)
}
