use std::path::PathBuf;

use clap::{Parser, Subcommand};
use secrecy::{Secret, SecretString};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rnode_eth_sign::{commands, Result};

/// Ethereum compatible signatures for RNode deploys.
#[derive(Parser, Debug)]
#[clap(name = "rnode-eth-sign", author, version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hash a message with personal message framing.
    Hash {
        /// Treat the message as hex encoded bytes.
        #[clap(long)]
        hex: bool,

        /// Message to hash.
        message: String,
    },
    /// Recover the signer of a personal message.
    Recover {
        /// Treat the message as hex encoded bytes.
        #[clap(long)]
        hex: bool,

        /// Signature as hex encoded r || s || v.
        #[clap(short, long)]
        signature: String,

        /// Message that was signed.
        message: String,
    },
    /// Print the canonical bytes of deploy fields.
    Serialize {
        /// JSON file with the deploy fields.
        #[clap(parse(from_os_str))]
        file: PathBuf,
    },
    /// Sign deploy fields.
    Sign {
        /// Hex encoded signing key.
        #[clap(
            short,
            long,
            env = commands::SIGNING_KEY_ENV,
            hide_env_values = true
        )]
        key: Option<String>,

        /// JSON file with the deploy fields.
        #[clap(parse(from_os_str))]
        file: PathBuf,
    },
    /// Verify a signed deploy.
    Verify {
        /// JSON file with the signed deploy.
        #[clap(parse(from_os_str))]
        file: PathBuf,
    },
}

async fn run() -> Result<()> {
    let args = Cli::parse();

    match args.command {
        Command::Hash { hex, message } => {
            let doc = commands::hash(&message, hex)?;
            serde_json::to_writer_pretty(std::io::stdout(), &doc)?;
        }
        Command::Recover {
            hex,
            signature,
            message,
        } => {
            let doc = commands::recover(&message, hex, &signature)?;
            tracing::info!(address = %doc.address, "recovered signer");
            serde_json::to_writer_pretty(std::io::stdout(), &doc)?;
        }
        Command::Serialize { file } => {
            let doc = commands::serialize(file).await?;
            serde_json::to_writer_pretty(std::io::stdout(), &doc)?;
        }
        Command::Sign { key, file } => {
            let key: Option<SecretString> = key.map(Secret::new);
            let doc = commands::sign(key, file).await?;
            serde_json::to_writer_pretty(std::io::stdout(), &doc)?;
        }
        Command::Verify { file } => {
            let doc = commands::verify(file).await?;
            tracing::info!(
                deployer = %doc.deployer,
                valid = doc.valid,
                "verified deploy"
            );
            serde_json::to_writer_pretty(std::io::stdout(), &doc)?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run().await {
        Ok(_) => {}
        Err(e) => {
            tracing::error!("{}", e);
        }
    }
    Ok(())
}
