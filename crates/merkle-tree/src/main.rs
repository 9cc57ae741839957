//! merkle-tree CLI
//!
//! Generates the distribution file for an allocation list and re-checks
//! published distribution files.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use merkle_tree::{parse_balance_map_json, verify_distribution, MerkleDistributorInfo};

/// Merkle distributor tooling
#[derive(Parser)]
#[command(name = "merkle-tree")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the tree and proofs from a JSON object of account -> amount
    Generate {
        /// Allocation file
        #[arg(short, long)]
        input: PathBuf,

        /// Where to write the distribution file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check every proof, the index set and the token total of a distribution file
    Verify {
        /// Distribution file produced by `generate`
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate { input, output } => {
            let raw = fs::read_to_string(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let info = parse_balance_map_json(&raw)
                .with_context(|| format!("invalid allocation file {}", input.display()))?;
            let json = info.to_json_pretty()?;

            match output {
                Some(path) => {
                    fs::write(&path, json)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    info!(path = %path.display(), root = %info.merkle_root, "wrote distribution");
                }
                None => println!("{}", json),
            }
        }
        Commands::Verify { input } => {
            let raw = fs::read_to_string(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let info = MerkleDistributorInfo::from_json(&raw)
                .with_context(|| format!("invalid distribution file {}", input.display()))?;
            let verified = verify_distribution(&info)
                .with_context(|| format!("distribution {} failed verification", input.display()))?;

            println!(
                "root {} verified: {} claims, {} tokens",
                info.merkle_root, verified.num_claims, verified.token_total
            );
        }
    }

    Ok(())
}
