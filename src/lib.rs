#![doc = "claimcheck: verify product claims against a GitHub repository."]

//! The pipeline downloads a default-branch ZIP archive of the repository,
//! indexes its entries, selects a bounded subset under path/extension/size
//! caps, extracts the subset into a scratch directory, assembles a single
//! budgeted text blob, and hands `(claims, text)` to the analysis
//! collaborator. The resulting report is persisted as JSON.

pub mod analyze;
pub mod assemble;
pub mod claims;
pub mod config;
pub mod download;
pub mod extract;
pub mod filter;
pub mod index;
pub mod load_config;
pub mod report;
pub mod scratch;
pub mod verify;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use analyze::PlaceholderAnalyzer;
use claims::{claims_xml, parse_claims};
use download::{HttpArchiveSource, RepoReference};
use load_config::load_config;

/// CLI for claimcheck: verify product claims against a GitHub repository.
#[derive(Parser)]
#[clap(
    name = "claimcheck",
    version,
    about = "Verify product claims against the source of a GitHub repository"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze claims against a GitHub repo
    Analyze {
        /// Comma-separated claims or path to a claims file
        #[clap(long)]
        claims: String,
        /// GitHub repository URL
        #[clap(long)]
        repo: String,
        /// Optional YAML file overriding selection criteria and budgets
        #[clap(long)]
        config: Option<PathBuf>,
    },
}

/// Extracted async CLI logic entrypoint for integration tests and main()
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            claims,
            repo,
            config,
        } => {
            let claims = parse_claims(&claims)?;
            println!("Structured Claims:");
            println!("{}", claims_xml(&claims));

            let reference = RepoReference::parse(&repo)?;
            let config = load_config(config.as_deref())?;

            let source = HttpArchiveSource::new();
            let analyzer = PlaceholderAnalyzer;
            let report = verify::verify(&claims, &reference, &config, &source, &analyzer).await?;

            report::generate_report(&report)?;
            Ok(())
        }
    }
}
