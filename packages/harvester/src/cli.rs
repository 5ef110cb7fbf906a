//! Command-line interface for the harvester.

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use gaejeong_engine::{StatuteHighlights, StatuteSearchService};

use crate::config::{ApiConfig, DEFAULT_OC};
use crate::error::Result;
use crate::provider::ApiStatuteProvider;

/// Gaejeong - Search Korean legislation and generate amendment sentences.
#[derive(Parser)]
#[command(name = "gaejeong")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate amendment sentences replacing a term across all statutes.
    Amend {
        /// Term to search for (e.g. 담보)
        keyword: String,

        /// Replacement term (e.g. 보증)
        replacement: String,

        /// law.go.kr OC credential (default: OC env var, then built-in)
        #[arg(short, long)]
        oc: Option<String>,

        /// Emit results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the matching passages of every statute containing a term.
    Search {
        /// Term to search for
        keyword: String,

        /// law.go.kr OC credential (default: OC env var, then built-in)
        #[arg(short, long)]
        oc: Option<String>,

        /// Emit results as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Amend {
            keyword,
            replacement,
            oc,
            json,
        } => amend_command(&keyword, &replacement, oc, json),
        Commands::Search { keyword, oc, json } => search_command(&keyword, oc, json),
    }
}

/// Resolve the OC credential: flag, then `OC` env var, then the default.
fn resolve_oc(flag: Option<String>) -> String {
    flag.or_else(|| std::env::var("OC").ok())
        .unwrap_or_else(|| DEFAULT_OC.to_string())
}

/// Build the search service over the API provider.
fn build_service(oc: Option<String>) -> Result<StatuteSearchService<ApiStatuteProvider>> {
    let config = ApiConfig::new(resolve_oc(oc));
    let provider = ApiStatuteProvider::new(config)?;
    Ok(StatuteSearchService::new(provider))
}

/// Spinner shown while the run is fetching and processing statutes.
fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(message);
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Execute the amend command.
fn amend_command(keyword: &str, replacement: &str, oc: Option<String>, json: bool) -> Result<()> {
    let service = build_service(oc)?;

    println!(
        "{} \"{}\" {} \"{}\"",
        style("Amending").bold(),
        style(keyword).cyan(),
        style("→").dim(),
        style(replacement).green()
    );
    println!();

    let pb = spinner("Searching statutes...");
    let sentences = service.generate_amendments(keyword, replacement);
    pb.finish_and_clear();

    if json {
        println!("{}", serde_json::to_string_pretty(&sentences)?);
        return Ok(());
    }

    for sentence in &sentences {
        println!("{sentence}");
    }
    Ok(())
}

/// Execute the search command.
fn search_command(keyword: &str, oc: Option<String>, json: bool) -> Result<()> {
    let service = build_service(oc)?;

    println!(
        "{} \"{}\"",
        style("Searching").bold(),
        style(keyword).cyan()
    );
    println!();

    let pb = spinner("Searching statutes...");
    let highlights = service.generate_highlights(keyword);
    pb.finish_and_clear();

    if json {
        println!("{}", serde_json::to_string_pretty(&highlights)?);
        return Ok(());
    }

    if highlights.is_empty() {
        println!("{}", style("No matching statutes.").yellow());
        return Ok(());
    }

    for StatuteHighlights { name, passages } in &highlights {
        println!("{}", style(name).green().bold());
        for passage in passages {
            println!("  {passage}");
        }
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_amend() {
        let cli = Cli::parse_from(["gaejeong", "amend", "담보", "보증"]);

        match cli.command {
            Commands::Amend {
                keyword,
                replacement,
                oc,
                json,
            } => {
                assert_eq!(keyword, "담보");
                assert_eq!(replacement, "보증");
                assert!(oc.is_none());
                assert!(!json);
            }
            Commands::Search { .. } => panic!("expected amend"),
        }
    }

    #[test]
    fn test_cli_parse_search_with_flags() {
        let cli = Cli::parse_from(["gaejeong", "search", "담보", "--oc", "myid", "--json"]);

        match cli.command {
            Commands::Search { keyword, oc, json } => {
                assert_eq!(keyword, "담보");
                assert_eq!(oc, Some("myid".to_string()));
                assert!(json);
            }
            Commands::Amend { .. } => panic!("expected search"),
        }
    }

    #[test]
    fn test_resolve_oc_prefers_flag() {
        assert_eq!(resolve_oc(Some("flagged".to_string())), "flagged");
    }
}
