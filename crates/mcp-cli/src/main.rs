//! MCP CLI - Submit envelopes to the demo services
//!
//! Thin client over `/mcp/financial-summary` and `/mcp/clinical-advice`.

mod api;
mod config;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use api::{
    request_id_or_new, ClinicalAdviceRequest, FinancialSummaryRequest, McpClient, McpResponse,
};
use config::Config;

#[derive(Parser)]
#[command(name = "mcp-cli")]
#[command(about = "MCP CLI - Query the financial and clinical demo services", long_about = None)]
#[command(version)]
struct Cli {
    /// Server base URL (overrides config file)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate balances, transactions, and portfolio for a user
    FinancialSummary {
        /// User ID (server defaults to user_001 when omitted)
        #[arg(short, long)]
        user_id: Option<String>,
        /// Correlation id (random UUID when omitted)
        #[arg(short, long)]
        request_id: Option<String>,
        /// Action label sent with the envelope
        #[arg(short, long)]
        action: Option<String>,
    },

    /// Guidelines for each of a patient's conditions
    ClinicalAdvice {
        /// Patient ID
        #[arg(short, long)]
        patient_id: String,
        /// Correlation id (random UUID when omitted)
        #[arg(short, long)]
        request_id: Option<String>,
        /// Action label sent with the envelope
        #[arg(short, long)]
        action: Option<String>,
    },

    /// Check that the server is reachable
    Health,

    /// Show or update configuration
    Config {
        /// Persist a new base URL
        #[arg(long)]
        set_base_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::FinancialSummary {
            user_id,
            request_id,
            action,
        } => {
            let config = Config::load()?;
            let client = McpClient::new(cli.base_url.as_deref().unwrap_or(&config.base_url));
            let req = FinancialSummaryRequest {
                request_id: request_id_or_new(request_id),
                action: action.unwrap_or_else(|| config.default_action.clone()),
                user_id: user_id.or(config.default_user_id),
            };
            let resp = client.financial_summary(&req).await?;
            print_response(&req.request_id, &resp)
        }
        Commands::ClinicalAdvice {
            patient_id,
            request_id,
            action,
        } => {
            let config = Config::load()?;
            let client = McpClient::new(cli.base_url.as_deref().unwrap_or(&config.base_url));
            let req = ClinicalAdviceRequest {
                request_id: request_id_or_new(request_id),
                action: action.unwrap_or(config.default_action),
                patient_id,
            };
            let resp = client.clinical_advice(&req).await?;
            print_response(&req.request_id, &resp)
        }
        Commands::Health => cmd_health(cli.base_url).await,
        Commands::Config { set_base_url } => cmd_config(set_base_url),
    }
}

fn print_response(sent_request_id: &str, resp: &McpResponse) -> Result<()> {
    if resp.request_id != sent_request_id {
        bail!(
            "Correlation mismatch: sent '{}', received '{}'",
            sent_request_id,
            resp.request_id
        );
    }

    if let Some(error) = resp.error() {
        eprintln!("{} {}", "✗".red(), error);
    } else {
        eprintln!("{} {}", "✓".green(), resp.request_id.dimmed());
    }

    // Pretty JSON to stdout (clean for piping)
    println!("{}", serde_json::to_string_pretty(resp)?);

    Ok(())
}

async fn cmd_health(base_url: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let base_url = base_url.unwrap_or(config.base_url);
    let client = McpClient::new(&base_url);

    match client.health().await {
        Ok(true) => println!("{} {} is up", "✓".green(), base_url.cyan()),
        Ok(false) => bail!("{} responded with an error status", base_url),
        Err(e) => bail!("Could not reach {}: {}", base_url, e),
    }

    Ok(())
}

fn cmd_config(set_base_url: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(url) = set_base_url {
        config.base_url = url;
        config.save()?;
        println!("{} Base URL set to '{}'", "✓".green(), config.base_url);
    }

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    println!("  Default Action: {}", config.default_action);
    println!(
        "  Default User: {}",
        config.default_user_id.as_deref().unwrap_or("None").cyan()
    );

    Ok(())
}
