// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log_indicators::utils::logging::format_info;
use log_indicators::{Config, IndicatorExtractor, Validator, mcp::LogIndicatorsMcp};
use rmcp::ServiceExt;
use std::io::Read;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "log_indicators")]
#[command(version = "0.1.0")]
#[command(about = "Deterministic indicator extraction for security log analysis", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract indicators from a log file (or stdin) and print them as JSON
    Extract {
        /// Log file to read; stdin when omitted
        file: Option<PathBuf>,

        /// Inline log text instead of a file
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,

        #[arg(short, long)]
        pretty: bool,
    },

    /// Show the active keyword vocabulary
    Vocabulary,

    /// Start MCP (Model Context Protocol) server for agentic tool integration
    Mcp {
        #[arg(long, default_value = "stdio")]
        transport: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    log_indicators::utils::logging::init_logger(cli.color, cli.verbose);

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Extract { file, text, pretty } => {
            cmd_extract(&config, file, text, pretty)?;
        }
        Commands::Vocabulary => {
            cmd_vocabulary(&config);
        }
        Commands::Mcp { transport } => {
            cmd_mcp(&config, &transport).await?;
        }
    }

    Ok(())
}

fn cmd_extract(
    config: &Config,
    file: Option<PathBuf>,
    text: Option<String>,
    pretty: bool,
) -> Result<()> {
    let log_text = if let Some(text) = text {
        text
    } else if let Some(path) = file {
        info!("Reading log text from {}", path.display());
        Validator::read_log_file(&path)?
    } else {
        info!("Reading log text from stdin");
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .context("Failed to read stdin")?;
        Validator::decode_log_bytes(bytes)?
    };

    let extractor = IndicatorExtractor::new(&config.extraction.keywords)?;
    let set = extractor.extract(&log_text);

    info!(
        "Extracted {} distinct indicators across {} categories",
        set.total(),
        6
    );

    let json = if pretty {
        serde_json::to_string_pretty(&set)?
    } else {
        serde_json::to_string(&set)?
    };

    println!("{}", json);

    Ok(())
}

fn cmd_vocabulary(config: &Config) {
    println!(
        "{}",
        format_info(&format!(
            "Keyword vocabulary ({} entries, case-insensitive):",
            config.extraction.keywords.len()
        ))
    );

    for keyword in &config.extraction.keywords {
        println!("  - {}", keyword);
    }
}

async fn cmd_mcp(config: &Config, transport: &str) -> Result<()> {
    info!("Starting MCP server (transport: {})", transport);

    if transport != "stdio" {
        return Err(anyhow::anyhow!("Unsupported transport: {}", transport));
    }

    let mcp_server = LogIndicatorsMcp::new(config.clone());

    info!("MCP server ready. Available tools:");
    for tool in mcp_server.get_tool_router().list_all() {
        info!(
            "  - {}: {}",
            tool.name,
            tool.description.as_deref().unwrap_or("No description")
        );
    }

    info!("Starting stdio transport...");
    let service = mcp_server.serve(rmcp::transport::stdio()).await?;
    service.waiting().await?;

    Ok(())
}
