//! Jenkinsfile Language Server entry point.

use anyhow::Result;
use clap::Parser;
use tower_lsp::{LspService, Server};
use tracing_subscriber::EnvFilter;

use jenkinsfile_lsp::{JenkinsfileLanguageServer, keywords};

#[derive(Parser)]
#[command(name = "jenkinsfile-lsp")]
#[command(author, version, about = "Jenkinsfile Language Server", long_about = None)]
struct Cli {
    /// Communicate over stdin/stdout (the only supported transport)
    #[arg(long)]
    stdio: bool,

    /// Log filter directive, e.g. `debug` or `jenkinsfile_lsp=trace`.
    /// Overrides RUST_LOG.
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match &cli.log_level {
        Some(directive) => EnvFilter::try_new(directive)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    // Logs go to stderr, stdout carries the protocol
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    tracing::info!(
        "Starting Jenkinsfile Language Server ({} keywords)",
        keywords::names().len()
    );
    if !cli.stdio {
        tracing::debug!("No transport flag given, using stdio");
    }

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(JenkinsfileLanguageServer::new);
    Server::new(stdin, stdout, socket).serve(service).await;
    Ok(())
}
