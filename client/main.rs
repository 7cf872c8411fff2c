#![forbid(unsafe_code)]

//! `mcp-demos-client` — runs the scripted demo against each MCP server.
//!
//! Each scenario spawns its server as a child process, talks to it over
//! stdio, and prints a transcript to stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use mcp_demos::driver::Driver;
use mcp_demos::logging::{init_tracing, LogFormat};
use mcp_demos::{AppError, ClientConfig, Result, ServerKind};

#[derive(Debug, Parser)]
#[command(
    name = "mcp-demos-client",
    about = "Scripted client for the MCP demo servers",
    version,
    long_about = None
)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Server binary to launch instead of the sibling `mcp-demos`.
    #[arg(long)]
    server_bin: Option<PathBuf>,

    /// Run only these scenarios; repeat to select several.
    #[arg(long, value_enum)]
    scenario: Vec<ServerKind>,

    /// Log output format (text or json).
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

fn main() -> ExitCode {
    let args = Cli::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "demo run failed");
            eprintln!("❌ 测试失败: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cli) -> Result<()> {
    init_tracing(args.log_format)?;

    let config = match &args.config {
        Some(path) => ClientConfig::load_from_path(path)?,
        None => ClientConfig::default(),
    };
    let driver = Driver::new(config, args.server_bin);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::Config(format!("failed to build tokio runtime: {err}")))?;

    let mut stdout = std::io::stdout();
    runtime.block_on(driver.run(&args.scenario, &mut stdout))
}
