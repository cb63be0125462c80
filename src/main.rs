use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::{ArgAction, Parser};
use drawingpad::{
    Config,
    export::{ExportDependencies, ExportDestination, ExportManager, FileSaveConfig},
    input::InputState,
    script,
};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("DRAWINGPAD_GIT_HASH"),
    ")"
);

/// Longest we wait for the background export before giving up.
const EXPORT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Parser, Debug)]
#[command(name = "drawingpad")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Freehand drawing pad: replay stroke scripts and export them as PNG"
)]
struct Cli {
    /// JSON-lines script of pointer events and actions ("-" reads stdin)
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Directory the PNG is saved to (overrides [export].save_directory)
    #[arg(long, short = 'o', value_name = "DIR")]
    output: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..=8192))]
    width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..=8192))]
    height: Option<u32>,

    /// Hand the saved file to [export].share_command
    #[arg(long, action = ArgAction::SetTrue)]
    share: bool,

    /// Read configuration from FILE instead of ~/.config/drawingpad/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the example configuration to ~/.config/drawingpad/config.toml and exit
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "script")]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Wrote example configuration to {}", path.display());
        return Ok(());
    }

    let Some(script_path) = cli.script.as_deref() else {
        print_usage();
        return Ok(());
    };

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(width) = cli.width {
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        config.canvas.height = height;
    }

    let source = read_script(script_path)?;
    let steps = script::parse_script(&source)?;

    let mut state = InputState::from_config(&config);
    script::run_script(&mut state, &steps)?;

    let snapshot = state.snapshot().context("Failed to render canvas")?;

    let mut save_config = FileSaveConfig::from_config(&config.export);
    if let Some(dir) = cli.output {
        save_config.save_directory = dir;
    }

    let destination = if cli.share {
        if config.export.share_command.is_none() {
            log::warn!("--share given but [export].share_command is not set");
        }
        ExportDestination::FileAndShare
    } else {
        ExportDestination::FileOnly
    };

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let dependencies = ExportDependencies::with_share_command(config.export.share_command.clone());
    let manager = ExportManager::with_dependencies(runtime.handle(), dependencies);

    manager.request_export(snapshot, destination, save_config)?;
    let outcome = runtime
        .block_on(tokio::time::timeout(EXPORT_TIMEOUT, manager.wait_for_result()))
        .map_err(|_| anyhow!("Export did not finish within {:?}", EXPORT_TIMEOUT))?;

    println!("{}", outcome.message());
    if !outcome.is_success() {
        return Err(anyhow!("Export failed"));
    }
    Ok(())
}

fn read_script(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read script from stdin")?;
        return Ok(source);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))
}

fn print_usage() {
    println!("drawingpad: Freehand drawing pad with undo/redo and PNG export");
    println!();
    println!("Usage:");
    println!("  drawingpad SCRIPT [--output DIR] [--width N] [--height N] [--share]");
    println!("  drawingpad --init-config   Write an example config file");
    println!("  drawingpad --help          Show help");
    println!();
    println!("SCRIPT is a JSON-lines file (\"-\" for stdin), one command per line:");
    println!("  {{\"op\":\"color\",\"color\":\"red\"}}     or [r,g,b]");
    println!("  {{\"op\":\"brush\",\"size\":\"small\"}}     very-small, small, medium, large");
    println!("  {{\"op\":\"width\",\"width\":7.5}}");
    println!("  {{\"op\":\"down\",\"x\":10,\"y\":10}}   {{\"op\":\"move\",...}}");
    println!("  {{\"op\":\"up\"}}");
    println!("  {{\"op\":\"undo\"}}   {{\"op\":\"redo\"}}   {{\"op\":\"clear\"}}");
    println!();
    println!("Blank lines and lines starting with # are ignored.");
}
