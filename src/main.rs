use anyhow::Context;
use clap::{Parser, Subcommand};
use grapevine_core::config::Config;
use grapevine_core::{export, Message, Pipeline};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "grapevine", about = "Grapevine — categorise exported chat transcripts")]
struct Cli {
    /// Log at debug level (RUST_LOG still wins when set).
    #[arg(long, global = true)]
    debug: bool,

    /// Write logs to this file instead of stderr (tail -f to inspect).
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Config file layered over the built-in defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan transcripts, classify every message, and write the result.
    Parse {
        /// Transcript directory (defaults to `[scan] root`).
        #[arg(long)]
        root: Option<PathBuf>,
        /// Output file; `.js` gets the script wrapper, anything else JSON.
        #[arg(long, short, default_value = "data.js")]
        output: PathBuf,
    },
    /// Classify once, then serve the result over HTTP.
    Serve {
        #[arg(long)]
        root: Option<PathBuf>,
        #[arg(long, short, default_value_t = 8080)]
        port: u16,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug, cli.log_file.as_deref())?;

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Parse { root, output } => {
            let messages = classify(&config, root)?;
            export::write(&output, &messages, &config.export.js_variable)
                .with_context(|| format!("exporting to {}", output.display()))?;
            Ok(())
        }
        Command::Serve { root, port } => {
            let messages = classify(&config, root)?;
            tokio::runtime::Runtime::new()?.block_on(grapevine::serve::serve(messages, port))
        }
    }
}

fn classify(config: &Config, root: Option<PathBuf>) -> anyhow::Result<Vec<Message>> {
    let root = root.unwrap_or_else(|| config.scan.root.clone());
    let transcripts = grapevine_feeds::load(&root, &config.scan.extension)?;

    let mut pipeline = Pipeline::new(config);
    let messages = pipeline.run(transcripts.iter().map(|t| (&t.group, &t.text)));
    tracing::info!(
        files = transcripts.len(),
        messages = messages.len(),
        "processed {} files, extracted {} messages",
        transcripts.len(),
        messages.len()
    );
    Ok(messages)
}

fn init_tracing(debug: bool, log_file: Option<&Path>) -> anyhow::Result<()> {
    let default_level = if debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .with_env_filter(filter)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(filter)
                .init();
        }
    }
    Ok(())
}
