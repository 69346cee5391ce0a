mod script;
mod sources;
mod text;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use overlay::config::OverlayConfig;
use overlay::engine::Session;
use overlay::error::{ConfigError, SessionError};
use overlay::persist::with_overlay_extension;

use crate::script::{Replay, ScriptError};
use crate::sources::{ImageFile, JsonNetworkFile};
use crate::text::TextSink;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("script: {0}")]
    Script(#[from] ScriptError),
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Parser, Debug)]
#[command(name = "netoverlay", about = "Annotate a water-distribution network with categorized points")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the bounds and drawing extent of a network.
    Bounds {
        #[arg(long, env = "NETOVERLAY_NETWORK")]
        network: PathBuf,
    },
    /// Apply a script of pointer, zoom and layer steps, then save the overlay.
    Replay(ReplayArgs),
    /// Print the computed scene for a network, image and overlay.
    Show(SourceArgs),
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Network JSON file.
    #[arg(long, env = "NETOVERLAY_NETWORK")]
    network: PathBuf,

    /// Background reference image.
    #[arg(long)]
    image: Option<PathBuf>,

    /// Previously saved overlay file to start from.
    #[arg(long)]
    overlay: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ReplayArgs {
    #[command(flatten)]
    sources: SourceArgs,

    /// JSON-lines script to apply.
    #[arg(long)]
    script: PathBuf,

    /// Where to save the overlay; `.inpx` is appended when missing.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let config = OverlayConfig::from_env()?;
    match cli.command {
        Command::Bounds { network } => run_bounds(config, &network),
        Command::Replay(args) => run_replay(config, &args),
        Command::Show(args) => run_show(config, &args),
    }
}

fn run_bounds(config: OverlayConfig, network: &Path) -> Result<(), CliError> {
    let mut session = Session::new(config);
    let bounds = session.load_network(&JsonNetworkFile, network)?;
    println!("min_x {}", bounds.min_x());
    println!("min_y {}", bounds.min_y());
    println!("width {}", bounds.width());
    println!("height {}", bounds.height());
    if let Some(mapper) = session.mapper() {
        let (width, height) = mapper.drawing_extent();
        println!("drawing {width} x {height}");
    }
    Ok(())
}

fn run_replay(config: OverlayConfig, args: &ReplayArgs) -> Result<(), CliError> {
    let mut session = open_session(config, &args.sources)?;
    let steps = script::parse(&read(&args.script)?)?;
    let mut replay = Replay::new(&config);
    let actions = replay.run(&mut session, &steps)?;

    let out = with_overlay_extension(&args.out);
    let text = session.save_overlay()?;
    fs::write(&out, text).map_err(|source| CliError::Io { path: out.clone(), source })?;
    println!(
        "{} steps, {} actions, {} elements saved to {}",
        steps.len(),
        actions.len(),
        session.store().len(),
        out.display()
    );
    Ok(())
}

fn run_show(config: OverlayConfig, args: &SourceArgs) -> Result<(), CliError> {
    let session = open_session(config, args)?;
    let mut sink = TextSink::default();
    session.render(&mut sink);
    print!("{}", sink.into_string());
    Ok(())
}

/// Load the network, then the optional image and overlay, in that order.
fn open_session(config: OverlayConfig, args: &SourceArgs) -> Result<Session, CliError> {
    let mut session = Session::new(config);
    session.load_network(&JsonNetworkFile, &args.network)?;
    if let Some(image) = &args.image {
        session.load_image(&ImageFile, image)?;
    }
    if let Some(overlay) = &args.overlay {
        session.load_overlay(&read(overlay)?)?;
    }
    Ok(session)
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io { path: path.to_path_buf(), source })
}
