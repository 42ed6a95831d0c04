//! postview - browse posts from a REST endpoint in the terminal
//!
//! Thin binary entry point: loads config, sets up tracing, mounts the post
//! list and hands it to the terminal UI or the plain printer.

use std::fs::OpenOptions;
use std::io::{self, IsTerminal, Write};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use postview_config::{ConfigManager, DebugConfig, PostviewConfig};
use postview_core::{HttpPostSource, MountedView, PostListView};
use postview_tui::{Labels, render_plain};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let mut config = load_config(&args)?;
    args.apply_overrides(&mut config);
    config
        .validate()
        .context("invalid command-line overrides")?;

    initialize_tracing(&config.debug, args.plain)?;

    let source = HttpPostSource::from_config(&config.source)?;
    tracing::debug!(endpoint = %source.endpoint(), plain = args.plain, "starting post list");
    let view = PostListView::new(Arc::new(source)).mount();

    if args.plain {
        let labels = Labels::from_config(&config.ui).without_hint();
        print_when_settled(view, &labels).await
    } else {
        let labels = Labels::from_config(&config.ui);
        postview_tui::run(view, labels, config.ui.tick_interval()).await
    }
}

fn load_config(args: &Cli) -> Result<PostviewConfig> {
    let manager = match &args.config {
        Some(path) if !path.exists() => {
            bail!("config file {} does not exist", path.display())
        }
        Some(path) => ConfigManager::load_from_path(path)?,
        None => ConfigManager::load()?,
    };
    Ok(manager.into_config())
}

async fn print_when_settled(mut view: MountedView, labels: &Labels) -> Result<()> {
    view.settled().await;
    let lines = render_plain(&view.snapshot(), labels);
    view.unmount();

    let mut stdout = io::stdout().lock();
    for line in lines {
        writeln!(stdout, "{line}").context("failed to write posts to stdout")?;
    }
    stdout.flush().context("failed to flush stdout")
}

/// `RUST_LOG` takes precedence over the `[debug]` section. While the
/// terminal UI owns the screen, logs only go to `debug.log_file`.
fn initialize_tracing(debug_config: &DebugConfig, plain: bool) -> Result<()> {
    let env_requested = std::env::var("RUST_LOG").is_ok();
    if !env_requested && !debug_config.enable_tracing {
        return Ok(());
    }

    let directive = debug_config.filter_directive();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directive));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match (&debug_config.log_file, plain) {
        (Some(path), _) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        (None, true) => builder
            .with_ansi(io::stderr().is_terminal())
            .with_writer(io::stderr)
            .try_init(),
        (None, false) => return Ok(()),
    };
    installed.map_err(|error| anyhow!("failed to initialize tracing: {error}"))?;

    tracing::info!(
        filter = %directive,
        level = debug_config.trace_level.as_str(),
        "debug tracing enabled"
    );
    Ok(())
}
