mod cli;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use cli::{Cli, OutputFormat};
use learnpath::config::Config;
use learnpath::render::{render_json, render_text};
use learnpath::LearnPath;

/// `RUST_LOG` when set, otherwise `warn`; `-v` adds a global `debug` directive on top.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let base = rust_log
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));
    if verbose { base.add_directive(LevelFilter::DEBUG.into()) } else { base }
}

fn setup_logging(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(log_filter(verbose, rust_log.as_deref()))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    let request = cli.resolve(&mut config);
    if let Err((kind, msg)) = cli::validate(&config, &request) {
        Cli::command().error(kind, msg).exit();
    }
    tracing::debug!("plan request: {:?}", request);

    let generator = LearnPath::from_config(&config)?;
    let plan = generator.generate(&request).await;

    match cli.format {
        OutputFormat::Json => println!("{}", render_json(&plan)?),
        OutputFormat::Text => print!("{}", render_text(&plan, !cli.no_table)),
    }
    Ok(())
}
