use anyhow::Context;
use clap::Parser;
use nickgen::Config;
use std::io;
use tracing_subscriber::EnvFilter;

/// Appends batches of random nicknames to `result`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Read both word pools from `dictionary` instead of `beginning` and `middle`
    #[arg(short = 'o', long)]
    one_dict: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = if cli.one_dict {
        Config::one_dict()
    } else {
        Config::default()
    };

    nickgen::run(&config, io::stdin().lock(), io::stdout().lock())
        .context("nickname generation failed")?;
    Ok(())
}
