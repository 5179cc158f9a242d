//! Storefront CLI - run the storefront engines from the command line.
//!
//! Commands:
//! - `storefront countdown` - Time left until a promotion ends
//! - `storefront shipping` - Progress toward free shipping
//! - `storefront recommend` - Merge a recommendations payload
//! - `storefront page` - Render a product page from fixture files
//! - `storefront config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConfigArgs, CountdownArgs, PageArgs, RecommendArgs, ShippingArgs};

/// Storefront CLI - countdowns, shipping progress and recommendations
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the time left until a promotion expires
    Countdown(CountdownArgs),

    /// Show progress toward the free-shipping minimum
    Shipping(ShippingArgs),

    /// Merge recommended and best-selling products
    Recommend(RecommendArgs),

    /// Render a product page from fixture files
    Page(PageArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Config commands read the file themselves so they can report on or
    // replace a broken one.
    let config_path = cli.config.as_deref();
    let ctx = match &cli.command {
        Commands::Config(_) => context::Context::locate(config_path, output.clone()),
        _ => context::Context::load(config_path, output.clone()),
    };
    let ctx = match ctx {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Countdown(args) => commands::countdown::run(args, &ctx).await,
        Commands::Shipping(args) => commands::shipping::run(args, &ctx).await,
        Commands::Recommend(args) => commands::recommend::run(args, &ctx).await,
        Commands::Page(args) => commands::page::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
