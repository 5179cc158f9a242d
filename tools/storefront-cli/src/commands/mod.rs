//! CLI command implementations.

pub mod config;
pub mod countdown;
pub mod page;
pub mod recommend;
pub mod shipping;

use clap::{Args, Subcommand};

/// Arguments for the countdown command.
#[derive(Args)]
pub struct CountdownArgs {
    /// Promotion end (RFC 3339 or YYYY-MM-DD).
    #[arg(short, long)]
    pub target: String,

    /// Evaluate at this instant instead of the current time.
    #[arg(long, conflicts_with = "watch")]
    pub now: Option<String>,

    /// Keep ticking once per second until the promotion ends.
    #[arg(short, long)]
    pub watch: bool,
}

/// Arguments for the shipping command.
#[derive(Args)]
pub struct ShippingArgs {
    /// Cart total as a decimal amount (e.g. 40.00).
    #[arg(short, long)]
    pub total: String,

    /// ISO currency code of the cart.
    #[arg(short, long, default_value = "GBP")]
    pub currency: String,

    /// Override the configured free-shipping minimum.
    #[arg(short, long)]
    pub minimum: Option<String>,
}

/// Arguments for the recommend command.
#[derive(Args)]
pub struct RecommendArgs {
    /// JSON file with `recommended` and `additional` product lists.
    #[arg(short, long)]
    pub file: String,

    /// Id of the product being viewed.
    #[arg(short, long)]
    pub exclude: String,

    /// Cap on the merged list (defaults to the configured limit).
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the page command.
#[derive(Args)]
pub struct PageArgs {
    /// Product handle to render.
    pub handle: String,

    /// Commerce fixture (JSON).
    #[arg(long)]
    pub commerce: String,

    /// CMS fixture (JSON).
    #[arg(long)]
    pub content: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Write a default storefront.toml.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
