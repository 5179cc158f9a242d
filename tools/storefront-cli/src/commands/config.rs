//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};

use storefront_core::config::default_config_toml;
use storefront_core::StorefrontConfig;

use super::{ConfigArgs, ConfigCommand};
use crate::config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let effective = match &ctx.config_path {
        Some(path) => config::load(path)?,
        None => StorefrontConfig::default(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&effective);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let rendered = config::render(&effective, std::path::Path::new("storefront.toml"))?;
    println!("\n{}", rendered);

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("storefront.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, default_config_toml())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    let Some(path) = &ctx.config_path else {
        ctx.output.warn("No config file found, using defaults");
        return Ok(());
    };

    config::load(path)?;
    ctx.output.success(&format!("{} is valid", path.display()));

    Ok(())
}
