//! Product page rendering from fixtures.

use anyhow::{Context as _, Result};
use chrono::Utc;

use storefront_pages::{
    InMemoryCommerce, InMemoryContent, LogFormat, LogLevel, LogSettings, ProductPage, Sources,
};

use super::PageArgs;
use crate::context::Context;

/// Run the page command.
pub async fn run(args: PageArgs, ctx: &Context) -> Result<()> {
    let commerce_path = ctx.resolve_path(&args.commerce);
    let commerce_json = std::fs::read_to_string(&commerce_path)
        .with_context(|| format!("Failed to read {}", commerce_path.display()))?;
    let commerce = InMemoryCommerce::from_json(&commerce_json)?;

    let content = match &args.content {
        Some(path) => {
            let path = ctx.resolve_path(path);
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str::<InMemoryContent>(&json)
                .with_context(|| format!("Failed to parse CMS fixture: {}", path.display()))?
        }
        None => InMemoryContent::new(),
    };

    let sources = Sources::new(&commerce, &content).with_logging(log_settings(ctx));
    let page = ProductPage::load(&sources, &args.handle, &ctx.config, Utc::now())
        .await
        .with_context(|| format!("Failed to load product page for {}", args.handle))?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "product": page.product,
            "countdown": page.countdown,
            "recommendations": page.recommendations,
            "html": page.render(),
        }));
        return Ok(());
    }

    println!("{}", page.render());
    Ok(())
}

/// Page loader logs follow the CLI's own flags: quiet unless `--verbose`,
/// JSON lines only with `--json`.
fn log_settings(ctx: &Context) -> LogSettings {
    LogSettings {
        request_id: None,
        min_level: if ctx.output.is_verbose() {
            LogLevel::Debug
        } else {
            LogLevel::Warn
        },
        format: if ctx.output.is_json() {
            LogFormat::Json
        } else {
            LogFormat::Human
        },
    }
}
