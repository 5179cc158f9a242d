//! Recommendation merge command.

use anyhow::{Context as _, Result};

use storefront_core::ids::ProductId;
use storefront_core::recommendations::RecommendationResponse;

use super::RecommendArgs;
use crate::context::Context;

/// Run the recommend command.
pub async fn run(args: RecommendArgs, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(&args.file);
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let response: RecommendationResponse = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse recommendations: {}", path.display()))?;

    let limit = args.limit.or(ctx.config.recommendations.limit);
    let merged = response
        .merge(&ProductId::new(args.exclude.as_str()), limit)
        .context("Nothing to recommend")?;

    if ctx.output.is_json() {
        ctx.output.json(&merged);
        return Ok(());
    }

    ctx.output.header(&format!("You may also like ({})", merged.len()));
    if merged.is_empty() {
        ctx.output.info("No products left after excluding the current one");
    }
    for product in &merged {
        ctx.output.list_item(&format!(
            "{} {} {}",
            product.id,
            product.title,
            product.price.display()
        ));
    }

    Ok(())
}
