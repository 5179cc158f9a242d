//! Free-shipping progress command.

use anyhow::{Context as _, Result};

use storefront_core::shipping::compute_progress;
use storefront_core::Money;

use super::ShippingArgs;
use crate::context::Context;

/// Run the shipping command.
pub async fn run(args: ShippingArgs, ctx: &Context) -> Result<()> {
    let total = Money::parse(&args.total, &args.currency)
        .with_context(|| format!("Invalid --total: {} {}", args.total, args.currency))?;

    let minimum = match &args.minimum {
        Some(minimum) => Money::parse(minimum, &args.currency)
            .with_context(|| format!("Invalid --minimum: {}", minimum))?,
        None => ctx.config.shipping.minimum_for(total.currency),
    };
    ctx.output.debug(&format!("Free shipping minimum {}", minimum.display()));

    let progress = compute_progress(&total, &minimum)?;

    if ctx.output.is_json() {
        ctx.output.json(&progress);
        return Ok(());
    }

    ctx.output.header("Free shipping");
    ctx.output.kv("cart total", &total.display());
    ctx.output.kv("minimum", &minimum.display());

    if progress.qualifies {
        ctx.output.success("Qualifies for Free Express Shipping");
    } else {
        ctx.output.percent_bar(
            progress.percent,
            &format!("{} to go ({})", progress.amount_remaining.display(), progress.bar_width()),
        );
    }

    Ok(())
}
