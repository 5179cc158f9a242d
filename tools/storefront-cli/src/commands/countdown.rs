//! Promotion countdown command.

use anyhow::{Context as _, Result};
use chrono::Utc;
use serde::Serialize;

use storefront_core::countdown::{parse_promotion_expiry, CountdownTick, CountdownTimer, SystemClock};

use super::CountdownArgs;
use crate::context::Context;
use crate::output::format_remaining;

#[derive(Serialize)]
struct CountdownReport {
    target: String,
    #[serde(flatten)]
    tick: CountdownTick,
    expired: bool,
}

/// Run the countdown command.
pub async fn run(args: CountdownArgs, ctx: &Context) -> Result<()> {
    let target = parse_promotion_expiry(&args.target)
        .with_context(|| format!("Invalid --target: {}", args.target))?;

    if args.watch {
        return watch(target, ctx).await;
    }

    let now = match &args.now {
        Some(now) => parse_promotion_expiry(now).with_context(|| format!("Invalid --now: {}", now))?,
        None => Utc::now(),
    };
    let tick = CountdownTick::at(Some(target), now);

    if ctx.output.is_json() {
        ctx.output.json(&CountdownReport {
            target: target.to_rfc3339(),
            tick,
            expired: tick.remaining.is_expired(),
        });
        return Ok(());
    }

    ctx.output.header(&format!("Promotion ends {}", target.to_rfc3339()));
    if tick.remaining.is_expired() {
        ctx.output.warn("Promotion has ended");
    }
    ctx.output.kv("remaining", &format_remaining(&tick.remaining, tick.visibility));

    Ok(())
}

async fn watch(target: chrono::DateTime<Utc>, ctx: &Context) -> Result<()> {
    let timer = CountdownTimer::start(Some(target), SystemClock);
    let mut ticks = timer.subscribe();
    let mut first = true;

    loop {
        let tick = *ticks.borrow_and_update();
        if ctx.output.is_json() {
            println!("{}", serde_json::to_string(&tick)?);
        } else {
            ctx.output
                .redraw(&format_remaining(&tick.remaining, tick.visibility), first)
                .context("Failed to write to terminal")?;
        }
        first = false;

        if tick.remaining.is_expired() {
            break;
        }

        tokio::select! {
            changed = ticks.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    if timer.current().remaining.is_expired() {
        ctx.output.success("Promotion has ended");
    }

    Ok(())
}
