//! Output formatting for the CLI.

use console::{style, Term};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use storefront_core::countdown::{DigitVisibility, Remaining};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    term: Term,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            verbose,
            json,
            term: Term::stdout(),
        }
    }

    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Replace the previously redrawn line with `line`.
    pub fn redraw(&self, line: &str, first: bool) -> std::io::Result<()> {
        if !first {
            self.term.clear_last_lines(1)?;
        }
        self.term.write_line(line)
    }

    /// Draw a static bar filled to `percent` (0-100).
    pub fn percent_bar(&self, percent: f64, msg: &str) {
        if self.json {
            return;
        }

        let bar = ProgressBar::with_draw_target(Some(100), ProgressDrawTarget::stdout());
        if let Ok(bar_style) = ProgressStyle::default_bar().template("  [{bar:40.cyan/blue}] {msg}") {
            bar.set_style(bar_style.progress_chars("#>-"));
        }
        bar.set_message(msg.to_string());
        bar.set_position(percent.round().clamp(0.0, 100.0) as u64);
        bar.abandon();
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Format a countdown as "1d 02h 03m 04s". A hidden seconds digit is
/// dimmed so the terminal blinks like the storefront does.
pub fn format_remaining(remaining: &Remaining, visibility: DigitVisibility) -> String {
    let seconds = format!("{:02}s", remaining.seconds);
    let seconds = match visibility {
        DigitVisibility::Visible => seconds,
        DigitVisibility::Transparent => style(seconds).dim().to_string(),
    };
    format!(
        "{}d {:02}h {:02}m {}",
        remaining.days, remaining.hours, remaining.minutes, seconds
    )
}
