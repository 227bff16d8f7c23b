//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: names, hints
//! - Bold: headers, important values
//! - Dimmed: secondary info

use colored::Colorize;
use std::fmt::Display;

const RULE_WIDTH: usize = 50;

/// Width names are padded to in per-item lines.
const NAME_WIDTH: usize = 20;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ repository created`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", "✓".green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ repository acme/demo not found`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "✗".red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message (yellow).
///
/// Example: `⚠ no environments found`
pub fn warn(msg: &str) {
    if colors_enabled() {
        println!("{} {}", "⚠".yellow(), msg);
    } else {
        println!("⚠ {}", msg);
    }
}

/// Print a hint message (cyan).
///
/// Example: `→ set GITHUB_TOKEN in your environment or .env`
pub fn hint(msg: &str) {
    if colors_enabled() {
        println!("{} {}", "→".cyan(), msg.cyan());
    } else {
        println!("→ {}", msg);
    }
}

/// Print a bold section header.
pub fn header(title: &str) {
    if colors_enabled() {
        println!("{}", title.bold());
    } else {
        println!("{}", title);
    }
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  organization  acme`
pub fn kv(label: &str, value: impl Display) {
    if colors_enabled() {
        println!("  {}  {}", label.dimmed(), value.to_string().bold());
    } else {
        println!("  {}  {}", label, value);
    }
}

/// Print a list item with bullet.
///
/// Example: `  • demo (private)`
pub fn list_item(item: &str) {
    println!("  • {}", item);
}

/// Print a horizontal rule separator.
pub fn rule() {
    if colors_enabled() {
        println!("{}", "─".repeat(RULE_WIDTH).dimmed());
    } else {
        println!("{}", "─".repeat(RULE_WIDTH));
    }
}

/// Print a section header with a separator line.
///
/// Example:
/// ```text
/// Configuration Summary
/// ──────────────────────────────────────────────────
/// ```
pub fn section(title: &str) {
    println!();
    header(title);
    rule();
}

/// Print a dimmed/secondary message.
pub fn dimmed(msg: &str) {
    if colors_enabled() {
        println!("{}", msg.dimmed());
    } else {
        println!("{}", msg);
    }
}

/// Print raw data to stdout (no formatting).
pub fn data(msg: &str) {
    println!("{}", msg);
}

/// Format a name in cyan.
pub fn key(k: &str) -> String {
    if colors_enabled() {
        k.cyan().to_string()
    } else {
        k.to_string()
    }
}

/// Print a successful per-item line.
///
/// Example: `  ✓ SLACK_TOKEN          [created] (has value)`
pub fn item_ok(name: &str, tag: impl Display, detail: &str) {
    let name = format!("{:<width$}", name, width = NAME_WIDTH);
    if colors_enabled() {
        println!(
            "  {} {} [{}] ({})",
            "✓".green(),
            name,
            tag.to_string().bold(),
            detail.dimmed()
        );
    } else {
        println!("  ✓ {} [{}] ({})", name, tag, detail);
    }
}

/// Print a failed per-item line to stderr.
///
/// Example: `  ✗ SLACK_TOKEN          [failed: request failed]`
pub fn item_failed(name: &str, reason: impl Display) {
    let name = format!("{:<width$}", name, width = NAME_WIDTH);
    if colors_enabled() {
        eprintln!("  {} {} [{}]", "✗".red(), name, format!("failed: {}", reason).red());
    } else {
        eprintln!("  ✗ {} [failed: {}]", name, reason);
    }
}

/// Join names for a summary line, or `none` when there are none.
pub fn names_or_none<'a, I>(names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let joined = names.into_iter().collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "none".to_string()
    } else {
        joined
    }
}
