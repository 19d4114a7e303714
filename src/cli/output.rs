//! Shared CLI output helpers for consistent terminal output.
//!
//! Styling goes through `console`, which already respects NO_COLOR
//! and non-tty output.

use console::style;

/// Print a success message with checkmark (green).
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

/// Print an error message to stderr (red).
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}

/// Print a hint message (cyan).
pub fn hint(msg: &str) {
    println!("{} {}", style("→").cyan(), style(msg).cyan());
}

/// Print a dimmed/secondary message.
pub fn dimmed(msg: &str) {
    println!("{}", style(msg).dim());
}

/// Format a secret name in cyan for inline use.
pub fn key(k: &str) -> String {
    style(k).cyan().to_string()
}

/// Format a command string in green for inline use.
pub fn cmd(c: &str) -> String {
    style(c).green().to_string()
}
