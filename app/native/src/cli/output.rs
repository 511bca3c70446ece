//! CLI output formatting utilities.
//!
//! Tables are built by each command with `tabled`; this module only holds the
//! JSON highlighter shared by all of them.

use std::fmt::Write as _;

use colored::Colorize;

/// Prints JSON with syntax highlighting.
///
/// Colors:
/// - Keys: Cyan
/// - Strings: Green
/// - Numbers: Yellow
/// - Booleans/Null: Magenta
/// - Punctuation: White
pub fn print_highlighted_json(value: &serde_json::Value) {
    let json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    println!("{}", highlight_json(&json));
}

/// Colors a pretty-printed JSON document.
///
/// The input is assumed to be valid JSON; anything the scanner does not
/// recognize is copied through unchanged.
#[must_use]
pub fn highlight_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len() * 2);
    let mut chars = json.chars().peekable();
    let mut after_colon = false;

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                let mut literal = String::from('"');
                let mut escaped = false;
                for c in chars.by_ref() {
                    literal.push(c);
                    match c {
                        _ if escaped => escaped = false,
                        '\\' => escaped = true,
                        '"' => break,
                        _ => {}
                    }
                }
                let colored = if after_colon { literal.green() } else { literal.cyan() };
                let _ = write!(out, "{colored}");
                after_colon = false;
            }
            ':' => {
                let _ = write!(out, "{}", ":".white());
                after_colon = true;
            }
            ',' => {
                let _ = write!(out, "{}", ",".white());
                after_colon = false;
            }
            '{' | '}' | '[' | ']' => {
                let _ = write!(out, "{}", ch.to_string().white().bold());
                after_colon = false;
            }
            c if c.is_whitespace() => out.push(c),
            c => {
                let mut scalar = String::from(c);
                while let Some(&next) = chars.peek() {
                    if next == ',' || next.is_whitespace() || matches!(next, '}' | ']') {
                        break;
                    }
                    scalar.push(next);
                    chars.next();
                }
                let _ = write!(out, "{}", color_scalar(&scalar));
                after_colon = false;
            }
        }
    }

    out
}

fn color_scalar(value: &str) -> String {
    match value {
        "true" | "false" | "null" => value.magenta().to_string(),
        _ if value.parse::<f64>().is_ok() => value.yellow().to_string(),
        _ => value.to_string(),
    }
}
