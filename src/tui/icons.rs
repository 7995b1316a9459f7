//! Icon key → glyph mapping.
//!
//! Single-cell symbols keep the column math honest (no double-width
//! surprises). Unknown keys resolve to a generic glyph, never an error.

pub fn glyph(key: &str) -> &'static str {
    match key {
        "user" => "◉",
        "briefcase" => "▣",
        "folder" => "▤",
        "globe" => "◍",
        "pencil" => "✎",
        "gear" => "⚙",
        "brain" => "✦",
        "cloud" => "☁",
        "users" => "◎",
        "refresh" => "↻",
        "theme" => "◩",
        _ => "•",
    }
}
