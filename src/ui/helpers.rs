//! Small formatting helpers shared by the screen renderers.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate to a display width, appending "..." when cut.
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str("...");
    out
}

/// Format a price with two decimals and a dollar sign.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Star rating like "4.7*".
pub fn format_rating(rating: f64) -> String {
    format!("{:.1}*", rating)
}
