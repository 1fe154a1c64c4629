//! Horizontal bar charts for top-entity rankings.

use history_core::formatting::format_number;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Configuration controlling visual appearance of a bar chart.
pub struct ChartConfig {
    /// Width in terminal columns of the longest bar.
    pub max_bar_width: u16,
    /// Maximum width of the label column; longer labels are truncated.
    pub max_label_width: u16,
    /// Character used to draw the bars.
    pub bar_char: char,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            max_bar_width: 40,
            max_label_width: 30,
            bar_char: '\u{2588}', // █  FULL BLOCK
        }
    }
}

/// Render `entries` as a horizontal bar chart.
///
/// One row per entry, in the given order, so a count-descending ranking puts
/// the highest bar at the top. Bars are scaled to the largest count, every
/// nonzero count draws at least one block, and the play count is printed as
/// a value label after each bar. Labels are padded to a common display width.
pub fn render_bar_chart(title: &str, entries: &[(String, u64)], config: &ChartConfig) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(title.width()));
    out.push('\n');

    if entries.is_empty() {
        out.push_str("(no data)\n");
        return out;
    }

    let max_count = entries.iter().map(|(_, c)| *c).max().unwrap_or(1).max(1);
    let label_width = entries
        .iter()
        .map(|(label, _)| display_label(label).width())
        .max()
        .unwrap_or(0)
        .min(config.max_label_width as usize);

    for (label, count) in entries {
        let label = truncate_to_width(&display_label(label), config.max_label_width as usize);
        let pad = label_width.saturating_sub(label.width());

        let bar_len = scaled_bar_len(*count, max_count, config.max_bar_width);
        let bar: String = std::iter::repeat_n(config.bar_char, bar_len).collect();

        out.push_str(&label);
        out.push_str(&" ".repeat(pad));
        out.push_str("  ");
        out.push_str(&bar);
        out.push(' ');
        out.push_str(&format_number(*count as f64, 0));
        out.push('\n');
    }

    out
}

/// Bar length in columns for `count` against `max_count`.
///
/// Nonzero counts always draw at least one block.
fn scaled_bar_len(count: u64, max_count: u64, max_width: u16) -> usize {
    if count == 0 {
        return 0;
    }
    let scaled = (count as f64 / max_count as f64 * max_width as f64).round() as usize;
    scaled.max(1)
}

/// Substitute a placeholder for empty labels so rows stay readable.
fn display_label(label: &str) -> String {
    if label.is_empty() {
        "(unknown)".to_string()
    } else {
        label.to_string()
    }
}

/// Truncate `s` to at most `max_width` display columns, appending an
/// ellipsis when anything was cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        used += w;
    }
    result.push('…');
    result
}

// ── Tests ─────────────────────────────────────────────────────────────────────
