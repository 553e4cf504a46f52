//! Display formatting shared by the TUI and the `list` command.

use chrono::{DateTime, Utc};

/// Currency symbol prefixed to every price.
pub const RUPEE: char = '₹';

/// Tags shown before the rest are summarized as "+N more".
pub const MAX_VISIBLE_TAGS: usize = 3;

/// Formats whole rupees with Indian digit grouping.
///
/// The last three digits form one group and every two digits before them
/// form another.
///
/// # Examples
///
/// ```
/// use pm_core::format::format_inr;
///
/// assert_eq!(format_inr(999), "₹999");
/// assert_eq!(format_inr(123_456), "₹1,23,456");
/// assert_eq!(format_inr(10_000_000), "₹1,00,00,000");
/// ```
#[must_use]
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    let len = digits.len();

    let mut out = String::with_capacity(len + len / 2 + RUPEE.len_utf8());
    out.push(RUPEE);

    if len <= 3 {
        out.push_str(&digits);
        return out;
    }

    let (head, tail) = digits.split_at(len - 3);
    for (i, ch) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push(',');
    out.push_str(tail);
    out
}

/// Formats a timestamp as a short date, e.g. `15 Jan 2024`.
#[must_use]
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%-d %b %Y").to_string()
}

/// Returns the label for a product's active flag.
#[must_use]
pub const fn status_label(is_active: bool) -> &'static str {
    if is_active { "Active" } else { "Inactive" }
}

/// Splits tags into the ones to show and the count of hidden ones.
///
/// # Examples
///
/// ```
/// use pm_core::format::visible_tags;
///
/// let tags = ["a", "b", "c", "d", "e"].map(String::from);
/// let (shown, hidden) = visible_tags(&tags);
/// assert_eq!(shown.len(), 3);
/// assert_eq!(hidden, 2);
/// ```
#[must_use]
pub fn visible_tags(tags: &[String]) -> (&[String], usize) {
    let shown = tags.len().min(MAX_VISIBLE_TAGS);
    (&tags[..shown], tags.len() - shown)
}

/// Truncates `text` to at most `max` characters, ending with `…` when cut.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_owned();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push('…');
    out
}
