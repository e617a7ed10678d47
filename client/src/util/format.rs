//! Display formatting for calculator results.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::Affix;

/// Smallest percentage rendered as a number; anything below shows as `<0.0001%`.
const MIN_VISIBLE_PERCENT: f64 = 0.0001;

/// Render a `[0, 100]` percentage with four decimals.
pub fn format_percent(percent: f64) -> String {
    if !percent.is_finite() {
        return "-".to_owned();
    }
    if percent > 0.0 && percent < MIN_VISIBLE_PERCENT {
        return "<0.0001%".to_owned();
    }
    format!("{percent:.4}%")
}

/// Group digits by thousands: `1234567` -> `"1,234,567"`.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Name of affix `id`, or `#id` when the list does not contain it.
pub fn affix_name(id: u32, affixes: &[Affix]) -> String {
    affixes
        .iter()
        .find(|affix| affix.id == id)
        .map_or_else(|| format!("#{id}"), |affix| affix.name.clone())
}

/// Names of a combination joined with the Chinese enumeration comma.
pub fn combination_label(ids: &[u32], affixes: &[Affix]) -> String {
    ids.iter()
        .map(|id| affix_name(*id, affixes))
        .collect::<Vec<_>>()
        .join("、")
}

/// `[1, 2, 3, 4]` -> `"1 / 2 / 3 / 4"`.
pub fn levels_label(levels: &[u8]) -> String {
    levels
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" / ")
}
