//! Derived metrics computed from the raw repository facts

use std::collections::BTreeMap;

use crate::client::models::LanguageBytes;

/// Language name to share of total bytes, in percent
pub type LanguagePercentages = BTreeMap<String, f64>;

/// Key used when no language data is available
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Share of each language in the total byte count, rounded to two decimals.
///
/// The total is taken over the raw byte counts before rounding. An empty map
/// or a zero total yields exactly `{"Unknown": 100.0}`.
pub fn language_percentages(bytes: &LanguageBytes) -> LanguagePercentages {
    let total: u64 = bytes.values().sum();
    if total == 0 {
        return BTreeMap::from([(UNKNOWN_LANGUAGE.to_string(), 100.0)]);
    }

    bytes
        .iter()
        .map(|(language, count)| {
            let share = *count as f64 / total as f64 * 100.0;
            (language.clone(), round2(share))
        })
        .collect()
}

/// Language with the largest byte count.
///
/// Ties go to the alphabetically first language. Falls back to the
/// provider-reported language, then to "Unknown".
pub fn primary_language<'a>(bytes: &'a LanguageBytes, reported: Option<&'a str>) -> &'a str {
    bytes
        .iter()
        .filter(|(_, count)| **count > 0)
        .fold(None, |best: Option<(&String, u64)>, (language, count)| match best {
            Some((_, best_count)) if best_count >= *count => best,
            _ => Some((language, *count)),
        })
        .map(|(language, _)| language.as_str())
        .or(reported.filter(|r| !r.is_empty()))
        .unwrap_or(UNKNOWN_LANGUAGE)
}

/// Format a count with comma thousands separators (`1234567` -> `1,234,567`)
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
