//! Release-date helpers
//!
//! Release dates are stored as compact partial strings (`YYYY`, `YYYYMM`,
//! `YYYYMMDD`) and compared as integers. No calendar validation happens
//! here; the validator checks the shape before a record is committed.

use regex::Regex;
use std::sync::OnceLock;

/// Sort key consumers use when records with no release date should order
/// last instead of first.
pub const UNKNOWN_LAST: u32 = 99_999_999;

/// Turn an optional partial date into a sortable integer key.
///
/// Absent or empty input keys to `0`, so unknown dates sort first by
/// default; pair with [`UNKNOWN_LAST`] for the opposite policy. Non-empty
/// input is right-padded with `0` to eight digits and parsed, so `"2024"`
/// keys as `20240000`.
pub fn release_sort_key(date: Option<&str>) -> u32 {
    match date {
        Some(date) if !date.is_empty() => format!("{date:0<8}").parse().unwrap_or(0),
        _ => 0,
    }
}

fn sales_date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([0-9]{4})(?:年)?(?:([0-9]{1,2})月)?(?:([0-9]{1,2})日)?").unwrap()
    })
}

/// Compact a catalog sales date (`2024年03月05日`, `2024年03月頃`, ...)
/// into the stored partial-date form, or `None` when no year is present.
pub fn compact_sales_date(sales_date: &str) -> Option<String> {
    let caps = sales_date_pattern().captures(sales_date.trim())?;
    let mut compact = caps[1].to_string();
    if let Some(month) = caps.get(2) {
        compact.push_str(&format!("{:0>2}", month.as_str()));
        if let Some(day) = caps.get(3) {
            compact.push_str(&format!("{:0>2}", day.as_str()));
        }
    }
    Some(compact)
}
