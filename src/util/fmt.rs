//! Formatting helpers shared by the feature pages.

#[cfg(test)]
#[path = "fmt_test.rs"]
mod fmt_test;

/// Planting progress in percent, rounded half-up. Unplanned projects
/// report zero. Deliberately uncapped; bar widths clamp at the call
/// site instead.
#[must_use]
pub fn progress_percent(planted: i64, planned: i64) -> i64 {
    if planned <= 0 {
        return 0;
    }
    (planted * 100 + planned / 2) / planned
}

/// ISO 8601 timestamp to the `dd/mm/yyyy` form used across the app.
/// Anything unparseable passes through untouched.
#[must_use]
pub fn format_date_br(iso: &str) -> String {
    let date = iso.split('T').next().unwrap_or(iso);
    let mut parts = date.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day)) if !day.is_empty() => format!("{day}/{month}/{year}"),
        _ => iso.to_owned(),
    }
}
