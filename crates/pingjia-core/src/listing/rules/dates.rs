//! ROC (Minguo) calendar dates as printed by the registry.

use chrono::NaiveDate;

/// Offset between ROC years and Gregorian years.
pub const ROC_YEAR_OFFSET: i32 = 1911;

/// Parse `yyy/mm/dd` or `yyy/mm` in the ROC calendar.
///
/// Year/month dates resolve to the first day of the month.
pub fn parse_roc_date(s: &str) -> Option<NaiveDate> {
    let mut parts = s.trim().split('/');

    let year: i32 = parts.next()?.trim().parse().ok()?;
    let month: u32 = parts.next()?.trim().parse().ok()?;
    let day: u32 = match parts.next() {
        Some(d) => d.trim().parse().ok()?,
        None => 1,
    };

    if parts.next().is_some() || year <= 0 {
        return None;
    }

    NaiveDate::from_ymd_opt(year + ROC_YEAR_OFFSET, month, day)
}
