use chrono::{Datelike, NaiveDate};

/// Compute whole years between a `YYYY-MM-DD` date of birth and `today`.
///
/// Returns `None` when the dob is absent or unparseable — rendered as "N/A".
/// `today` is injected rather than read from the clock so callers (and tests)
/// control it.
pub fn age_on(dob: Option<&str>, today: NaiveDate) -> Option<u32> {
    let birth = NaiveDate::parse_from_str(dob?, "%Y-%m-%d").ok()?;
    let mut age = today.year() - birth.year();
    // Birthday not yet reached this year
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    u32::try_from(age).ok()
}
