//! Calendar helpers.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

#[cfg(any(test, not(feature = "hydrate")))]
const SECONDS_PER_YEAR: u64 = 31_556_952;

/// Current calendar year, used to pre-fill the admission year.
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or(1970)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        year_from_unix(secs)
    }
}

#[cfg(any(test, not(feature = "hydrate")))]
/// Gregorian-average year for a Unix timestamp; exact except within a day of New Year.
fn year_from_unix(secs: u64) -> i32 {
    1970 + i32::try_from(secs / SECONDS_PER_YEAR).unwrap_or(0)
}
