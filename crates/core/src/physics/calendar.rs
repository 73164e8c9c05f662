//! Calendar dates
//!
//! # References
//! - Meeus, J. (1998). "Astronomical Algorithms", 2nd ed., chapter 7.

/// Modified Julian date for a date written as `YYYYMMDD.fff`, where the
/// fraction is the portion of the day elapsed
///
/// Gregorian calendar throughout; MJD = JD - 2400000.5.
#[must_use]
pub fn modified_julian_date(integer_date: f64) -> f64 {
    let whole = integer_date.trunc();
    let day_fraction = integer_date - whole;
    // Date fields are small integers well inside f64's exact range
    #[allow(clippy::cast_possible_truncation)]
    let ymd = whole as i64;
    let mut year = ymd / 10_000;
    let mut month = (ymd / 100) % 100;
    let day = (ymd % 100) as f64 + day_fraction;
    if month <= 2 {
        year -= 1;
        month += 12;
    }
    let a = year.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);
    let jd = (365.25 * (year + 4716) as f64).floor()
        + (30.6001 * (month + 1) as f64).floor()
        + day
        + b as f64
        - 1524.5;
    jd - 2_400_000.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mjd_epoch() {
        // MJD 0 is 1858-11-17 00:00
        assert_relative_eq!(modified_julian_date(18_581_117.0), 0.0);
        // J2000.0 is 2000-01-01 12:00, MJD 51544.5
        assert_relative_eq!(modified_julian_date(20_000_101.5), 51_544.5, epsilon = 1e-6);
    }
}
