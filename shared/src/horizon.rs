//! Forecast horizon: the twelve calendar months starting at the current one

use chrono::{Datelike, Local, NaiveDate};

use crate::types::HorizonPoint;

/// Number of months forecast per request
pub const HORIZON_MONTHS: usize = 12;

/// Twelve consecutive months beginning with the month of `reference`
pub fn horizon_from(reference: NaiveDate) -> Vec<HorizonPoint> {
    std::iter::successors(
        Some(HorizonPoint::new(reference.year(), reference.month())),
        |point| Some(point.next()),
    )
    .take(HORIZON_MONTHS)
    .collect()
}

/// Horizon for today's date in the server's local time zone
pub fn current_horizon() -> Vec<HorizonPoint> {
    horizon_from(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_starts_at_reference_month() {
        let horizon = horizon_from(date(2026, 10, 16));
        assert_eq!(horizon.len(), HORIZON_MONTHS);
        assert_eq!(horizon[0], HorizonPoint::new(2026, 10));
        assert_eq!(horizon[2], HorizonPoint::new(2026, 12));
        assert_eq!(horizon[3], HorizonPoint::new(2027, 1));
        assert_eq!(horizon[11], HorizonPoint::new(2027, 9));
    }

    #[test]
    fn test_january_stays_in_one_year() {
        let horizon = horizon_from(date(2027, 1, 1));
        assert!(horizon.iter().all(|p| p.year() == 2027));
        assert_eq!(horizon.last().map(|p| p.month()), Some(12));
    }

    #[test]
    fn test_current_horizon_has_twelve_months() {
        let today = Local::now().date_naive();
        let horizon = current_horizon();
        assert_eq!(horizon.len(), HORIZON_MONTHS);
        assert_eq!(horizon[0], HorizonPoint::new(today.year(), today.month()));
        assert!(horizon.windows(2).all(|w| w[0] < w[1]));
    }
}
