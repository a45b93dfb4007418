//! Common types used across the service

use serde::Serialize;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month in the forecast horizon
///
/// Fields are private so the month always stays within 1-12.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HorizonPoint {
    /// Field order gives chronological `Ord`
    year: i32,
    month: u32,
}

impl HorizonPoint {
    /// `month` must be 1-12
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!((1..=12).contains(&month), "month out of range: {month}");
        Self { year, month }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month of year, 1-12
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Year as the model sees it (2026 -> 26)
    pub fn short_year(&self) -> i32 {
        self.year.rem_euclid(100)
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// "October 2026"
    pub fn label(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }

    /// The following calendar month
    pub fn next(&self) -> Self {
        if self.month >= 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_and_short_year() {
        let point = HorizonPoint::new(2026, 10);
        assert_eq!(point.label(), "October 2026");
        assert_eq!(point.short_year(), 26);
        assert_eq!(HorizonPoint::new(2100, 1).short_year(), 0);
    }

    #[test]
    fn test_december_rolls_over() {
        assert_eq!(HorizonPoint::new(2026, 12).next(), HorizonPoint::new(2027, 1));
        assert_eq!(HorizonPoint::new(2026, 3).next(), HorizonPoint::new(2026, 4));
    }

    #[test]
    #[should_panic(expected = "month out of range")]
    #[cfg(debug_assertions)]
    fn test_month_zero_is_rejected() {
        HorizonPoint::new(2026, 0);
    }

    #[test]
    fn test_accessors() {
        let point = HorizonPoint::new(2027, 1);
        assert_eq!((point.year(), point.month()), (2027, 1));
        assert_eq!(point.month_name(), "January");
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(HorizonPoint::new(2026, 12) < HorizonPoint::new(2027, 1));
        assert!(HorizonPoint::new(2026, 2) < HorizonPoint::new(2026, 3));
    }
}
