//! Stay request model (a candidate date range and party size)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A stay being quoted: the half-open night range `[check_in, check_out)`
/// and the number of guests to place.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct StayRequest {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    /// Total guests, rooms and camping combined
    #[validate(range(min = 1, max = 30))]
    pub guest_count: i32,
}

impl StayRequest {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate, guest_count: i32) -> Self {
        Self {
            check_in,
            check_out,
            guest_count,
        }
    }

    /// Number of nights in the stay. Zero or negative means no valid
    /// range has been selected yet (mid-selection in a date picker).
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_nights() {
        let stay = StayRequest::new(date(2025, 6, 10), date(2025, 6, 13), 2);
        assert_eq!(stay.nights(), 3);
    }

    #[test]
    fn test_nights_same_day() {
        let stay = StayRequest::new(date(2025, 6, 10), date(2025, 6, 10), 2);
        assert_eq!(stay.nights(), 0);
    }

    #[test]
    fn test_nights_inverted() {
        let stay = StayRequest::new(date(2025, 6, 13), date(2025, 6, 10), 2);
        assert!(stay.nights() < 0);
    }

    #[test]
    fn test_guest_count_bounds() {
        assert!(StayRequest::new(date(2025, 6, 10), date(2025, 6, 11), 0).validate().is_err());
        assert!(StayRequest::new(date(2025, 6, 10), date(2025, 6, 11), 1).validate().is_ok());
        assert!(StayRequest::new(date(2025, 6, 10), date(2025, 6, 11), 30).validate().is_ok());
        assert!(StayRequest::new(date(2025, 6, 10), date(2025, 6, 11), 31).validate().is_err());
    }
}
