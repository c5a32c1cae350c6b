//! Prayer Time Anchors.
//!
//! Supplies the evening (Isha) and pre-dawn (Fajr) anchors that bound the
//! night. Times are fixed wall-clock values; no solar computation is done.

use chrono::{NaiveDate, NaiveTime};
use nawm_types::{AnchorTimes, GeoCoordinate, NawmError};
use serde::{Deserialize, Serialize};

/// Source of the two nightly prayer anchors for a date and place.
pub trait PrayerTimeSource: std::fmt::Debug + Send + Sync {
    /// Returns the anchors for the night starting on `date`.
    fn anchors(&self, date: NaiveDate, coords: GeoCoordinate) -> Result<AnchorTimes, NawmError>;
}

/// Fixed clock times for every date and location.
///
/// The evening prayer falls on `date`, the pre-dawn prayer on the day after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedPrayerTimes {
    pub evening: NaiveTime,
    pub pre_dawn: NaiveTime,
}

/// Default evening prayer: 20:30.
pub const DEFAULT_EVENING: (u32, u32) = (20, 30);
/// Default pre-dawn prayer: 05:00 the next day.
pub const DEFAULT_PRE_DAWN: (u32, u32) = (5, 0);

impl FixedPrayerTimes {
    pub fn new(evening: NaiveTime, pre_dawn: NaiveTime) -> Self {
        Self { evening, pre_dawn }
    }
}

impl Default for FixedPrayerTimes {
    fn default() -> Self {
        Self {
            evening: NaiveTime::from_hms_opt(DEFAULT_EVENING.0, DEFAULT_EVENING.1, 0)
                .unwrap_or_default(),
            pre_dawn: NaiveTime::from_hms_opt(DEFAULT_PRE_DAWN.0, DEFAULT_PRE_DAWN.1, 0)
                .unwrap_or_default(),
        }
    }
}

impl PrayerTimeSource for FixedPrayerTimes {
    fn anchors(&self, date: NaiveDate, _coords: GeoCoordinate) -> Result<AnchorTimes, NawmError> {
        let next_day = date.succ_opt().ok_or_else(|| NawmError::date_out_of_range(date))?;
        AnchorTimes::new(date.and_time(self.evening), next_day.and_time(self.pre_dawn))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn jakarta() -> GeoCoordinate {
        GeoCoordinate::new_unchecked(-6.2088, 106.8456)
    }

    #[test]
    fn test_default_anchors() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let anchors = FixedPrayerTimes::default().anchors(date, jakarta()).unwrap();

        let isha = anchors.evening_prayer();
        assert_eq!(isha.date(), date);
        assert_eq!((isha.hour(), isha.minute()), (20, 30));

        let fajr = anchors.pre_dawn_prayer();
        assert_eq!(fajr.date().day(), 2);
        assert_eq!((fajr.hour(), fajr.minute()), (5, 0));
    }

    #[test]
    fn test_anchors_ignore_location() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let src = FixedPrayerTimes::default();
        let mecca = GeoCoordinate::new_unchecked(21.4225, 39.8262);
        assert_eq!(src.anchors(date, jakarta()).unwrap(), src.anchors(date, mecca).unwrap());
    }

    #[test]
    fn test_year_boundary() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        let anchors = FixedPrayerTimes::default().anchors(date, jakarta()).unwrap();
        assert_eq!(anchors.pre_dawn_prayer().date(), NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
    }

    #[test]
    fn test_last_representable_date() {
        let result = FixedPrayerTimes::default().anchors(NaiveDate::MAX, jakarta());
        assert!(matches!(result, Err(NawmError::DateOutOfRange { .. })));
    }
}
