//! Ramadan sleep schedule planner - core logic.
//!
//! Ties the prayer anchors, the sleep calculation and the location
//! collaborator together. Most callers want [`SleepPlanner`] or the one-shot
//! [`plan_for`].

pub mod planner;

pub use nawm_network as network;
pub use nawm_prayer as prayer;
pub use nawm_schedule as schedule;
pub use nawm_types as types;

pub use nawm_network::{LocationInfo, LocationProvider, StaticLocation, Unsupported};
#[cfg(feature = "async")]
pub use nawm_network::IpLocationProvider;
pub use nawm_prayer::{FixedPrayerTimes, PrayerTimeSource};
pub use nawm_schedule::{
    ScheduleConfig, ScheduleConfigBuilder, SleepPlanExt, calculate, calculate_with,
};
pub use nawm_types::{
    AnchorTimes, BedtimeOverride, BedtimeSource, CaffeinePlan, CaffeineWindow, GeoCoordinate,
    LocationError, NapPlan, NapSuggestion, NawmError, SleepPlan, format_clock,
};
pub use planner::{PlannerState, SleepPlanner};

pub mod prelude {
    pub use crate::{
        AnchorTimes, BedtimeOverride, GeoCoordinate, LocationError, NawmError, PlannerState,
        SleepPlan, SleepPlanExt, SleepPlanner, calculate,
    };
    pub use crate::{PlanReport, plan_for};
}

use chrono::NaiveDate;
use smallvec::SmallVec;

/// Plans the night starting on `date` at `coords` with the fixed prayer anchors.
///
/// # Example
/// ```rust
/// use chrono::NaiveDate;
/// use nawm_core::{GeoCoordinate, plan_for};
///
/// let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
/// let jakarta = GeoCoordinate::new(-6.2088, 106.8456).unwrap();
/// let plan = plan_for(jakarta, today, None).unwrap();
/// assert!(plan.is_reduced);
/// ```
pub fn plan_for(
    coords: GeoCoordinate,
    date: NaiveDate,
    bedtime: Option<BedtimeOverride>,
) -> Result<SleepPlan, NawmError> {
    let anchors = FixedPrayerTimes::default().anchors(date, coords)?;
    calculate(&anchors, bedtime, date)
}

/// A plan together with its derived advice.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanReport {
    pub plan: SleepPlan,
    pub naps: SmallVec<[NapSuggestion; 2]>,
    pub caffeine: CaffeinePlan,
}

impl PlanReport {
    /// Builds the advice under the default configuration.
    pub fn new(plan: SleepPlan) -> Result<Self, NawmError> {
        Self::with_config(plan, &ScheduleConfig::default())
    }

    /// Builds the advice under `config`, which should be the one the plan was
    /// calculated with.
    pub fn with_config(plan: SleepPlan, config: &ScheduleConfig) -> Result<Self, NawmError> {
        let naps = plan.nap_suggestions_with(config);
        let caffeine = plan.caffeine()?;
        Ok(Self { plan, naps, caffeine })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_for_defaults() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let coords = GeoCoordinate::new_unchecked(21.4225, 39.8262);
        let plan = plan_for(coords, date, None).unwrap();
        assert_eq!(plan.duration_hours, 5.5);
        assert_eq!(plan.full_cycles, 3);
    }

    #[test]
    fn test_report_with_custom_cycle() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let config = ScheduleConfig::new().cycle_minutes(60);
        let anchors = FixedPrayerTimes::default()
            .anchors(date, GeoCoordinate::new_unchecked(0.0, 0.0))
            .unwrap();
        let plan = calculate_with(&config, &anchors, None, date).unwrap();
        let report = PlanReport::with_config(plan, &config).unwrap();

        assert_eq!(report.plan.full_cycles, 5);
        assert_eq!(report.naps[0], NapSuggestion::AfterDhuhr { minutes: 60 });
    }

    #[test]
    fn test_report() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let coords = GeoCoordinate::new_unchecked(21.4225, 39.8262);
        let bedtime = BedtimeOverride::new(0, 30).unwrap();
        let report = PlanReport::new(plan_for(coords, date, Some(bedtime)).unwrap()).unwrap();

        // 00:30 -> 04:00 is 3.5h, 3.5h short of seven.
        assert_eq!(report.plan.duration_hours, 3.5);
        assert_eq!(report.plan.nap_plan.unwrap().nap_cycles, 3);
        assert_eq!(report.naps.len(), 2);
        assert_eq!(report.caffeine.cutoff, date.and_hms_opt(18, 30, 0).unwrap());
    }
}
