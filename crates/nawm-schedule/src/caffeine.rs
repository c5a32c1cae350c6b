use chrono::Duration;
use nawm_types::{CaffeinePlan, MilligramRange, NawmError, SleepPlan};

use crate::constants::*;

/// Caffeine cut-off and intake limits for a planned night.
///
/// # Errors
/// `DateOutOfRange` if the cut-off falls before the representable calendar.
pub fn caffeine_plan(plan: &SleepPlan) -> Result<CaffeinePlan, NawmError> {
    let cutoff = plan
        .bed_time
        .checked_sub_signed(Duration::hours(CAFFEINE_CUTOFF_HOURS))
        .ok_or_else(|| NawmError::date_out_of_range(plan.bed_time.date()))?;

    Ok(CaffeinePlan {
        preferred: CAFFEINE_PREFERRED,
        cutoff,
        daily_max_mg: CAFFEINE_DAILY_MAX_MG,
        suhoor: MilligramRange { min: CAFFEINE_SUHOOR_MG.0, max: CAFFEINE_SUHOOR_MG.1 },
        iftar: MilligramRange { min: CAFFEINE_IFTAR_MG.0, max: CAFFEINE_IFTAR_MG.1 },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use nawm_types::{BedtimeSource, CaffeineWindow};

    #[test]
    fn test_cutoff_six_hours_before_bed() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let plan = SleepPlan {
            bed_time: day.and_hms_opt(22, 30, 0).unwrap(),
            wake_time: day.succ_opt().unwrap().and_hms_opt(4, 0, 0).unwrap(),
            duration_hours: 5.5,
            full_cycles: 3,
            is_reduced: true,
            nap_plan: None,
            bedtime_source: BedtimeSource::Default,
        };
        let caffeine = caffeine_plan(&plan).unwrap();
        assert_eq!(caffeine.cutoff, day.and_hms_opt(16, 30, 0).unwrap());
        assert_eq!(caffeine.daily_max_mg, 400);
        assert_eq!(caffeine.suhoor, MilligramRange { min: 200, max: 300 });
        assert_eq!(caffeine.iftar.max, 200);
        assert_eq!(caffeine.preferred[0], CaffeineWindow::Suhoor);
        assert_eq!(caffeine.preferred[1], CaffeineWindow::AfterIftar);
    }
}
