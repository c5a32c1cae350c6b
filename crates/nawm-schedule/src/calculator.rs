//! Sleep Schedule Calculation.
//!
//! Derives bedtime, wake time and sleep-cycle arithmetic from the nightly
//! prayer anchors. Pure: the reference date is passed in, never read from
//! the system clock.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use nawm_types::{AnchorTimes, BedtimeOverride, BedtimeSource, NapPlan, NawmError, SleepPlan};

use crate::config::ScheduleConfig;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Calculates a sleep plan with the default configuration.
///
/// # Arguments
/// * `anchors` - Evening and pre-dawn prayer times
/// * `bedtime` - Optional user bedtime; `None` sleeps two hours after the evening prayer
/// * `reference_date` - The "today" an override bedtime is resolved against
///
/// # Errors
/// Returns `NonPositiveDuration` when bedtime is not before wake time.
///
/// # Example
/// ```rust
/// use chrono::NaiveDate;
/// use nawm_types::AnchorTimes;
/// use nawm_schedule::calculate;
///
/// let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
/// let anchors = AnchorTimes::new(
///     today.and_hms_opt(20, 30, 0).unwrap(),
///     today.succ_opt().unwrap().and_hms_opt(5, 0, 0).unwrap(),
/// ).unwrap();
///
/// let plan = calculate(&anchors, None, today).unwrap();
/// assert_eq!(plan.duration_hours, 5.5);
/// assert_eq!(plan.nap_plan.unwrap().nap_cycles, 1);
/// ```
pub fn calculate(
    anchors: &AnchorTimes,
    bedtime: Option<BedtimeOverride>,
    reference_date: NaiveDate,
) -> Result<SleepPlan, NawmError> {
    calculate_with(&ScheduleConfig::default(), anchors, bedtime, reference_date)
}

/// Calculates a sleep plan with an explicit configuration.
///
/// # Errors
/// `InvalidConfiguration` if `config` does not validate, `DateOutOfRange` if an
/// offset leaves the calendar, `NonPositiveDuration` if bedtime is not before wake time.
pub fn calculate_with(
    config: &ScheduleConfig,
    anchors: &AnchorTimes,
    bedtime: Option<BedtimeOverride>,
    reference_date: NaiveDate,
) -> Result<SleepPlan, NawmError> {
    config.validate()?;

    let wake_time = shift(anchors.pre_dawn_prayer(), -config.wake_offset_minutes)?;

    let (bed_time, bedtime_source) = match bedtime {
        Some(choice) => (
            resolve_bedtime(choice, reference_date, config.next_day_before_hour)?,
            BedtimeSource::Custom,
        ),
        None => (
            shift(anchors.evening_prayer(), config.bedtime_offset_minutes)?,
            BedtimeSource::Default,
        ),
    };

    let duration_hours = (wake_time - bed_time).num_seconds() as f64 / SECONDS_PER_HOUR;
    if duration_hours <= 0.0 {
        return Err(NawmError::NonPositiveDuration { hours: duration_hours });
    }

    let cycle_hours = config.cycle_hours();
    let recommended_hours = config.recommended_hours();
    let full_cycles = (duration_hours / cycle_hours).floor() as u32;
    let is_reduced = duration_hours < recommended_hours;

    let nap_plan = is_reduced.then(|| {
        let deficit_hours = recommended_hours - duration_hours;
        NapPlan {
            deficit_hours,
            nap_cycles: (deficit_hours / cycle_hours).ceil() as u32,
        }
    });

    Ok(SleepPlan {
        bed_time,
        wake_time,
        duration_hours,
        full_cycles,
        is_reduced,
        nap_plan,
        bedtime_source,
    })
}

/// Places a wall-clock bedtime on a calendar date.
///
/// Hours before `next_day_before_hour` are taken as past midnight and land on
/// the day after `reference_date`.
pub fn resolve_bedtime(
    choice: BedtimeOverride,
    reference_date: NaiveDate,
    next_day_before_hour: u32,
) -> Result<NaiveDateTime, NawmError> {
    let date = if choice.hour() < next_day_before_hour {
        reference_date
            .succ_opt()
            .ok_or_else(|| NawmError::date_out_of_range(reference_date))?
    } else {
        reference_date
    };
    Ok(date.and_time(choice.time()))
}

fn shift(at: NaiveDateTime, minutes: i64) -> Result<NaiveDateTime, NawmError> {
    at.checked_add_signed(Duration::minutes(minutes))
        .ok_or_else(|| NawmError::date_out_of_range(at.date()))
}
