use chrono::{Duration, NaiveDate};
use nawm::prelude::*;
use proptest::prelude::*;

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
}

fn anchors_from(evening_min: i64, night_min: i64) -> AnchorTimes {
    let evening = base().and_hms_opt(0, 0, 0).unwrap() + Duration::minutes(evening_min);
    AnchorTimes::new(evening, evening + Duration::minutes(night_min)).unwrap()
}

proptest! {
    /// Invariant: `calculate` never panics and only fails with NonPositiveDuration.
    #[test]
    fn no_panic_calculate(
        evening in 17i64 * 60..23 * 60,
        night in 1i64..16 * 60,
        bedtime in proptest::option::of((0u32..24, 0u32..60)),
    ) {
        let bedtime = bedtime.map(|(h, m)| BedtimeOverride::new(h, m).unwrap());
        match calculate(&anchors_from(evening, night), bedtime, base()) {
            Ok(_) | Err(NawmError::NonPositiveDuration { .. }) => {}
            Err(e) => panic!("unexpected error {:?}", e),
        }
    }

    /// Invariant: cycles are floor(duration / 1.5).
    #[test]
    fn full_cycles_floor(evening in 17i64 * 60..23 * 60, night in 1i64..16 * 60) {
        if let Ok(plan) = calculate(&anchors_from(evening, night), None, base()) {
            prop_assert!(plan.duration_hours > 0.0);
            prop_assert_eq!(plan.full_cycles, (plan.duration_hours / 1.5).floor() as u32);
        }
    }

    /// Invariant: reduced iff under seven hours, and the nap plan follows.
    #[test]
    fn reduced_iff_nap_plan(
        evening in 17i64 * 60..23 * 60,
        night in 1i64..16 * 60,
        bedtime in proptest::option::of((0u32..24, 0u32..60)),
    ) {
        let bedtime = bedtime.map(|(h, m)| BedtimeOverride::new(h, m).unwrap());
        if let Ok(plan) = calculate(&anchors_from(evening, night), bedtime, base()) {
            prop_assert_eq!(plan.is_reduced, plan.duration_hours < 7.0);
            prop_assert_eq!(plan.nap_plan.is_some(), plan.is_reduced);
            if let Some(nap) = plan.nap_plan {
                prop_assert!(nap.deficit_hours > 0.0);
                prop_assert_eq!(nap.nap_cycles, (nap.deficit_hours / 1.5).ceil() as u32);
                prop_assert!(nap.nap_cycles >= 1);
            }
        }
    }

    /// Invariant: overrides before noon resolve to the next day, others to today.
    #[test]
    fn override_day_roll(h in 0u32..24, m in 0u32..60) {
        let bedtime = BedtimeOverride::new(h, m).unwrap();
        let resolved = nawm::schedule::resolve_bedtime(bedtime, base(), 12).unwrap();
        let expected = if h < 12 { base().succ_opt().unwrap() } else { base() };
        prop_assert_eq!(resolved.date(), expected);
    }

    /// Invariant: identical inputs give bit-identical output.
    #[test]
    fn idempotent(evening in 17i64 * 60..23 * 60, night in 1i64..16 * 60, h in 0u32..24) {
        let anchors = anchors_from(evening, night);
        let bedtime = Some(BedtimeOverride::new(h, 0).unwrap());
        let a = calculate(&anchors, bedtime, base());
        let b = calculate(&anchors, bedtime, base());
        prop_assert_eq!(&a, &b);
        if let (Ok(a), Ok(b)) = (a, b) {
            prop_assert_eq!(a.duration_hours.to_bits(), b.duration_hours.to_bits());
        }
    }

    /// Invariant: arbitrary text never panics the planner.
    #[test]
    fn bedtime_text_never_panics(input in ".{0,12}") {
        let mut planner = SleepPlanner::new(base());
        planner.on_location(Ok(GeoCoordinate::new_unchecked(0.0, 0.0)));
        planner.set_bedtime(&input);
        let _ = planner.state();
    }
}
