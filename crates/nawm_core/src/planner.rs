//! Planner session.
//!
//! Holds the inputs gathered from the user and the location collaborator and
//! recomputes the plan from scratch whenever [`SleepPlanner::state`] is called.

use chrono::NaiveDate;
use nawm_network::LocationProvider;
use nawm_prayer::{FixedPrayerTimes, PrayerTimeSource};
use nawm_schedule::{ScheduleConfig, calculate_with};
use nawm_types::{BedtimeOverride, GeoCoordinate, LocationError, NawmError, SleepPlan};
use tracing::{debug, warn};

use crate::PlanReport;

/// What the presentation layer should show.
#[derive(Debug, Clone, PartialEq)]
pub enum PlannerState {
    /// The one-shot location request has not resolved yet.
    AwaitingLocation,
    /// Location was denied or unavailable; no plan is computed.
    LocationFailed(LocationError),
    Ready(SleepPlan),
    /// Inputs produce no usable plan (e.g. bedtime after wake time).
    Invalid(NawmError),
}

impl PlannerState {
    pub fn plan(&self) -> Option<&SleepPlan> {
        match self {
            PlannerState::Ready(plan) => Some(plan),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, PlannerState::Ready(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
enum LocationState {
    Pending,
    Resolved(GeoCoordinate),
    Failed(LocationError),
}

/// Sleep planning session for one night.
#[derive(Debug)]
pub struct SleepPlanner {
    reference_date: NaiveDate,
    config: ScheduleConfig,
    prayer_source: Box<dyn PrayerTimeSource>,
    location: LocationState,
    bedtime: Option<BedtimeOverride>,
    bedtime_warning: Option<NawmError>,
}

impl SleepPlanner {
    /// Creates a planner for the night starting on `reference_date`.
    pub fn new(reference_date: NaiveDate) -> Self {
        Self {
            reference_date,
            config: ScheduleConfig::default(),
            prayer_source: Box::new(FixedPrayerTimes::default()),
            location: LocationState::Pending,
            bedtime: None,
            bedtime_warning: None,
        }
    }

    pub fn with_config(mut self, config: ScheduleConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_prayer_source<P: PrayerTimeSource + 'static>(mut self, source: P) -> Self {
        self.prayer_source = Box::new(source);
        self
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn set_reference_date(&mut self, date: NaiveDate) {
        self.reference_date = date;
    }

    /// Receives the result of the one-shot location request.
    ///
    /// Only the first result is kept.
    pub fn on_location(&mut self, result: Result<GeoCoordinate, LocationError>) {
        if self.location != LocationState::Pending {
            debug!("location already resolved, ignoring late result");
            return;
        }
        self.location = match result {
            Ok(coords) => {
                debug!(lat = coords.lat, lng = coords.lng, "location resolved");
                LocationState::Resolved(coords)
            }
            Err(e) => {
                warn!(error = %e, "location request failed");
                LocationState::Failed(e)
            }
        };
    }

    /// Asks `provider` for the location and records the answer.
    pub fn locate_with(&mut self, provider: &impl LocationProvider) {
        self.on_location(provider.request_location());
    }

    pub fn location(&self) -> Option<GeoCoordinate> {
        match self.location {
            LocationState::Resolved(coords) => Some(coords),
            _ => None,
        }
    }

    /// Sets the bedtime from user text in `HH:MM` form.
    ///
    /// An empty string clears the override. Malformed text also clears it and
    /// is reported through [`bedtime_warning`](Self::bedtime_warning).
    pub fn set_bedtime(&mut self, input: &str) {
        if input.trim().is_empty() {
            self.reset_bedtime();
            return;
        }
        match input.parse::<BedtimeOverride>() {
            Ok(bedtime) => {
                debug!(%bedtime, "custom bedtime set");
                self.bedtime = Some(bedtime);
                self.bedtime_warning = None;
            }
            Err(e) => {
                warn!(error = %e, "ignoring malformed bedtime, using default");
                self.bedtime = None;
                self.bedtime_warning = Some(e);
            }
        }
    }

    /// Reverts to the default bedtime.
    pub fn reset_bedtime(&mut self) {
        self.bedtime = None;
        self.bedtime_warning = None;
    }

    pub fn bedtime(&self) -> Option<BedtimeOverride> {
        self.bedtime
    }

    /// The last rejected bedtime input, if the current default is a fallback.
    pub fn bedtime_warning(&self) -> Option<&NawmError> {
        self.bedtime_warning.as_ref()
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Recomputes the plan and its advice under this planner's configuration.
    ///
    /// Any state other than `Ready` is returned as the error.
    pub fn report(&self) -> Result<PlanReport, PlannerState> {
        match self.state() {
            PlannerState::Ready(plan) => {
                PlanReport::with_config(plan, &self.config).map_err(PlannerState::Invalid)
            }
            other => Err(other),
        }
    }

    /// Recomputes the plan from the current inputs.
    pub fn state(&self) -> PlannerState {
        let coords = match &self.location {
            LocationState::Pending => return PlannerState::AwaitingLocation,
            LocationState::Failed(e) => return PlannerState::LocationFailed(e.clone()),
            LocationState::Resolved(coords) => *coords,
        };

        let result = self
            .prayer_source
            .anchors(self.reference_date, coords)
            .and_then(|anchors| {
                calculate_with(&self.config, &anchors, self.bedtime, self.reference_date)
            });

        match result {
            Ok(plan) => {
                debug!(
                    bed_time = %plan.bed_time,
                    wake_time = %plan.wake_time,
                    hours = plan.duration_hours,
                    "sleep plan computed"
                );
                PlannerState::Ready(plan)
            }
            Err(e) => {
                warn!(error = %e, "no usable sleep plan");
                PlannerState::Invalid(e)
            }
        }
    }
}
