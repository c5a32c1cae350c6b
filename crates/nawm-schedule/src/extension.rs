//! Extension trait for `SleepPlan`.

use nawm_types::{CaffeinePlan, NapSuggestion, NawmError, SleepPlan};
use smallvec::SmallVec;

use crate::caffeine::caffeine_plan;
use crate::config::ScheduleConfig;
use crate::naps::advise_naps;

/// Extends `SleepPlan` with advice derived under the default configuration.
pub trait SleepPlanExt {
    /// Nap suggestions; empty when the night is not reduced.
    fn nap_suggestions(&self) -> SmallVec<[NapSuggestion; 2]>;

    /// Nap suggestions sized for the cycle length in `config`.
    fn nap_suggestions_with(&self, config: &ScheduleConfig) -> SmallVec<[NapSuggestion; 2]>;

    /// Caffeine cut-off and limits.
    fn caffeine(&self) -> Result<CaffeinePlan, NawmError>;
}

impl SleepPlanExt for SleepPlan {
    fn nap_suggestions(&self) -> SmallVec<[NapSuggestion; 2]> {
        self.nap_suggestions_with(&ScheduleConfig::default())
    }

    fn nap_suggestions_with(&self, config: &ScheduleConfig) -> SmallVec<[NapSuggestion; 2]> {
        self.nap_plan
            .as_ref()
            .map(|nap| advise_naps(nap, config))
            .unwrap_or_default()
    }

    fn caffeine(&self) -> Result<CaffeinePlan, NawmError> {
        caffeine_plan(self)
    }
}
