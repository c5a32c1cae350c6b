use nawm_types::{NapPlan, NapSuggestion};
use smallvec::SmallVec;

use crate::config::ScheduleConfig;
use crate::constants::SHORT_NAP_MINUTES;

/// Turns a nap deficit into concrete suggestions.
///
/// Always one full-cycle nap after Dhuhr; a short Asr-Maghrib nap is added
/// when more than one cycle is missing.
pub fn advise_naps(nap: &NapPlan, config: &ScheduleConfig) -> SmallVec<[NapSuggestion; 2]> {
    let mut out: SmallVec<[NapSuggestion; 2]> = SmallVec::new();
    if nap.nap_cycles == 0 {
        return out;
    }
    out.push(NapSuggestion::AfterDhuhr { minutes: config.cycle_minutes });
    if nap.nap_cycles > 1 {
        out.push(NapSuggestion::BetweenAsrAndMaghrib {
            min_minutes: SHORT_NAP_MINUTES.0,
            max_minutes: SHORT_NAP_MINUTES.1,
        });
    }
    out
}
