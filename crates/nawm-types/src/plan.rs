use chrono::{NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::clock::format_clock;
use crate::NawmError;

/// The two prayer anchors bounding the night.
///
/// Invariant: `pre_dawn_prayer > evening_prayer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnchorTimes {
    evening_prayer: NaiveDateTime,
    pre_dawn_prayer: NaiveDateTime,
}

impl AnchorTimes {
    /// Creates anchors, rejecting a pre-dawn prayer that is not after the evening prayer.
    pub fn new(
        evening_prayer: NaiveDateTime,
        pre_dawn_prayer: NaiveDateTime,
    ) -> Result<Self, NawmError> {
        if pre_dawn_prayer <= evening_prayer {
            return Err(NawmError::InvalidAnchors {
                evening: evening_prayer,
                pre_dawn: pre_dawn_prayer,
            });
        }
        Ok(Self { evening_prayer, pre_dawn_prayer })
    }

    /// Evening (Isha) prayer time.
    pub fn evening_prayer(&self) -> NaiveDateTime {
        self.evening_prayer
    }

    /// Pre-dawn (Fajr) prayer time, normally on the following calendar day.
    pub fn pre_dawn_prayer(&self) -> NaiveDateTime {
        self.pre_dawn_prayer
    }
}

/// A user-chosen bedtime, wall-clock only.
///
/// The calendar date is resolved later against a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BedtimeOverride(NaiveTime);

impl BedtimeOverride {
    pub fn new(hour: u32, minute: u32) -> Result<Self, NawmError> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| NawmError::invalid_bedtime(format!("{hour:02}:{minute:02}")))
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl FromStr for BedtimeOverride {
    type Err = NawmError;

    /// Parses `HH:MM` in 24-hour form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map(Self)
            .map_err(|_| NawmError::invalid_bedtime(s))
    }
}

impl fmt::Display for BedtimeOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Where the bedtime of a plan came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BedtimeSource {
    /// Offset from the evening prayer.
    Default,
    /// User override.
    Custom,
}

impl fmt::Display for BedtimeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BedtimeSource::Default => "after Isha",
            BedtimeSource::Custom => "custom time",
        };
        write!(f, "{}", s)
    }
}

/// Daytime compensation for a short night.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NapPlan {
    /// Hours missing from the recommended night sleep.
    pub deficit_hours: f64,
    /// Sleep cycles needed to cover the deficit, rounded up.
    pub nap_cycles: u32,
}

/// A computed night of sleep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepPlan {
    pub bed_time: NaiveDateTime,
    pub wake_time: NaiveDateTime,
    pub duration_hours: f64,
    pub full_cycles: u32,
    pub is_reduced: bool,
    /// Present iff `is_reduced`.
    pub nap_plan: Option<NapPlan>,
    pub bedtime_source: BedtimeSource,
}

impl SleepPlan {
    /// Returns a short human-readable summary of the plan.
    pub fn explain(&self) -> String {
        let mut lines = vec![
            format!("Bedtime: {} ({})", format_clock(self.bed_time), self.bedtime_source),
            format!("Wake up: {} (before Fajr)", format_clock(self.wake_time)),
            format!("{:.1} hours of night sleep", self.duration_hours),
            format!("{} complete sleep cycles", self.full_cycles),
        ];
        if let Some(nap) = &self.nap_plan {
            lines.push(format!(
                "Sleep deficit: {:.1} hours ({} nap cycle{})",
                nap.deficit_hours,
                nap.nap_cycles,
                if nap.nap_cycles == 1 { "" } else { "s" }
            ));
        }
        lines.join("\n")
    }
}

/// A suggested daytime nap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NapSuggestion {
    /// Full-cycle nap after the midday prayer.
    AfterDhuhr { minutes: u32 },
    /// Short nap between the afternoon prayer and sunset.
    BetweenAsrAndMaghrib { min_minutes: u32, max_minutes: u32 },
}

impl fmt::Display for NapSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NapSuggestion::AfterDhuhr { minutes } => {
                write!(f, "Primary nap: {} minutes after Dhuhr prayer", minutes)
            }
            NapSuggestion::BetweenAsrAndMaghrib { min_minutes, max_minutes } => write!(
                f,
                "Additional short nap: {}-{} minutes between Asr and Maghrib",
                min_minutes, max_minutes
            ),
        }
    }
}

/// Inclusive caffeine amount in milligrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilligramRange {
    pub min: u32,
    pub max: u32,
}

/// When in the fasting day caffeine fits best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaffeineWindow {
    /// With the pre-dawn meal.
    Suhoor,
    /// Right after breaking the fast.
    AfterIftar,
}

impl fmt::Display for CaffeineWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CaffeineWindow::Suhoor => "During Suhoor (pre-dawn meal)",
            CaffeineWindow::AfterIftar => "Right after Iftar (breaking fast)",
        };
        write!(f, "{}", s)
    }
}

/// Caffeine timing and limits for a planned night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaffeinePlan {
    /// Windows in order of preference, best first.
    pub preferred: [CaffeineWindow; 2],
    /// No caffeine at or after this time.
    pub cutoff: NaiveDateTime,
    pub daily_max_mg: u32,
    pub suhoor: MilligramRange,
    pub iftar: MilligramRange,
}
