use nawm_types::NawmError;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Tunables for the sleep calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    pub wake_offset_minutes: i64,
    pub bedtime_offset_minutes: i64,
    pub cycle_minutes: u32,
    pub recommended_sleep_minutes: u32,
    /// Override hours strictly below this roll to the next day.
    pub next_day_before_hour: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            wake_offset_minutes: WAKE_BEFORE_PRE_DAWN_MINUTES,
            bedtime_offset_minutes: BEDTIME_AFTER_EVENING_MINUTES,
            cycle_minutes: SLEEP_CYCLE_MINUTES,
            recommended_sleep_minutes: RECOMMENDED_SLEEP_MINUTES,
            next_day_before_hour: NEXT_DAY_BEFORE_HOUR,
        }
    }
}

impl ScheduleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wake_offset_minutes(mut self, minutes: i64) -> Self {
        self.wake_offset_minutes = minutes;
        self
    }

    pub fn bedtime_offset_minutes(mut self, minutes: i64) -> Self {
        self.bedtime_offset_minutes = minutes;
        self
    }

    pub fn cycle_minutes(mut self, minutes: u32) -> Self {
        self.cycle_minutes = minutes;
        self
    }

    pub fn recommended_sleep_minutes(mut self, minutes: u32) -> Self {
        self.recommended_sleep_minutes = minutes;
        self
    }

    pub fn next_day_before_hour(mut self, hour: u32) -> Self {
        self.next_day_before_hour = hour;
        self
    }

    pub fn cycle_hours(&self) -> f64 {
        f64::from(self.cycle_minutes) / 60.0
    }

    pub fn recommended_hours(&self) -> f64 {
        f64::from(self.recommended_sleep_minutes) / 60.0
    }

    /// Checks the values are usable by the calculator.
    pub fn validate(&self) -> Result<(), NawmError> {
        if self.cycle_minutes == 0 {
            return Err(NawmError::invalid_config("Sleep cycle length must be positive"));
        }
        if self.recommended_sleep_minutes == 0 {
            return Err(NawmError::invalid_config("Recommended sleep must be positive"));
        }
        if self.wake_offset_minutes < 0 || self.bedtime_offset_minutes < 0 {
            return Err(NawmError::invalid_config(format!(
                "Offsets must not be negative (wake {}, bedtime {})",
                self.wake_offset_minutes, self.bedtime_offset_minutes
            )));
        }
        if self.next_day_before_hour > 23 {
            return Err(NawmError::invalid_config(format!(
                "Next-day hour {} outside [0, 23]",
                self.next_day_before_hour
            )));
        }
        Ok(())
    }
}

/// Builder with validation for `ScheduleConfig`.
#[derive(Debug, Default)]
pub struct ScheduleConfigBuilder {
    wake_offset_minutes: Option<i64>,
    bedtime_offset_minutes: Option<i64>,
    cycle_minutes: Option<u32>,
    recommended_sleep_minutes: Option<u32>,
    next_day_before_hour: Option<u32>,
}

impl ScheduleConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wake_offset_minutes(mut self, m: i64) -> Self {
        self.wake_offset_minutes = Some(m);
        self
    }

    pub fn bedtime_offset_minutes(mut self, m: i64) -> Self {
        self.bedtime_offset_minutes = Some(m);
        self
    }

    pub fn cycle_minutes(mut self, m: u32) -> Self {
        self.cycle_minutes = Some(m);
        self
    }

    pub fn recommended_sleep_minutes(mut self, m: u32) -> Self {
        self.recommended_sleep_minutes = Some(m);
        self
    }

    pub fn next_day_before_hour(mut self, h: u32) -> Self {
        self.next_day_before_hour = Some(h);
        self
    }

    /// Builds and validates.
    pub fn build(self) -> Result<ScheduleConfig, NawmError> {
        let defaults = ScheduleConfig::default();
        let config = ScheduleConfig {
            wake_offset_minutes: self.wake_offset_minutes.unwrap_or(defaults.wake_offset_minutes),
            bedtime_offset_minutes: self
                .bedtime_offset_minutes
                .unwrap_or(defaults.bedtime_offset_minutes),
            cycle_minutes: self.cycle_minutes.unwrap_or(defaults.cycle_minutes),
            recommended_sleep_minutes: self
                .recommended_sleep_minutes
                .unwrap_or(defaults.recommended_sleep_minutes),
            next_day_before_hour: self
                .next_day_before_hour
                .unwrap_or(defaults.next_day_before_hour),
        };
        config.validate()?;
        Ok(config)
    }
}
