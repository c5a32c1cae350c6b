//! Sleep schedule engine for nawm.
//!
//! The calculation itself lives in [`calculator`]; [`naps`] and [`caffeine`]
//! derive daytime advice from its result.

pub mod caffeine;
pub mod calculator;
pub mod config;
pub mod constants;
pub mod extension;
pub mod naps;

pub use caffeine::caffeine_plan;
pub use calculator::{calculate, calculate_with, resolve_bedtime};
pub use config::{ScheduleConfig, ScheduleConfigBuilder};
pub use extension::SleepPlanExt;
pub use naps::advise_naps;
