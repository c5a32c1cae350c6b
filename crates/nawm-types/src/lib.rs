//! Core types for nawm.
//!
//! Shared by every crate in the workspace: the sleep plan data model,
//! coordinates, and the error enums.

pub mod clock;
pub mod error;
pub mod geo;
pub mod plan;

pub use clock::format_clock;
pub use error::{LocationError, NawmError};
pub use geo::GeoCoordinate;
pub use plan::{
    AnchorTimes, BedtimeOverride, BedtimeSource, CaffeinePlan, CaffeineWindow, MilligramRange,
    NapPlan, NapSuggestion, SleepPlan,
};
