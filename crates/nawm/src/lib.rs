//! # Nawm
//!
//! Sleep planning for the nights of Ramadan, between the evening (Isha)
//! and pre-dawn (Fajr) prayers.
//!
//! This crate is a facade that re-exports functionality from the `nawm` workspace.
//!
//! ## Modules
//!
//! - `types`: Core types (SleepPlan, AnchorTimes, GeoCoordinate, etc.)
//! - `prayer`: Prayer time anchors
//! - `schedule`: Sleep calculation, nap and caffeine advice
//! - `network`: Location providers (IP lookup behind `async`)
//!
//! ## Usage
//!
//! ```rust
//! use nawm::prelude::*;
//! use nawm::StaticLocation;
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
//! let mut planner = SleepPlanner::new(today);
//! planner.locate_with(&StaticLocation(GeoCoordinate::new(-6.2, 106.8).unwrap()));
//! planner.set_bedtime("23:00");
//!
//! if let PlannerState::Ready(plan) = planner.state() {
//!     println!("{}", plan.explain());
//! }
//! ```

pub use nawm_core::*;
