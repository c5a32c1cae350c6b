//! WASM bindings for Nawm - Ramadan sleep schedule planner
//!
//! The browser front end owns geolocation and rendering; these bindings take
//! its answers and return plain JSON plans.

use chrono::NaiveDateTime;
use nawm_core::schedule::constants::NAP_TIPS;
use nawm_core::{
    BedtimeOverride, BedtimeSource, GeoCoordinate, LocationError, NawmError, PlanReport,
    PlannerState, SleepPlanner, format_clock, plan_for,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_date(date_str: &str) -> Result<chrono::NaiveDate, JsValue> {
    chrono::NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|e| JsValue::from_str(&format!("Invalid date format: {}", e)))
}

/// Calculates tonight's plan for a location and optional `HH:MM` bedtime.
///
/// A malformed bedtime falls back to the default and is reported in
/// `bedtimeWarning`.
///
/// # Example (JavaScript)
/// ```js
/// const plan = calculateSchedule(-6.2, 106.8, "2026-02-18", "23:00");
/// console.log(plan.durationHours); // 5
/// ```
#[wasm_bindgen(js_name = calculateSchedule)]
pub fn calculate_schedule(
    lat: f64,
    lon: f64,
    date_str: &str,
    bedtime: Option<String>,
) -> Result<JsValue, JsValue> {
    let date = parse_date(date_str)?;
    let coords = GeoCoordinate::new(lat, lon).map_err(js_err)?;

    let (bedtime, warning) = match bedtime.as_deref().map(str::trim) {
        None | Some("") => (None, None),
        Some(text) => match text.parse::<BedtimeOverride>() {
            Ok(b) => (Some(b), None),
            Err(e) => (None, Some(e.to_string())),
        },
    };

    let plan = plan_for(coords, date, bedtime).map_err(js_err)?;
    let report = PlanReport::new(plan).map_err(js_err)?;
    let mut result = WasmSleepPlan::from(report);
    result.bedtime_warning = warning;
    serde_wasm_bindgen::to_value(&result).map_err(js_err)
}

/// Stateful planner mirroring the page lifecycle.
///
/// # Example (JavaScript)
/// ```js
/// const planner = new Planner("2026-02-18");
/// navigator.geolocation.getCurrentPosition(
///   (p) => planner.setLocation(p.coords.latitude, p.coords.longitude),
///   () => planner.locationDenied(),
/// );
/// planner.setBedtime("23:30");
/// render(planner.state());
/// ```
#[wasm_bindgen]
pub struct Planner {
    inner: SleepPlanner,
}

#[wasm_bindgen]
impl Planner {
    #[wasm_bindgen(constructor)]
    pub fn new(date_str: &str) -> Result<Planner, JsValue> {
        console_error_panic_hook::set_once();
        Ok(Planner { inner: SleepPlanner::new(parse_date(date_str)?) })
    }

    #[wasm_bindgen(js_name = setLocation)]
    pub fn set_location(&mut self, lat: f64, lon: f64) {
        let result = GeoCoordinate::new(lat, lon)
            .map_err(|e| LocationError::Unavailable(e.to_string()));
        self.inner.on_location(result);
    }

    #[wasm_bindgen(js_name = locationDenied)]
    pub fn location_denied(&mut self) {
        self.inner.on_location(Err(LocationError::PermissionDenied));
    }

    #[wasm_bindgen(js_name = locationUnsupported)]
    pub fn location_unsupported(&mut self) {
        self.inner.on_location(Err(LocationError::Unsupported));
    }

    #[wasm_bindgen(js_name = setBedtime)]
    pub fn set_bedtime(&mut self, input: &str) {
        self.inner.set_bedtime(input);
    }

    #[wasm_bindgen(js_name = resetBedtime)]
    pub fn reset_bedtime(&mut self) {
        self.inner.reset_bedtime();
    }

    /// Returns the current state as JSON.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        let state = WasmPlannerState::build(self.inner.report(), self.inner.bedtime_warning());
        serde_wasm_bindgen::to_value(&state).map_err(js_err)
    }
}

/// ISO 8601 local date-time without offset, parseable by `new Date(...)`.
fn iso(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// WASM-friendly nap recommendation.
#[derive(Debug, Serialize, tsify::Tsify)]
#[serde(rename_all = "camelCase")]
pub struct WasmNap {
    pub duration: f64,
    pub cycles: u32,
    pub suggestions: Vec<String>,
    pub tips: Vec<String>,
}

/// WASM-friendly caffeine advice.
#[derive(Debug, Serialize, tsify::Tsify)]
#[serde(rename_all = "camelCase")]
pub struct WasmCaffeine {
    /// Best window first.
    pub preferred: Vec<String>,
    pub cutoff: String,
    pub cutoff_label: String,
    pub daily_max_mg: u32,
    pub suhoor_mg: [u32; 2],
    pub iftar_mg: [u32; 2],
}

/// WASM-friendly representation of a sleep plan for TypeScript generation.
#[derive(Debug, Serialize, tsify::Tsify)]
#[tsify(into_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct WasmSleepPlan {
    pub bed_time: String,
    pub wake_time: String,
    pub bed_time_label: String,
    pub wake_time_label: String,
    pub is_custom_bedtime: bool,
    pub duration_hours: f64,
    pub full_sleep_cycles: u32,
    pub is_reduced_sleep: bool,
    pub nap_recommendation: Option<WasmNap>,
    pub caffeine: WasmCaffeine,
    pub explanation: String,
    pub bedtime_warning: Option<String>,
}

impl From<PlanReport> for WasmSleepPlan {
    fn from(report: PlanReport) -> Self {
        let plan = report.plan;
        let caffeine = report.caffeine;
        Self {
            bed_time: iso(plan.bed_time),
            wake_time: iso(plan.wake_time),
            bed_time_label: format_clock(plan.bed_time),
            wake_time_label: format_clock(plan.wake_time),
            is_custom_bedtime: plan.bedtime_source == BedtimeSource::Custom,
            duration_hours: plan.duration_hours,
            full_sleep_cycles: plan.full_cycles,
            is_reduced_sleep: plan.is_reduced,
            nap_recommendation: plan.nap_plan.map(|nap| WasmNap {
                duration: nap.deficit_hours,
                cycles: nap.nap_cycles,
                suggestions: report.naps.iter().map(|s| s.to_string()).collect(),
                tips: NAP_TIPS.iter().map(|t| t.to_string()).collect(),
            }),
            caffeine: WasmCaffeine {
                preferred: caffeine.preferred.iter().map(|w| w.to_string()).collect(),
                cutoff: iso(caffeine.cutoff),
                cutoff_label: format_clock(caffeine.cutoff),
                daily_max_mg: caffeine.daily_max_mg,
                suhoor_mg: [caffeine.suhoor.min, caffeine.suhoor.max],
                iftar_mg: [caffeine.iftar.min, caffeine.iftar.max],
            },
            explanation: plan.explain(),
            bedtime_warning: None,
        }
    }
}

/// Planner state tagged by `status`.
#[derive(Debug, Serialize, tsify::Tsify)]
#[tsify(into_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct WasmPlannerState {
    /// One of `awaiting-location`, `location-failed`, `ready`, `invalid`.
    pub status: String,
    pub message: Option<String>,
    pub plan: Option<WasmSleepPlan>,
}

impl WasmPlannerState {
    fn build(report: Result<PlanReport, PlannerState>, warning: Option<&NawmError>) -> Self {
        let (status, message, plan) = match report {
            Ok(report) => {
                let mut wasm = WasmSleepPlan::from(report);
                wasm.bedtime_warning = warning.map(|w| w.to_string());
                ("ready", None, Some(wasm))
            }
            Err(PlannerState::AwaitingLocation) => ("awaiting-location", None, None),
            Err(PlannerState::LocationFailed(e)) => ("location-failed", Some(e.to_string()), None),
            Err(PlannerState::Invalid(e)) => ("invalid", Some(e.to_string()), None),
            Err(PlannerState::Ready(_)) => ("invalid", None, None),
        };
        Self { status: status.to_string(), message, plan }
    }
}
