use nawm_types::CaffeineWindow;

/// Minutes between waking up and the pre-dawn prayer.
pub const WAKE_BEFORE_PRE_DAWN_MINUTES: i64 = 60;
/// Minutes between the evening prayer and the default bedtime.
pub const BEDTIME_AFTER_EVENING_MINUTES: i64 = 120;
/// Length of one sleep cycle.
pub const SLEEP_CYCLE_MINUTES: u32 = 90;
/// Night sleep below this is reduced.
pub const RECOMMENDED_SLEEP_MINUTES: u32 = 7 * 60;
/// Overrides with an hour below this are placed on the next calendar day.
pub const NEXT_DAY_BEFORE_HOUR: u32 = 12;

/// No caffeine within this many hours of bedtime.
pub const CAFFEINE_CUTOFF_HOURS: i64 = 6;
pub const CAFFEINE_DAILY_MAX_MG: u32 = 400;
pub const CAFFEINE_SUHOOR_MG: (u32, u32) = (200, 300);
pub const CAFFEINE_IFTAR_MG: (u32, u32) = (100, 200);
pub const CAFFEINE_PREFERRED: [CaffeineWindow; 2] =
    [CaffeineWindow::Suhoor, CaffeineWindow::AfterIftar];

/// Short afternoon nap bounds.
pub const SHORT_NAP_MINUTES: (u32, u32) = (20, 30);

pub const NAP_TIPS: [&str; 4] = [
    "Find a quiet, dark place for your nap",
    "Set an alarm to avoid oversleeping",
    "Avoid napping too close to bedtime",
    "Use a sleep mask and earplugs if needed",
];
