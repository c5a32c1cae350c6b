use chrono::NaiveDateTime;

/// Formats a timestamp as a 12-hour wall-clock time, e.g. `10:30 PM`.
pub fn format_clock(at: NaiveDateTime) -> String {
    at.format("%-I:%M %p").to_string()
}
