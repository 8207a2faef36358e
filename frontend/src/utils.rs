use analytics::GrowthRate;
use chrono::{FixedOffset, Offset, Utc};

pub use analytics::utils::{format_date, format_duration, format_number};

/// The browser's current UTC offset. `getTimezoneOffset` counts minutes
/// west of UTC, so the sign flips.
pub fn local_offset() -> FixedOffset {
    let minutes_west = js_sys::Date::new_0().get_timezone_offset();
    FixedOffset::west_opt((minutes_west * 60.0) as i32).unwrap_or_else(|| Utc.fix())
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

pub fn format_growth(rate: GrowthRate) -> String {
    match rate {
        GrowthRate::Change(pct) => format!("{pct:+.1}%"),
        GrowthRate::InsufficientData => "No data".to_string(),
    }
}

pub fn growth_color(rate: GrowthRate) -> &'static str {
    match rate {
        GrowthRate::Change(pct) if pct > 0.0 => "text-green-600",
        GrowthRate::Change(pct) if pct < 0.0 => "text-red-600",
        _ => "text-gray-500",
    }
}
