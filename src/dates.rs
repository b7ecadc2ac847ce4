//! Date Helpers
//!
//! Due-date classification and display formatting via the JS Date API.

use wasm_bindgen::JsValue;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DueStatus {
    Overdue,
    Soon,
    Upcoming,
}

/// Classify a due date by whole days remaining (negative = past).
pub fn classify_due(days_remaining: i64) -> DueStatus {
    if days_remaining < 0 {
        DueStatus::Overdue
    } else if days_remaining <= 3 {
        DueStatus::Soon
    } else {
        DueStatus::Upcoming
    }
}

pub fn due_icon(status: DueStatus) -> &'static str {
    match status {
        DueStatus::Overdue => "warning",
        DueStatus::Soon => "schedule",
        DueStatus::Upcoming => "calendar_today",
    }
}

pub fn due_class(status: DueStatus) -> &'static str {
    match status {
        DueStatus::Overdue => "due-chip overdue",
        DueStatus::Soon => "due-chip soon",
        DueStatus::Upcoming => "due-chip upcoming",
    }
}

const MS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;

fn at_midnight(date: &js_sys::Date) -> f64 {
    date.set_hours(0);
    date.set_minutes(0);
    date.set_seconds(0);
    date.set_milliseconds(0);
    date.get_time()
}

/// Whole days from today to the given ISO date, both at local midnight.
/// None when the string does not parse.
pub fn days_until(date_str: &str) -> Option<i64> {
    let due = js_sys::Date::new(&JsValue::from_str(date_str));
    if due.get_time().is_nan() {
        return None;
    }
    let due_ms = at_midnight(&due);
    let now_ms = at_midnight(&js_sys::Date::new_0());
    Some(((due_ms - now_ms) / MS_PER_DAY).floor() as i64)
}

fn locale_date(date_str: &str, options: &js_sys::Object) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(date_str));
    if date.get_time().is_nan() {
        return String::new();
    }
    String::from(date.to_locale_date_string("en-US", options))
}

/// "Mar 07" style, for card chips
pub fn format_short_date(date_str: &str) -> String {
    let options = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&options, &"month".into(), &"short".into());
    let _ = js_sys::Reflect::set(&options, &"day".into(), &"2-digit".into());
    locale_date(date_str, &options)
}

/// "Mar 7, 2026" style, for the archive list
pub fn format_long_date(date_str: &str) -> String {
    let options = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&options, &"month".into(), &"short".into());
    let _ = js_sys::Reflect::set(&options, &"day".into(), &"numeric".into());
    let _ = js_sys::Reflect::set(&options, &"year".into(), &"numeric".into());
    locale_date(date_str, &options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yesterday_is_overdue() {
        assert_eq!(classify_due(-1), DueStatus::Overdue);
    }

    #[test]
    fn today_counts_as_soon() {
        assert_eq!(classify_due(0), DueStatus::Soon);
    }

    #[test]
    fn three_days_out_is_still_soon() {
        assert_eq!(classify_due(3), DueStatus::Soon);
    }

    #[test]
    fn four_days_out_is_upcoming() {
        assert_eq!(classify_due(4), DueStatus::Upcoming);
    }
}
