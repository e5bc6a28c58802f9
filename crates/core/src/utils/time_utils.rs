use chrono::{Datelike, NaiveDate, Weekday};

/// Returns every date of the given calendar month, or `None` for an invalid month.
pub fn get_days_in_month(year: i32, month: u32) -> Option<Vec<NaiveDate>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let mut days = Vec::with_capacity(31);
    let mut current = first;
    while current.month() == month {
        days.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    Some(days)
}

/// Counts the days of a month that do not fall on one of `closed_weekdays`.
pub fn open_days_in_month(year: i32, month: u32, closed_weekdays: &[Weekday]) -> Option<u32> {
    let days = get_days_in_month(year, month)?;
    let open = days
        .iter()
        .filter(|d| !closed_weekdays.contains(&d.weekday()))
        .count();
    Some(open as u32)
}
