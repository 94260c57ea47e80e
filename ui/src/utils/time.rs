use jiff::civil::{Date, Time};
use jiff::tz::TimeZone;
use payloads::responses::Booking;

/// The browser's time zone, falling back to UTC if it cannot be determined.
pub fn local_time_zone() -> TimeZone {
    TimeZone::try_system().unwrap_or(TimeZone::UTC)
}

/// Parse the value of an `<input type="date">`. Empty means no filter.
pub fn parse_date_input(value: &str) -> Option<Date> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse() {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::warn!("ignoring date input {value:?}: {e}");
            None
        }
    }
}

/// Parse the value of an `<input type="time">` (`HH:MM`, optionally with
/// seconds). Empty means no filter.
pub fn parse_time_input(value: &str) -> Option<Time> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse() {
        Ok(time) => Some(time),
        Err(e) => {
            tracing::warn!("ignoring time input {value:?}: {e}");
            None
        }
    }
}

/// `HH:MM-HH:MM` for a booking's slot, or an empty string if the backend
/// left the times out.
pub fn format_booking_slot(booking: &Booking) -> String {
    let clock = |parts: &[i32]| match parts {
        [hour, minute, ..] => Some(format!("{hour:02}:{minute:02}")),
        _ => None,
    };
    match (clock(&booking.start_time), clock(&booking.end_time)) {
        (Some(start), Some(end)) => format!("{start}-{end}"),
        (Some(start), None) => start,
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::{date, time};

    #[test]
    fn form_inputs() {
        assert_eq!(parse_date_input("2024-05-10"), Some(date(2024, 5, 10)));
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("10/05/2024"), None);
        assert_eq!(parse_time_input("14:30"), Some(time(14, 30, 0, 0)));
        assert_eq!(parse_time_input(" "), None);
    }

    #[test]
    fn booking_slots() {
        let booking: Booking = serde_json::from_value(serde_json::json!({
            "id": "b1",
            "startTime": [9, 0],
            "endTime": [10, 30]
        }))
        .unwrap();
        assert_eq!(format_booking_slot(&booking), "09:00-10:30");

        let no_times: Booking =
            serde_json::from_value(serde_json::json!({"id": "b2"})).unwrap();
        assert_eq!(format_booking_slot(&no_times), "");
    }
}
