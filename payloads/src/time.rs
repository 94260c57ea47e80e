//! Play-time tuples as sent by the backend.
//!
//! The backend serializes local date-times as
//! `[year, month, day, hour?, minute?]` with a 1-based month.

use jiff::civil::{Date, DateTime, Time};
use jiff::tz::TimeZone;
use serde::{Deserialize, Deserializer, Serialize};

/// An explicit `null` decodes to an empty tuple, the same as a missing
/// field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct PlayTime(pub Vec<i32>);

impl<'de> Deserialize<'de> for PlayTime {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let parts = Option::<Vec<i32>>::deserialize(deserializer)?;
        Ok(Self(parts.unwrap_or_default()))
    }
}

impl PlayTime {
    pub fn new(parts: impl Into<Vec<i32>>) -> Self {
        Self(parts.into())
    }

    /// The calendar day, if the tuple has a valid year, month and day.
    pub fn date(&self) -> Option<Date> {
        match self.0.as_slice() {
            [year, month, day, ..] => Date::new(
                i16::try_from(*year).ok()?,
                i8::try_from(*month).ok()?,
                i8::try_from(*day).ok()?,
            )
            .ok(),
            _ => None,
        }
    }

    /// Hour and minute of day. Both must be present.
    pub fn time(&self) -> Option<Time> {
        match self.0.as_slice() {
            [_, _, _, hour, minute, ..] => Time::new(
                i8::try_from(*hour).ok()?,
                i8::try_from(*minute).ok()?,
                0,
                0,
            )
            .ok(),
            _ => None,
        }
    }

    /// Full local date-time; requires all five elements.
    pub fn datetime(&self) -> Option<DateTime> {
        Some(self.date()?.to_datetime(self.time()?))
    }

    /// Milliseconds since the Unix epoch, interpreting the tuple in `tz`.
    pub fn epoch_millis(&self, tz: &TimeZone) -> Option<i64> {
        let zoned = self.datetime()?.to_zoned(tz.clone()).ok()?;
        Some(zoned.timestamp().as_millisecond())
    }

    /// Formats like `Fri, May 10, 2:30 PM`.
    pub fn display(&self, tz: &TimeZone) -> Option<String> {
        let zoned = self.datetime()?.to_zoned(tz.clone()).ok()?;
        Some(zoned.strftime("%a, %b %-d, %-I:%M %p").to_string())
    }
}

impl From<DateTime> for PlayTime {
    fn from(dt: DateTime) -> Self {
        Self(vec![
            dt.year().into(),
            dt.month().into(),
            dt.day().into(),
            dt.hour().into(),
            dt.minute().into(),
        ])
    }
}
