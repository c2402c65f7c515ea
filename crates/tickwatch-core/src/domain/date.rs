use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::well_known::Iso8601;
use time::{Date, Duration, OffsetDateTime};

use crate::ValidationError;

/// ISO calendar date (`YYYY-MM-DD`) with day-level arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(Date);

impl CalendarDate {
    /// Current calendar date in UTC.
    pub fn today_utc() -> Self {
        Self(OffsetDateTime::now_utc().date())
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let parsed =
            Date::parse(input, &Iso8601::DATE).map_err(|_| ValidationError::InvalidDate {
                value: input.to_owned(),
            })?;
        Ok(Self(parsed))
    }

    /// The date `days` whole days earlier, saturating at the calendar range.
    pub fn minus_days(self, days: u32) -> Self {
        self.0
            .checked_sub(Duration::days(i64::from(days)))
            .map_or(self, Self)
    }

    pub fn next_day(self) -> Self {
        self.0.next_day().map_or(self, Self)
    }

    pub fn into_inner(self) -> Date {
        self.0
    }

    pub fn format_iso(self) -> String {
        self.0
            .format(&Iso8601::DATE)
            .unwrap_or_else(|_| String::from("<unformattable>"))
    }
}

impl From<Date> for CalendarDate {
    fn from(value: Date) -> Self {
        Self(value)
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_iso())
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_iso())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_date() {
        let parsed = CalendarDate::parse("2024-03-09").expect("must parse");
        assert_eq!(parsed.format_iso(), "2024-03-09");
    }

    #[test]
    fn rejects_malformed_date() {
        let err = CalendarDate::parse("03/09/2024").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidDate { .. }));
    }

    #[test]
    fn subtracts_whole_days() {
        let date = CalendarDate::parse("2024-03-01").expect("must parse");
        assert_eq!(date.minus_days(1).format_iso(), "2024-02-29");
        assert_eq!(date.minus_days(30).format_iso(), "2024-01-31");
    }

    #[test]
    fn orders_chronologically() {
        let earlier = CalendarDate::parse("2024-03-08").expect("must parse");
        let later = CalendarDate::parse("2024-03-09").expect("must parse");
        assert!(earlier < later);
        assert_eq!(earlier.next_day(), later);
    }

    #[test]
    fn serde_round_trips_as_string() {
        let date = CalendarDate::parse("2024-12-31").expect("must parse");
        let json = serde_json::to_string(&date).expect("must serialize");
        assert_eq!(json, "\"2024-12-31\"");
        let back: CalendarDate = serde_json::from_str(&json).expect("must deserialize");
        assert_eq!(back, date);
    }
}
