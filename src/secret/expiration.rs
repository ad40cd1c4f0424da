use crate::error::{Result, StashError};
use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Relative lifetime picked in the "Delete after" menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpirationChoice {
    Hour,
    Day,
    #[default]
    Week,
    Month,
    Year,
}

/// How far past "now" a choice lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpirationOffset {
    /// Elapsed time.
    Hours(u32),
    /// Same wall-clock time, n calendar days later.
    Days(u32),
    /// Calendar months; a day past the end of the target month rolls forward.
    Months(u32),
}

impl ExpirationChoice {
    pub const ALL: [ExpirationChoice; 5] = [
        ExpirationChoice::Hour,
        ExpirationChoice::Day,
        ExpirationChoice::Week,
        ExpirationChoice::Month,
        ExpirationChoice::Year,
    ];

    pub fn offset(&self) -> ExpirationOffset {
        match self {
            Self::Hour => ExpirationOffset::Hours(1),
            Self::Day => ExpirationOffset::Days(1),
            Self::Week => ExpirationOffset::Days(7),
            Self::Month => ExpirationOffset::Months(1),
            // Twelve months rather than one year, kept on purpose.
            Self::Year => ExpirationOffset::Months(12),
        }
    }

    pub fn expires_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Result<DateTime<Tz>> {
        self.offset().apply(now)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Hour => "1 hour",
            Self::Day => "1 day",
            Self::Week => "1 week",
            Self::Month => "1 month",
            Self::Year => "1 year",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Hour => Self::Day,
            Self::Day => Self::Week,
            Self::Week => Self::Month,
            Self::Month => Self::Year,
            Self::Year => Self::Hour,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Hour => Self::Year,
            Self::Day => Self::Hour,
            Self::Week => Self::Day,
            Self::Month => Self::Week,
            Self::Year => Self::Month,
        }
    }
}

impl fmt::Display for ExpirationChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ExpirationChoice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hour" => Ok(Self::Hour),
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            _ => Err(format!(
                "Unknown expiration: {} (expected hour, day, week, month or year)",
                s
            )),
        }
    }
}

impl ExpirationOffset {
    pub fn apply<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Result<DateTime<Tz>> {
        match *self {
            Self::Hours(n) => {
                let delta = TimeDelta::try_hours(i64::from(n))
                    .ok_or(StashError::ExpirationOutOfRange)?;
                now.clone()
                    .checked_add_signed(delta)
                    .ok_or(StashError::ExpirationOutOfRange)
            }
            Self::Days(n) => {
                let naive = now
                    .naive_local()
                    .checked_add_days(Days::new(u64::from(n)))
                    .ok_or(StashError::ExpirationOutOfRange)?;
                resolve_local(&now.timezone(), naive)
            }
            Self::Months(n) => {
                let naive = add_months_rolling(now.naive_local(), n)
                    .ok_or(StashError::ExpirationOutOfRange)?;
                resolve_local(&now.timezone(), naive)
            }
        }
    }
}

fn add_months_rolling(naive: NaiveDateTime, months: u32) -> Option<NaiveDateTime> {
    let date = naive.date();
    let total = i64::from(date.year()) * 12 + i64::from(date.month0()) + i64::from(months);
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month0 = u32::try_from(total.rem_euclid(12)).ok()?;

    let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1)?;
    let shifted = first.checked_add_days(Days::new(u64::from(date.day0())))?;
    Some(shifted.and_time(naive.time()))
}

/// Map a wall-clock time back into `tz`. Times skipped by a DST jump move
/// forward by an hour.
fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Result<DateTime<Tz>> {
    if let Some(dt) = tz.from_local_datetime(&naive).earliest() {
        return Ok(dt);
    }
    let bumped = naive
        .checked_add_signed(TimeDelta::hours(1))
        .ok_or(StashError::ExpirationOutOfRange)?;
    tz.from_local_datetime(&bumped)
        .earliest()
        .ok_or(StashError::ExpirationOutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Offset, Utc};
    use chrono_tz::America::New_York;

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_offset_table_from_new_year() {
        let now = utc(2024, 1, 1, 0);
        let expected = [
            (ExpirationChoice::Hour, utc(2024, 1, 1, 1)),
            (ExpirationChoice::Day, utc(2024, 1, 2, 0)),
            (ExpirationChoice::Week, utc(2024, 1, 8, 0)),
            (ExpirationChoice::Month, utc(2024, 2, 1, 0)),
            (ExpirationChoice::Year, utc(2025, 1, 1, 0)),
        ];

        for (choice, at) in expected {
            assert_eq!(choice.expires_at(&now).unwrap(), at, "{choice:?}");
        }
    }

    #[test]
    fn test_year_is_twelve_months() {
        assert_eq!(ExpirationChoice::Year.offset(), ExpirationOffset::Months(12));
        assert_eq!(ExpirationChoice::Month.offset(), ExpirationOffset::Months(1));
        assert_eq!(ExpirationChoice::Week.offset(), ExpirationOffset::Days(7));
    }

    #[test]
    fn test_month_end_rolls_into_next_month() {
        let jan31 = utc(2024, 1, 31, 12);
        assert_eq!(
            ExpirationChoice::Month.expires_at(&jan31).unwrap(),
            utc(2024, 3, 2, 12)
        );

        let jan31_non_leap = utc(2023, 1, 31, 12);
        assert_eq!(
            ExpirationChoice::Month.expires_at(&jan31_non_leap).unwrap(),
            utc(2023, 3, 3, 12)
        );
    }

    #[test]
    fn test_leap_day_plus_year() {
        let leap_day = utc(2024, 2, 29, 8);
        assert_eq!(
            ExpirationChoice::Year.expires_at(&leap_day).unwrap(),
            utc(2025, 3, 1, 8)
        );
    }

    #[test]
    fn test_december_wraps_year() {
        let dec = utc(2024, 12, 15, 0);
        assert_eq!(
            ExpirationChoice::Month.expires_at(&dec).unwrap(),
            utc(2025, 1, 15, 0)
        );
    }

    #[test]
    fn test_keeps_time_zone_offset() {
        let tz = FixedOffset::east_opt(5 * 3600).unwrap();
        let now = tz.with_ymd_and_hms(2024, 6, 30, 23, 30, 0).unwrap();
        let later = ExpirationChoice::Day.expires_at(&now).unwrap();

        assert_eq!(later.offset(), &tz);
        assert_eq!(later, tz.with_ymd_and_hms(2024, 7, 1, 23, 30, 0).unwrap());
    }

    fn wall_clock(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn utc_offset_hours<Tz: TimeZone>(dt: &DateTime<Tz>) -> i32 {
        dt.offset().fix().local_minus_utc() / 3600
    }

    #[test]
    fn test_day_into_dst_gap_moves_forward_an_hour() {
        // 2024-03-10 02:00-03:00 does not exist in New York
        let now = New_York.with_ymd_and_hms(2024, 3, 9, 2, 30, 0).unwrap();
        let later = ExpirationChoice::Day.expires_at(&now).unwrap();

        assert_eq!(later.naive_local(), wall_clock(2024, 3, 10, 3, 30));
        assert_eq!(utc_offset_hours(&later), -4);
    }

    #[test]
    fn test_day_into_fall_back_keeps_wall_clock_and_takes_earliest() {
        // 2024-11-03 01:00-02:00 happens twice in New York
        let now = New_York.with_ymd_and_hms(2024, 11, 2, 1, 30, 0).unwrap();
        let later = ExpirationChoice::Day.expires_at(&now).unwrap();

        assert_eq!(later.naive_local(), wall_clock(2024, 11, 3, 1, 30));
        assert_eq!(utc_offset_hours(&later), -4);
        assert_eq!(later.clone() - now, TimeDelta::hours(24));
    }

    #[test]
    fn test_week_across_spring_forward_keeps_wall_clock() {
        let now = New_York.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
        let later = ExpirationChoice::Week.expires_at(&now).unwrap();

        assert_eq!(later.naive_local(), wall_clock(2024, 3, 12, 12, 0));
        assert_eq!(later - now, TimeDelta::hours(7 * 24 - 1));
    }

    #[test]
    fn test_hour_across_transitions_is_elapsed_time() {
        let spring = New_York.with_ymd_and_hms(2024, 3, 10, 1, 30, 0).unwrap();
        let after_spring = ExpirationChoice::Hour.expires_at(&spring).unwrap();
        assert_eq!(after_spring.naive_local(), wall_clock(2024, 3, 10, 3, 30));
        assert_eq!(after_spring - spring, TimeDelta::hours(1));

        let fall = New_York
            .with_ymd_and_hms(2024, 11, 3, 1, 30, 0)
            .earliest()
            .unwrap();
        let after_fall = ExpirationChoice::Hour.expires_at(&fall).unwrap();
        assert_eq!(after_fall.naive_local(), wall_clock(2024, 11, 3, 1, 30));
        assert_eq!(utc_offset_hours(&fall), -4);
        assert_eq!(utc_offset_hours(&after_fall), -5);
    }

    #[test]
    fn test_always_after_now() {
        let now = utc(2031, 10, 31, 23);
        for choice in ExpirationChoice::ALL {
            assert!(choice.expires_at(&now).unwrap() > now, "{choice:?}");
        }
    }

    #[test]
    fn test_out_of_range() {
        let end = DateTime::<Utc>::MAX_UTC;
        assert!(matches!(
            ExpirationChoice::Year.expires_at(&end),
            Err(StashError::ExpirationOutOfRange)
        ));
    }

    #[test]
    fn test_cycle() {
        assert_eq!(ExpirationChoice::Hour.next(), ExpirationChoice::Day);
        assert_eq!(ExpirationChoice::Year.next(), ExpirationChoice::Hour);
        assert_eq!(ExpirationChoice::Hour.prev(), ExpirationChoice::Year);
        for choice in ExpirationChoice::ALL {
            assert_eq!(choice.next().prev(), choice);
        }
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("Month".parse::<ExpirationChoice>(), Ok(ExpirationChoice::Month));
        assert_eq!(" year ".parse::<ExpirationChoice>(), Ok(ExpirationChoice::Year));
        assert!("fortnight".parse::<ExpirationChoice>().is_err());
        assert_eq!(ExpirationChoice::Week.to_string(), "1 week");
        assert_eq!(ExpirationChoice::default(), ExpirationChoice::Week);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ExpirationChoice::Hour).unwrap();
        assert_eq!(json, "\"hour\"");
        let parsed: ExpirationChoice = serde_json::from_str("\"day\"").unwrap();
        assert_eq!(parsed, ExpirationChoice::Day);
    }
}
