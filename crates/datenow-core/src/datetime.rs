use std::sync::OnceLock;

use chrono::{
  DateTime,
  Datelike,
  Duration,
  FixedOffset,
  NaiveDate,
  NaiveDateTime,
  NaiveTime,
  Timelike,
  Utc,
  Weekday
};
use chrono_tz::Tz;
use regex::Regex;

const NAIVE_STAMP_FORMATS: [&str; 4] = [
  "%Y-%m-%dT%H:%M:%S%.f",
  "%Y-%m-%dT%H:%M",
  "%Y-%m-%d %H:%M:%S%.f",
  "%Y-%m-%d %H:%M"
];

/// Wall clock the calendar renders in.
///
/// `Local` follows the host environment (the browser, when compiled to
/// wasm); `Named` pins every conversion to an IANA zone.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub enum DisplayZone {
  #[default]
  Local,
  Named(Tz)
}

impl DisplayZone {
  pub fn today(self) -> NaiveDate {
    match self {
      | Self::Local => {
        chrono::Local::now().date_naive()
      }
      | Self::Named(tz) => {
        Utc::now()
          .with_timezone(&tz)
          .date_naive()
      }
    }
  }

  pub fn localize(
    self,
    instant: DateTime<FixedOffset>
  ) -> NaiveDateTime {
    match self {
      | Self::Local => {
        instant
          .with_timezone(&chrono::Local)
          .naive_local()
      }
      | Self::Named(tz) => {
        instant
          .with_timezone(&tz)
          .naive_local()
      }
    }
  }
}

pub fn parse_timezone(
  raw: &str,
  source: &str
) -> Option<Tz> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return None;
  }

  match trimmed.parse::<Tz>() {
    | Ok(tz) => Some(tz),
    | Err(error) => {
      tracing::error!(
        source,
        timezone = %trimmed,
        error = %error,
        "invalid timezone id"
      );
      None
    }
  }
}

/// A parsed event boundary. `has_time` is false for date-only input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventStamp {
  pub value:    NaiveDateTime,
  pub has_time: bool
}

fn date_only_regex()
-> Option<&'static Regex> {
  static DATE_ONLY: OnceLock<
    Option<Regex>
  > = OnceLock::new();
  DATE_ONLY
    .get_or_init(|| {
      Regex::new(
        r"^(?P<year>\d{4})[-/.](?P<month>\d{1,2})[-/.](?P<day>\d{1,2})$"
      )
      .ok()
    })
    .as_ref()
}

/// Parses `YYYY-MM-DD`, `YYYY/M/D` and friends without going through a
/// locale-sensitive path. Separators and zero padding are normalized first.
pub fn parse_date_only(
  raw: &str
) -> Option<NaiveDate> {
  let caps =
    date_only_regex()?.captures(raw)?;
  let year = caps
    .name("year")?
    .as_str()
    .parse()
    .ok()?;
  let month = caps
    .name("month")?
    .as_str()
    .parse()
    .ok()?;
  let day = caps
    .name("day")?
    .as_str()
    .parse()
    .ok()?;
  NaiveDate::from_ymd_opt(
    year, month, day
  )
}

pub fn parse_event_stamp(
  raw: &str,
  zone: DisplayZone
) -> Option<EventStamp> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return None;
  }

  if let Some(date) =
    parse_date_only(trimmed)
  {
    return Some(EventStamp {
      value:    date
        .and_time(NaiveTime::default()),
      has_time: false
    });
  }

  if let Ok(instant) =
    DateTime::parse_from_rfc3339(
      trimmed
    )
    .or_else(|_| {
      DateTime::parse_from_str(
        trimmed,
        "%Y-%m-%dT%H:%M:%S%z"
      )
    })
  {
    return Some(EventStamp {
      value:    zone.localize(instant),
      has_time: true
    });
  }

  NAIVE_STAMP_FORMATS.iter().find_map(
    |format| {
      NaiveDateTime::parse_from_str(
        trimmed, format
      )
      .ok()
      .map(|value| {
        EventStamp {
          value,
          has_time: true
        }
      })
    }
  )
}

pub fn week_start_from_key(
  raw: &str
) -> Weekday {
  match raw
    .trim()
    .to_ascii_lowercase()
    .as_str()
  {
    | "monday" | "mon" => Weekday::Mon,
    | "saturday" | "sat" => {
      Weekday::Sat
    }
    | _ => Weekday::Sun
  }
}

/// Shifts `date` by whole days. A shift that leaves chrono's range keeps
/// the date unchanged.
pub fn add_days(
  date: NaiveDate,
  days: i64
) -> NaiveDate {
  Duration::try_days(days)
    .and_then(|delta| {
      date.checked_add_signed(delta)
    })
    .unwrap_or(date)
}

pub fn first_day_of_month(
  year: i32,
  month: u32
) -> NaiveDate {
  NaiveDate::from_ymd_opt(
    year, month, 1
  )
  .unwrap_or(NaiveDate::MIN)
}

pub fn last_day_of_month(
  year: i32,
  month: u32
) -> NaiveDate {
  let (next_year, next_month) =
    if month >= 12 {
      (year.saturating_add(1), 1_u32)
    } else {
      (year, month + 1)
    };
  add_days(
    first_day_of_month(
      next_year, next_month
    ),
    -1
  )
}

pub fn days_in_month(
  year: i32,
  month: u32
) -> u32 {
  last_day_of_month(year, month).day()
}

pub fn start_of_week(
  day: NaiveDate,
  week_start: Weekday
) -> NaiveDate {
  let day_idx = day
    .weekday()
    .num_days_from_monday()
    as i64;
  let start_idx = week_start
    .num_days_from_monday()
    as i64;
  let diff =
    (7 + day_idx - start_idx) % 7;
  add_days(day, -diff)
}

/// Hours since midnight with minutes as the fraction (09:30 -> 9.5).
pub fn fractional_hour(
  time: NaiveTime
) -> f64 {
  f64::from(time.hour())
    + f64::from(time.minute()) / 60.0
}

pub fn is_weekend(day: NaiveDate) -> bool {
  matches!(
    day.weekday(),
    Weekday::Sat | Weekday::Sun
  )
}
