use chrono::{
  Datelike,
  NaiveDate,
  NaiveTime,
  Weekday
};

use crate::config::{
  ClockFormat,
  Labels
};
use crate::datetime::{
  add_days,
  start_of_week
};
use crate::event::CalendarEvent;
use crate::state::ViewMode;

pub fn period_title(
  view: ViewMode,
  focus: NaiveDate,
  week_start: Weekday
) -> String {
  match view {
    | ViewMode::Month => {
      focus.format("%B %Y").to_string()
    }
    | ViewMode::Week => {
      let start =
        start_of_week(focus, week_start);
      let end = add_days(start, 6);
      if start.year() != end.year() {
        format!(
          "{} - {}",
          start.format("%b %-d, %Y"),
          end.format("%b %-d, %Y")
        )
      } else if start.month() != end.month()
      {
        format!(
          "{} - {}",
          start.format("%b %-d"),
          end.format("%b %-d, %Y")
        )
      } else {
        format!(
          "{} - {}",
          start.format("%b %-d"),
          end.format("%-d, %Y")
        )
      }
    }
    | ViewMode::Day => {
      focus
        .format("%A, %B %-d, %Y")
        .to_string()
    }
  }
}

pub fn format_event_date(
  event: &CalendarEvent
) -> String {
  let start = event.start.date();
  let end = event.end.date();
  if end > start {
    format!(
      "{} - {}",
      start.format("%A, %B %-d, %Y"),
      end.format("%A, %B %-d, %Y")
    )
  } else {
    start
      .format("%A, %B %-d, %Y")
      .to_string()
  }
}

pub fn format_clock(
  time: NaiveTime,
  clock: ClockFormat
) -> String {
  match clock {
    | ClockFormat::TwelveHour => {
      time.format("%-I:%M %p").to_string()
    }
    | ClockFormat::TwentyFourHour => {
      time.format("%H:%M").to_string()
    }
  }
}

pub fn format_time_range(
  event: &CalendarEvent,
  clock: ClockFormat,
  labels: &Labels
) -> String {
  if event.all_day {
    return labels.all_day.clone();
  }

  let start =
    format_clock(event.start_time(), clock);
  if event.end <= event.start {
    return start;
  }
  format!(
    "{start} - {}",
    format_clock(event.end_time(), clock)
  )
}

/// Gutter label for a whole hour (`10 AM` or `10:00`).
pub fn format_hour_label(
  hour: u32,
  clock: ClockFormat
) -> String {
  let Some(time) =
    NaiveTime::from_hms_opt(hour % 24, 0, 0)
  else {
    return String::new();
  };
  match clock {
    | ClockFormat::TwelveHour => {
      time.format("%-I %p").to_string()
    }
    | ClockFormat::TwentyFourHour => {
      time.format("%H:%M").to_string()
    }
  }
}

pub fn weekday_label(
  weekday: Weekday,
  compact: bool
) -> &'static str {
  match (weekday, compact) {
    | (Weekday::Sun, false) => "Sunday",
    | (Weekday::Mon, false) => "Monday",
    | (Weekday::Tue, false) => "Tuesday",
    | (Weekday::Wed, false) => {
      "Wednesday"
    }
    | (Weekday::Thu, false) => "Thursday",
    | (Weekday::Fri, false) => "Friday",
    | (Weekday::Sat, false) => "Saturday",
    | (Weekday::Sun, true) => "Sun",
    | (Weekday::Mon, true) => "Mon",
    | (Weekday::Tue, true) => "Tue",
    | (Weekday::Wed, true) => "Wed",
    | (Weekday::Thu, true) => "Thu",
    | (Weekday::Fri, true) => "Fri",
    | (Weekday::Sat, true) => "Sat"
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;

  fn date(
    y: i32,
    m: u32,
    d: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d)
      .expect("valid date")
  }

  fn event(
    start: (u32, u32),
    end: (u32, u32)
  ) -> CalendarEvent {
    let day = date(2024, 3, 4);
    CalendarEvent {
      id:          "1".to_string(),
      title:       "Standup".to_string(),
      description: String::new(),
      location:    String::new(),
      link:        String::new(),
      all_day:     false,
      start:       day
        .and_hms_opt(start.0, start.1, 0)
        .expect("valid start"),
      end:         day
        .and_hms_opt(end.0, end.1, 0)
        .expect("valid end")
    }
  }

  #[test]
  fn titles_per_view() {
    let focus = date(2024, 3, 4);
    assert_eq!(
      period_title(
        ViewMode::Month,
        focus,
        Weekday::Sun
      ),
      "March 2024"
    );
    assert_eq!(
      period_title(
        ViewMode::Week,
        focus,
        Weekday::Sun
      ),
      "Mar 3 - 9, 2024"
    );
    assert_eq!(
      period_title(
        ViewMode::Week,
        date(2024, 2, 28),
        Weekday::Sun
      ),
      "Feb 25 - Mar 2, 2024"
    );
    assert_eq!(
      period_title(
        ViewMode::Day,
        focus,
        Weekday::Sun
      ),
      "Monday, March 4, 2024"
    );
  }

  #[test]
  fn time_range_per_clock() {
    let labels = Labels::default();
    let standup = event((9, 0), (9, 30));
    assert_eq!(
      format_time_range(
        &standup,
        ClockFormat::TwelveHour,
        &labels
      ),
      "9:00 AM - 9:30 AM"
    );
    assert_eq!(
      format_time_range(
        &standup,
        ClockFormat::TwentyFourHour,
        &labels
      ),
      "09:00 - 09:30"
    );

    let instant = event((14, 0), (14, 0));
    assert_eq!(
      format_time_range(
        &instant,
        ClockFormat::TwelveHour,
        &labels
      ),
      "2:00 PM"
    );

    let mut holiday = standup.clone();
    holiday.all_day = true;
    assert_eq!(
      format_time_range(
        &holiday,
        ClockFormat::TwelveHour,
        &labels
      ),
      "All day"
    );
  }

  #[test]
  fn hour_labels() {
    assert_eq!(
      format_hour_label(
        13,
        ClockFormat::TwelveHour
      ),
      "1 PM"
    );
    assert_eq!(
      format_hour_label(
        9,
        ClockFormat::TwentyFourHour
      ),
      "09:00"
    );
  }

  #[test]
  fn event_date_spans_days() {
    let mut trip = event((9, 0), (10, 0));
    assert_eq!(
      format_event_date(&trip),
      "Monday, March 4, 2024"
    );
    trip.end = date(2024, 3, 6)
      .and_hms_opt(10, 0, 0)
      .expect("valid end");
    assert_eq!(
      format_event_date(&trip),
      "Monday, March 4, 2024 - \
       Wednesday, March 6, 2024"
    );
  }
}
