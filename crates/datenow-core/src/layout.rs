//! Pure layout calculators, one per view.
//!
//! Each function maps the event list plus the anchoring date to a value
//! the renderer walks without doing any date arithmetic of its own. The
//! same inputs always produce an equal layout.

use chrono::{
  Datelike,
  NaiveDate,
  Weekday
};

use crate::config::WeekViewConfig;
use crate::datetime::{
  add_days,
  days_in_month,
  first_day_of_month,
  fractional_hour,
  is_weekend,
  start_of_week
};
use crate::event::CalendarEvent;

/// A timed event positioned inside a week column.
///
/// `top_px` is relative to the first displayed hour and may be negative or
/// exceed the band for events outside it.
#[derive(Debug, Clone, PartialEq)]
pub struct EventBlock<'a> {
  pub event:     &'a CalendarEvent,
  pub top_px:    f64,
  pub height_px: f64
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekColumn<'a> {
  pub date:     NaiveDate,
  pub is_today: bool,
  pub all_day:  Vec<&'a CalendarEvent>,
  pub blocks:   Vec<EventBlock<'a>>
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekLayout<'a> {
  pub week_start:     NaiveDate,
  pub hours:          Vec<u32>,
  pub row_height_px:  f64,
  pub band_height_px: f64,
  pub columns:        Vec<WeekColumn<'a>>
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayLayout<'a> {
  pub date:   NaiveDate,
  pub events: Vec<&'a CalendarEvent>
}

impl DayLayout<'_> {
  pub fn is_empty(&self) -> bool {
    self.events.is_empty()
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthDay<'a> {
  pub date:         NaiveDate,
  pub is_today:     bool,
  pub visible:      Vec<&'a CalendarEvent>,
  pub hidden_count: usize
}

impl MonthDay<'_> {
  pub fn total(&self) -> usize {
    self.visible.len() + self.hidden_count
  }

  pub fn has_more(&self) -> bool {
    self.hidden_count > 0
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthLayout<'a> {
  pub month_start:     NaiveDate,
  pub weekdays:        Vec<Weekday>,
  pub leading_blanks:  usize,
  pub trailing_blanks: usize,
  pub days:            Vec<MonthDay<'a>>
}

pub fn week_layout<'a>(
  events: &'a [CalendarEvent],
  current_date: NaiveDate,
  show_weekends: bool,
  grid: &WeekViewConfig,
  today: NaiveDate
) -> WeekLayout<'a> {
  let week_start = start_of_week(
    current_date,
    grid.week_start_day()
  );

  let columns = (0_i64..7_i64)
    .map(|offset| {
      add_days(week_start, offset)
    })
    .filter(|day| {
      show_weekends || !is_weekend(*day)
    })
    .map(|date| {
      let mut all_day = Vec::new();
      let mut blocks = Vec::new();
      for event in events
        .iter()
        .filter(|event| {
          event.start_date() == date
        })
      {
        if event.all_day {
          all_day.push(event);
        } else {
          blocks.push(place_block(
            event, grid
          ));
        }
      }
      WeekColumn {
        date,
        is_today: date == today,
        all_day,
        blocks
      }
    })
    .collect();

  WeekLayout {
    week_start,
    hours: (grid.hour_start
      ..grid.hour_end())
      .collect(),
    row_height_px: grid.row_height_px,
    band_height_px: f64::from(
      grid.hour_count
    ) * grid.row_height_px,
    columns
  }
}

fn place_block<'a>(
  event: &'a CalendarEvent,
  grid: &WeekViewConfig
) -> EventBlock<'a> {
  let start =
    fractional_hour(event.start_time());
  let end =
    fractional_hour(event.end_time());
  let top_px = (start
    - f64::from(grid.hour_start))
    * grid.row_height_px;
  let height_px = ((end - start)
    * grid.row_height_px)
    .max(grid.min_event_height_px);

  EventBlock {
    event,
    top_px,
    height_px
  }
}

pub fn day_layout(
  events: &[CalendarEvent],
  date: NaiveDate
) -> DayLayout<'_> {
  let mut matching = events
    .iter()
    .filter(|event| {
      event.start_date() == date
    })
    .collect::<Vec<_>>();
  matching.sort_by_key(|event| event.start);

  DayLayout {
    date,
    events: matching
  }
}

pub fn month_layout(
  events: &[CalendarEvent],
  current_date: NaiveDate,
  event_limit: usize,
  week_start: Weekday,
  today: NaiveDate
) -> MonthLayout<'_> {
  let year = current_date.year();
  let month = current_date.month();
  let month_start =
    first_day_of_month(year, month);
  let day_count =
    days_in_month(year, month) as usize;
  let limit = event_limit.max(1);

  let mut by_day: Vec<
    Vec<&CalendarEvent>
  > = vec![Vec::new(); day_count];
  for event in events.iter().filter(|event| {
    let start = event.start_date();
    start.year() == year
      && start.month() == month
  }) {
    let index =
      event.start_date().day0() as usize;
    if let Some(bucket) =
      by_day.get_mut(index)
    {
      bucket.push(event);
    }
  }

  let days = by_day
    .into_iter()
    .enumerate()
    .map(|(offset, mut day_events)| {
      day_events.sort_by_key(|event| {
        event.start
      });
      let hidden_count =
        day_events.len().saturating_sub(limit);
      day_events.truncate(limit);
      let date =
        add_days(month_start, offset as i64);
      MonthDay {
        date,
        is_today: date == today,
        visible: day_events,
        hidden_count
      }
    })
    .collect::<Vec<_>>();

  let leading_blanks = (7
    + month_start
      .weekday()
      .num_days_from_monday()
    - week_start.num_days_from_monday())
    as usize
    % 7;
  let trailing_blanks =
    (7 - (leading_blanks + day_count) % 7)
      % 7;

  let weekdays = (0..7)
    .scan(week_start, |day, _| {
      let current = *day;
      *day = day.succ();
      Some(current)
    })
    .collect();

  MonthLayout {
    month_start,
    weekdays,
    leading_blanks,
    trailing_blanks,
    days
  }
}
