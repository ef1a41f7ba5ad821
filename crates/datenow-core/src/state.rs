use chrono::NaiveDate;
use tracing::debug;

use crate::config::{
  CalendarConfig,
  NavigationConfig
};
use crate::datetime::add_days;
use crate::event::{
  CalendarEvent,
  EventParser
};

pub const ATTR_EVENTS: &str = "data-events";
pub const ATTR_DEFAULT_VIEW: &str =
  "data-default-view";
pub const ATTR_SHOW_WEEKENDS: &str =
  "data-show-weekends";
pub const ATTR_EVENT_LIMIT: &str =
  "data-event-limit";
pub const ATTR_HEADLINE: &str =
  "data-headline";
pub const ATTR_SUBHEADLINE: &str =
  "data-subheadline";

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Default,
)]
pub enum ViewMode {
  Day,
  #[default]
  Week,
  Month
}

impl ViewMode {
  pub fn all() -> [Self; 3] {
    [Self::Day, Self::Week, Self::Month]
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Day => "day",
      | Self::Week => "week",
      | Self::Month => "month"
    }
  }

  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    match key
      .trim()
      .to_ascii_lowercase()
      .as_str()
    {
      | "day" => Some(Self::Day),
      | "week" => Some(Self::Week),
      | "month" => Some(Self::Month),
      | _ => None
    }
  }
}

/// Everything one calendar instance renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
  pub events:        Vec<CalendarEvent>,
  pub current_date:  NaiveDate,
  pub view:          ViewMode,
  pub show_weekends: bool,
  pub event_limit:   usize,
  pub headline:      Option<String>,
  pub subheadline:   Option<String>
}

/// Partial update merged by [`ViewState::apply`]. `None` leaves the field
/// as it is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateUpdate {
  pub events:        Option<Vec<CalendarEvent>>,
  pub current_date:  Option<NaiveDate>,
  pub view:          Option<ViewMode>,
  pub show_weekends: Option<bool>,
  pub event_limit:   Option<usize>,
  pub headline:      Option<Option<String>>,
  pub subheadline:   Option<Option<String>>
}

impl StateUpdate {
  pub fn view(view: ViewMode) -> Self {
    Self {
      view: Some(view),
      ..Self::default()
    }
  }

  pub fn current_date(
    date: NaiveDate
  ) -> Self {
    Self {
      current_date: Some(date),
      ..Self::default()
    }
  }

  pub fn show_weekends(
    show: bool
  ) -> Self {
    Self {
      show_weekends: Some(show),
      ..Self::default()
    }
  }

  pub fn is_empty(&self) -> bool {
    self == &Self::default()
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum Navigation {
  Prev,
  Today,
  Next
}

impl ViewState {
  pub fn new(
    events: Vec<CalendarEvent>,
    current_date: NaiveDate,
    config: &CalendarConfig
  ) -> Self {
    Self {
      events,
      current_date,
      view: ViewMode::default(),
      show_weekends: true,
      event_limit: config
        .month_view
        .default_event_limit,
      headline: None,
      subheadline: None
    }
  }

  /// Builds the initial state from a root element's data attributes.
  /// `attr` returns `None` for attributes the element does not carry.
  pub fn from_attributes<F>(
    attr: F,
    today: NaiveDate,
    config: &CalendarConfig,
    parser: &EventParser
  ) -> Self
  where
    F: Fn(&str) -> Option<String>
  {
    let events = attr(ATTR_EVENTS)
      .map(|raw| parser.parse(&raw))
      .unwrap_or_default();
    let mut state =
      Self::new(events, today, config);

    if let Some(raw) =
      attr(ATTR_DEFAULT_VIEW)
    {
      match ViewMode::from_key(&raw) {
        | Some(view) => state.view = view,
        | None => {
          debug!(value = %raw, "unknown default view; keeping week");
        }
      }
    }

    if let Some(raw) =
      attr(ATTR_SHOW_WEEKENDS)
    {
      state.show_weekends =
        !matches!(
          raw.trim(),
          "0" | "false" | ""
        );
    }

    if let Some(raw) = attr(ATTR_EVENT_LIMIT)
    {
      match raw.trim().parse::<usize>() {
        | Ok(limit) if limit > 0 => {
          state.event_limit = limit;
        }
        | _ => {
          debug!(value = %raw, "invalid event limit; using default");
        }
      }
    }

    state.headline =
      attr(ATTR_HEADLINE)
        .and_then(non_blank);
    state.subheadline =
      attr(ATTR_SUBHEADLINE)
        .and_then(non_blank);
    state
  }

  /// Shallow merge. Switching view never moves `current_date`.
  pub fn apply(
    &mut self,
    update: StateUpdate
  ) {
    let StateUpdate {
      events,
      current_date,
      view,
      show_weekends,
      event_limit,
      headline,
      subheadline
    } = update;

    if let Some(events) = events {
      self.events = events;
    }
    if let Some(date) = current_date {
      self.current_date = date;
    }
    if let Some(view) = view {
      self.view = view;
    }
    if let Some(show) = show_weekends {
      self.show_weekends = show;
    }
    if let Some(limit) = event_limit {
      self.event_limit = limit.max(1);
    }
    if let Some(headline) = headline {
      self.headline = headline;
    }
    if let Some(subheadline) = subheadline
    {
      self.subheadline = subheadline;
    }
  }

  pub fn merged(
    mut self,
    update: StateUpdate
  ) -> Self {
    self.apply(update);
    self
  }

  /// The update a header navigation button dispatches. Day and week views
  /// share the weekly step; month steps a fixed number of days.
  pub fn navigate(
    &self,
    nav: Navigation,
    today: NaiveDate,
    steps: &NavigationConfig
  ) -> StateUpdate {
    let step = match self.view {
      | ViewMode::Day | ViewMode::Week => {
        steps.week_step_days
      }
      | ViewMode::Month => {
        steps.month_step_days
      }
    };
    let next = match nav {
      | Navigation::Prev => {
        add_days(
          self.current_date,
          step.saturating_neg()
        )
      }
      | Navigation::Today => today,
      | Navigation::Next => {
        add_days(self.current_date, step)
      }
    };
    StateUpdate::current_date(next)
  }
}

fn non_blank(raw: String) -> Option<String> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    None
  } else {
    Some(trimmed.to_string())
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use super::*;

  fn date(
    y: i32,
    m: u32,
    d: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d)
      .expect("valid date")
  }

  fn state_from(
    attrs: &[(&str, &str)]
  ) -> ViewState {
    let map = attrs
      .iter()
      .map(|(k, v)| {
        (k.to_string(), v.to_string())
      })
      .collect::<HashMap<_, _>>();
    ViewState::from_attributes(
      |name| map.get(name).cloned(),
      date(2024, 3, 4),
      &CalendarConfig::default(),
      &EventParser::default()
    )
  }

  #[test]
  fn missing_attributes_use_defaults() {
    let state = state_from(&[]);
    assert!(state.events.is_empty());
    assert_eq!(state.view, ViewMode::Week);
    assert!(state.show_weekends);
    assert_eq!(state.event_limit, 3);
    assert_eq!(state.headline, None);
    assert_eq!(
      state.current_date,
      date(2024, 3, 4)
    );
  }

  #[test]
  fn reads_every_data_attribute() {
    let state = state_from(&[
      (
        ATTR_EVENTS,
        r#"[{"id":"1","title":"Standup","start":"2024-03-04T09:00:00"}]"#
      ),
      (ATTR_DEFAULT_VIEW, "month"),
      (ATTR_SHOW_WEEKENDS, "0"),
      (ATTR_EVENT_LIMIT, "5"),
      (ATTR_HEADLINE, "Team calendar"),
      (ATTR_SUBHEADLINE, "  ")
    ]);
    assert_eq!(state.events.len(), 1);
    assert_eq!(state.view, ViewMode::Month);
    assert!(!state.show_weekends);
    assert_eq!(state.event_limit, 5);
    assert_eq!(
      state.headline.as_deref(),
      Some("Team calendar")
    );
    assert_eq!(state.subheadline, None);
  }

  #[test]
  fn invalid_attributes_fall_back() {
    let state = state_from(&[
      (ATTR_EVENTS, "{oops"),
      (ATTR_DEFAULT_VIEW, "agenda"),
      (ATTR_EVENT_LIMIT, "0")
    ]);
    assert!(state.events.is_empty());
    assert_eq!(state.view, ViewMode::Week);
    assert_eq!(state.event_limit, 3);
  }

  #[test]
  fn view_switch_keeps_current_date() {
    let mut state = state_from(&[]);
    state.apply(StateUpdate::current_date(
      date(2024, 5, 17)
    ));
    state.apply(StateUpdate::view(
      ViewMode::Month
    ));
    state.apply(StateUpdate::view(
      ViewMode::Week
    ));
    assert_eq!(state.view, ViewMode::Week);
    assert_eq!(
      state.current_date,
      date(2024, 5, 17)
    );
  }

  #[test]
  fn empty_update_changes_nothing() {
    let state = state_from(&[(
      ATTR_HEADLINE,
      "Keep me"
    )]);
    let merged = state
      .clone()
      .merged(StateUpdate::default());
    assert!(
      StateUpdate::default().is_empty()
    );
    assert_eq!(merged, state);
  }

  #[test]
  fn navigation_steps_follow_view() {
    let steps =
      NavigationConfig::default();
    let today = date(2024, 3, 4);
    let mut state = state_from(&[]);

    for (view, expected) in [
      (ViewMode::Day, date(2024, 3, 11)),
      (ViewMode::Week, date(2024, 3, 11)),
      (ViewMode::Month, date(2024, 4, 3))
    ] {
      state.view = view;
      let update = state.navigate(
        Navigation::Next,
        today,
        &steps
      );
      assert_eq!(
        update.current_date,
        Some(expected),
        "{view:?}"
      );
    }

    state.view = ViewMode::Month;
    state.current_date = date(2024, 9, 1);
    assert_eq!(
      state
        .navigate(
          Navigation::Prev,
          today,
          &steps
        )
        .current_date,
      Some(date(2024, 8, 2))
    );
    assert_eq!(
      state
        .navigate(
          Navigation::Today,
          today,
          &steps
        )
        .current_date,
      Some(today)
    );
  }

  #[test]
  fn oversized_steps_do_not_move_or_panic() {
    let steps = NavigationConfig {
      week_step_days:  i64::MAX,
      month_step_days: i64::MAX
    };
    let state = state_from(&[]);
    for nav in [
      Navigation::Prev,
      Navigation::Next
    ] {
      assert_eq!(
        state
          .navigate(
            nav,
            date(2024, 3, 4),
            &steps
          )
          .current_date,
        Some(state.current_date)
      );
    }
  }
}
