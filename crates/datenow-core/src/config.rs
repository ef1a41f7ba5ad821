use anyhow::Context;
use chrono::Weekday;
use serde::Deserialize;
use tracing::{
  debug,
  error,
  info
};

use crate::datetime::{
  DisplayZone,
  parse_timezone,
  week_start_from_key
};
use crate::state::ViewMode;

const EMBEDDED_CONFIG_TOML: &str =
  include_str!("../assets/date-now.toml");

/// Upper bound for a single navigation step (ten years).
const MAX_STEP_DAYS: i64 = 3660;

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct CalendarConfig {
  pub version:    u32,
  pub week_view:  WeekViewConfig,
  pub month_view: MonthViewConfig,
  pub navigation: NavigationConfig,
  pub display:    DisplayConfig,
  pub labels:     Labels
}

/// Geometry of the timed week grid.
#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct WeekViewConfig {
  pub week_start:          String,
  pub hour_start:          u32,
  pub hour_count:          u32,
  pub row_height_px:       f64,
  pub min_event_height_px: f64
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct MonthViewConfig {
  pub default_event_limit: usize
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct NavigationConfig {
  pub week_step_days:  i64,
  pub month_step_days: i64
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Deserialize,
)]
pub enum ClockFormat {
  #[default]
  #[serde(rename = "12h")]
  TwelveHour,
  #[serde(rename = "24h")]
  TwentyFourHour
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct DisplayConfig {
  pub clock:                 ClockFormat,
  pub timezone:              Option<String>,
  pub compact_breakpoint_px: u32,
  pub resize_debounce_ms:    u32,
  /// Add the bundled stylesheet to `<head>` on first mount. Hosts that
  /// ship their own styles turn this off.
  pub inject_styles:         bool
}

/// Every user-visible string. Hosts translate the calendar by shipping a
/// different `[labels]` table.
#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct Labels {
  pub untitled_event: String,
  pub no_events:      String,
  pub no_description: String,
  pub all_day:        String,
  pub open_link:      String,
  pub previous:       String,
  pub today:          String,
  pub next:           String,
  pub show_weekends:  String,
  pub hide_weekends:  String,
  /// `{count}` is replaced with the number of hidden events.
  pub see_more:       String,
  pub close:          String,
  pub day:            String,
  pub week:           String,
  pub month:          String
}

impl Default for CalendarConfig {
  fn default() -> Self {
    Self {
      version:    1,
      week_view:  WeekViewConfig::default(),
      month_view: MonthViewConfig::default(),
      navigation: NavigationConfig::default(),
      display:    DisplayConfig::default(),
      labels:     Labels::default()
    }
  }
}

impl Default for WeekViewConfig {
  fn default() -> Self {
    Self {
      week_start:          "sunday"
        .to_string(),
      hour_start:          10,
      hour_count:          10,
      row_height_px:       48.0,
      min_event_height_px: 24.0
    }
  }
}

impl Default for MonthViewConfig {
  fn default() -> Self {
    Self {
      default_event_limit: 3
    }
  }
}

impl Default for NavigationConfig {
  fn default() -> Self {
    Self {
      week_step_days:  7,
      month_step_days: 30
    }
  }
}

impl Default for DisplayConfig {
  fn default() -> Self {
    Self {
      clock:                 ClockFormat::TwelveHour,
      timezone:              None,
      compact_breakpoint_px: 640,
      resize_debounce_ms:    150,
      inject_styles:         true
    }
  }
}

impl Default for Labels {
  fn default() -> Self {
    Self {
      untitled_event: "Untitled event"
        .to_string(),
      no_events:
        "No events scheduled for this \
         day."
          .to_string(),
      no_description:
        "No description provided."
          .to_string(),
      all_day:        "All day"
        .to_string(),
      open_link:      "Open in calendar"
        .to_string(),
      previous:       "Previous"
        .to_string(),
      today:          "Today".to_string(),
      next:           "Next".to_string(),
      show_weekends:  "Show weekends"
        .to_string(),
      hide_weekends:  "Hide weekends"
        .to_string(),
      see_more:       "+{count} more"
        .to_string(),
      close:          "Close".to_string(),
      day:            "Day".to_string(),
      week:           "Week".to_string(),
      month:          "Month".to_string()
    }
  }
}

impl WeekViewConfig {
  pub fn week_start_day(&self) -> Weekday {
    week_start_from_key(&self.week_start)
  }

  pub fn hour_end(&self) -> u32 {
    self
      .hour_start
      .saturating_add(self.hour_count)
  }
}

impl Labels {
  pub fn view(
    &self,
    view: ViewMode
  ) -> &str {
    match view {
      | ViewMode::Day => &self.day,
      | ViewMode::Week => &self.week,
      | ViewMode::Month => &self.month
    }
  }

  pub fn see_more_text(
    &self,
    count: usize
  ) -> String {
    self
      .see_more
      .replace("{count}", &count.to_string())
  }
}

impl CalendarConfig {
  #[tracing::instrument(skip_all)]
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let mut config =
      toml::from_str::<CalendarConfig>(
        raw
      )
      .context(
        "failed parsing calendar config"
      )?;
    config.sanitize();
    Ok(config)
  }

  /// Loads the configuration bundled with the crate, falling back to the
  /// built-in defaults when it does not parse.
  pub fn load_embedded() -> Self {
    match Self::from_toml_str(
      EMBEDDED_CONFIG_TOML
    ) {
      | Ok(config) => {
        info!(
          version = config.version,
          timezone = ?config.display.timezone,
          week_start = %config.week_view.week_start,
          "loaded calendar config"
        );
        config
      }
      | Err(error) => {
        error!(error = %format!("{error:#}"), "using default calendar config");
        CalendarConfig::default()
      }
    }
  }

  pub fn display_zone(
    &self
  ) -> DisplayZone {
    self
      .display
      .timezone
      .as_deref()
      .and_then(|raw| {
        parse_timezone(
          raw,
          "date-now.toml"
        )
      })
      .map(DisplayZone::Named)
      .unwrap_or_default()
  }

  fn sanitize(&mut self) {
    let defaults = Self::default();

    if self
      .week_view
      .week_start
      .trim()
      .is_empty()
    {
      self.week_view.week_start =
        defaults.week_view.week_start;
    }
    if self.week_view.hour_start > 23 {
      self.week_view.hour_start = 23;
    }
    if self.week_view.hour_count == 0 {
      self.week_view.hour_count = 1;
    }
    if self.week_view.hour_end() > 24 {
      self.week_view.hour_count =
        24 - self.week_view.hour_start;
    }
    if !(self.week_view.row_height_px
      > 0.0)
    {
      self.week_view.row_height_px =
        defaults.week_view.row_height_px;
    }
    if !(self
      .week_view
      .min_event_height_px
      > 0.0)
    {
      self
        .week_view
        .min_event_height_px = defaults
        .week_view
        .min_event_height_px;
    }

    if self.month_view.default_event_limit
      == 0
    {
      self
        .month_view
        .default_event_limit = defaults
        .month_view
        .default_event_limit;
    }

    if self.navigation.week_step_days < 1
    {
      self.navigation.week_step_days =
        defaults
          .navigation
          .week_step_days;
    }
    if self.navigation.month_step_days
      < 1
    {
      self.navigation.month_step_days =
        defaults
          .navigation
          .month_step_days;
    }
    self.navigation.week_step_days = self
      .navigation
      .week_step_days
      .min(MAX_STEP_DAYS);
    self.navigation.month_step_days = self
      .navigation
      .month_step_days
      .min(MAX_STEP_DAYS);

    let fallback = defaults.labels;
    let labels = &mut self.labels;
    for (value, default) in [
      (
        &mut labels.untitled_event,
        fallback.untitled_event
      ),
      (
        &mut labels.no_events,
        fallback.no_events
      ),
      (
        &mut labels.no_description,
        fallback.no_description
      ),
      (&mut labels.all_day, fallback.all_day),
      (
        &mut labels.open_link,
        fallback.open_link
      ),
      (
        &mut labels.previous,
        fallback.previous
      ),
      (&mut labels.today, fallback.today),
      (&mut labels.next, fallback.next),
      (
        &mut labels.show_weekends,
        fallback.show_weekends
      ),
      (
        &mut labels.hide_weekends,
        fallback.hide_weekends
      ),
      (
        &mut labels.see_more,
        fallback.see_more
      ),
      (&mut labels.close, fallback.close),
      (&mut labels.day, fallback.day),
      (&mut labels.week, fallback.week),
      (&mut labels.month, fallback.month)
    ] {
      if value.trim().is_empty() {
        debug!(
          replacement = %default,
          "blank label replaced"
        );
        *value = default;
      }
    }
  }
}
