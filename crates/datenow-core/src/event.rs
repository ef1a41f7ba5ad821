use anyhow::{
  Context,
  anyhow
};
use chrono::{
  NaiveDate,
  NaiveDateTime,
  NaiveTime
};
use serde_json::{
  Map,
  Value
};
use tracing::{
  debug,
  warn
};

use crate::config::CalendarConfig;
use crate::datetime::{
  DisplayZone,
  parse_event_stamp
};

/// One calendar entry as the views consume it.
///
/// Built once per payload and never mutated; a new payload replaces the
/// whole list.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
  pub id:          String,
  pub title:       String,
  pub description: String,
  pub location:    String,
  pub link:        String,
  pub all_day:     bool,
  pub start:       NaiveDateTime,
  pub end:         NaiveDateTime
}

impl CalendarEvent {
  pub fn start_date(&self) -> NaiveDate {
    self.start.date()
  }

  pub fn start_time(&self) -> NaiveTime {
    self.start.time()
  }

  pub fn end_time(&self) -> NaiveTime {
    self.end.time()
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventParser {
  zone:           DisplayZone,
  untitled_label: String
}

impl Default for EventParser {
  fn default() -> Self {
    Self::from_config(
      &CalendarConfig::default()
    )
  }
}

impl EventParser {
  pub fn new(
    zone: DisplayZone,
    untitled_label: impl Into<String>
  ) -> Self {
    Self {
      zone,
      untitled_label: untitled_label
        .into()
    }
  }

  pub fn from_config(
    config: &CalendarConfig
  ) -> Self {
    Self::new(
      config.display_zone(),
      config.labels.untitled_event.clone()
    )
  }

  /// Parses the `data-events` payload. Malformed JSON yields an empty list
  /// and records without a usable `start` are skipped.
  #[tracing::instrument(skip_all, fields(bytes = json_text.len()))]
  pub fn parse(
    &self,
    json_text: &str
  ) -> Vec<CalendarEvent> {
    let records =
      match decode_records(json_text) {
        | Ok(records) => records,
        | Err(error) => {
          warn!(error = %format!("{error:#}"), "discarding event payload");
          return Vec::new();
        }
      };

    let total = records.len();
    let events = records
      .iter()
      .enumerate()
      .filter_map(|(index, record)| {
        let parsed =
          self.parse_record(record);
        if parsed.is_none() {
          debug!(
            index,
            "dropping event without a \
             parsable start"
          );
        }
        parsed
      })
      .collect::<Vec<_>>();

    debug!(
      total,
      kept = events.len(),
      "parsed calendar events"
    );
    events
  }

  fn parse_record(
    &self,
    record: &Value
  ) -> Option<CalendarEvent> {
    let fields = record.as_object()?;
    let start = parse_event_stamp(
      &text_field(fields, "start"),
      self.zone
    )?;
    let end = parse_event_stamp(
      &text_field(fields, "end"),
      self.zone
    )
    .map(|stamp| stamp.value)
    .unwrap_or(start.value);

    let title = text_field(fields, "title");
    let title = if title.trim().is_empty() {
      self.untitled_label.clone()
    } else {
      title
    };

    let all_day =
      flag_field(fields, "allDay")
        .unwrap_or(!start.has_time);

    Some(CalendarEvent {
      id: text_field(fields, "id"),
      title,
      description: text_field(
        fields,
        "description"
      ),
      location: text_field(
        fields, "location"
      ),
      link: text_field(fields, "link"),
      all_day,
      start: start.value,
      end
    })
  }
}

/// Parses with the default labels and the local display zone.
pub fn parse_events(
  json_text: &str
) -> Vec<CalendarEvent> {
  EventParser::default().parse(json_text)
}

fn decode_records(
  json_text: &str
) -> anyhow::Result<Vec<Value>> {
  let value = serde_json::from_str::<Value>(
    json_text
  )
  .context("event payload is not JSON")?;
  match value {
    | Value::Array(records) => Ok(records),
    | other => {
      Err(anyhow!(
        "expected an array of events, \
         found {}",
        json_kind(&other)
      ))
    }
  }
}

fn json_kind(value: &Value) -> &'static str {
  match value {
    | Value::Null => "null",
    | Value::Bool(_) => "a boolean",
    | Value::Number(_) => "a number",
    | Value::String(_) => "a string",
    | Value::Array(_) => "an array",
    | Value::Object(_) => "an object"
  }
}

fn text_field(
  fields: &Map<String, Value>,
  key: &str
) -> String {
  match fields.get(key) {
    | Some(Value::String(text)) => {
      text.clone()
    }
    | Some(Value::Number(number)) => {
      number.to_string()
    }
    | _ => String::new()
  }
}

fn flag_field(
  fields: &Map<String, Value>,
  key: &str
) -> Option<bool> {
  match fields.get(key)? {
    | Value::Bool(flag) => Some(*flag),
    | Value::Number(number) => {
      number.as_f64().map(|n| n != 0.0)
    }
    | Value::String(text) => {
      match text
        .trim()
        .to_ascii_lowercase()
        .as_str()
      {
        | "1" | "true" | "yes" => {
          Some(true)
        }
        | "0" | "false" | "no" | "" => {
          Some(false)
        }
        | _ => None
      }
    }
    | _ => None
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parser() -> EventParser {
    EventParser::new(
      DisplayZone::Local,
      "Untitled event"
    )
  }

  #[test]
  fn malformed_json_yields_no_events() {
    for raw in [
      "",
      "{",
      "not json",
      "{\"start\":\"2024-03-04\"}",
      "42"
    ] {
      assert!(
        parser().parse(raw).is_empty(),
        "{raw}"
      );
    }
  }

  #[test]
  fn drops_records_without_valid_start() {
    let events = parser().parse(
      r#"[
        {"id":"a","title":"Keep","start":"2024-03-04T09:00:00"},
        {"id":"b","title":"No start"},
        {"id":"c","title":"Bad start","start":"soon"},
        "not an object",
        {"id":"d","title":"Also keep","start":"2024-03-05"}
      ]"#
    );
    let ids = events
      .iter()
      .map(|event| event.id.as_str())
      .collect::<Vec<_>>();
    assert_eq!(ids, vec!["a", "d"]);
  }

  #[test]
  fn defaults_fill_missing_fields() {
    let events = parser().parse(
      r#"[{"id":7,"title":"  ","start":"2024-03-04T09:00:00","end":"later"}]"#
    );
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.id, "7");
    assert_eq!(event.title, "Untitled event");
    assert_eq!(event.description, "");
    assert_eq!(event.location, "");
    assert_eq!(event.link, "");
    assert_eq!(event.end, event.start);
    assert!(!event.all_day);
  }

  #[test]
  fn all_day_flag_is_read_or_inferred() {
    let events = parser().parse(
      r#"[
        {"start":"2024-03-04"},
        {"start":"2024-03-04","allDay":false},
        {"start":"2024-03-04T08:00:00","allDay":"1"},
        {"start":"2024-03-04T08:00:00","allDay":0}
      ]"#
    );
    let flags = events
      .iter()
      .map(|event| event.all_day)
      .collect::<Vec<_>>();
    assert_eq!(
      flags,
      vec![true, false, true, false]
    );
  }

  #[test]
  fn keeps_source_order() {
    let events = parser().parse(
      r#"[
        {"id":"late","start":"2024-03-09T12:00:00"},
        {"id":"early","start":"2024-03-01T12:00:00"}
      ]"#
    );
    assert_eq!(events[0].id, "late");
    assert_eq!(events[1].id, "early");
  }
}
