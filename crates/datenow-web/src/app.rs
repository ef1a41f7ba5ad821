use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{
  AtomicBool,
  Ordering
};

use chrono::{
  Datelike,
  NaiveDate
};
use datenow_core::config::{
  CalendarConfig,
  Labels
};
use datenow_core::format::{
  format_clock,
  format_event_date,
  format_hour_label,
  format_time_range,
  period_title,
  weekday_label
};
use datenow_core::layout::{
  day_layout,
  month_layout,
  week_layout
};
use datenow_core::{
  CalendarEvent,
  Navigation,
  StateUpdate,
  ViewMode,
  ViewState
};
use gloo::console::log;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::{
  JsCast,
  JsValue
};
use web_sys::{
  Element,
  KeyboardEvent,
  MouseEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  Reducible,
  classes,
  create_portal,
  function_component,
  hook,
  html,
  use_effect_with,
  use_reducer,
  use_state,
  use_state_eq
};

const DEBUG_GLOBAL_FLAG: &str =
  "yokoiDebug";

static DEBUG_CHANNEL: AtomicBool =
  AtomicBool::new(false);

/// Turns the debug channel on when the page sets `window.yokoiDebug = true`.
pub fn init_debug_channel() {
  let enabled = web_sys::window()
    .and_then(|window| {
      js_sys::Reflect::get(
        &window,
        &JsValue::from_str(
          DEBUG_GLOBAL_FLAG
        )
      )
      .ok()
    })
    .and_then(|flag| flag.as_bool())
    .unwrap_or(false);
  if enabled {
    enable_debug_channel(
      DEBUG_GLOBAL_FLAG
    );
  }
}

pub fn enable_debug_channel(
  source: &str
) {
  if !DEBUG_CHANNEL
    .swap(true, Ordering::Relaxed)
  {
    tracing::info!(
      source,
      "calendar debug channel enabled"
    );
  }
}

pub fn ui_debug(
  event: &str,
  detail: &str
) {
  if !DEBUG_CHANNEL.load(Ordering::Relaxed)
  {
    return;
  }
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[date-now] {event}: {detail}"
  ));
}

#[derive(Properties, PartialEq)]
pub struct CalendarRootProps {
  pub initial:     ViewState,
  pub config:      Rc<CalendarConfig>,
  /// The host element; measured for compact mode.
  pub root:        Element,
  pub instance_id: u32
}

#[function_component(CalendarRoot)]
pub fn calendar_root(
  props: &CalendarRootProps
) -> Html {
  let store = {
    let initial = props.initial.clone();
    use_reducer(move || {
      CalendarStore::new(initial)
    })
  };
  let open_event =
    use_state(|| None::<CalendarEvent>);
  let compact = use_compact_layout(
    props.root.clone(),
    props
      .config
      .display
      .compact_breakpoint_px,
    props.config.display.resize_debounce_ms
  );

  let config = props.config.clone();
  let zone = config.display_zone();
  let state = &store.state;

  {
    let instance_id = props.instance_id;
    use_effect_with(
      (state.view, state.current_date),
      move |(view, date)| {
        ui_debug(
          "render",
          &format!(
            "instance {instance_id}: {} @ {}",
            view.as_key(),
            date.format("%Y-%m-%d")
          )
        );
        || ()
      }
    );
  }

  let on_nav = {
    let store = store.clone();
    let config = config.clone();
    Callback::from(move |nav: Navigation| {
      let update = store.state.navigate(
        nav,
        zone.today(),
        &config.navigation
      );
      tracing::debug!(
        ?nav,
        from = %store.state.current_date.format("%Y-%m-%d"),
        to = ?update.current_date,
        view = %store.state.view.as_key(),
        "calendar navigated"
      );
      store.dispatch(update);
    })
  };

  let on_set_view = {
    let store = store.clone();
    Callback::from(move |view: ViewMode| {
      tracing::info!(
        view = %view.as_key(),
        "calendar view changed"
      );
      store.dispatch(StateUpdate::view(
        view
      ));
    })
  };

  let on_toggle_weekends = {
    let store = store.clone();
    Callback::from(move |_: MouseEvent| {
      let show = !store.state.show_weekends;
      ui_debug(
        "weekends.toggle",
        if show { "shown" } else { "hidden" }
      );
      store.dispatch(
        StateUpdate::show_weekends(show)
      );
    })
  };

  let on_open_event = {
    let open_event = open_event.clone();
    Callback::from(
      move |event: CalendarEvent| {
        ui_debug(
          "popup.open",
          &format!(
            "event id={:?}",
            event.id
          )
        );
        open_event.set(Some(event));
      }
    )
  };

  let on_close_event = {
    let open_event = open_event.clone();
    Callback::from(move |()| {
      ui_debug("popup.close", "closed");
      open_event.set(None);
    })
  };

  let on_see_more =
    Callback::from(|day: NaiveDate| {
      ui_debug(
        "month.see_more",
        &day.format("%Y-%m-%d").to_string()
      );
    });

  let today = zone.today();
  let popup = match (*open_event).clone() {
    | Some(event) => {
      render_event_popup(
        event,
        config.clone(),
        props.instance_id,
        on_close_event
      )
    }
    | None => html! {}
  };

  html! {
      <div class={classes!(
          "dn-calendar",
          format!("dn-calendar--{}", state.view.as_key()),
          compact.then_some("is-compact")
      )}>
          <CalendarHeader
              headline={state.headline.clone()}
              subheadline={state.subheadline.clone()}
              title={period_title(state.view, state.current_date, config.week_view.week_start_day())}
              view={state.view}
              show_weekends={state.show_weekends}
              config={config.clone()}
              on_nav={on_nav}
              on_set_view={on_set_view}
              on_toggle_weekends={on_toggle_weekends}
          />
          <div class="dn-calendar__body">
              { render_calendar_view(state, &config, today, compact, &on_open_event, &on_see_more) }
          </div>
          { popup }
      </div>
  }
}

include!("app/store.rs");
include!("app/resize.rs");
include!("app/event_popup.rs");
include!("app/view_components/calendar_header.rs");
include!("app/view_components/calendar_nav_actions.rs");
include!("app/view_components/calendar_view_switch.rs");
include!("app/calendar_views/render_calendar_view.rs");
include!("app/calendar_views/render_week_view.rs");
include!("app/calendar_views/render_day_view.rs");
include!("app/calendar_views/render_month_view.rs");
include!("app/calendar_views/render_event_button.rs");

#[cfg(test)]
mod tests {
  use super::*;

  fn date(
    y: i32,
    m: u32,
    d: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d)
      .expect("valid date")
  }

  fn store() -> Rc<CalendarStore> {
    let events = datenow_core::parse_events(
      r#"[{"id":"1","title":"Standup","start":"2024-03-04T09:00:00","end":"2024-03-04T09:30:00"}]"#
    );
    Rc::new(CalendarStore::new(
      ViewState::new(
        events,
        date(2024, 3, 4),
        &CalendarConfig::default()
      )
    ))
  }

  #[test]
  fn dispatch_merges_and_keeps_date() {
    let next = store()
      .reduce(StateUpdate::view(
        ViewMode::Month
      ))
      .reduce(StateUpdate::view(
        ViewMode::Week
      ));
    assert_eq!(
      next.state.view,
      ViewMode::Week
    );
    assert_eq!(
      next.state.current_date,
      date(2024, 3, 4)
    );
    assert_eq!(next.state.events.len(), 1);
  }

  #[test]
  fn empty_update_keeps_same_store() {
    let current = store();
    let next = Rc::clone(&current)
      .reduce(StateUpdate::default());
    assert!(Rc::ptr_eq(&current, &next));
  }

  #[test]
  fn block_style_uses_pixels() {
    assert_eq!(
      block_style(-48.0, 24.0),
      "top: -48px; height: 24px;"
    );
  }

  #[test]
  fn popup_title_ids_are_per_instance() {
    assert_ne!(
      popup_title_id(1),
      popup_title_id(2)
    );
  }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod render_tests {
  use chrono::NaiveDateTime;
  use yew::ServerRenderer;

  use super::*;

  #[derive(Properties, PartialEq)]
  struct CalendarBodyProps {
    state:  ViewState,
    config: Rc<CalendarConfig>,
    today:  NaiveDate
  }

  /// Header and body of `CalendarRoot` without the host element.
  #[function_component(CalendarBody)]
  fn calendar_body(
    props: &CalendarBodyProps
  ) -> Html {
    let state = &props.state;
    let config = &props.config;
    html! {
        <div class="dn-calendar">
            <CalendarHeader
                headline={state.headline.clone()}
                subheadline={state.subheadline.clone()}
                title={period_title(state.view, state.current_date, config.week_view.week_start_day())}
                view={state.view}
                show_weekends={state.show_weekends}
                config={config.clone()}
                on_nav={Callback::noop()}
                on_set_view={Callback::noop()}
                on_toggle_weekends={Callback::noop()}
            />
            <div class="dn-calendar__body">
                { render_calendar_view(state, config, props.today, false, &Callback::noop(), &Callback::noop()) }
            </div>
        </div>
    }
  }

  fn date(
    y: i32,
    m: u32,
    d: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d)
      .expect("valid date")
  }

  fn stamp(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(
      raw,
      "%Y-%m-%dT%H:%M"
    )
    .expect("valid stamp")
  }

  fn event(
    id: &str,
    start: &str,
    end: &str
  ) -> CalendarEvent {
    CalendarEvent {
      id:          id.to_string(),
      title:       format!("Event {id}"),
      description: String::new(),
      location:    String::new(),
      link:        String::new(),
      all_day:     false,
      start:       stamp(start),
      end:         stamp(end)
    }
  }

  fn state(
    events: Vec<CalendarEvent>,
    view: ViewMode
  ) -> ViewState {
    let mut state = ViewState::new(
      events,
      date(2024, 3, 4),
      &CalendarConfig::default()
    );
    state.view = view;
    state
  }

  async fn render(
    state: ViewState
  ) -> String {
    ServerRenderer::<CalendarBody>::with_props(
      move || CalendarBodyProps {
        state,
        config: Rc::new(
          CalendarConfig::default()
        ),
        today: date(2024, 1, 1)
      }
    )
    .hydratable(false)
    .render()
    .await
  }

  #[tokio::test]
  async fn rendering_twice_gives_same_markup() {
    for view in ViewMode::all() {
      let state = state(
        vec![event(
          "1",
          "2024-03-04T09:00",
          "2024-03-04T09:30"
        )],
        view
      );
      let first = render(state.clone()).await;
      let second = render(state).await;
      assert_eq!(first, second, "{view:?}");
    }
  }

  #[tokio::test]
  async fn empty_day_renders_status_node() {
    let markup = render(state(
      vec![event(
        "1",
        "2024-03-05T09:00",
        "2024-03-05T10:00"
      )],
      ViewMode::Day
    ))
    .await;
    assert_eq!(
      markup
        .matches("class=\"dn-day__empty\"")
        .count(),
      1
    );
    assert!(markup.contains(
      &Labels::default().no_events
    ));
    assert!(!markup.contains("dn-day__list"));
  }

  #[tokio::test]
  async fn week_columns_follow_weekend_toggle() {
    let mut week =
      state(Vec::new(), ViewMode::Week);
    for (show_weekends, columns) in
      [(true, 7), (false, 5)]
    {
      week.show_weekends = show_weekends;
      let markup = render(week.clone()).await;
      assert_eq!(
        markup
          .matches("class=\"dn-week__column")
          .count(),
        columns,
        "show_weekends={show_weekends}"
      );
    }
  }

  #[tokio::test]
  async fn exactly_one_view_button_is_current() {
    for view in ViewMode::all() {
      let markup =
        render(state(Vec::new(), view))
          .await;
      assert_eq!(
        markup
          .matches("aria-current=\"true\"")
          .count(),
        1,
        "{view:?}"
      );
    }
  }

  #[tokio::test]
  async fn week_block_with_end_before_start_shows_start_only()
  {
    let markup = render(state(
      vec![event(
        "1",
        "2024-03-04T15:00",
        "2024-03-04T14:00"
      )],
      ViewMode::Week
    ))
    .await;
    assert!(markup.contains(
      "<span class=\"dn-event__time\">3:00 PM</span>"
    ));
    assert!(!markup.contains("2:00 PM"));
  }
}
