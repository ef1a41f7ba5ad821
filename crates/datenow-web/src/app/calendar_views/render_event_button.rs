fn block_style(
  top_px: f64,
  height_px: f64
) -> String {
  format!(
    "top: {top_px}px; height: {height_px}px;"
  )
}

/// Clickable event entry shared by every view. `detail` is the secondary
/// line (time range, start time or nothing).
fn render_event_button(
  event: &CalendarEvent,
  class: &'static str,
  style: Option<String>,
  detail: Option<String>,
  on_open_event: &Callback<CalendarEvent>
) -> Html {
  let onclick = {
    let event = event.clone();
    on_open_event
      .reform(move |_: MouseEvent| event.clone())
  };

  html! {
      <button
          type="button"
          class={classes!("dn-event", class, event.all_day.then_some("is-all-day"))}
          style={style}
          title={event.title.clone()}
          data-event-id={event.id.clone()}
          {onclick}
      >
          <span class="dn-event__title">{ &event.title }</span>
          {
              for detail.into_iter().map(|detail| html! {
                  <span class="dn-event__time">{ detail }</span>
              })
          }
      </button>
  }
}
