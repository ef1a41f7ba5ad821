fn render_day_view(
  state: &ViewState,
  config: &CalendarConfig,
  on_open_event: &Callback<CalendarEvent>
) -> Html {
  let layout = day_layout(
    &state.events,
    state.current_date
  );

  if layout.is_empty() {
    return html! {
        <div class="dn-day">
            <p class="dn-day__empty" role="status">{ &config.labels.no_events }</p>
        </div>
    };
  }

  html! {
      <div class="dn-day">
          <ul class="dn-day__list">
              {
                  for layout.events.iter().map(|event| {
                      let detail = format_time_range(event, config.display.clock, &config.labels);
                      html! {
                          <li class="dn-day__item">
                              { render_event_button(event, "dn-event--listed", None, Some(detail), on_open_event) }
                              {
                                  if event.location.trim().is_empty() {
                                      html! {}
                                  } else {
                                      html! { <span class="dn-day__location">{ &event.location }</span> }
                                  }
                              }
                          </li>
                      }
                  })
              }
          </ul>
      </div>
  }
}
