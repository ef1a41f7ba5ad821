fn render_week_view(
  state: &ViewState,
  config: &CalendarConfig,
  today: NaiveDate,
  compact: bool,
  on_open_event: &Callback<CalendarEvent>
) -> Html {
  let layout = week_layout(
    &state.events,
    state.current_date,
    state.show_weekends,
    &config.week_view,
    today
  );
  let clock = config.display.clock;
  let has_all_day = layout
    .columns
    .iter()
    .any(|column| !column.all_day.is_empty());
  let grid_style = format!(
    "--dn-columns: {}; --dn-row-height: {}px;",
    layout.columns.len(),
    layout.row_height_px
  );
  let band_style =
    format!("height: {}px;", layout.band_height_px);

  html! {
      <div class="dn-week" style={grid_style}>
          <div class="dn-week__head">
              <div class="dn-week__corner" aria-hidden="true"></div>
              {
                  for layout.columns.iter().map(|column| html! {
                      <div class={classes!("dn-week__day-head", column.is_today.then_some("is-today"))}>
                          <span class="dn-week__weekday">{ weekday_label(column.date.weekday(), compact) }</span>
                          <span class="dn-week__date">{ column.date.day() }</span>
                      </div>
                  })
              }
          </div>
          {
              if has_all_day {
                  html! {
                      <div class="dn-week__all-day">
                          <div class="dn-week__corner">{ &config.labels.all_day }</div>
                          {
                              for layout.columns.iter().map(|column| html! {
                                  <div class="dn-week__all-day-cell">
                                      {
                                          for column.all_day.iter().map(|event| {
                                              render_event_button(event, "dn-event--chip", None, None, on_open_event)
                                          })
                                      }
                                  </div>
                              })
                          }
                      </div>
                  }
              } else {
                  html! {}
              }
          }
          <div class="dn-week__grid">
              <div class="dn-week__gutter" style={band_style.clone()}>
                  {
                      for layout.hours.iter().map(|hour| html! {
                          <div class="dn-week__hour">{ format_hour_label(*hour, clock) }</div>
                      })
                  }
              </div>
              {
                  for layout.columns.iter().map(|column| html! {
                      <div
                          class={classes!("dn-week__column", column.is_today.then_some("is-today"))}
                          style={band_style.clone()}
                          data-date={column.date.format("%Y-%m-%d").to_string()}
                      >
                          {
                              for column.blocks.iter().map(|block| {
                                  let detail = format_time_range(block.event, clock, &config.labels);
                                  render_event_button(
                                      block.event,
                                      "dn-event--timed",
                                      Some(block_style(block.top_px, block.height_px)),
                                      Some(detail),
                                      on_open_event
                                  )
                              })
                          }
                      </div>
                  })
              }
          </div>
      </div>
  }
}
