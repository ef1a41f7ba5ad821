fn render_month_view(
  state: &ViewState,
  config: &CalendarConfig,
  today: NaiveDate,
  compact: bool,
  on_open_event: &Callback<CalendarEvent>,
  on_see_more: &Callback<NaiveDate>
) -> Html {
  let layout = month_layout(
    &state.events,
    state.current_date,
    state.event_limit,
    config.week_view.week_start_day(),
    today
  );
  let clock = config.display.clock;
  let labels: &Labels = &config.labels;

  html! {
      <div class="dn-month">
          <div class="dn-month__weekdays">
              {
                  for layout.weekdays.iter().map(|weekday| html! {
                      <div class="dn-month__weekday">{ weekday_label(*weekday, true) }</div>
                  })
              }
          </div>
          <div class="dn-month__grid">
              {
                  for (0..layout.leading_blanks).map(|_| html! {
                      <div class="dn-month__blank" aria-hidden="true"></div>
                  })
              }
              {
                  for layout.days.iter().map(|cell| {
                      let see_more = if cell.has_more() {
                          let day = cell.date;
                          let on_see_more = on_see_more.clone();
                          html! {
                              <button
                                  type="button"
                                  class="dn-month__see-more"
                                  onclick={Callback::from(move |_: MouseEvent| on_see_more.emit(day))}
                              >
                                  { labels.see_more_text(cell.hidden_count) }
                              </button>
                          }
                      } else {
                          html! {}
                      };
                      html! {
                          <div
                              class={classes!("dn-month__cell", cell.is_today.then_some("is-today"), (cell.total() > 0).then_some("has-events"))}
                              data-date={cell.date.format("%Y-%m-%d").to_string()}
                          >
                              <span class="dn-month__day-number">{ cell.date.day() }</span>
                              <div class="dn-month__events">
                                  {
                                      for cell.visible.iter().map(|event| {
                                          let detail = (!event.all_day && !compact)
                                              .then(|| format_clock(event.start_time(), clock));
                                          render_event_button(event, "dn-event--chip", None, detail, on_open_event)
                                      })
                                  }
                              </div>
                              { see_more }
                          </div>
                      }
                  })
              }
              {
                  for (0..layout.trailing_blanks).map(|_| html! {
                      <div class="dn-month__blank" aria-hidden="true"></div>
                  })
              }
          </div>
      </div>
  }
}
