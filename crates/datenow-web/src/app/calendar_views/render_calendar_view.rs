fn render_calendar_view(
  state: &ViewState,
  config: &CalendarConfig,
  today: NaiveDate,
  compact: bool,
  on_open_event: &Callback<CalendarEvent>,
  on_see_more: &Callback<NaiveDate>
) -> Html {
  match state.view {
    | ViewMode::Day => {
      render_day_view(
        state,
        config,
        on_open_event
      )
    }
    | ViewMode::Week => {
      render_week_view(
        state,
        config,
        today,
        compact,
        on_open_event
      )
    }
    | ViewMode::Month => {
      render_month_view(
        state,
        config,
        today,
        compact,
        on_open_event,
        on_see_more
      )
    }
  }
}
