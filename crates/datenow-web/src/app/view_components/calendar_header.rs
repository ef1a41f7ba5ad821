#[derive(Properties, PartialEq)]
struct CalendarHeaderProps {
  headline:           Option<String>,
  subheadline:        Option<String>,
  title:              String,
  view:               ViewMode,
  show_weekends:      bool,
  config:             Rc<CalendarConfig>,
  on_nav:             Callback<Navigation>,
  on_set_view:        Callback<ViewMode>,
  on_toggle_weekends: Callback<MouseEvent>
}

#[function_component(CalendarHeader)]
fn calendar_header(
  props: &CalendarHeaderProps
) -> Html {
  let labels = &props.config.labels;
  let weekend_toggle = if props.view
    == ViewMode::Day
  {
    html! {}
  } else {
    let label = if props.show_weekends {
      &labels.hide_weekends
    } else {
      &labels.show_weekends
    };
    html! {
        <button
            type="button"
            class="dn-btn dn-weekend-toggle"
            aria-pressed={if props.show_weekends { "true" } else { "false" }}
            onclick={props.on_toggle_weekends.clone()}
        >
            { label }
        </button>
    }
  };

  html! {
      <header class="dn-header">
          {
              if props.headline.is_some() || props.subheadline.is_some() {
                  html! {
                      <div class="dn-header__text">
                          {
                              for props.headline.iter().map(|headline| html! {
                                  <h2 class="dn-header__headline">{ headline }</h2>
                              })
                          }
                          {
                              for props.subheadline.iter().map(|subheadline| html! {
                                  <p class="dn-header__subheadline">{ subheadline }</p>
                              })
                          }
                      </div>
                  }
              } else {
                  html! {}
              }
          }
          <div class="dn-header__toolbar">
              <CalendarNavActions
                  config={props.config.clone()}
                  on_nav={props.on_nav.clone()}
              />
              <h3 class="dn-header__title" aria-live="polite">{ &props.title }</h3>
              <CalendarViewSwitch
                  current_view={props.view}
                  config={props.config.clone()}
                  on_set_view={props.on_set_view.clone()}
              />
              { weekend_toggle }
          </div>
      </header>
  }
}
