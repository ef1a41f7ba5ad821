#[derive(Properties, PartialEq)]
struct CalendarViewSwitchProps {
  current_view: ViewMode,
  config:       Rc<CalendarConfig>,
  on_set_view:  Callback<ViewMode>
}

#[function_component(CalendarViewSwitch)]
fn calendar_view_switch(
  props: &CalendarViewSwitchProps
) -> Html {
  html! {
      <div class="dn-header__views" role="group">
          {
              for ViewMode::all().iter().copied().map(|view| {
                  let on_set_view = props.on_set_view.clone();
                  let is_active = props.current_view == view;
                  html! {
                      <button
                          type="button"
                          class={classes!("dn-btn", "dn-view-btn", is_active.then_some("is-active"))}
                          aria-current={is_active.then_some("true")}
                          data-view={view.as_key()}
                          onclick={Callback::from(move |_| on_set_view.emit(view))}
                      >
                          { props.config.labels.view(view) }
                      </button>
                  }
              })
          }
      </div>
  }
}
