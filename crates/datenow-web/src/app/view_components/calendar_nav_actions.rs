#[derive(Properties, PartialEq)]
struct CalendarNavActionsProps {
  config: Rc<CalendarConfig>,
  on_nav: Callback<Navigation>
}

#[function_component(CalendarNavActions)]
fn calendar_nav_actions(
  props: &CalendarNavActionsProps
) -> Html {
  let labels: &Labels =
    &props.config.labels;
  let on_prev = props
    .on_nav
    .reform(|_: MouseEvent| Navigation::Prev);
  let on_today = props
    .on_nav
    .reform(|_: MouseEvent| Navigation::Today);
  let on_next = props
    .on_nav
    .reform(|_: MouseEvent| Navigation::Next);

  html! {
      <div class="dn-header__nav">
          <button type="button" class="dn-btn dn-btn--prev" aria-label={labels.previous.clone()} onclick={on_prev}>
              <span aria-hidden="true">{ "\u{2039}" }</span>
          </button>
          <button type="button" class="dn-btn dn-btn--today" onclick={on_today}>{ &labels.today }</button>
          <button type="button" class="dn-btn dn-btn--next" aria-label={labels.next.clone()} onclick={on_next}>
              <span aria-hidden="true">{ "\u{203a}" }</span>
          </button>
      </div>
  }
}
