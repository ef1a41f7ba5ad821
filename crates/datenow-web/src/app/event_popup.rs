fn popup_title_id(
  instance_id: u32
) -> String {
  format!("dn-popup-title-{instance_id}")
}

/// Portals the detail popup into `document.body`. Dropping it from state
/// removes the overlay node instead of hiding it.
fn render_event_popup(
  event: CalendarEvent,
  config: Rc<CalendarConfig>,
  instance_id: u32,
  on_close: Callback<()>
) -> Html {
  let Some(body) = web_sys::window()
    .and_then(|window| {
      window.document()
    })
    .and_then(|document| document.body())
  else {
    return html! {};
  };

  create_portal(
    html! {
        <EventPopup {event} {config} {instance_id} {on_close} />
    },
    body.into()
  )
}

#[derive(Properties, PartialEq)]
struct EventPopupProps {
  event:       CalendarEvent,
  config:      Rc<CalendarConfig>,
  instance_id: u32,
  on_close:    Callback<()>
}

#[function_component(EventPopup)]
fn event_popup(
  props: &EventPopupProps
) -> Html {
  {
    let on_close = props.on_close.clone();
    use_effect_with((), move |_| {
      let listener = web_sys::window()
        .and_then(|window| {
          window.document()
        })
        .map(|document| {
          EventListener::new(
            &document,
            "keydown",
            move |event| {
              let escape = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|key| {
                  key.key() == "Escape"
                });
              if escape {
                on_close.emit(());
              }
            }
          )
        });
      move || drop(listener)
    });
  }

  let event = &props.event;
  let labels = &props.config.labels;
  let title_id =
    popup_title_id(props.instance_id);
  let on_overlay_click =
    props.on_close.reform(|_: MouseEvent| ());
  let on_close_click =
    props.on_close.reform(|_: MouseEvent| ());
  let keep_open =
    Callback::from(|click: MouseEvent| {
      click.stop_propagation();
    });

  let description =
    if event.description.trim().is_empty() {
      html! {
          <p class="dn-popup__description is-empty">{ &labels.no_description }</p>
      }
    } else {
      html! {
          <p class="dn-popup__description">{ &event.description }</p>
      }
    };

  html! {
      <div class="dn-popup-overlay" onclick={on_overlay_click}>
          <div
              class="dn-popup"
              role="dialog"
              aria-modal="true"
              aria-labelledby={title_id.clone()}
              onclick={keep_open}
          >
              <button
                  type="button"
                  class="dn-popup__close"
                  aria-label={labels.close.clone()}
                  onclick={on_close_click}
              >
                  { "\u{00d7}" }
              </button>
              <h3 id={title_id} class="dn-popup__title">{ &event.title }</h3>
              <p class="dn-popup__date">{ format_event_date(event) }</p>
              <p class="dn-popup__time">
                  { format_time_range(event, props.config.display.clock, labels) }
              </p>
              {
                  if event.location.trim().is_empty() {
                      html! {}
                  } else {
                      html! { <p class="dn-popup__location">{ &event.location }</p> }
                  }
              }
              { description }
              {
                  if event.link.trim().is_empty() {
                      html! {}
                  } else {
                      html! {
                          <a
                              class="dn-popup__link"
                              href={event.link.clone()}
                              target="_blank"
                              rel="noopener noreferrer"
                          >
                              { &labels.open_link }
                          </a>
                      }
                  }
              }
          </div>
      </div>
  }
}
