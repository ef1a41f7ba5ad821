fn measure_compact(
  root: &Element,
  breakpoint_px: u32
) -> bool {
  let width = root.client_width();
  width > 0
    && u32::try_from(width)
      .is_ok_and(|width| width < breakpoint_px)
}

/// Tracks whether the root is narrower than `breakpoint_px`.
///
/// Window resizes are debounced: each event replaces the pending timeout,
/// and dropping a `Timeout` cancels it, so only the last resize in a burst
/// is measured.
#[hook]
fn use_compact_layout(
  root: Element,
  breakpoint_px: u32,
  debounce_ms: u32
) -> bool {
  let compact = {
    let root = root.clone();
    use_state_eq(move || {
      measure_compact(&root, breakpoint_px)
    })
  };

  {
    let compact = compact.clone();
    use_effect_with(
      root,
      move |root| {
        let root = root.clone();
        let pending: Rc<
          RefCell<Option<Timeout>>
        > = Rc::default();
        let listener =
          web_sys::window().map(|window| {
            EventListener::new(
              &window,
              "resize",
              move |_| {
                let root = root.clone();
                let compact = compact.clone();
                let timeout = Timeout::new(
                  debounce_ms,
                  move || {
                    let next = measure_compact(
                      &root,
                      breakpoint_px
                    );
                    ui_debug(
                      "resize.settled",
                      &format!(
                        "width={} compact={next}",
                        root.client_width()
                      )
                    );
                    compact.set(next);
                  }
                );
                pending
                  .borrow_mut()
                  .replace(timeout);
              }
            )
          });
        move || drop(listener)
      }
    );
  }

  *compact
}
