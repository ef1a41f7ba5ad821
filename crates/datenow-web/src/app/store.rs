/// Per-root state container. Every `dispatch` is a synchronous shallow
/// merge followed by a re-render of this root only.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarStore {
  state: ViewState
}

impl CalendarStore {
  fn new(state: ViewState) -> Self {
    Self {
      state
    }
  }
}

impl Reducible for CalendarStore {
  type Action = StateUpdate;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    if action.is_empty() {
      return self;
    }
    let mut next = Rc::unwrap_or_clone(self);
    next.state.apply(action);
    Rc::new(next)
  }
}
