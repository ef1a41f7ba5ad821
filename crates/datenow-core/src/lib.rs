pub mod config;
pub mod datetime;
pub mod event;
pub mod format;
pub mod layout;
pub mod state;

pub use config::CalendarConfig;
pub use event::{
  CalendarEvent,
  EventParser,
  parse_events
};
pub use state::{
  Navigation,
  StateUpdate,
  ViewMode,
  ViewState
};
