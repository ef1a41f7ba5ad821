mod app;
mod mount;

use gloo::events::EventListener;

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();
  app::init_debug_channel();

  tracing::info!(
    "starting Date.now calendar frontend"
  );

  let Some(document) = web_sys::window()
    .and_then(|window| {
      window.document()
    })
  else {
    return;
  };

  if document.ready_state() == "loading"
  {
    EventListener::once(
      &document,
      "DOMContentLoaded",
      |_| {
        mount::mount_all();
      }
    )
    .forget();
  } else {
    mount::mount_all();
  }
}
