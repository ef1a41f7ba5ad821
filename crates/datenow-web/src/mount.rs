use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use datenow_core::{
  CalendarConfig,
  EventParser,
  ViewState
};
use js_sys::WeakMap;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{
  JsCast,
  JsValue
};
use web_sys::{
  Document,
  Element
};
use yew::AppHandle;

use crate::app::{
  CalendarRoot,
  CalendarRootProps,
  enable_debug_channel,
  ui_debug
};

pub const ROOT_SELECTOR: &str =
  ".yokoi-date-now";
const CONTENT_SELECTOR: &str =
  ".yokoi-date-now__app";
const ATTR_DEBUG: &str = "data-debug";

const STYLESHEET: &str =
  include_str!("../assets/date-now.css");
const STYLE_ELEMENT_ID: &str =
  "yokoi-date-now-styles";

/// Live instances by id. Ids are never reused.
struct Instances<H> {
  handles: HashMap<u32, H>,
  next_id: u32
}

impl<H> Instances<H> {
  fn new() -> Self {
    Self {
      handles: HashMap::new(),
      next_id: 1
    }
  }

  fn reserve(&mut self) -> u32 {
    let id = self.next_id;
    self.next_id += 1;
    id
  }

  fn attach(
    &mut self,
    id: u32,
    handle: H
  ) {
    self.handles.insert(id, handle);
  }

  fn detach(
    &mut self,
    id: u32
  ) -> Option<H> {
    self.handles.remove(&id)
  }

  fn len(&self) -> usize {
    self.handles.len()
  }
}

/// Root element -> instance id, plus the app handle of every instance.
/// Roots are keyed weakly so removed roots do not pin their id.
struct Registry {
  by_root:   WeakMap,
  instances: Instances<AppHandle<CalendarRoot>>
}

impl Registry {
  fn new() -> Self {
    Self {
      by_root:   WeakMap::new(),
      instances: Instances::new()
    }
  }

  fn instance_for(
    &self,
    root: &Element
  ) -> Option<u32> {
    self
      .by_root
      .get(root.as_ref())
      .as_f64()
      .map(|id| id as u32)
  }

  fn reserve(
    &mut self,
    root: &Element
  ) -> u32 {
    let id = self.instances.reserve();
    self.by_root.set(
      root.as_ref(),
      &JsValue::from(id)
    );
    id
  }

  fn release(
    &mut self,
    root: &Element
  ) -> Option<(u32, AppHandle<CalendarRoot>)> {
    let id = self.instance_for(root)?;
    self.by_root.delete(root.as_ref());
    self
      .instances
      .detach(id)
      .map(|handle| (id, handle))
  }
}

thread_local! {
  static REGISTRY: RefCell<Registry> =
    RefCell::new(Registry::new());
  static CONFIG: Rc<CalendarConfig> =
    Rc::new(CalendarConfig::load_embedded());
}

/// Mounts every calendar root in the document. Returns how many new
/// instances were created.
pub fn mount_all() -> usize {
  let Some(document) = web_sys::window()
    .and_then(|window| {
      window.document()
    })
  else {
    return 0;
  };
  let Ok(roots) = document
    .query_selector_all(ROOT_SELECTOR)
  else {
    return 0;
  };

  let config = CONFIG.with(Rc::clone);
  if roots.length() > 0
    && config.display.inject_styles
  {
    ensure_stylesheet(&document);
  }

  let mounted = (0..roots.length())
    .filter_map(|index| roots.item(index))
    .filter_map(|node| {
      node.dyn_into::<Element>().ok()
    })
    .filter_map(|root| {
      mount_root(root, &config)
    })
    .count();

  tracing::info!(
    found = roots.length(),
    mounted,
    live = REGISTRY.with_borrow(|registry| {
      registry.instances.len()
    }),
    "mounted calendar roots"
  );
  mounted
}

pub fn mount_root(
  root: Element,
  config: &Rc<CalendarConfig>
) -> Option<u32> {
  if let Some(existing) = REGISTRY
    .with_borrow(|registry| {
      registry.instance_for(&root)
    })
  {
    tracing::debug!(
      instance = existing,
      "calendar root already mounted"
    );
    return None;
  }

  if root
    .get_attribute(ATTR_DEBUG)
    .is_some_and(|flag| flag.trim() == "1")
  {
    enable_debug_channel("data-debug");
  }

  let content = root
    .query_selector(CONTENT_SELECTOR)
    .ok()
    .flatten()
    .unwrap_or_else(|| root.clone());

  let parser =
    EventParser::from_config(config);
  let today =
    config.display_zone().today();
  let initial = ViewState::from_attributes(
    |name| root.get_attribute(name),
    today,
    config,
    &parser
  );

  let instance_id = REGISTRY
    .with_borrow_mut(|registry| {
      registry.reserve(&root)
    });
  ui_debug(
    "mount.root",
    &format!(
      "instance {instance_id}: {} events, {} view",
      initial.events.len(),
      initial.view.as_key()
    )
  );

  let handle =
    yew::Renderer::<CalendarRoot>::with_root_and_props(
      content,
      CalendarRootProps {
        initial,
        config: Rc::clone(config),
        root,
        instance_id
      }
    )
    .render();
  REGISTRY.with_borrow_mut(|registry| {
    registry
      .instances
      .attach(instance_id, handle)
  });

  Some(instance_id)
}

/// Destroys the instance mounted on `root`, if any, and forgets the root so
/// it can be mounted again.
pub fn unmount_root(
  root: &Element
) -> bool {
  let Some((instance_id, handle)) =
    REGISTRY.with_borrow_mut(|registry| {
      registry.release(root)
    })
  else {
    return false;
  };
  handle.destroy();
  tracing::info!(
    instance = instance_id,
    "calendar root unmounted"
  );
  true
}

/// Mounts a root the host page inserted after load.
#[wasm_bindgen(js_name = mountDateNow)]
pub fn mount_date_now(
  root: Element
) -> bool {
  let config = CONFIG.with(Rc::clone);
  mount_root(root, &config).is_some()
}

#[wasm_bindgen(js_name = unmountDateNow)]
pub fn unmount_date_now(
  root: Element
) -> bool {
  unmount_root(&root)
}

/// Appends the bundled stylesheet to `<head>` once per document.
fn ensure_stylesheet(
  document: &Document
) -> bool {
  if document
    .get_element_by_id(STYLE_ELEMENT_ID)
    .is_some()
  {
    return false;
  }
  let Some(head) = document.head() else {
    return false;
  };
  let Ok(style) =
    document.create_element("style")
  else {
    return false;
  };
  style.set_id(STYLE_ELEMENT_ID);
  style.set_text_content(Some(STYLESHEET));
  let appended =
    head.append_child(&style).is_ok();
  tracing::debug!(
    appended,
    "calendar stylesheet injected"
  );
  appended
}
