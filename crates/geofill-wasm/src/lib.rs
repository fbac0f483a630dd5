//! geofill-wasm — WebAssembly host adapter for geofill-core
//!
//! This crate mounts an address autocomplete field into a DOM container and
//! exposes the four lifecycle calls an embedding shell expects. All
//! debounce, fetch and list logic lives in `geofill-core`; this crate only
//! wires DOM listeners, `setTimeout` and `fetch` to it.
//!
//! What it provides
//! ----------------
//! - Automatic console logging and panic hook on module load
//!   (via `#[wasm_bindgen(start)]`)
//! - `AddressControl` with `init`, `updateView`, `getOutputs`, `destroy`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { AddressControl } from 'geofill-wasm';
//!
//! async function main() {
//!   await init();
//!   const control = new AddressControl();
//!   const container = document.getElementById('address');
//!   control.init(
//!     { addressField: null, countryCode: 'ae' },
//!     () => console.log('value:', control.getOutputs().addressField),
//!     container,
//!   );
//!   control.updateView({ addressField: 'Abu Dhabi', countryCode: 'ae' });
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - The country filter is read once by `init`; `updateView` only carries the
//!   bound address.
//! - The change notification is invoked on a microtask after the commit, so
//!   the shell may call `getOutputs()` from inside it.
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use geofill_core::prelude::*;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, EventTarget, HtmlElement, KeyboardEvent, Node};

mod dom;
mod fetch;
pub mod logger;
mod timer;

pub use dom::DomView;
pub use fetch::FetchTransport;
pub use timer::WindowScheduler;

pub type Widget = AddressAutocomplete<DomView, WindowScheduler, FetchTransport>;
pub type SharedWidget = Rc<RefCell<Widget>>;
pub type WeakWidget = Weak<RefCell<Widget>>;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
    web_sys::console::log_1(&"Initializing geofill WASM module...".into());
}

fn host_error(e: JsValue) -> GeofillError {
    GeofillError::Host(e.as_string().unwrap_or_else(|| format!("{e:?}")))
}

fn to_js(e: GeofillError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/* --------------------------------------------------------------------------
   Listener bookkeeping
-------------------------------------------------------------------------- */

struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        kind: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<Self> {
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .map_err(host_error)?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }

    fn detach(self) {
        // best-effort; removal of an unknown listener is a no-op in the DOM
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

/* --------------------------------------------------------------------------
   Host control
-------------------------------------------------------------------------- */

/// Standard control exposed to the embedding shell.
#[wasm_bindgen]
#[derive(Default)]
pub struct AddressControl {
    widget: Option<SharedWidget>,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl AddressControl {
    #[wasm_bindgen(constructor)]
    pub fn new() -> AddressControl {
        AddressControl::default()
    }

    /// `context` is `{ addressField, countryCode }`; `notify` takes no
    /// arguments.
    #[wasm_bindgen(js_name = init)]
    pub fn init_js(
        &mut self,
        context: JsValue,
        notify: js_sys::Function,
        container: HtmlElement,
    ) -> std::result::Result<(), JsValue> {
        let inputs: HostInputs = from_value(context)?;
        let notify: Box<dyn FnMut()> = Box::new(move || {
            let notify = notify.clone();
            spawn_local(async move {
                if let Err(e) = notify.call0(&JsValue::NULL) {
                    log::error!("change notification threw: {e:?}");
                }
            });
        });
        HostControl::init(self, &inputs, notify, container).map_err(to_js)
    }

    #[wasm_bindgen(js_name = updateView)]
    pub fn update_view_js(&mut self, context: JsValue) -> std::result::Result<(), JsValue> {
        let inputs: HostInputs = from_value(context)?;
        HostControl::update_view(self, &inputs);
        Ok(())
    }

    #[wasm_bindgen(js_name = getOutputs)]
    pub fn get_outputs_js(&self) -> std::result::Result<JsValue, JsValue> {
        Ok(to_value(&HostControl::get_outputs(self))?)
    }

    #[wasm_bindgen(js_name = destroy)]
    pub fn destroy_js(&mut self) {
        HostControl::destroy(self);
    }

    /// Whether the suggestion panel is currently shown.
    #[wasm_bindgen(js_name = suggestionsVisible)]
    pub fn suggestions_visible(&self) -> bool {
        self.widget
            .as_ref()
            .and_then(|w| w.try_borrow().ok().map(|w| w.list().is_visible()))
            .unwrap_or(false)
    }
}

impl AddressControl {
    pub fn widget(&self) -> Option<&SharedWidget> {
        self.widget.as_ref()
    }

    fn wire_listeners(&mut self, widget: &SharedWidget, mount: &HtmlElement) -> Result<()> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| GeofillError::Host("no document".into()))?;
        let input = widget.borrow().view().input().clone();

        let weak = Rc::downgrade(widget);
        let source = input.clone();
        let on_input = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            if let Some(w) = weak.upgrade() {
                w.borrow_mut().handle_input(&source.value());
            }
        });
        self.listeners.push(Listener::attach(&input, "input", on_input)?);

        let weak = Rc::downgrade(widget);
        let on_keydown = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let Some(w) = weak.upgrade() else {
                return;
            };
            let outcome = w.borrow_mut().handle_key(Key::from_dom(&key_event.key()));
            if outcome == KeyOutcome::Consumed {
                event.prevent_default();
            }
        });
        self.listeners.push(Listener::attach(&input, "keydown", on_keydown)?);

        let weak = Rc::downgrade(widget);
        let container: Node = mount.clone().into();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            if container.contains(target.as_ref()) {
                return;
            }
            if let Some(w) = weak.upgrade() {
                w.borrow_mut().handle_outside_click();
            }
        });
        self.listeners.push(Listener::attach(&document, "click", on_click)?);

        Ok(())
    }
}

impl Drop for AddressControl {
    fn drop(&mut self) {
        HostControl::destroy(self);
    }
}

impl HostControl for AddressControl {
    type Mount = HtmlElement;

    fn init(
        &mut self,
        inputs: &HostInputs,
        notify: Box<dyn FnMut()>,
        mount: HtmlElement,
    ) -> Result<()> {
        if self.widget.is_some() {
            self.destroy();
        }

        let config = WidgetConfig::from_host(inputs);
        let provider = NominatimProvider::from_config(&config)?;
        let window = web_sys::window().ok_or_else(|| GeofillError::Host("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| GeofillError::Host("no document".into()))?;

        let (input, panel) = dom::create_elements(&document).map_err(host_error)?;
        mount.append_child(&input).map_err(host_error)?;
        mount.append_child(&panel).map_err(host_error)?;

        let widget: SharedWidget = Rc::new_cyclic(|weak: &WeakWidget| {
            RefCell::new(AddressAutocomplete::new(
                &config,
                provider,
                DomView::new(document, input, panel, weak.clone()),
                WindowScheduler::new(window, weak.clone()),
                FetchTransport::new(weak.clone()),
                notify,
            ))
        });

        // stored first so a failed wiring is still undone by destroy()
        self.widget = Some(widget.clone());
        self.wire_listeners(&widget, &mount)?;
        log::info!("address control mounted (country filter: {})", config.country_code);
        Ok(())
    }

    fn update_view(&mut self, inputs: &HostInputs) {
        if let Some(widget) = &self.widget {
            widget.borrow_mut().apply_host_inputs(inputs);
        }
    }

    fn get_outputs(&self) -> HostOutputs {
        self.widget
            .as_ref()
            .and_then(|w| w.try_borrow().ok().map(|w| w.outputs()))
            .unwrap_or_default()
    }

    fn destroy(&mut self) {
        for listener in self.listeners.drain(..) {
            listener.detach();
        }
        if let Some(widget) = self.widget.take() {
            if let Ok(mut w) = widget.try_borrow_mut() {
                w.teardown();
            }
        }
    }
}
