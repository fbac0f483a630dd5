// crates/geofill-wasm/src/timer.rs
use crate::WeakWidget;
use geofill_core::{DebounceToken, Scheduler};
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// `setTimeout`-backed scheduler.
///
/// Holds the callback of the most recent timer only. The debouncer cancels
/// the previous timer before asking for a new one, so replacing the stored
/// closure never drops one that can still run.
pub struct WindowScheduler {
    window: Window,
    widget: WeakWidget,
    callback: Option<Closure<dyn FnMut()>>,
}

impl WindowScheduler {
    pub(crate) fn new(window: Window, widget: WeakWidget) -> Self {
        Self {
            window,
            widget,
            callback: None,
        }
    }
}

impl Scheduler for WindowScheduler {
    /// Timeout id; `None` when the browser refused the timer.
    type Handle = Option<i32>;

    fn schedule(&mut self, delay: Duration, token: DebounceToken) -> Self::Handle {
        let widget = self.widget.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Some(w) = widget.upgrade() {
                w.borrow_mut().handle_debounce_elapsed(token);
            }
        });

        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis,
            ) {
            Ok(id) => {
                self.callback = Some(callback);
                Some(id)
            }
            Err(e) => {
                log::error!("setTimeout failed: {e:?}");
                None
            }
        }
    }

    fn cancel(&mut self, handle: Self::Handle) {
        if let Some(id) = handle {
            self.window.clear_timeout_with_handle(id);
        }
    }
}
