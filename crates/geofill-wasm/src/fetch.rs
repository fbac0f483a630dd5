// crates/geofill-wasm/src/fetch.rs
use crate::WeakWidget;
use geofill_core::{FetchTicket, GeofillError, HttpReply, Result, Transport};
use url::Url;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::Response;

/// Issues lookups with `window.fetch` and feeds the reply back into the
/// widget on a later microtask. Requests are never aborted.
pub struct FetchTransport {
    widget: WeakWidget,
}

impl FetchTransport {
    pub(crate) fn new(widget: WeakWidget) -> Self {
        Self { widget }
    }
}

impl Transport for FetchTransport {
    fn send(&mut self, ticket: FetchTicket, url: Url) {
        let widget = self.widget.clone();
        spawn_local(async move {
            let outcome = get(url.as_str()).await;
            if let Some(w) = widget.upgrade() {
                w.borrow_mut().handle_fetch_reply(ticket, outcome);
            }
        });
    }
}

fn transport_error(e: JsValue) -> GeofillError {
    GeofillError::Transport(e.as_string().unwrap_or_else(|| format!("{e:?}")))
}

async fn get(url: &str) -> Result<HttpReply> {
    let window = web_sys::window().ok_or_else(|| GeofillError::Host("no window".into()))?;

    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(transport_error)?
        .dyn_into()
        .map_err(transport_error)?;

    let status = response.status();
    let body = JsFuture::from(response.text().map_err(transport_error)?)
        .await
        .map_err(transport_error)?;

    Ok(HttpReply {
        status,
        body: body.as_string().unwrap_or_default(),
    })
}
