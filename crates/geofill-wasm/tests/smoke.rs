use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

use geofill_core::{FetchTicket, HostInputs, HttpReply, Key};
use geofill_wasm::AddressControl;

wasm_bindgen_test_configure!(run_in_browser);

fn container() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let div: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

fn context(address: Option<&str>) -> JsValue {
    serde_wasm_bindgen::to_value(&HostInputs {
        address_field: address.map(str::to_string),
        country_code: Some("ae".into()),
    })
    .unwrap()
}

fn mounted() -> (AddressControl, HtmlElement) {
    // Ensure module is initialized (defensive; start() should run automatically)
    #[cfg(target_arch = "wasm32")]
    geofill_wasm::start();

    let mount = container();
    let mut control = AddressControl::new();
    control
        .init_js(context(None), js_sys::Function::new_no_args(""), mount.clone())
        .unwrap();
    (control, mount)
}

#[wasm_bindgen_test]
fn init_mounts_input_and_hidden_panel() {
    let (control, mount) = mounted();
    assert_eq!(mount.child_element_count(), 2);
    assert!(!control.suggestions_visible());

    let outputs: HostInputs = serde_wasm_bindgen::from_value(control.get_outputs_js().unwrap()).unwrap();
    assert_eq!(outputs.address(), "");
}

#[wasm_bindgen_test]
fn rows_leave_the_dom_when_the_control_is_dropped() {
    let (control, mount) = mounted();
    let widget = control.widget().unwrap().clone();
    widget.borrow_mut().handle_fetch_reply(
        FetchTicket(0),
        Ok(HttpReply::ok(
            r#"[{"display_name":"Ajman","lat":"25.4","lon":"55.5"}]"#,
        )),
    );
    let panel = widget.borrow().view().panel().clone();
    let row: HtmlElement = panel.first_element_child().unwrap().dyn_into().unwrap();
    drop(widget);
    drop(control);

    assert_eq!(panel.child_element_count(), 0);
    // no listener left on the detached row to call into freed closures
    row.click();
    let event = web_sys::Event::new("mouseover").unwrap();
    row.dispatch_event(&event).unwrap();
    assert_eq!(mount.child_element_count(), 2);
}

#[wasm_bindgen_test]
fn update_view_writes_input_text() {
    let (mut control, _mount) = mounted();
    control.update_view_js(context(Some("Abu Dhabi"))).unwrap();

    let widget = control.widget().unwrap().clone();
    assert_eq!(widget.borrow().view().input().value(), "Abu Dhabi");
    assert_eq!(widget.borrow().read_value(), "Abu Dhabi");
}

#[wasm_bindgen_test]
fn clicking_a_rendered_suggestion_commits_it() {
    let (control, _mount) = mounted();
    let widget = control.widget().unwrap().clone();

    widget.borrow_mut().handle_fetch_reply(
        FetchTicket(0),
        Ok(HttpReply::ok(
            r#"[{"display_name":"Dubai, UAE","lat":"25.2","lon":"55.3"}]"#,
        )),
    );
    assert!(control.suggestions_visible());

    let panel = widget.borrow().view().panel().clone();
    assert_eq!(panel.child_element_count(), 1);
    let item: HtmlElement = panel.first_element_child().unwrap().dyn_into().unwrap();
    assert_eq!(item.text_content().as_deref(), Some("Dubai, UAE"));

    item.click();
    assert!(!control.suggestions_visible());
    assert_eq!(widget.borrow().view().input().value(), "Dubai, UAE");
    assert_eq!(widget.borrow().read_value(), "Dubai, UAE");
}

#[wasm_bindgen_test]
fn keyboard_selection_and_destroy() {
    let (mut control, _mount) = mounted();
    let widget = control.widget().unwrap().clone();
    widget.borrow_mut().handle_fetch_reply(
        FetchTicket(0),
        Ok(HttpReply::ok(
            r#"[{"display_name":"Sharjah","lat":"25.3","lon":"55.4"},{"display_name":"Ajman","lat":"25.4","lon":"55.5"}]"#,
        )),
    );
    widget.borrow_mut().handle_key(Key::ArrowUp);
    widget.borrow_mut().handle_key(Key::Enter);
    assert_eq!(widget.borrow().read_value(), "Sharjah");
    let panel = widget.borrow().view().panel().clone();
    let row: HtmlElement = panel.first_element_child().unwrap().dyn_into().unwrap();

    control.destroy_js();
    assert_eq!(panel.child_element_count(), 0);
    assert!(row.parent_node().is_none());
    assert!(control.widget().is_none());
    assert!(widget.borrow().is_torn_down());
    let outputs: HostInputs = serde_wasm_bindgen::from_value(control.get_outputs_js().unwrap()).unwrap();
    assert_eq!(outputs.address(), "");
}
