// crates/geofill-wasm/src/dom.rs

//! DOM rendering of the text box and the suggestion panel.

use crate::WeakWidget;
use geofill_core::{InputField, SuggestionView};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

const INPUT_STYLE: &[(&str, &str)] = &[
    ("width", "100%"),
    ("padding", "8px 12px"),
    ("border", "1px solid #ccc"),
    ("border-radius", "4px"),
    ("font-size", "14px"),
    ("box-sizing", "border-box"),
    ("outline", "none"),
];

const PANEL_STYLE: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("background", "#fff"),
    ("border", "1px solid #ccc"),
    ("border-top", "none"),
    ("border-radius", "0 0 4px 4px"),
    ("box-shadow", "0 2px 6px rgba(0,0,0,0.2)"),
    ("max-height", "150px"),
    ("overflow-y", "auto"),
    ("z-index", "9999"),
    ("width", "100%"),
];

const ITEM_STYLE: &[(&str, &str)] = &[
    ("padding", "8px"),
    ("cursor", "pointer"),
    ("font-size", "14px"),
];

const HIGHLIGHT_BG: &str = "#e6f0ff";
const PLAIN_BG: &str = "#fff";

pub(crate) fn apply_style(element: &HtmlElement, rules: &[(&str, &str)]) -> Result<(), JsValue> {
    let style = element.style();
    for (name, value) in rules {
        style.set_property(name, value)?;
    }
    Ok(())
}

/// Creates the `<input>` and the panel `<div>` without attaching them.
pub(crate) fn create_elements(document: &Document) -> Result<(HtmlInputElement, HtmlElement), JsValue> {
    let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    input.set_type("text");
    apply_style(&input, INPUT_STYLE)?;

    let panel: HtmlElement = document.create_element("div")?.dyn_into()?;
    apply_style(&panel, PANEL_STYLE)?;
    Ok((input, panel))
}

struct ItemRow {
    element: HtmlElement,
    on_click: Closure<dyn FnMut()>,
    on_hover: Closure<dyn FnMut()>,
}

// The closures die with the row, so the row must leave the DOM with them.
impl Drop for ItemRow {
    fn drop(&mut self) {
        let _ = self
            .element
            .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref());
        let _ = self
            .element
            .remove_event_listener_with_callback("mouseover", self.on_hover.as_ref().unchecked_ref());
        self.element.remove();
    }
}

pub struct DomView {
    document: Document,
    input: HtmlInputElement,
    panel: HtmlElement,
    rows: Vec<ItemRow>,
    widget: WeakWidget,
}

impl DomView {
    pub(crate) fn new(
        document: Document,
        input: HtmlInputElement,
        panel: HtmlElement,
        widget: WeakWidget,
    ) -> Self {
        Self {
            document,
            input,
            panel,
            rows: Vec::new(),
            widget,
        }
    }

    pub fn input(&self) -> &HtmlInputElement {
        &self.input
    }

    pub fn panel(&self) -> &HtmlElement {
        &self.panel
    }

    fn build_row(&self, index: usize, label: &str) -> Result<ItemRow, JsValue> {
        let element: HtmlElement = self.document.create_element("div")?.dyn_into()?;
        element.set_text_content(Some(label));
        element.set_attribute("data-index", &index.to_string())?;
        apply_style(&element, ITEM_STYLE)?;

        let widget = self.widget.clone();
        let on_click = Closure::<dyn FnMut()>::new(move || {
            if let Some(w) = widget.upgrade() {
                w.borrow_mut().handle_item_click(index);
            }
        });
        element.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;

        let widget = self.widget.clone();
        let on_hover = Closure::<dyn FnMut()>::new(move || {
            if let Some(w) = widget.upgrade() {
                w.borrow_mut().handle_item_hover(index);
            }
        });
        element.add_event_listener_with_callback("mouseover", on_hover.as_ref().unchecked_ref())?;

        self.panel.append_child(&element)?;
        Ok(ItemRow {
            element,
            on_click,
            on_hover,
        })
    }
}

impl SuggestionView for DomView {
    fn clear_items(&mut self) {
        self.rows.clear();
        self.panel.set_inner_html("");
    }

    fn append_item(&mut self, index: usize, label: &str) {
        match self.build_row(index, label) {
            Ok(row) => self.rows.push(row),
            Err(e) => log::error!("failed to render suggestion {index}: {e:?}"),
        }
    }

    fn set_visible(&mut self, visible: bool) {
        let display = if visible { "block" } else { "none" };
        if let Err(e) = self.panel.style().set_property("display", display) {
            log::error!("failed to toggle suggestion panel: {e:?}");
        }
    }

    fn set_highlight(&mut self, index: Option<usize>) {
        for (i, row) in self.rows.iter().enumerate() {
            let bg = if Some(i) == index { HIGHLIGHT_BG } else { PLAIN_BG };
            // style writes only fail for read-only declarations
            let _ = row.element.style().set_property("background", bg);
        }
    }
}

impl InputField for DomView {
    fn set_text(&mut self, text: &str) {
        self.input.set_value(text);
    }
}
