//! DOM-side HUD updates

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

/// Element ids/selectors the page is expected to provide
pub const SCORE_ID: &str = "score";
pub const FINAL_SCORE_ID: &str = "finalScore";
pub const GAME_OVER_ID: &str = "gameOver";
pub const CONTROLS_SELECTOR: &str = ".controls";

/// Fade-out duration for the controls hint
const CONTROLS_FADE_MS: i32 = 500;

pub fn set_text(document: &Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

fn html_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

fn controls(document: &Document) -> Option<HtmlElement> {
    document
        .query_selector(CONTROLS_SELECTOR)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}

pub fn set_display(document: &Document, id: &str, display: &str) {
    if let Some(el) = html_by_id(document, id) {
        let _ = el.style().set_property("display", display);
    }
}

/// Fade the controls hint out, then remove it from layout
pub fn hide_controls(document: &Document) {
    let Some(el) = controls(document) else {
        return;
    };
    let style = el.style();
    let _ = style.set_property("opacity", "0");
    let _ = style.set_property("transition", "opacity 0.5s ease-out");

    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move || {
        let _ = el.style().set_property("display", "none");
    });
    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            CONTROLS_FADE_MS,
        )
        .is_err()
    {
        log::warn!("Could not schedule controls fade-out");
    }
    closure.forget();
}

pub fn show_controls(document: &Document) {
    if let Some(el) = controls(document) {
        let style = el.style();
        let _ = style.set_property("display", "block");
        let _ = style.set_property("opacity", "1");
    }
}
