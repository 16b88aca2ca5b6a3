// Browser helpers: logging, frame scheduling and item measurement.
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlElement};

use crate::model::ItemPosition;
use crate::state::PositionArena;

pub const ITEM_CLASS: &str = "cards-item";

pub fn init_logging() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
}

/// Monotonic milliseconds; wall clock if `performance` is unavailable.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Run `f` before the next repaint.
pub fn request_frame(f: impl FnOnce() + 'static) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let cb = Closure::once_into_js(f);
    window.request_animation_frame(cb.unchecked_ref()).is_ok()
}

/// Run `f` once the layout produced by the latest render has been painted.
/// One frame is not enough: the first callback can still see the old
/// geometry.
pub fn after_next_paint(f: impl FnOnce() + 'static) {
    request_frame(move || {
        request_frame(f);
    });
}

/// Grid item wrappers, in render order.
pub fn item_elements(container: &Element) -> Vec<HtmlElement> {
    let children = container.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter(|el| el.class_list().contains(ITEM_CLASS))
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Top-left of every item relative to the container.
pub fn measure_items(container: &Element) -> PositionArena {
    let origin = container.get_bounding_client_rect();
    PositionArena::capture(item_elements(container).iter().enumerate().map(|(i, el)| {
        let rect = el.get_bounding_client_rect();
        (
            i,
            ItemPosition {
                x: rect.left() - origin.left(),
                y: rect.top() - origin.top(),
            },
        )
    }))
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let style = el.style();
    let _ = if value.is_empty() {
        style.remove_property(property).map(|_| ())
    } else {
        style.set_property(property, value)
    };
}
