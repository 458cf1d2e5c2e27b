use crate::core::field::PointerState;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer position in CSS pixels relative to the canvas.
#[inline]
pub fn pointer_css_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

pub fn wire_pointer(canvas: &web::HtmlCanvasElement, pointer: Rc<RefCell<PointerState>>) {
    wire_pointermove(canvas, pointer.clone());
    wire_pointerleave(canvas, pointer);
}

// Move tracking listens on the window so the curve keeps reacting while the
// pointer is over content layered above the canvas.
fn wire_pointermove(canvas: &web::HtmlCanvasElement, pointer: Rc<RefCell<PointerState>>) {
    let canvas = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = pointer_css_px(&ev, &canvas);
        pointer.borrow_mut().set(pos.x, pos.y);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerleave(canvas: &web::HtmlCanvasElement, pointer: Rc<RefCell<PointerState>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        pointer.borrow_mut().clear();
    }) as Box<dyn FnMut(_)>);
    if let Some(doc) = crate::dom::window_document() {
        if let Some(body) = doc.body() {
            _ = body
                .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
        }
    }
    closure.forget();
}
