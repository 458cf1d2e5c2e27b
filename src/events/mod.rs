//! Browser signal wiring: resize, visibility, reduced motion.
//!
//! Every handler only writes shared state and, when the gate reports pending
//! work, asks the loop to schedule a frame; all real work happens inside the
//! frame callback.

pub mod pointer;

use crate::core::field::PointField;
use crate::core::motion::MotionGate;
use crate::dom;
use crate::frame::RafLoop;
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Rebuild the point layout whenever the window resizes. The old point set
/// is fully replaced; the static frame is re-armed so a parked reduced-motion
/// loop repaints at the new size.
pub fn wire_resize(
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    field: Rc<RefCell<PointField>>,
    gate: Rc<RefCell<MotionGate>>,
    raf: RafLoop,
) {
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas);
        dom::rescale_for_dpr(&ctx);
        let (w, h) = dom::canvas_css_size(&canvas);
        field.borrow_mut().resize(w, h);
        let pending = {
            let mut g = gate.borrow_mut();
            g.invalidate();
            g.has_pending_work()
        };
        if pending {
            raf.request_frame();
        }
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Gate the loop on canvas visibility via an IntersectionObserver. Becoming
/// visible wakes a parked loop; going off screen simply lets the loop stop
/// re-requesting frames.
pub fn wire_visibility(
    canvas: &web::HtmlCanvasElement,
    gate: Rc<RefCell<MotionGate>>,
    raf: RafLoop,
) -> anyhow::Result<()> {
    let closure = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        let visible = entries
            .get(0)
            .dyn_into::<web::IntersectionObserverEntry>()
            .map(|e| e.is_intersecting())
            .unwrap_or(true);
        if gate.borrow_mut().set_visible(visible) {
            raf.request_frame();
        }
    }) as Box<dyn FnMut(js_sys::Array)>);
    let observer = web::IntersectionObserver::new(closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("IntersectionObserver: {:?}", e))?;
    observer.observe(canvas);
    closure.forget();
    Ok(())
}

/// Current value of the reduced-motion media query.
pub fn initial_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// Follow changes to the reduced-motion preference. Clearing the preference
/// while visible resumes the animation; setting it repaints one static frame.
pub fn wire_reduced_motion(gate: Rc<RefCell<MotionGate>>, raf: RafLoop) {
    let Some(mql) = web::window().and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
    else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::MediaQueryListEvent| {
        if gate.borrow_mut().set_reduced_motion(ev.matches()) {
            raf.request_frame();
        }
    }) as Box<dyn FnMut(_)>);
    _ = mql.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}
