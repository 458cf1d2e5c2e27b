#![cfg(target_arch = "wasm32")]
//! Pointer-reactive Gaussian curve background.
//!
//! Attaches to the `#bg-canvas` element, lays out a field of sample points
//! along a Gaussian bump, and animates them with damped-spring physics driven
//! by the pointer. A drifting scatter field sits behind the curve. The loop
//! is gated on canvas visibility and the reduced-motion preference.

use crate::constants::CANVAS_ID;
use crate::core::field::{FieldParams, PointField, PointerState};
use crate::core::motion::MotionGate;
use crate::core::scatter::{ScatterField, ScatterParams};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("curvefield-web starting");

    // Decorative only: log and carry on with a blank background on failure.
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    dom::sync_canvas_backing_size(&canvas);
    dom::rescale_for_dpr(&ctx);
    let (w, h) = dom::canvas_css_size(&canvas);

    let field = Rc::new(RefCell::new(PointField::new(w, h, FieldParams::default())));
    let scatter_seed = js_sys::Date::now() as u64;
    let scatter = Rc::new(RefCell::new(ScatterField::new(
        scatter_seed,
        ScatterParams::default(),
    )));
    let pointer = Rc::new(RefCell::new(PointerState::default()));
    let gate = Rc::new(RefCell::new(MotionGate::new(
        events::initial_reduced_motion(),
    )));
    log::info!(
        "[field] points={} surface={:.0}x{:.0} dots={}",
        field.borrow().points().len(),
        w,
        h,
        scatter.borrow().len()
    );

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        ctx: ctx.clone(),
        field: field.clone(),
        scatter: scatter.clone(),
        pointer: pointer.clone(),
        gate: gate.clone(),
        started: Instant::now(),
        last_instant: Instant::now(),
    }));
    let raf = frame::RafLoop::new(frame_ctx);

    events::pointer::wire_pointer(&canvas, pointer);
    events::wire_resize(canvas.clone(), ctx, field, gate.clone(), raf.clone());
    events::wire_visibility(&canvas, gate.clone(), raf.clone())?;
    events::wire_reduced_motion(gate, raf.clone());

    raf.request_frame();
    Ok(())
}
