use crate::constants::REVEAL_DURATION_SEC;
use crate::core::field::{PointField, PointerState};
use crate::core::motion::{FramePlan, MotionGate};
use crate::core::scatter::ScatterField;
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything a frame callback needs, held behind shared handles so the
/// event closures can write the same state the tick reads.
pub struct FrameContext {
    pub ctx: web::CanvasRenderingContext2d,
    pub field: Rc<RefCell<PointField>>,
    pub scatter: Rc<RefCell<ScatterField>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub gate: Rc<RefCell<MotionGate>>,

    pub started: Instant,
    pub last_instant: Instant,
}

impl FrameContext {
    /// Run one frame. Returns true when the next frame should be scheduled;
    /// returning false parks the loop until an external signal wakes it.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let plan = self.gate.borrow_mut().plan_frame();
        match plan {
            FramePlan::Animate => {
                let (w, h) = {
                    let f = self.field.borrow();
                    (f.width(), f.height())
                };
                if w <= 0.0 || h <= 0.0 {
                    // Zero-size surface: skip the paint, keep the loop alive.
                    return true;
                }
                let pointer = *self.pointer.borrow();
                self.field.borrow_mut().tick(pointer);
                self.scatter.borrow_mut().tick(dt_sec);

                let reveal = ((now - self.started).as_secs_f32() / REVEAL_DURATION_SEC).min(1.0);
                render::draw_frame(
                    &self.ctx,
                    &self.field.borrow(),
                    &self.scatter.borrow(),
                    reveal,
                    w,
                    h,
                );
                true
            }
            FramePlan::PaintStatic => {
                let (w, h) = {
                    let f = self.field.borrow();
                    (f.width(), f.height())
                };
                if w > 0.0 && h > 0.0 {
                    render::draw_static(&self.ctx, &self.field.borrow(), &self.scatter.borrow(), w, h);
                }
                false
            }
            FramePlan::Idle => false,
        }
    }
}

/// requestAnimationFrame loop. Stopping is simply not re-requesting the next
/// frame; `request_frame` is idempotent while a callback is already queued,
/// so event handlers can call it freely to wake a parked loop.
#[derive(Clone)]
pub struct RafLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    scheduled: Rc<Cell<bool>>,
}

impl RafLoop {
    pub fn new(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let raf = Self {
            tick: Rc::new(RefCell::new(None)),
            scheduled: Rc::new(Cell::new(false)),
        };
        let raf_tick = raf.clone();
        *raf.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            raf_tick.scheduled.set(false);
            if frame_ctx.borrow_mut().frame() {
                raf_tick.request_frame();
            }
        }) as Box<dyn FnMut()>));
        raf
    }

    pub fn request_frame(&self) {
        if self.scheduled.get() {
            return;
        }
        if let Some(w) = web::window() {
            let ok = w
                .request_animation_frame(self.tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
                .is_ok();
            if ok {
                self.scheduled.set(true);
            }
        }
    }
}
