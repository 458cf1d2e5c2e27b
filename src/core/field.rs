// Point-field engine for the curve background.
//
// Pure state and math only: no web APIs, so the module is usable (and
// tested via include!) on the host as well as on wasm. The frontend owns a
// `PointField`, feeds it the pointer once per animation frame, and reads the
// points back out for painting.

use glam::Vec2;

/// Sentinel pointer position meaning "not over the surface".
pub const POINTER_OFFSCREEN: Vec2 = Vec2::new(-1000.0, -1000.0);

/// Last known pointer position in CSS pixels relative to the canvas.
#[derive(Clone, Copy, Debug)]
pub struct PointerState {
    pub pos: Vec2,
}

impl PointerState {
    pub fn offscreen() -> Self {
        Self {
            pos: POINTER_OFFSCREEN,
        }
    }

    pub fn set(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
    }

    pub fn clear(&mut self) {
        self.pos = POINTER_OFFSCREEN;
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::offscreen()
    }
}

/// One vertex of the rendered curve.
///
/// `x` and `y_base` are fixed at layout time; `y_current`, `y_target` and
/// `velocity` are rewritten every tick.
#[derive(Clone, Copy, Debug)]
pub struct SamplePoint {
    pub x: f32,
    pub y_base: f32,
    pub y_current: f32,
    pub y_target: f32,
    pub velocity: f32,
}

/// Tuning parameters for layout, breathing, pointer influence and the
/// spring integrator. All plain numbers so defaults double as documentation.
#[derive(Clone, Copy, Debug)]
pub struct FieldParams {
    pub point_count: usize,
    /// Gaussian bump shape, as fractions of the surface size.
    pub sigma_ratio: f32,
    pub amplitude_ratio: f32,
    pub baseline_ratio: f32,
    /// Idle oscillation.
    pub breathing_speed: f32,
    pub breathing_amplitude: f32,
    pub phase_step: f32,
    /// Pointer influence.
    pub pointer_radius: f32,
    pub pointer_strength: f32,
    /// Damped spring integrator.
    pub stiffness: f32,
    pub damping: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            point_count: 160,
            sigma_ratio: 0.15,
            amplitude_ratio: 0.4,
            baseline_ratio: 0.7,
            breathing_speed: 0.001,
            breathing_amplitude: 15.0,
            phase_step: 0.05,
            pointer_radius: 150.0,
            pointer_strength: 0.4,
            stiffness: 0.08,
            damping: 0.85,
        }
    }
}

/// The Gaussian bump every point returns to absent pointer influence.
///
/// `y = baseline - amplitude * exp(-(x - mean)^2 / (2 sigma^2))` with the
/// mean pinned to the horizontal center, so the shape is symmetric about
/// `width / 2`.
pub fn baseline_y(x: f32, width: f32, height: f32, params: &FieldParams) -> f32 {
    let mean = width * 0.5;
    let sigma = width * params.sigma_ratio;
    let amplitude = height * params.amplitude_ratio;
    let baseline = height * params.baseline_ratio;
    let d = x - mean;
    baseline - amplitude * (-(d * d) / (2.0 * sigma * sigma)).exp()
}

/// A 1-D field of sample points tracing a pointer-reactive curve.
pub struct PointField {
    params: FieldParams,
    points: Vec<SamplePoint>,
    width: f32,
    height: f32,
    phase: f32,
}

impl PointField {
    pub fn new(width: f32, height: f32, params: FieldParams) -> Self {
        let mut field = Self {
            params,
            points: Vec::new(),
            width: 0.0,
            height: 0.0,
            phase: 0.0,
        };
        field.resize(width, height);
        field
    }

    /// Discard the point set and lay out a fresh one for the new surface.
    ///
    /// Degenerate layouts (non-positive size, fewer than two points) leave
    /// the set empty; `tick` and rendering treat that as a no-op.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.points.clear();
        if width <= 0.0 || height <= 0.0 || self.params.point_count < 2 {
            return;
        }
        let spacing = width / (self.params.point_count - 1) as f32;
        self.points.reserve(self.params.point_count);
        for i in 0..self.params.point_count {
            let x = i as f32 * spacing;
            let y = baseline_y(x, width, height, &self.params);
            self.points.push(SamplePoint {
                x,
                y_base: y,
                y_current: y,
                y_target: y,
                velocity: 0.0,
            });
        }
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Advance the simulation by one frame.
    ///
    /// Each point blends the fixed baseline, a slow global breathing
    /// oscillation, and a Gaussian-falloff displacement toward the pointer,
    /// then integrates a damped spring toward that target. With the pointer
    /// at the off-surface sentinel the target is exactly the breathing base.
    pub fn tick(&mut self, pointer: PointerState) {
        if self.points.len() < 2 {
            return;
        }
        self.phase += self.params.breathing_speed;
        let radius = self.params.pointer_radius;
        let falloff_sigma = radius * 0.5;
        for (i, p) in self.points.iter_mut().enumerate() {
            let breath =
                (self.phase + i as f32 * self.params.phase_step).sin() * self.params.breathing_amplitude;
            let current_base = p.y_base + breath;

            let delta = pointer.pos - Vec2::new(p.x, p.y_current);
            let dist = delta.length();
            let mut pointer_offset = 0.0;
            if dist < radius {
                let weight = (-(dist * dist) / (2.0 * falloff_sigma * falloff_sigma)).exp();
                pointer_offset = (pointer.pos.y - p.y_base) * weight * self.params.pointer_strength;
            }
            p.y_target = current_base + pointer_offset;

            let (y, v) = spring_step(
                p.y_current,
                p.y_target,
                p.velocity,
                self.params.stiffness,
                self.params.damping,
            );
            p.y_current = y;
            p.velocity = v;
        }
    }
}

/// One damped-spring integration step; returns the new position and velocity.
///
/// With `damping` in `(0, 1)` and the target at the current position the
/// velocity magnitude strictly decays toward rest.
#[inline]
pub fn spring_step(current: f32, target: f32, velocity: f32, stiffness: f32, damping: f32) -> (f32, f32) {
    let mut v = velocity + (target - current) * stiffness;
    v *= damping;
    (current + v, v)
}

/// How many points the reveal ratio connects.
///
/// Ramps from a two-point stub to the full curve as `reveal` goes 0 -> 1;
/// degenerate fields (fewer than two points) draw nothing.
pub fn reveal_limit(count: usize, reveal: f32) -> usize {
    if count < 2 {
        return 0;
    }
    let n = (count as f32 * reveal.clamp(0.0, 1.0)).floor() as usize;
    n.clamp(2, count)
}
