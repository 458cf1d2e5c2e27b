// Drifting scatter-dot field behind the curve.
//
// Dot layout is random but seeded, so a given seed always produces the same
// arrangement. Positions are stored as fractions of the surface; the
// renderer multiplies by the current CSS size, which keeps every dot in
// bounds across resizes without relayout.

use rand::prelude::*;

#[derive(Clone, Copy, Debug)]
pub struct ScatterParams {
    pub dot_count: usize,
    /// Maximum wander from the base position, as a fraction of the surface.
    pub wander: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    /// Wander period range in seconds.
    pub min_period: f32,
    pub max_period: f32,
    /// Opacity breathes between these two while animating.
    pub opacity_min: f32,
    pub opacity_max: f32,
    /// Fixed opacity for the reduced-motion static paint.
    pub opacity_static: f32,
}

impl Default for ScatterParams {
    fn default() -> Self {
        Self {
            dot_count: 30,
            wander: 0.05,
            min_radius: 1.0,
            max_radius: 3.0,
            min_period: 10.0,
            max_period: 25.0,
            opacity_min: 0.1,
            opacity_max: 0.4,
            opacity_static: 0.2,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct ScatterDot {
    base_x: f32,
    base_y: f32,
    radius: f32,
    period: f32,
    phase: f32,
    wander_x: f32,
    wander_y: f32,
}

/// One dot, resolved to CSS pixels for painting.
#[derive(Clone, Copy, Debug)]
pub struct DotSample {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub alpha: f32,
}

pub struct ScatterField {
    params: ScatterParams,
    dots: Vec<ScatterDot>,
    time: f32,
}

impl ScatterField {
    pub fn new(seed: u64, params: ScatterParams) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let dots = (0..params.dot_count)
            .map(|_| ScatterDot {
                base_x: rng.gen::<f32>(),
                base_y: rng.gen::<f32>(),
                radius: rng.gen_range(params.min_radius..=params.max_radius),
                period: rng.gen_range(params.min_period..=params.max_period),
                phase: rng.gen_range(0.0..std::f32::consts::TAU),
                wander_x: rng.gen_range(-params.wander..=params.wander),
                wander_y: rng.gen_range(-params.wander..=params.wander),
            })
            .collect();
        Self {
            params,
            dots,
            time: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    pub fn params(&self) -> &ScatterParams {
        &self.params
    }

    /// Advance the wander clock by one frame.
    pub fn tick(&mut self, dt_sec: f32) {
        self.time += dt_sec;
    }

    /// Resolve dot `index` at the current wander clock.
    pub fn sample(&self, index: usize, width: f32, height: f32) -> Option<DotSample> {
        let dot = self.dots.get(index)?;
        let angle = std::f32::consts::TAU * self.time / dot.period + dot.phase;
        let x = (dot.base_x + dot.wander_x * angle.sin()).clamp(0.0, 1.0);
        let y = (dot.base_y + dot.wander_y * (angle * 0.9).cos()).clamp(0.0, 1.0);
        let span = self.params.opacity_max - self.params.opacity_min;
        let alpha = self.params.opacity_min + span * (0.5 + 0.5 * angle.sin());
        Some(DotSample {
            x: x * width,
            y: y * height,
            radius: dot.radius,
            alpha,
        })
    }

    /// Resolve dot `index` for the reduced-motion paint: base position,
    /// fixed opacity.
    pub fn sample_static(&self, index: usize, width: f32, height: f32) -> Option<DotSample> {
        let dot = self.dots.get(index)?;
        Some(DotSample {
            x: dot.base_x * width,
            y: dot.base_y * height,
            radius: dot.radius,
            alpha: self.params.opacity_static,
        })
    }
}
