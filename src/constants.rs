// Render-side tuning constants. Simulation tuning lives in
// `core::field::FieldParams` / `core::scatter::ScatterParams`.

// Canvas element the library attaches to
pub const CANVAS_ID: &str = "bg-canvas";

// Curve styling
pub const LINE_COLOR: &str = "rgba(168, 85, 247, 0.25)"; // purple/white blend
pub const GLOW_COLOR: &str = "rgba(168, 85, 247, 0.1)";
pub const LINE_WIDTH: f64 = 1.5;
pub const SHADOW_BLUR: f64 = 15.0;

// Scatter dot styling (alpha is animated via globalAlpha)
pub const DOT_COLOR: &str = "#ffffff";

// Draw-in effect after mount
pub const REVEAL_DURATION_SEC: f32 = 2.0;
