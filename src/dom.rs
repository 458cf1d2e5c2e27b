use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Keep the canvas backing store at CSS size * devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Scale the 2D context so drawing happens in CSS pixels.
///
/// Setting the canvas width/height resets the context transform, so this must
/// run after every `sync_canvas_backing_size`.
pub fn rescale_for_dpr(ctx: &web::CanvasRenderingContext2d) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let _ = ctx.scale(dpr, dpr);
    }
}

/// Canvas CSS size in pixels, the coordinate space the simulation runs in.
pub fn canvas_css_size(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    (rect.width() as f32, rect.height() as f32)
}
