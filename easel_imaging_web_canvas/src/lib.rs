// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas 2D binding for the Easel drawing context.
//!
//! [`WebCanvas`] implements [`Canvas`](easel_imaging::Canvas) over a DOM
//! `<canvas>` element and its `CanvasRenderingContext2d`. It is only
//! available when targeting `wasm32`; on other targets this crate is empty.
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn make_canvas() -> Result<easel_imaging_web_canvas::WebCanvas, wasm_bindgen::JsValue> {
//!     easel_imaging_web_canvas::init_logging(log::Level::Debug);
//!     easel_imaging_web_canvas::WebCanvas::from_element_id("surface")
//! }
//! ```
//!
//! Calls that can throw on the JavaScript side (transforms, arcs, text) are
//! logged at `error` level and otherwise ignored, so a bad frame never tears
//! down the host loop.

#[cfg(target_arch = "wasm32")]
mod web {
    use core::fmt;

    use easel_imaging::{Canvas, Color, DrawContext};
    use kurbo::{Affine, Point, Rect, Size, Vec2};
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    /// Installs the console logger and panic hook.
    ///
    /// Safe to call more than once; later calls keep the first logger.
    pub fn init_logging(level: log::Level) {
        console_error_panic_hook::set_once();
        _ = console_log::init_with_level(level);
    }

    fn color_to_css(color: Color) -> String {
        // `Rgba8` formats as a CSS `rgb(...)`/`rgba(...)` string.
        color.to_rgba8().to_string()
    }

    fn check(result: Result<(), JsValue>, what: &str) {
        if let Err(err) = result {
            log::error!("canvas {what} failed: {err:?}");
        }
    }

    /// A DOM canvas element and its 2D context.
    pub struct WebCanvas {
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
    }

    impl fmt::Debug for WebCanvas {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("WebCanvas { .. }")
        }
    }

    impl WebCanvas {
        /// Binds to `canvas`, acquiring its 2D context.
        pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
            let ctx = canvas
                .get_context("2d")?
                .ok_or_else(|| JsValue::from_str("missing 2d context"))?
                .dyn_into::<CanvasRenderingContext2d>()?;
            Ok(Self { canvas, ctx })
        }

        /// Looks up a `<canvas>` element by id in the current document.
        pub fn from_element_id(id: &str) -> Result<Self, JsValue> {
            let document = web_sys::window()
                .and_then(|window| window.document())
                .ok_or_else(|| JsValue::from_str("no document"))?;
            let canvas = document
                .get_element_by_id(id)
                .ok_or_else(|| JsValue::from_str(&format!("no element with id `{id}`")))?
                .dyn_into::<HtmlCanvasElement>()?;
            Self::new(canvas)
        }

        /// The underlying element.
        pub fn element(&self) -> &HtmlCanvasElement {
            &self.canvas
        }
    }

    impl DrawContext for WebCanvas {
        fn save(&mut self) {
            self.ctx.save();
        }

        fn restore(&mut self) {
            self.ctx.restore();
        }

        fn translate(&mut self, delta: Vec2) {
            check(self.ctx.translate(delta.x, delta.y), "translate");
        }

        fn scale(&mut self, factor: Vec2) {
            check(self.ctx.scale(factor.x, factor.y), "scale");
        }

        fn transform(&mut self, affine: Affine) {
            let [a, b, c, d, e, f] = affine.as_coeffs();
            check(self.ctx.transform(a, b, c, d, e, f), "transform");
        }

        fn set_global_alpha(&mut self, alpha: f32) {
            self.ctx.set_global_alpha(f64::from(alpha));
        }

        fn set_fill_color(&mut self, color: Color) {
            self.ctx.set_fill_style_str(&color_to_css(color));
        }

        fn set_stroke_color(&mut self, color: Color) {
            self.ctx.set_stroke_style_str(&color_to_css(color));
        }

        fn set_line_width(&mut self, width: f64) {
            self.ctx.set_line_width(width);
        }

        fn set_font(&mut self, font: &str) {
            self.ctx.set_font(font);
        }

        fn begin_path(&mut self) {
            self.ctx.begin_path();
        }

        fn close_path(&mut self) {
            self.ctx.close_path();
        }

        fn move_to(&mut self, point: Point) {
            self.ctx.move_to(point.x, point.y);
        }

        fn line_to(&mut self, point: Point) {
            self.ctx.line_to(point.x, point.y);
        }

        fn rect(&mut self, rect: Rect) {
            self.ctx.rect(rect.x0, rect.y0, rect.width(), rect.height());
        }

        fn ellipse(&mut self, center: Point, radii: Vec2, start_angle: f64, end_angle: f64) {
            check(
                self.ctx.ellipse(
                    center.x,
                    center.y,
                    radii.x,
                    radii.y,
                    0.0,
                    start_angle,
                    end_angle,
                ),
                "ellipse",
            );
        }

        fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
            check(
                self.ctx
                    .arc(center.x, center.y, radius, start_angle, end_angle),
                "arc",
            );
        }

        fn fill(&mut self) {
            self.ctx.fill();
        }

        fn stroke(&mut self) {
            self.ctx.stroke();
        }

        fn fill_text(&mut self, text: &str, origin: Point) {
            check(self.ctx.fill_text(text, origin.x, origin.y), "fill_text");
        }
    }

    impl Canvas for WebCanvas {
        fn client_size(&self) -> Size {
            Size::new(
                f64::from(self.canvas.client_width()),
                f64::from(self.canvas.client_height()),
            )
        }

        fn backing_size(&self) -> Size {
            Size::new(
                f64::from(self.canvas.width()),
                f64::from(self.canvas.height()),
            )
        }

        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "Client sizes are small non-negative pixel counts."
        )]
        fn set_backing_size(&mut self, size: Size) {
            self.canvas.set_width(size.width.round() as u32);
            self.canvas.set_height(size.height.round() as u32);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::{WebCanvas, init_logging};
