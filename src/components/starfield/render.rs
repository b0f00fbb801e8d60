//! Canvas rendering for the starfield.
//!
//! Draws a [`Frame`] in back-to-front order:
//! 1. Solid background
//! 2. Links between stars and to the pointer
//! 3. Stars, with glow for emphasised ones
//! 4. The pointer particle
//!
//! Also home to [`CanvasRasterizer`], which renders the text mask on a
//! detached canvas and reads its alpha channel back.

use std::f64::consts::PI;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use super::mask::{AlphaBuffer, MaskError, MaskRasterizer, MaskScene};
use super::state::{Frame, Link, PointerParticle, StarSprite};
use super::theme::Color;

const LINK_WIDTH: f64 = 0.5;
const STAR_GLOW_BLUR: f64 = 5.0;
const POINTER_GLOW_BLUR: f64 = 10.0;

/// Renders a complete frame to the canvas.
pub fn render(frame: &Frame, ctx: &CanvasRenderingContext2d) {
	draw_background(frame, ctx);

	if !frame.links.is_empty() {
		ctx.set_line_width(LINK_WIDTH);
		for link in &frame.links {
			draw_link(ctx, link);
		}
	}

	for star in &frame.stars {
		draw_star(ctx, star);
	}

	if let Some(pointer) = &frame.pointer {
		draw_pointer(ctx, pointer);
	}

	ctx.set_global_alpha(1.0);
}

fn draw_background(frame: &Frame, ctx: &CanvasRenderingContext2d) {
	ctx.set_global_alpha(1.0);
	ctx.set_fill_style_str(&frame.background.to_css());
	ctx.fill_rect(0.0, 0.0, frame.width, frame.height);
}

fn draw_link(ctx: &CanvasRenderingContext2d, link: &Link) {
	ctx.begin_path();
	ctx.move_to(link.from.0, link.from.1);
	ctx.line_to(link.to.0, link.to.1);
	ctx.set_stroke_style_str(&link.color.to_css());
	ctx.stroke();
}

fn draw_star(ctx: &CanvasRenderingContext2d, star: &StarSprite) {
	ctx.set_global_alpha(star.alpha);
	ctx.set_fill_style_str(&star.color.to_css());
	if star.glow {
		ctx.set_shadow_blur(STAR_GLOW_BLUR);
		ctx.set_shadow_color(&Color::ACCENT.with_alpha(0.8).to_css());
	}

	ctx.begin_path();
	let _ = ctx.arc(star.x, star.y, star.radius, 0.0, PI * 2.0);
	ctx.fill();

	ctx.set_shadow_blur(0.0);
}

fn draw_pointer(ctx: &CanvasRenderingContext2d, pointer: &PointerParticle) {
	ctx.set_global_alpha(1.0);
	ctx.set_fill_style_str(&Color::ACCENT.with_alpha(0.8).to_css());
	ctx.set_shadow_blur(POINTER_GLOW_BLUR);
	ctx.set_shadow_color(&Color::ACCENT.with_alpha(0.5).to_css());

	ctx.begin_path();
	let _ = ctx.arc(pointer.x, pointer.y, pointer.size, 0.0, PI * 2.0);
	ctx.fill();

	ctx.set_shadow_blur(0.0);
}

fn js_error(value: JsValue) -> MaskError {
	MaskError::Js(format!("{:?}", value))
}

/// Mask backend drawing real glyphs on an off-screen canvas element.
pub struct CanvasRasterizer {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasRasterizer {
	/// Create the detached canvas used for every mask.
	pub fn new(document: &Document) -> Result<Self, MaskError> {
		let canvas: HtmlCanvasElement = document
			.create_element("canvas")
			.map_err(js_error)?
			.dyn_into()
			.map_err(|_| MaskError::Unavailable("created element is not a canvas"))?;
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.map_err(js_error)?
			.ok_or(MaskError::Unavailable("no 2d context for mask canvas"))?
			.dyn_into()
			.map_err(|_| MaskError::Unavailable("unexpected mask context type"))?;
		Ok(Self { canvas, ctx })
	}
}

impl MaskRasterizer for CanvasRasterizer {
	fn rasterize(&mut self, scene: &MaskScene) -> Result<AlphaBuffer, MaskError> {
		if scene.width == 0 || scene.height == 0 {
			return Ok(AlphaBuffer::new(scene.width, scene.height));
		}

		if self.canvas.width() != scene.width || self.canvas.height() != scene.height {
			self.canvas.set_width(scene.width);
			self.canvas.set_height(scene.height);
		}

		let (w, h) = (scene.width as f64, scene.height as f64);
		let ctx = &self.ctx;
		ctx.clear_rect(0.0, 0.0, w, h);

		ctx.set_fill_style_str("white");
		ctx.set_font(&scene.font());
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		ctx.fill_text(&scene.text, scene.text_x, scene.text_y)
			.map_err(js_error)?;

		for ripple in &scene.ripples {
			if ripple.radius <= 0.0 {
				continue;
			}
			ctx.begin_path();
			let _ = ctx.arc(ripple.x, ripple.y, ripple.radius, 0.0, PI * 2.0);
			ctx.set_fill_style_str(&Color::WHITE.with_alpha(ripple.alpha).to_css());
			ctx.fill();
		}

		let image = ctx.get_image_data(0.0, 0.0, w, h).map_err(js_error)?;
		AlphaBuffer::from_rgba(scene.width, scene.height, &image.data())
			.ok_or(MaskError::Unavailable("mask pixel data has unexpected length"))
	}
}
