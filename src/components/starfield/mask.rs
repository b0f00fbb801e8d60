//! Text mask: the name (plus ripples) rasterized to an alpha buffer.
//!
//! The starfield never draws the mask; it only samples it to decide which
//! stars sit on the name. Rasterization is hidden behind [`MaskRasterizer`]
//! so the browser backend ([`super::render::CanvasRasterizer`]) and the
//! pure-Rust [`BoxRasterizer`] are interchangeable.

use thiserror::Error;

/// Largest font size used for the name, in pixels.
pub const MAX_FONT_SIZE: f64 = 120.0;
/// Font size as a fraction of the viewport width (before clamping).
pub const FONT_SIZE_FRACTION: f64 = 0.1;
/// Font family for the name.
pub const FONT_FAMILY: &str = "\"JetBrains Mono\", monospace";

/// Failure to produce a mask. The starfield keeps running without one.
#[derive(Debug, Error)]
pub enum MaskError {
	#[error("mask surface unavailable: {0}")]
	Unavailable(&'static str),
	#[error("canvas call failed: {0}")]
	Js(String),
}

/// A single-channel (alpha) pixel buffer, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlphaBuffer {
	width: u32,
	height: u32,
	data: Vec<u8>,
}

impl AlphaBuffer {
	/// Fully transparent buffer.
	pub fn new(width: u32, height: u32) -> Self {
		Self {
			width,
			height,
			data: vec![0; width as usize * height as usize],
		}
	}

	/// Keep only the alpha channel of RGBA8 pixel data (as returned by
	/// `getImageData`). Returns `None` if the data length does not match.
	pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Option<Self> {
		if rgba.len() != width as usize * height as usize * 4 {
			return None;
		}
		Some(Self {
			width,
			height,
			data: rgba.chunks_exact(4).map(|px| px[3]).collect(),
		})
	}

	pub fn width(&self) -> u32 {
		self.width
	}

	pub fn height(&self) -> u32 {
		self.height
	}

	pub fn get(&self, x: u32, y: u32) -> u8 {
		if x >= self.width || y >= self.height {
			return 0;
		}
		self.data[y as usize * self.width as usize + x as usize]
	}

	pub fn set(&mut self, x: u32, y: u32, alpha: u8) {
		if x < self.width && y < self.height {
			self.data[y as usize * self.width as usize + x as usize] = alpha;
		}
	}

	/// Sample at the nearest pixel to a floating-point position.
	/// Anything outside the buffer reads as transparent.
	pub fn alpha_at(&self, x: f64, y: f64) -> u8 {
		let (x, y) = (x.round(), y.round());
		if !(x >= 0.0 && y >= 0.0) {
			return 0;
		}
		if x >= self.width as f64 || y >= self.height as f64 {
			return 0;
		}
		self.get(x as u32, y as u32)
	}

	/// Number of pixels with non-zero alpha.
	#[cfg(test)]
	pub(crate) fn coverage(&self) -> usize {
		self.data.iter().filter(|&&a| a != 0).count()
	}

	/// Source-over composite of a solid alpha onto one pixel.
	fn blend(&mut self, x: u32, y: u32, alpha: u8) {
		let dst = self.get(x, y) as u32;
		let src = alpha as u32;
		let out = src + (dst * (255 - src) + 127) / 255;
		self.set(x, y, out.min(255) as u8);
	}

	/// Composite an axis-aligned rectangle; pixels whose centre is inside
	/// are covered.
	pub fn fill_rect(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, alpha: u8) {
		let Some((cx0, cx1)) = pixel_span(x0, x1, self.width) else {
			return;
		};
		let Some((cy0, cy1)) = pixel_span(y0, y1, self.height) else {
			return;
		};
		for y in cy0..cy1 {
			for x in cx0..cx1 {
				self.blend(x, y, alpha);
			}
		}
	}

	/// Composite a filled circle; pixels whose centre is inside are covered.
	pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, alpha: u8) {
		if radius <= 0.0 || alpha == 0 {
			return;
		}
		let Some((x0, x1)) = pixel_span(cx - radius, cx + radius, self.width) else {
			return;
		};
		let Some((y0, y1)) = pixel_span(cy - radius, cy + radius, self.height) else {
			return;
		};
		let r2 = radius * radius;
		for y in y0..y1 {
			for x in x0..x1 {
				let (dx, dy) = (x as f64 + 0.5 - cx, y as f64 + 0.5 - cy);
				if dx * dx + dy * dy <= r2 {
					self.blend(x, y, alpha);
				}
			}
		}
	}
}

/// Pixel indices `[start, end)` whose centres fall in `[lo, hi)`, clipped to
/// `0..limit`.
fn pixel_span(lo: f64, hi: f64, limit: u32) -> Option<(u32, u32)> {
	let start = (lo - 0.5).ceil().max(0.0);
	let end = (hi - 0.5).ceil().min(limit as f64);
	if !(start < end) {
		return None;
	}
	Some((start as u32, end as u32))
}

/// A ripple as it should appear in one mask.
#[derive(Clone, Debug, PartialEq)]
pub struct RippleStamp {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	/// Fill alpha in `0.0..=1.0`.
	pub alpha: f64,
}

/// Everything a rasterizer needs to draw one mask.
///
/// Two equal scenes must rasterize to identical buffers.
#[derive(Clone, Debug, PartialEq)]
pub struct MaskScene {
	pub width: u32,
	pub height: u32,
	pub text: String,
	pub font_size: f64,
	/// Centre of the text (horizontal centre, vertical middle).
	pub text_x: f64,
	pub text_y: f64,
	pub ripples: Vec<RippleStamp>,
}

impl MaskScene {
	/// Responsive font size for a viewport width.
	pub fn font_size_for(width: f64) -> f64 {
		(width * FONT_SIZE_FRACTION).min(MAX_FONT_SIZE)
	}

	/// CSS font shorthand for the name.
	pub fn font(&self) -> String {
		format!("bold {}px {}", self.font_size, FONT_FAMILY)
	}
}

/// Turns a [`MaskScene`] into an [`AlphaBuffer`] of the scene's size.
pub trait MaskRasterizer {
	fn rasterize(&mut self, scene: &MaskScene) -> Result<AlphaBuffer, MaskError>;
}

impl<R: MaskRasterizer + ?Sized> MaskRasterizer for Box<R> {
	fn rasterize(&mut self, scene: &MaskScene) -> Result<AlphaBuffer, MaskError> {
		(**self).rasterize(scene)
	}
}

/// Horizontal advance of one monospace glyph, relative to font size.
const GLYPH_ADVANCE: f64 = 0.6;
/// Height of a glyph box, relative to font size.
const GLYPH_HEIGHT: f64 = 0.72;
/// Horizontal inset of a glyph box within its advance.
const GLYPH_INSET: f64 = 0.1;

/// Font-free rasterizer that draws each visible character as a solid box in
/// a monospace grid. Used off-browser and in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoxRasterizer;

impl MaskRasterizer for BoxRasterizer {
	fn rasterize(&mut self, scene: &MaskScene) -> Result<AlphaBuffer, MaskError> {
		let mut buffer = AlphaBuffer::new(scene.width, scene.height);

		let advance = scene.font_size * GLYPH_ADVANCE;
		let glyph_count = scene.text.chars().count() as f64;
		let left = scene.text_x - advance * glyph_count / 2.0;
		let (top, bottom) = (
			scene.text_y - scene.font_size * GLYPH_HEIGHT / 2.0,
			scene.text_y + scene.font_size * GLYPH_HEIGHT / 2.0,
		);
		for (i, c) in scene.text.chars().enumerate() {
			if c.is_whitespace() {
				continue;
			}
			let x0 = left + advance * i as f64;
			buffer.fill_rect(
				x0 + advance * GLYPH_INSET,
				top,
				x0 + advance * (1.0 - GLYPH_INSET),
				bottom,
				255,
			);
		}

		for ripple in &scene.ripples {
			let alpha = (ripple.alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
			buffer.fill_circle(ripple.x, ripple.y, ripple.radius, alpha);
		}

		Ok(buffer)
	}
}
