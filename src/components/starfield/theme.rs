//! Colours used by the starfield.
//!
//! Stars pick their base colour from a small fixed palette; in-text stars,
//! emphasised links and the pointer particle share a single cyan accent.

use serde::Deserialize;

/// RGBA color representation.
///
/// Deserializes from a CSS string (`#RRGGBB`, `rgb(..)` or `rgba(..)`).
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const WHITE: Color = Color::rgb(255, 255, 255);
	pub const BLACK: Color = Color::rgb(0, 0, 0);
	/// Accent used for emphasised links, glows and the pointer particle.
	pub const ACCENT: Color = Color::rgb(76, 201, 240);

	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	/// Parses a CSS color string.
	/// Supports hex (`#RRGGBB`) and `rgb()`/`rgba()` functional notation.
	pub fn parse(color_str: &str) -> Option<Self> {
		let color_str = color_str.trim();
		if let Some(digits) = color_str.strip_prefix('#') {
			if digits.len() != 6 {
				return None;
			}
			let r = u8::from_str_radix(digits.get(0..2)?, 16).ok()?;
			let g = u8::from_str_radix(digits.get(2..4)?, 16).ok()?;
			let b = u8::from_str_radix(digits.get(4..6)?, 16).ok()?;
			Some(Color::rgb(r, g, b))
		} else if color_str.starts_with("rgb") {
			let nums: Vec<&str> = color_str
				.trim_start_matches("rgba(")
				.trim_start_matches("rgb(")
				.trim_end_matches(')')
				.split(',')
				.collect();
			if nums.len() < 3 || nums.len() > 4 {
				return None;
			}
			let r = nums[0].trim().parse().ok()?;
			let g = nums[1].trim().parse().ok()?;
			let b = nums[2].trim().parse().ok()?;
			let a = match nums.get(3) {
				Some(a) => a.trim().parse::<f64>().ok()?.clamp(0.0, 1.0),
				None => 1.0,
			};
			Some(Color::rgba(r, g, b, a))
		} else {
			None
		}
	}
}

impl TryFrom<String> for Color {
	type Error = String;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Color::parse(&value).ok_or_else(|| format!("unrecognized color: {value:?}"))
	}
}

/// Base colours a star may be given at creation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct StarPalette {
	pub colors: Vec<Color>,
}

impl StarPalette {
	/// Whites and pale blues.
	pub fn night_sky() -> Self {
		Self {
			colors: vec![
				Color::rgb(255, 255, 255), // #ffffff
				Color::rgb(238, 238, 238), // #eeeeee
				Color::rgb(204, 204, 204), // #cccccc
				Color::rgb(143, 165, 255), // #8fa5ff
				Color::rgb(161, 212, 255), // #a1d4ff
			],
		}
	}

	pub fn len(&self) -> usize {
		self.colors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	/// Wraps around; an empty palette falls back to white.
	pub fn get(&self, index: usize) -> Color {
		if self.colors.is_empty() {
			return Color::WHITE;
		}
		self.colors[index % self.colors.len()]
	}
}

impl Default for StarPalette {
	fn default() -> Self {
		Self::night_sky()
	}
}
