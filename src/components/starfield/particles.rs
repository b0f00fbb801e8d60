//! Drifting background stars.

use fastrand::Rng;

use super::config::StarfieldConfig;
use super::mask::AlphaBuffer;
use super::theme::Color;

/// Smallest radius a star can be given.
pub const MIN_STAR_SIZE: f64 = 0.1;
/// Smallest horizontal drift per frame.
pub const MIN_STAR_SPEED: f64 = 0.05;
/// Smallest base opacity.
pub const MIN_STAR_OPACITY: f64 = 0.2;

/// A single star.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub size: f64,
	/// Horizontal drift per frame.
	pub speed: f64,
	pub color: Color,
	pub opacity: f64,
	/// Whether the star currently sits on the rendered name.
	pub in_text: bool,
}

/// The full star set for one viewport size.
///
/// Stars are only ever created wholesale by [`ParticleField::regenerate`];
/// between resizes they drift right and wrap back to the left edge.
pub struct ParticleField {
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
}

impl ParticleField {
	pub fn new() -> Self {
		Self {
			particles: Vec::new(),
			width: 0.0,
			height: 0.0,
		}
	}

	/// Replace every star with `count` fresh ones spread over the viewport.
	pub fn regenerate(
		&mut self,
		count: usize,
		width: f64,
		height: f64,
		config: &StarfieldConfig,
		rng: &mut Rng,
	) {
		self.width = width;
		self.height = height;
		self.particles.clear();
		self.particles.reserve(count);

		for _ in 0..count {
			let color = if config.palette.is_empty() {
				Color::WHITE
			} else {
				config.palette.get(rng.usize(..config.palette.len()))
			};

			self.particles.push(Particle {
				x: rng.f64() * width,
				y: rng.f64() * height,
				size: rng.f64() * config.star_size + MIN_STAR_SIZE,
				speed: rng.f64() * config.speed + MIN_STAR_SPEED,
				color,
				opacity: rng.f64() * (1.0 - MIN_STAR_OPACITY) + MIN_STAR_OPACITY,
				in_text: false,
			});
		}
	}

	/// Mark every star that lands on a non-transparent mask pixel.
	pub fn classify(&mut self, mask: &AlphaBuffer) {
		for p in &mut self.particles {
			p.in_text = mask.alpha_at(p.x, p.y) != 0;
		}
	}

	/// Drift every star right; stars past the right edge restart at the left
	/// edge on a new random row.
	pub fn advance(&mut self, rng: &mut Rng) {
		for p in &mut self.particles {
			p.x += p.speed;
			if p.x > self.width {
				p.x = 0.0;
				p.y = rng.f64() * self.height;
				p.in_text = false;
			}
		}
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}

impl Default for ParticleField {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn field(count: usize, width: f64, height: f64, seed: u64) -> ParticleField {
		let mut field = ParticleField::new();
		field.regenerate(
			count,
			width,
			height,
			&StarfieldConfig::default(),
			&mut Rng::with_seed(seed),
		);
		field
	}

	#[test]
	fn regenerate_fills_viewport_within_ranges() {
		let config = StarfieldConfig::default();
		let field = field(400, 800.0, 600.0, 7);

		assert_eq!(field.len(), 400);
		for p in &field.particles {
			assert!((0.0..800.0).contains(&p.x));
			assert!((0.0..600.0).contains(&p.y));
			assert!(p.size >= MIN_STAR_SIZE && p.size < MIN_STAR_SIZE + config.star_size);
			assert!(p.speed >= MIN_STAR_SPEED && p.speed < MIN_STAR_SPEED + config.speed);
			assert!(p.opacity >= MIN_STAR_OPACITY && p.opacity < 1.0);
			assert!(config.palette.colors.contains(&p.color));
			assert!(!p.in_text);
		}
	}

	#[test]
	fn regenerate_replaces_the_whole_set() {
		let mut f = field(50, 100.0, 100.0, 1);
		f.regenerate(
			10,
			30.0,
			20.0,
			&StarfieldConfig::default(),
			&mut Rng::with_seed(2),
		);
		assert_eq!(f.len(), 10);
		assert!(f.particles.iter().all(|p| p.x < 30.0 && p.y < 20.0));
	}

	#[test]
	fn advance_drifts_and_wraps_at_right_edge() {
		let mut f = field(2, 100.0, 50.0, 3);
		f.particles[0].x = 10.0;
		f.particles[0].speed = 0.1;
		f.particles[1].x = 99.98;
		f.particles[1].speed = 0.1;
		f.particles[1].in_text = true;

		let mut rng = Rng::with_seed(4);
		f.advance(&mut rng);

		assert!((f.particles[0].x - 10.1).abs() < 1e-9);
		assert_eq!(f.particles[1].x, 0.0);
		assert!((0.0..50.0).contains(&f.particles[1].y));
		assert!(!f.particles[1].in_text);
	}

	#[test]
	fn classify_follows_mask_alpha() {
		let mut mask = AlphaBuffer::new(10, 10);
		mask.set(4, 4, 255);
		let mut f = field(2, 10.0, 10.0, 5);
		f.particles[0].x = 4.2;
		f.particles[0].y = 3.6;
		f.particles[1].x = 8.0;
		f.particles[1].y = 8.0;

		f.classify(&mask);

		assert!(f.particles[0].in_text);
		assert!(!f.particles[1].in_text);
	}
}
