//! Starfield state and interaction tracking.
//!
//! [`StarfieldState`] owns everything that changes while the page is open:
//! the stars, the ripple pool, the pointer, the text offset and the current
//! mask. The host calls [`StarfieldState::tick`] once per display refresh and
//! forwards input events to the `on_*` methods; each tick returns a [`Frame`]
//! for the renderer to draw.

use fastrand::Rng;
use log::{debug, info, warn};

use super::config::StarfieldConfig;
use super::mask::{AlphaBuffer, MaskRasterizer, MaskScene, RippleStamp};
use super::particles::ParticleField;
use super::ripple::RipplePool;
use super::theme::Color;

/// Pointer particle radius at rest.
pub const POINTER_REST_SIZE: f64 = 2.0;
/// Pointer particle radius right after a click.
pub const POINTER_PULSE_SIZE: f64 = 5.0;
/// Base opacity of star-to-pointer links.
pub const POINTER_LINK_OPACITY: f64 = 0.3;
/// In-text stars are drawn this much larger.
pub const IN_TEXT_SCALE: f64 = 1.5;
/// ...or this much larger while the pointer is over the canvas.
pub const IN_TEXT_INTERACTING_SCALE: f64 = 2.0;
/// Ripple radius at the end of its life, relative to the short viewport side.
pub const RIPPLE_RADIUS_FRACTION: f64 = 0.4;
/// Connection distance multiplier while a section boost is active.
pub const BOOST_DISTANCE_FACTOR: f64 = 1.5;
/// Connection opacity while a section boost is active.
pub const BOOST_OPACITY: f64 = 0.25;

/// The synthetic particle that follows the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerParticle {
	pub x: f64,
	pub y: f64,
	pub size: f64,
	pub active: bool,
}

impl Default for PointerParticle {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			size: POINTER_REST_SIZE,
			active: true,
		}
	}
}

/// A line between a star and another star or the pointer.
///
/// The renderer only reads the endpoints and color; `source` and `target`
/// identify the stars for callers inspecting a frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Link {
	/// Index of the first star.
	pub source: usize,
	/// Index of the second star, or `None` for the pointer.
	pub target: Option<usize>,
	pub from: (f64, f64),
	pub to: (f64, f64),
	/// Stroke color, alpha included.
	pub color: Color,
	/// Whether either end sits on the name.
	pub emphasized: bool,
}

impl Link {
	fn new(
		source: usize,
		target: Option<usize>,
		from: (f64, f64),
		to: (f64, f64),
		alpha: f64,
		emphasized: bool,
	) -> Self {
		let color = if emphasized {
			Color::ACCENT.with_alpha(alpha * 2.0)
		} else {
			Color::WHITE.with_alpha(alpha)
		};
		Self {
			source,
			target,
			from,
			to,
			color,
			emphasized,
		}
	}
}

/// How a single star is drawn this frame.
#[derive(Clone, Debug, PartialEq)]
pub struct StarSprite {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub color: Color,
	pub alpha: f64,
	/// Draw with the accent glow.
	pub glow: bool,
}

/// Display list for one frame, drawn back to front.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
	pub width: f64,
	pub height: f64,
	pub background: Color,
	pub links: Vec<Link>,
	pub stars: Vec<StarSprite>,
	pub pointer: Option<PointerParticle>,
}

/// Core starfield state.
///
/// Created once when the component mounts, then mutated by the animation loop
/// and input handlers. Generic over the mask backend so the whole thing runs
/// without a browser in tests.
pub struct StarfieldState<R: MaskRasterizer> {
	pub config: StarfieldConfig,
	pub width: f64,
	pub height: f64,
	pub field: ParticleField,
	pub ripples: RipplePool,
	pub pointer: PointerParticle,
	/// Pointer-driven displacement of the name, each axis within
	/// `±config.max_text_offset`.
	pub text_offset: (f64, f64),
	/// True while the pointer is over the canvas.
	pub interacting: bool,
	pub show_connections: bool,
	/// Section-proximity boost of connection distance and opacity.
	pub boosted: bool,
	/// Bumped by every boost start; only the latest one may end it.
	boost_generation: u64,
	mask: Option<AlphaBuffer>,
	rasterizer: R,
	rng: Rng,
}

impl<R: MaskRasterizer> StarfieldState<R> {
	pub fn new(config: StarfieldConfig, rasterizer: R) -> Self {
		Self::with_rng(config, rasterizer, Rng::new())
	}

	pub fn with_rng(config: StarfieldConfig, rasterizer: R, rng: Rng) -> Self {
		let ripples = RipplePool::new(config.max_ripples);
		Self {
			config,
			width: 0.0,
			height: 0.0,
			field: ParticleField::new(),
			ripples,
			pointer: PointerParticle::default(),
			text_offset: (0.0, 0.0),
			interacting: false,
			show_connections: true,
			boosted: false,
			boost_generation: 0,
			mask: None,
			rasterizer,
			rng,
		}
	}

	/// Adopt a new viewport size: fresh stars and a fresh mask.
	pub fn resize(&mut self, width: f64, height: f64, now: f64) {
		self.width = width.max(0.0);
		self.height = height.max(0.0);
		info!(
			"starfield: resized to {}x{}, {} stars",
			self.width, self.height, self.config.star_count
		);
		self.regenerate_particles(self.config.star_count, self.width, self.height);
		self.regenerate_mask(now);
	}

	pub fn regenerate_particles(&mut self, count: usize, width: f64, height: f64) {
		self.field
			.regenerate(count, width, height, &self.config, &mut self.rng);
	}

	/// Point the name is centred on before the pointer offset is applied.
	pub fn text_anchor(&self) -> (f64, f64) {
		(self.width / 2.0, self.height * self.config.text_anchor_y)
	}

	/// Describe the mask for the current offset, ripples and viewport.
	///
	/// Ripples are stamped at the radius of the last expiry pass; `now` only
	/// drives their fade.
	pub fn mask_scene(&self, now: f64) -> MaskScene {
		let (ax, ay) = self.text_anchor();
		let duration = self.config.ripple_duration_ms;
		let ripple_alpha = self.config.ripple_color.a;

		let ripples = self
			.ripples
			.iter()
			.filter_map(|r| {
				let progress = r.progress(now, duration)?;
				Some(RippleStamp {
					x: r.x,
					y: r.y,
					radius: r.radius,
					alpha: r.opacity * (1.0 - progress) * ripple_alpha,
				})
			})
			.collect();

		MaskScene {
			width: self.width as u32,
			height: self.height as u32,
			text: self.config.name_text.clone(),
			font_size: MaskScene::font_size_for(self.width),
			text_x: ax + self.text_offset.0,
			text_y: ay + self.text_offset.1,
			ripples,
		}
	}

	/// Drop expired ripples and redraw the mask.
	pub fn regenerate_mask(&mut self, now: f64) {
		let expired = self
			.ripples
			.expire(now, self.config.ripple_duration_ms);
		if expired > 0 {
			debug!("starfield: {} ripple(s) expired", expired);
		}

		let scene = self.mask_scene(now);
		match self.rasterizer.rasterize(&scene) {
			Ok(buffer) => self.mask = Some(buffer),
			Err(e) => {
				warn!("starfield: text mask unavailable: {}", e);
				self.mask = None;
			}
		}
	}

	pub fn mask(&self) -> Option<&AlphaBuffer> {
		self.mask.as_ref()
	}

	/// Flag stars that sit on the name. Skipped while there is no mask.
	pub fn classify_particles(&mut self) {
		if let Some(mask) = &self.mask {
			self.field.classify(mask);
		}
	}

	/// Effective `(distance, opacity)` for star-to-star links.
	pub fn connection_params(&self) -> (f64, f64) {
		if self.boosted {
			(
				self.config.connection_distance * BOOST_DISTANCE_FACTOR,
				BOOST_OPACITY,
			)
		} else {
			(
				self.config.connection_distance,
				self.config.connection_opacity,
			)
		}
	}

	/// Links between close stars, and between stars and the pointer.
	///
	/// Opacity falls off linearly with distance. No star takes part in more
	/// than `max_connections` star-to-star links; pointer links are uncapped.
	pub fn connections(&self) -> Vec<Link> {
		let (distance, opacity) = self.connection_params();
		let cap = self.config.max_connections;
		let stars = &self.field.particles;
		let mut degree = vec![0usize; stars.len()];
		let mut links = Vec::new();

		for (i, a) in stars.iter().enumerate() {
			for (j, b) in stars.iter().enumerate().skip(i + 1) {
				if degree[i] >= cap {
					break;
				}
				if degree[j] >= cap {
					continue;
				}
				let d = (a.x - b.x).hypot(a.y - b.y);
				if d < distance {
					degree[i] += 1;
					degree[j] += 1;
					links.push(Link::new(
						i,
						Some(j),
						(a.x, a.y),
						(b.x, b.y),
						(1.0 - d / distance) * opacity,
						a.in_text || b.in_text,
					));
				}
			}

			if self.pointer.active {
				let reach = self.config.mouse_connection_distance;
				let d = (a.x - self.pointer.x).hypot(a.y - self.pointer.y);
				if d < reach {
					links.push(Link::new(
						i,
						None,
						(a.x, a.y),
						(self.pointer.x, self.pointer.y),
						(1.0 - d / reach) * POINTER_LINK_OPACITY,
						a.in_text,
					));
				}
			}
		}

		links
	}

	/// Per-frame look of every star. In-text stars are enlarged and opaque;
	/// the particles themselves are left untouched.
	pub fn star_sprites(&self) -> Vec<StarSprite> {
		let scale = if self.interacting {
			IN_TEXT_INTERACTING_SCALE
		} else {
			IN_TEXT_SCALE
		};

		self.field
			.particles
			.iter()
			.map(|p| {
				if p.in_text {
					StarSprite {
						x: p.x,
						y: p.y,
						radius: p.size * scale,
						color: Color::WHITE,
						alpha: 1.0,
						glow: self.interacting,
					}
				} else {
					StarSprite {
						x: p.x,
						y: p.y,
						radius: p.size,
						color: p.color,
						alpha: p.opacity,
						glow: false,
					}
				}
			})
			.collect()
	}

	/// Advance one frame: classify against the newest mask, collect links,
	/// move the stars and collect their sprites.
	pub fn tick(&mut self) -> Frame {
		self.classify_particles();

		let links = if self.show_connections {
			self.connections()
		} else {
			Vec::new()
		};

		self.field.advance(&mut self.rng);

		Frame {
			width: self.width,
			height: self.height,
			background: Color::BLACK,
			links,
			stars: self.star_sprites(),
			pointer: self.pointer.active.then(|| self.pointer.clone()),
		}
	}

	/// Start a ripple at `(x, y)`, evicting the oldest if the pool is full.
	pub fn add_ripple(&mut self, x: f64, y: f64, now: f64) -> u64 {
		let max_radius = self.width.min(self.height) * RIPPLE_RADIUS_FRACTION;
		let id = self.ripples.push(x, y, max_radius, now);
		debug!("starfield: ripple {} at ({:.0}, {:.0})", id, x, y);
		self.regenerate_mask(now);
		id
	}

	/// Ripple on the name itself, used once shortly after start-up.
	pub fn add_intro_ripple(&mut self, now: f64) -> u64 {
		let (x, y) = self.text_anchor();
		self.add_ripple(x, y, now)
	}

	/// Text displacement for a pointer position: the pointer's offset from the
	/// text anchor, normalised by the anchor, clamped to `[-1, 1]` and scaled
	/// by `max_text_offset`.
	pub fn text_offset_for(&self, x: f64, y: f64) -> (f64, f64) {
		let (ax, ay) = self.text_anchor();
		let max = self.config.max_text_offset.abs();
		let axis = |p: f64, anchor: f64| {
			let n = (p - anchor) / anchor;
			if n.is_finite() {
				n.clamp(-1.0, 1.0) * max
			} else {
				0.0
			}
		};
		(axis(x, ax), axis(y, ay))
	}

	pub fn on_pointer_move(&mut self, x: f64, y: f64, now: f64) {
		self.pointer.x = x;
		self.pointer.y = y;
		self.text_offset = self.text_offset_for(x, y);
		self.regenerate_mask(now);
	}

	pub fn on_pointer_enter_leave(&mut self, entering: bool, now: f64) {
		self.interacting = entering;
		self.pointer.active = entering;
		if !entering {
			self.text_offset = (0.0, 0.0);
			self.regenerate_mask(now);
		}
	}

	/// Ripple at the click and a pointer pulse. The caller is expected to
	/// call [`Self::settle_pointer`] a moment later.
	pub fn on_click(&mut self, x: f64, y: f64, now: f64) -> u64 {
		let id = self.add_ripple(x, y, now);
		self.pointer.size = POINTER_PULSE_SIZE;
		id
	}

	pub fn settle_pointer(&mut self) {
		self.pointer.size = POINTER_REST_SIZE;
	}

	/// Returns the new setting.
	pub fn toggle_connections(&mut self) -> bool {
		self.show_connections = !self.show_connections;
		info!(
			"starfield: connections {}",
			if self.show_connections { "on" } else { "off" }
		);
		self.show_connections
	}

	/// Turn the boost on. Returns the token to hand back to
	/// [`end_section_boost`](Self::end_section_boost).
	pub fn start_section_boost(&mut self) -> u64 {
		self.boost_generation += 1;
		self.boosted = true;
		self.boost_generation
	}

	/// End the boost started with `generation`. A later start supersedes it,
	/// so a stale revert is ignored.
	pub fn end_section_boost(&mut self, generation: u64) {
		if generation == self.boost_generation {
			self.boosted = false;
		} else {
			debug!("starfield: stale boost revert {} ignored", generation);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::super::mask::{BoxRasterizer, MaskError};
	use super::*;
	use proptest::{prop_assert, proptest};

	fn state() -> StarfieldState<BoxRasterizer> {
		StarfieldState::with_rng(
			StarfieldConfig::default(),
			BoxRasterizer,
			Rng::with_seed(42),
		)
	}

	fn sized(width: f64, height: f64) -> StarfieldState<BoxRasterizer> {
		let mut s = state();
		s.resize(width, height, 0.0);
		s
	}

	/// Opaque square in the top-left corner, nothing else.
	struct CornerRasterizer;

	impl MaskRasterizer for CornerRasterizer {
		fn rasterize(&mut self, scene: &MaskScene) -> Result<AlphaBuffer, MaskError> {
			let mut buffer = AlphaBuffer::new(scene.width, scene.height);
			buffer.fill_rect(0.0, 0.0, 100.0, 100.0, 255);
			Ok(buffer)
		}
	}

	struct BrokenRasterizer;

	impl MaskRasterizer for BrokenRasterizer {
		fn rasterize(&mut self, _: &MaskScene) -> Result<AlphaBuffer, MaskError> {
			Err(MaskError::Unavailable("test"))
		}
	}

	#[test]
	fn resize_rebuilds_stars_and_mask() {
		let s = sized(800.0, 600.0);

		assert_eq!(s.field.len(), 400);
		assert!(
			s.field
				.particles
				.iter()
				.all(|p| (0.0..800.0).contains(&p.x) && (0.0..600.0).contains(&p.y))
		);
		let mask = s.mask().expect("mask after resize");
		assert_eq!((mask.width(), mask.height()), (800, 600));
		assert!(mask.coverage() > 0);
	}

	#[test]
	fn star_count_only_changes_on_resize() {
		let mut s = sized(300.0, 200.0);
		for _ in 0..100 {
			s.tick();
		}
		s.on_pointer_move(10.0, 10.0, 1.0);
		s.add_ripple(5.0, 5.0, 2.0);
		assert_eq!(s.field.len(), 400);

		s.config.star_count = 25;
		s.resize(100.0, 100.0, 3.0);
		assert_eq!(s.field.len(), 25);
		let mask = s.mask().expect("mask after resize");
		assert_eq!((mask.width(), mask.height()), (100, 100));
	}

	#[test]
	fn ripple_pool_stays_bounded_and_evicts_first() {
		let mut s = sized(800.0, 600.0);
		let ids: Vec<u64> = (0..6)
			.map(|i| s.add_ripple(400.0, 300.0, i as f64))
			.collect();

		assert_eq!(s.ripples.len(), 5);
		let live: Vec<u64> = s.ripples.iter().map(|r| r.id).collect();
		assert_eq!(live, ids[1..].to_vec());
	}

	#[test]
	fn ripple_max_radius_tracks_short_side() {
		let mut s = sized(800.0, 600.0);
		s.add_ripple(1.0, 1.0, 0.0);
		assert_eq!(s.ripples.iter().next().unwrap().max_radius, 240.0);
	}

	#[test]
	fn expired_ripple_leaves_the_mask() {
		let mut s = sized(800.0, 600.0);
		let baseline = s.mask().cloned().unwrap();

		s.add_ripple(60.0, 560.0, 0.0);
		s.regenerate_mask(300.0);
		let with_ripple = s.mask().cloned().unwrap();
		assert_ne!(with_ripple.alpha_at(60.0, 560.0), 0);

		s.regenerate_mask(300.0);
		assert_eq!(s.mask(), Some(&with_ripple));

		s.regenerate_mask(3001.0);
		assert!(s.ripples.is_empty());
		assert_eq!(s.mask(), Some(&baseline));
	}

	#[test]
	fn ripple_fades_as_it_grows() {
		let mut s = sized(800.0, 600.0);
		s.add_ripple(100.0, 500.0, 0.0);

		s.regenerate_mask(300.0);
		let early = s.mask_scene(300.0).ripples[0].clone();
		s.regenerate_mask(2700.0);
		let late = s.mask_scene(2700.0).ripples[0].clone();
		assert!((early.radius - 240.0 * 0.1).abs() < 1e-9);
		assert!((late.radius - 240.0 * 0.9).abs() < 1e-9);
		assert!(late.alpha < early.alpha);
		assert!((early.alpha - 0.9 * 0.2).abs() < 1e-9);
	}

	#[test]
	fn pointer_leave_restores_baseline_mask() {
		let mut s = sized(800.0, 600.0);
		let baseline = s.mask().cloned().unwrap();

		s.on_pointer_enter_leave(true, 1.0);
		s.on_pointer_move(0.0, 0.0, 2.0);
		assert_eq!(s.text_offset, (-30.0, -30.0));
		assert_ne!(s.mask(), Some(&baseline));

		s.on_pointer_enter_leave(false, 3.0);
		assert_eq!(s.text_offset, (0.0, 0.0));
		assert!(!s.interacting);
		assert!(!s.pointer.active);
		assert_eq!(s.mask(), Some(&baseline));
	}

	#[test]
	fn text_offset_is_clamped_far_outside_viewport() {
		let s = sized(800.0, 600.0);
		assert_eq!(s.text_offset_for(1e9, -1e9), (30.0, -30.0));
		assert_eq!(s.text_offset_for(400.0, 240.0), (0.0, 0.0));
		let (ox, _) = s.text_offset_for(600.0, 240.0);
		assert!((ox - 15.0).abs() < 1e-9);
	}

	#[test]
	fn text_offset_on_empty_viewport_is_zero() {
		let s = state();
		assert_eq!(s.text_offset_for(10.0, 10.0), (0.0, 0.0));
	}

	proptest! {
		#[test]
		fn text_offset_never_exceeds_max(x in -1e7f64..1e7, y in -1e7f64..1e7) {
			let mut s = sized(640.0, 480.0);
			s.on_pointer_move(x, y, 0.0);
			let max = s.config.max_text_offset;
			prop_assert!(s.text_offset.0.abs() <= max);
			prop_assert!(s.text_offset.1.abs() <= max);
		}
	}

	#[test]
	fn classification_matches_mask_alpha() {
		let mut s = StarfieldState::with_rng(
			StarfieldConfig::default(),
			CornerRasterizer,
			Rng::with_seed(1),
		);
		s.resize(400.0, 300.0, 0.0);
		s.classify_particles();

		let mask = s.mask().unwrap();
		for p in &s.field.particles {
			assert_eq!(p.in_text, mask.alpha_at(p.x, p.y) != 0);
			if p.x > 101.0 || p.y > 101.0 {
				assert!(!p.in_text);
			}
		}
	}

	#[test]
	fn missing_mask_skips_classification() {
		let mut s = StarfieldState::with_rng(
			StarfieldConfig::default(),
			BrokenRasterizer,
			Rng::with_seed(3),
		);
		s.resize(400.0, 300.0, 0.0);
		assert!(s.mask().is_none());

		let frame = s.tick();
		assert!(s.field.particles.iter().all(|p| !p.in_text));
		assert!(frame.stars.iter().all(|star| !star.glow && star.alpha < 1.0));
	}

	fn cluster(s: &mut StarfieldState<BoxRasterizer>, n: usize, at: (f64, f64)) {
		s.config.star_count = n;
		s.resize(800.0, 600.0, 0.0);
		for (i, p) in s.field.particles.iter_mut().enumerate() {
			p.x = at.0 + i as f64;
			p.y = at.1;
			p.in_text = false;
		}
		s.pointer.active = false;
	}

	#[test]
	fn connection_cap_applies_to_every_star() {
		let mut s = state();
		cluster(&mut s, 12, (600.0, 500.0));

		let links = s.connections();
		let mut degree = [0usize; 12];
		for link in &links {
			degree[link.source] += 1;
			degree[link.target.unwrap()] += 1;
		}
		assert!(degree.iter().all(|&d| d <= 3));
		// A cap that only limited the first star would give far more links.
		assert!(links.len() > 3);
		assert!(links.len() <= 12 * 3 / 2);
	}

	#[test]
	fn link_opacity_falls_off_linearly() {
		let mut s = state();
		cluster(&mut s, 2, (600.0, 500.0));
		s.field.particles[1].x = 675.0;

		let links = s.connections();
		assert_eq!(links.len(), 1);
		assert!((links[0].color.a - 0.075).abs() < 1e-9);
		assert_eq!(links[0].color.r, 255);

		s.field.particles[0].in_text = true;
		let links = s.connections();
		assert!(links[0].emphasized);
		assert_eq!((links[0].color.r, links[0].color.g), (76, 201));
		assert!((links[0].color.a - 0.15).abs() < 1e-9);

		s.field.particles[1].x = 750.0;
		assert!(s.connections().is_empty());
	}

	#[test]
	fn pointer_links_are_uncapped() {
		let mut s = state();
		cluster(&mut s, 6, (600.0, 500.0));
		s.pointer = PointerParticle {
			x: 600.0,
			y: 500.0,
			size: POINTER_REST_SIZE,
			active: true,
		};

		let pointer_links = s
			.connections()
			.into_iter()
			.filter(|l| l.target.is_none())
			.count();
		assert_eq!(pointer_links, 6);
	}

	#[test]
	fn section_boost_widens_links_without_compounding() {
		let mut s = state();
		assert_eq!(s.connection_params(), (150.0, 0.15));
		s.start_section_boost();
		let latest = s.start_section_boost();
		assert_eq!(s.connection_params(), (225.0, 0.25));
		s.end_section_boost(latest);
		assert_eq!(s.connection_params(), (150.0, 0.15));
	}

	#[test]
	fn earlier_boost_revert_does_not_cut_a_later_boost_short() {
		let mut s = state();
		let first = s.start_section_boost();
		let second = s.start_section_boost();

		s.end_section_boost(first);
		assert!(s.boosted);
		assert_eq!(s.connection_params(), (225.0, 0.25));

		s.end_section_boost(second);
		assert!(!s.boosted);
	}

	#[test]
	fn toggled_off_connections_are_not_drawn() {
		let mut s = state();
		cluster(&mut s, 5, (600.0, 500.0));
		assert!(!s.toggle_connections());
		assert!(s.tick().links.is_empty());
		assert!(s.toggle_connections());
		assert!(!s.tick().links.is_empty());
	}

	#[test]
	fn in_text_stars_are_emphasized_per_frame_only() {
		let mut s = StarfieldState::with_rng(
			StarfieldConfig::default(),
			CornerRasterizer,
			Rng::with_seed(9),
		);
		s.config.star_count = 2;
		s.resize(400.0, 300.0, 0.0);
		s.field.particles[0].x = 50.0;
		s.field.particles[0].y = 50.0;
		s.field.particles[0].size = 1.0;
		s.field.particles[1].x = 300.0;
		s.field.particles[1].y = 200.0;
		s.field.particles[1].size = 1.0;

		let frame = s.tick();
		assert_eq!(frame.stars[0].radius, 1.5);
		assert_eq!(frame.stars[0].alpha, 1.0);
		assert_eq!(frame.stars[0].color, Color::WHITE);
		assert!(!frame.stars[0].glow);
		assert_eq!(frame.stars[1].radius, 1.0);
		assert_eq!(frame.stars[1].alpha, s.field.particles[1].opacity);

		s.on_pointer_enter_leave(true, 1.0);
		let frame = s.tick();
		assert_eq!(frame.stars[0].radius, 2.0);
		assert!(frame.stars[0].glow);
		assert_eq!(s.field.particles[0].size, 1.0);
	}

	#[test]
	fn click_ripples_and_pulses_pointer() {
		let mut s = sized(800.0, 600.0);
		s.on_click(100.0, 100.0, 0.0);
		assert_eq!(s.ripples.len(), 1);
		assert_eq!(s.pointer.size, POINTER_PULSE_SIZE);
		s.settle_pointer();
		assert_eq!(s.pointer.size, POINTER_REST_SIZE);
	}

	#[test]
	fn intro_ripple_starts_on_the_name() {
		let mut s = sized(800.0, 600.0);
		s.add_intro_ripple(0.0);
		let r = s.ripples.iter().next().unwrap();
		assert_eq!((r.x, r.y), (400.0, 240.0));
	}

	#[test]
	fn frame_carries_pointer_only_while_active() {
		let mut s = sized(200.0, 200.0);
		assert!(s.tick().pointer.is_some());
		s.on_pointer_enter_leave(false, 0.0);
		assert!(s.tick().pointer.is_none());
	}
}
