//! Click ripples that bleed through the text mask.

use std::collections::VecDeque;

/// An expanding, fading circle drawn into the mask.
#[derive(Clone, Debug, PartialEq)]
pub struct Ripple {
	/// Monotonic per-pool id, handy for telling ripples apart.
	pub id: u64,
	pub x: f64,
	pub y: f64,
	/// Radius at the last mask regeneration.
	pub radius: f64,
	pub max_radius: f64,
	/// Opacity at creation; fades linearly to zero over the ripple's life.
	pub opacity: f64,
	/// Creation time in milliseconds.
	pub started_at: f64,
}

impl Ripple {
	/// Fraction of the lifetime elapsed at `now`, or `None` once expired.
	pub fn progress(&self, now: f64, duration_ms: f64) -> Option<f64> {
		let age = (now - self.started_at).max(0.0);
		if age > duration_ms || duration_ms <= 0.0 {
			return None;
		}
		Some(age / duration_ms)
	}
}

/// Bounded FIFO of live ripples.
#[derive(Debug)]
pub struct RipplePool {
	ripples: VecDeque<Ripple>,
	capacity: usize,
	next_id: u64,
}

impl RipplePool {
	pub fn new(capacity: usize) -> Self {
		Self {
			ripples: VecDeque::with_capacity(capacity),
			capacity,
			next_id: 0,
		}
	}

	/// Add a ripple with zero radius and full opacity, evicting the oldest
	/// when full. Returns the new ripple's id.
	pub fn push(&mut self, x: f64, y: f64, max_radius: f64, now: f64) -> u64 {
		let id = self.next_id;
		self.next_id += 1;

		if self.capacity == 0 {
			return id;
		}
		while self.ripples.len() >= self.capacity {
			self.ripples.pop_front();
		}
		self.ripples.push_back(Ripple {
			id,
			x,
			y,
			radius: 0.0,
			max_radius,
			opacity: 1.0,
			started_at: now,
		});
		id
	}

	/// Drop expired ripples and grow the survivors to their size at `now`.
	/// Returns how many were dropped.
	pub fn expire(&mut self, now: f64, duration_ms: f64) -> usize {
		let before = self.ripples.len();
		self.ripples.retain_mut(|r| match r.progress(now, duration_ms) {
			Some(progress) => {
				r.radius = r.max_radius * progress;
				true
			}
			None => false,
		});
		before - self.ripples.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Ripple> {
		self.ripples.iter()
	}

	pub fn len(&self) -> usize {
		self.ripples.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ripples.is_empty()
	}
}
