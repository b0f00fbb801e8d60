//! Rotating "space fact" card.
//!
//! Shows one random fact, swaps it every 30 seconds and on demand. A swap
//! fades the text out, changes it, and fades it back in; requests that arrive
//! mid-swap are dropped. The card can be dragged anywhere inside the window
//! except by its button.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use fastrand::Rng;
use leptos::prelude::*;
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, MouseEvent, Window};

/// How often the fact changes on its own.
pub const ROTATION_INTERVAL: Duration = Duration::from_secs(30);
/// Fade-out time before the new fact appears.
pub const FADE_DURATION: Duration = Duration::from_millis(300);

pub const SPACE_FACTS: &[&str] = &[
	"The universe is estimated to be about 13.8 billion years old.",
	"The largest known star, UY Scuti, is approximately 1,700 times larger than our Sun.",
	"Light from the Sun takes about 8 minutes and 20 seconds to reach Earth.",
	"There are more stars in the universe than grains of sand on all the beaches on Earth.",
	"A day on Venus is longer than a year on Venus. Venus takes 243 Earth days to rotate once on its axis and 225 Earth days to orbit the Sun.",
	"The Milky Way galaxy is estimated to contain 100-400 billion stars.",
	"The Great Red Spot on Jupiter is a storm that has been raging for at least 400 years.",
	"Saturn's rings are mostly made of ice and rock, and some pieces are as small as a grain of sand while others are as large as mountains.",
	"If you could fly a plane to Pluto, it would take more than 800 years.",
	"There are more trees on Earth than stars in the Milky Way.",
	"The hottest planet in our solar system is Venus, not Mercury (despite Mercury being closer to the Sun).",
	"The human race could fit inside a sugar cube if all empty space in our atoms were removed.",
	"Neutron stars are so dense that a teaspoon of neutron star material would weigh about a billion tons.",
];

/// Picks facts and throttles swaps.
pub struct FactRotator {
	facts: &'static [&'static str],
	current: usize,
	swapping: bool,
	rng: Rng,
}

impl FactRotator {
	pub fn new(facts: &'static [&'static str], mut rng: Rng) -> Self {
		let current = if facts.is_empty() {
			0
		} else {
			rng.usize(..facts.len())
		};
		Self {
			facts,
			current,
			swapping: false,
			rng,
		}
	}

	/// The fact on display; empty if there are no facts.
	pub fn current(&self) -> &'static str {
		self.facts.get(self.current).copied().unwrap_or_default()
	}

	/// Start a swap. Returns `false` if one is already in flight.
	pub fn begin_swap(&mut self) -> bool {
		if self.swapping {
			return false;
		}
		self.swapping = true;
		true
	}

	/// Pick a new random fact and end the swap.
	pub fn finish_swap(&mut self) -> &'static str {
		if !self.facts.is_empty() {
			self.current = self.rng.usize(..self.facts.len());
		}
		self.swapping = false;
		self.current()
	}

	pub fn is_swapping(&self) -> bool {
		self.swapping
	}
}

/// Gap kept between a dragged card and the window edge.
pub const CARD_EDGE_MARGIN: f64 = 10.0;
const NEW_FACT_BUTTON: &str = "#new-fact-button";

/// Keep a card of `card` size with its top-left corner at `(x, y)` at least
/// [`CARD_EDGE_MARGIN`] inside `viewport`. The top-left margin wins when the
/// window is too small for both.
pub fn clamp_card_position(x: f64, y: f64, viewport: (f64, f64), card: (f64, f64)) -> (f64, f64) {
	let clamp = |v: f64, view: f64, size: f64| {
		v.min(view - size - CARD_EDGE_MARGIN).max(CARD_EDGE_MARGIN)
	};
	(clamp(x, viewport.0, card.0), clamp(y, viewport.1, card.1))
}

/// Tracks an in-progress card drag.
#[derive(Clone, Debug, Default)]
pub struct CardDrag {
	pub active: bool,
	/// Pointer position relative to the card's top-left corner at grab time.
	pub grab_x: f64,
	pub grab_y: f64,
}

impl CardDrag {
	pub fn start(&mut self, pointer: (f64, f64), card_origin: (f64, f64)) {
		self.active = true;
		self.grab_x = pointer.0 - card_origin.0;
		self.grab_y = pointer.1 - card_origin.1;
	}

	/// Where the card's top-left corner goes for `pointer`, or `None` when
	/// no drag is in progress.
	pub fn position(
		&self,
		pointer: (f64, f64),
		viewport: (f64, f64),
		card: (f64, f64),
	) -> Option<(f64, f64)> {
		if !self.active {
			return None;
		}
		Some(clamp_card_position(
			pointer.0 - self.grab_x,
			pointer.1 - self.grab_y,
			viewport,
			card,
		))
	}

	/// Stop dragging. Returns whether a drag was in progress.
	pub fn end(&mut self) -> bool {
		std::mem::take(&mut self.active)
	}
}

/// Window listeners that keep a drag going outside the card.
#[derive(Default)]
struct DragListeners {
	pointer_move: Option<Closure<dyn FnMut(MouseEvent)>>,
	pointer_up: Option<Closure<dyn FnMut(MouseEvent)>>,
}

fn viewport(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

/// Whether the press started on the "new fact" button, which never drags.
fn pressed_button(ev: &MouseEvent) -> bool {
	ev.target()
		.and_then(|target| target.dyn_into::<Element>().ok())
		.and_then(|el| el.closest(NEW_FACT_BUTTON).ok().flatten())
		.is_some()
}

/// Card showing a rotating space fact with a "new fact" button.
#[component]
pub fn SpaceFacts() -> impl IntoView {
	let rotator = Rc::new(RefCell::new(FactRotator::new(SPACE_FACTS, Rng::new())));
	let (fact, set_fact) = signal(rotator.borrow().current().to_string());
	let (visible, set_visible) = signal(true);

	let swap = move || {
		if !rotator.borrow_mut().begin_swap() {
			debug!("space facts: swap already in progress");
			return;
		}
		set_visible.set(false);
		let rotator = rotator.clone();
		set_timeout(
			move || {
				let next = rotator.borrow_mut().finish_swap();
				set_fact.set(next.to_string());
				set_visible.set(true);
			},
			FADE_DURATION,
		);
	};

	let swap_tick = swap.clone();
	set_interval(move || swap_tick(), ROTATION_INTERVAL);

	let card_ref = NodeRef::<leptos::html::Aside>::new();
	let drag = Rc::new(RefCell::new(CardDrag::default()));
	let (position, set_position) = signal(None::<(f64, f64)>);
	let (dragging, set_dragging) = signal(false);
	let listeners = Rc::new(RefCell::new(DragListeners::default()));

	let drag_init = drag.clone();
	Effect::new(move |_| {
		let Some(card) = card_ref.get() else {
			return;
		};
		let card: HtmlElement = card.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let mut registered = listeners.borrow_mut();
		if registered.pointer_move.is_some() {
			return;
		}

		let drag_move = drag_init.clone();
		registered.pointer_move = Some(Closure::new(move |ev: MouseEvent| {
			let Some(view) = web_sys::window().as_ref().and_then(viewport) else {
				return;
			};
			let size = (card.offset_width() as f64, card.offset_height() as f64);
			let pointer = (ev.client_x() as f64, ev.client_y() as f64);
			if let Some(pos) = drag_move.borrow().position(pointer, view, size) {
				set_position.set(Some(pos));
			}
		}));
		if let Some(ref cb) = registered.pointer_move {
			let _ =
				window.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}

		let drag_up = drag_init.clone();
		registered.pointer_up = Some(Closure::new(move |_: MouseEvent| {
			if drag_up.borrow_mut().end() {
				set_dragging.set(false);
			}
		}));
		if let Some(ref cb) = registered.pointer_up {
			let _ = window.add_event_listener_with_callback("mouseup", cb.as_ref().unchecked_ref());
		}
	});

	let on_mousedown = move |ev: MouseEvent| {
		if pressed_button(&ev) {
			return;
		}
		let Some(card) = card_ref.get() else {
			return;
		};
		let rect = card.get_bounding_client_rect();
		drag.borrow_mut().start(
			(ev.client_x() as f64, ev.client_y() as f64),
			(rect.left(), rect.top()),
		);
		set_dragging.set(true);
		ev.prevent_default();
	};

	view! {
		<aside
			node_ref=card_ref
			class="space-facts-module"
			class:dragging=move || dragging.get()
			style:cursor=move || if dragging.get() { "grabbing" } else { "grab" }
			style:left=move || position.get().map(|(x, _)| format!("{x}px")).unwrap_or_default()
			style:top=move || position.get().map(|(_, y)| format!("{y}px")).unwrap_or_default()
			style:right=move || if position.get().is_some() { "auto" } else { "" }
			style:bottom=move || if position.get().is_some() { "auto" } else { "" }
			on:mousedown=on_mousedown
		>
			<h3>"Space Fact"</h3>
			<p
				id="space-fact-text"
				style:opacity=move || if visible.get() { "1" } else { "0" }
			>
				{move || fact.get()}
			</p>
			<button id="new-fact-button" on:click=move |_| swap()>
				"New fact"
			</button>
		</aside>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_on_a_known_fact() {
		let rotator = FactRotator::new(SPACE_FACTS, Rng::with_seed(1));
		assert!(SPACE_FACTS.contains(&rotator.current()));
		assert!(!rotator.is_swapping());
	}

	#[test]
	fn swaps_are_throttled_until_finished() {
		let mut rotator = FactRotator::new(SPACE_FACTS, Rng::with_seed(2));
		assert!(rotator.begin_swap());
		assert!(!rotator.begin_swap());
		assert!(rotator.is_swapping());

		let next = rotator.finish_swap();
		assert!(SPACE_FACTS.contains(&next));
		assert_eq!(next, rotator.current());
		assert!(rotator.begin_swap());
	}

	#[test]
	fn same_seed_same_sequence() {
		let mut a = FactRotator::new(SPACE_FACTS, Rng::with_seed(5));
		let mut b = FactRotator::new(SPACE_FACTS, Rng::with_seed(5));
		for _ in 0..10 {
			a.begin_swap();
			b.begin_swap();
			assert_eq!(a.finish_swap(), b.finish_swap());
		}
	}

	#[test]
	fn card_stays_inside_the_window() {
		let view = (1000.0, 800.0);
		let card = (300.0, 200.0);
		assert_eq!(clamp_card_position(400.0, 300.0, view, card), (400.0, 300.0));
		assert_eq!(clamp_card_position(-50.0, 5.0, view, card), (10.0, 10.0));
		assert_eq!(clamp_card_position(950.0, 790.0, view, card), (690.0, 590.0));
	}

	#[test]
	fn tiny_window_pins_card_to_top_left_margin() {
		assert_eq!(
			clamp_card_position(50.0, 50.0, (100.0, 100.0), (300.0, 200.0)),
			(10.0, 10.0)
		);
	}

	#[test]
	fn drag_keeps_the_grab_point_under_the_pointer() {
		let mut drag = CardDrag::default();
		let view = (1000.0, 800.0);
		let card = (300.0, 200.0);
		assert_eq!(drag.position((500.0, 500.0), view, card), None);

		drag.start((120.0, 140.0), (100.0, 100.0));
		assert_eq!(drag.position((520.0, 340.0), view, card), Some((500.0, 300.0)));
		assert_eq!(drag.position((5.0, 5.0), view, card), Some((10.0, 10.0)));

		assert!(drag.end());
		assert!(!drag.end());
		assert_eq!(drag.position((520.0, 340.0), view, card), None);
	}

	#[test]
	fn empty_fact_list_is_harmless() {
		let mut rotator = FactRotator::new(&[], Rng::with_seed(3));
		assert_eq!(rotator.current(), "");
		assert!(rotator.begin_swap());
		assert_eq!(rotator.finish_swap(), "");
	}
}
