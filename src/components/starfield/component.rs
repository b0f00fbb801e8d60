//! Leptos component wrapping the starfield canvas.
//!
//! The component creates the canvas element, builds a [`StarfieldState`] sized
//! to the window, and wires browser events to it: pointer movement, clicks,
//! enter/leave, the `c` key, window resizes and an intersection observer on
//! the boost section. An animation loop runs via `requestAnimationFrame`,
//! calling `tick` and the renderer each frame.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, HtmlCanvasElement, IntersectionObserver, IntersectionObserverEntry,
	IntersectionObserverInit, KeyboardEvent, MouseEvent, Window,
};

use super::config::StarfieldConfig;
use super::mask::{BoxRasterizer, MaskError, MaskRasterizer};
use super::render::{self, CanvasRasterizer};
use super::state::StarfieldState;

type SharedState = Rc<RefCell<Option<StarfieldState<Box<dyn MaskRasterizer>>>>>;

const POINTER_PULSE: Duration = Duration::from_millis(300);
const SECTION_BOOST_HOLD: Duration = Duration::from_millis(1000);
const INTRO_RIPPLE_DELAY: Duration = Duration::from_millis(1000);
/// Fraction of the boost section that must be visible.
const SECTION_BOOST_THRESHOLD: f64 = 0.3;
const TOGGLE_CONNECTIONS_KEY: &str = "c";

/// Browser callbacks that must outlive the effect that registered them.
#[derive(Default)]
struct Listeners {
	animate: Option<Closure<dyn FnMut()>>,
	resize: Option<Closure<dyn FnMut()>>,
	pointer_move: Option<Closure<dyn FnMut(MouseEvent)>>,
	keydown: Option<Closure<dyn FnMut(KeyboardEvent)>>,
	section: Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>>,
	observer: Option<IntersectionObserver>,
}

fn now() -> f64 {
	js_sys::Date::now()
}

fn viewport(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

/// Pointer position relative to the canvas' top-left corner.
fn local_point(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

fn mask_backend(window: &Window) -> Box<dyn MaskRasterizer> {
	let canvas_backend = window
		.document()
		.ok_or(MaskError::Unavailable("no document"))
		.and_then(|document| CanvasRasterizer::new(&document));
	match canvas_backend {
		Ok(rasterizer) => Box::new(rasterizer),
		Err(e) => {
			warn!("starfield: {}; falling back to box glyphs", e);
			Box::new(BoxRasterizer)
		}
	}
}

/// Full-window animated starfield that reveals `config.name_text` in stars.
///
/// Renders nothing interactive if the canvas or its 2D context cannot be
/// obtained.
#[component]
pub fn StarfieldCanvas(
	#[prop(default = StarfieldConfig::default())] config: StarfieldConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: SharedState = Rc::new(RefCell::new(None));
	let listeners: Rc<RefCell<Listeners>> = Rc::new(RefCell::new(Listeners::default()));
	let (state_init, listeners_init) = (state.clone(), listeners.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			debug!("starfield: no canvas element, not starting");
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some((w, h)) = viewport(&window) else {
			warn!("starfield: could not read viewport size");
			return;
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = match canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into().ok())
		{
			Some(ctx) => ctx,
			None => {
				warn!("starfield: 2d context unavailable, not starting");
				return;
			}
		};

		let mut starfield = StarfieldState::new(config.clone(), mask_backend(&window));
		starfield.resize(w, h, now());
		*state_init.borrow_mut() = Some(starfield);
		info!("starfield: started at {}x{}", w, h);

		let mut registered = listeners_init.borrow_mut();
		let l = &mut *registered;

		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		l.resize = Some(Closure::new(move || {
			let Some((nw, nh)) = web_sys::window().as_ref().and_then(viewport) else {
				return;
			};
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh, now());
			}
		}));
		if let Some(ref cb) = l.resize {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		// Tracked on the window so the name follows the pointer even over
		// content stacked above the canvas.
		let (state_move, canvas_move) = (state_init.clone(), canvas.clone());
		l.pointer_move = Some(Closure::new(move |ev: MouseEvent| {
			let (x, y) = local_point(&canvas_move, &ev);
			if let Some(ref mut s) = *state_move.borrow_mut() {
				s.on_pointer_move(x, y, now());
			}
		}));
		if let Some(ref cb) = l.pointer_move {
			let _ =
				window.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}

		let state_key = state_init.clone();
		l.keydown = Some(Closure::new(move |ev: KeyboardEvent| {
			if ev.key() != TOGGLE_CONNECTIONS_KEY {
				return;
			}
			if let Some(ref mut s) = *state_key.borrow_mut() {
				s.toggle_connections();
			}
		}));
		if let Some(ref cb) = l.keydown {
			let _ = window.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
		}

		if let Some(section) = config
			.boost_section_id
			.as_deref()
			.and_then(|id| window.document()?.get_element_by_id(id))
		{
			let state_section = state_init.clone();
			l.section = Some(Closure::new(
				move |entries: js_sys::Array, _: IntersectionObserver| {
					let visible = entries
						.get(0)
						.dyn_into::<IntersectionObserverEntry>()
						.map(|entry| entry.is_intersecting())
						.unwrap_or(false);
					if !visible {
						return;
					}
					let Some(generation) = state_section
						.borrow_mut()
						.as_mut()
						.map(|s| s.start_section_boost())
					else {
						return;
					};
					debug!("starfield: boost section in view");
					let state_revert = state_section.clone();
					set_timeout(
						move || {
							if let Some(ref mut s) = *state_revert.borrow_mut() {
								s.end_section_boost(generation);
							}
						},
						SECTION_BOOST_HOLD,
					);
				},
			));
			let options = IntersectionObserverInit::new();
			options.set_threshold(&JsValue::from_f64(SECTION_BOOST_THRESHOLD));
			if let Some(ref cb) = l.section {
				match IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options)
				{
					Ok(observer) => {
						observer.observe(&section);
						l.observer = Some(observer);
					}
					Err(e) => warn!("starfield: intersection observer unavailable: {:?}", e),
				}
			}
		}

		let state_intro = state_init.clone();
		set_timeout(
			move || {
				if let Some(ref mut s) = *state_intro.borrow_mut() {
					s.add_intro_ripple(now());
				}
			},
			INTRO_RIPPLE_DELAY,
		);

		let (state_anim, listeners_anim) = (state_init.clone(), listeners_init.clone());
		l.animate = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				let frame = s.tick();
				render::render(&frame, &ctx);
			}
			if let Some(ref cb) = listeners_anim.borrow().animate {
				if let Some(win) = web_sys::window() {
					let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = l.animate {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_click = state.clone();
	let on_click = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = local_point(&canvas.into(), &ev);
		if let Some(ref mut s) = *state_click.borrow_mut() {
			s.on_click(x, y, now());
		}
		let state_settle = state_click.clone();
		set_timeout(
			move || {
				if let Some(ref mut s) = *state_settle.borrow_mut() {
					s.settle_pointer();
				}
			},
			POINTER_PULSE,
		);
	};

	let state_enter = state.clone();
	let on_mouseenter = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_enter.borrow_mut() {
			s.on_pointer_enter_leave(true, now());
		}
	};

	let state_leave = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_leave.borrow_mut() {
			s.on_pointer_enter_leave(false, now());
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			id="starfield"
			class="starfield-canvas"
			on:click=on_click
			on:mouseenter=on_mouseenter
			on:mouseleave=on_mouseleave
			style="display: block;"
		/>
	}
}
