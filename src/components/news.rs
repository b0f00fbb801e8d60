//! Short list of LLM news items.
//!
//! Nothing is rendered until the list first scrolls into view; the items
//! then fade in one after another.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry};

/// Delay between consecutive items fading in.
pub const NEWS_STAGGER: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NewsItem {
	pub title: &'static str,
	pub summary: &'static str,
	pub date: &'static str,
}

pub const LLM_NEWS: &[NewsItem] = &[
	NewsItem {
		title: "OpenAI Unveils GPT-5",
		summary: "The latest model shows breakthrough performance in reasoning and understanding context.",
		date: "March 10, 2024",
	},
	NewsItem {
		title: "Anthropic's Claude 3 Challenges GPT-4",
		summary: "Claude 3 comes in three versions: Haiku, Sonnet, and Opus, each for different use cases.",
		date: "March 4, 2024",
	},
	NewsItem {
		title: "Google's Gemini Ultra for Enterprise",
		summary: "Google expands access to its most powerful model for specialized industries.",
		date: "February 15, 2024",
	},
	NewsItem {
		title: "Meta's Open Source LLM",
		summary: "Meta's open-source model outperforms closed-source alternatives with less computing power.",
		date: "January 17, 2024",
	},
];

/// When the item at `index` starts fading in, counted from the first sighting.
pub fn reveal_delay(index: usize) -> Duration {
	NEWS_STAGGER * index as u32
}

/// Whether any observed entry is on screen.
fn any_intersecting(entries: &js_sys::Array) -> bool {
	entries.iter().any(|entry| {
		entry
			.dyn_into::<IntersectionObserverEntry>()
			.map(|entry| entry.is_intersecting())
			.unwrap_or(false)
	})
}

/// Lazily populated news list.
#[component]
pub fn NewsList(#[prop(default = LLM_NEWS)] items: &'static [NewsItem]) -> impl IntoView {
	let list_ref = NodeRef::<leptos::html::Div>::new();
	let (loaded, set_loaded) = signal(false);
	let (revealed, set_revealed) = signal(0usize);
	let on_sight: Rc<RefCell<Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>>>> =
		Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(list) = list_ref.get() else {
			return;
		};
		let mut slot = on_sight.borrow_mut();
		if slot.is_some() {
			return;
		}

		*slot = Some(Closure::new(
			move |entries: js_sys::Array, observer: IntersectionObserver| {
				if !any_intersecting(&entries) {
					return;
				}
				observer.disconnect();
				debug!("news: list in view, loading {} items", items.len());
				set_loaded.set(true);
				for index in 0..items.len() {
					set_timeout(move || set_revealed.set(index + 1), reveal_delay(index));
				}
			},
		));
		if let Some(ref cb) = *slot {
			match IntersectionObserver::new(cb.as_ref().unchecked_ref()) {
				Ok(observer) => observer.observe(&list),
				Err(e) => {
					warn!("news: intersection observer unavailable, loading now: {:?}", e);
					set_loaded.set(true);
					set_revealed.set(items.len());
				}
			}
		}
	});

	view! {
		<div node_ref=list_ref id="llm-news-container" class="news-list">
			<Show when=move || loaded.get()>
				{items
					.iter()
					.enumerate()
					.map(|(index, item)| {
						view! {
							<div class="news-item" class=("fade-in", move || revealed.get() > index)>
								<h4>{item.title}</h4>
								<p>{item.summary}</p>
								<span class="news-date">{item.date}</span>
							</div>
						}
					})
					.collect_view()}
			</Show>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn items_fade_in_a_stagger_apart() {
		assert_eq!(reveal_delay(0), Duration::ZERO);
		assert_eq!(reveal_delay(1), NEWS_STAGGER);
		assert_eq!(reveal_delay(3), Duration::from_millis(300));
	}

	#[test]
	fn every_item_is_filled_in() {
		assert!(!LLM_NEWS.is_empty());
		for item in LLM_NEWS {
			assert!(!item.title.is_empty());
			assert!(!item.summary.is_empty());
			assert!(!item.date.is_empty());
		}
	}
}
