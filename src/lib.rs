//! starfield-site: the animated background and widgets of a personal site.
//!
//! This crate provides a WASM-based starfield that spells out the owner's
//! name in stars, a draggable rotating space-facts card and a lazily loaded
//! news list.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::news::NewsList;
pub use components::space_facts::SpaceFacts;
pub use components::starfield::{StarfieldCanvas, StarfieldConfig};

/// Id of the optional `<script type="application/json">` holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "starfield-config";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("starfield-site: logging initialized");
}

/// Load starfield settings from a script element with id="starfield-config".
/// Falls back to defaults when the element is missing or malformed.
fn load_starfield_config() -> StarfieldConfig {
	let Some(json_text) = config_script_text() else {
		return StarfieldConfig::default();
	};

	match StarfieldConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"starfield-site: loaded config ({} stars, name {:?})",
				config.star_count, config.name_text
			);
			config
		}
		Err(e) => {
			warn!("starfield-site: failed to parse config, using defaults: {}", e);
			StarfieldConfig::default()
		}
	}
}

fn config_script_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Main application component.
/// Loads settings from the DOM and mounts the starfield behind the widgets.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_starfield_config();
	let title = config.name_text.clone();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text=title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="starfield-backdrop">
			<StarfieldCanvas config=config />
		</div>
		<SpaceFacts />
		<NewsList />
	}
}
