//! Tunables for the starfield.
//!
//! Every field has a default, so a partial JSON object (or none at all) is a
//! valid configuration.

use serde::Deserialize;

use super::theme::{Color, StarPalette};

/// Initialization-time settings for a [`super::StarfieldCanvas`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StarfieldConfig {
	/// Number of stars created on every resize.
	pub star_count: usize,
	/// Upper bound added to the minimum drift speed (px per frame).
	pub speed: f64,
	/// Upper bound added to the minimum star radius.
	pub star_size: f64,
	/// Largest pointer-driven text displacement on either axis (px).
	pub max_text_offset: f64,
	/// Vertical position of the name as a fraction of the viewport height.
	pub text_anchor_y: f64,
	/// Only the alpha is used: it scales how strongly a ripple marks the mask.
	pub ripple_color: Color,
	pub ripple_duration_ms: f64,
	pub max_ripples: usize,
	pub connection_distance: f64,
	pub connection_opacity: f64,
	/// Per-star cap on star-to-star links.
	pub max_connections: usize,
	pub mouse_connection_distance: f64,
	/// The text the stars reveal.
	pub name_text: String,
	pub palette: StarPalette,
	/// Element id of the section that boosts connections while in view.
	pub boost_section_id: Option<String>,
}

impl Default for StarfieldConfig {
	fn default() -> Self {
		Self {
			star_count: 400,
			speed: 0.15,
			star_size: 1.2,
			max_text_offset: 30.0,
			text_anchor_y: 0.4,
			ripple_color: Color::rgba(76, 201, 240, 0.2),
			ripple_duration_ms: 3000.0,
			max_ripples: 5,
			connection_distance: 150.0,
			connection_opacity: 0.15,
			max_connections: 3,
			mouse_connection_distance: 200.0,
			name_text: "Rushit Palesha".to_string(),
			palette: StarPalette::night_sky(),
			boost_section_id: Some("journey".to_string()),
		}
	}
}

impl StarfieldConfig {
	/// Parse overrides from JSON; missing fields keep their defaults.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}
}
