//! Interactive starfield background.
//!
//! Renders drifting stars on an HTML canvas with:
//! - Stars that light up where they cross the owner's name, read from an
//!   off-screen text mask
//! - Constellation lines between nearby stars and to the pointer
//! - Click ripples that bleed through the mask
//! - A name that leans towards the pointer
//!
//! # Example
//!
//! ```ignore
//! use starfield_site::{StarfieldCanvas, StarfieldConfig};
//!
//! let config = StarfieldConfig {
//!     name_text: "Ada Lovelace".into(),
//!     ..Default::default()
//! };
//!
//! view! { <StarfieldCanvas config=config /> }
//! ```

mod component;
pub mod config;
pub mod mask;
mod particles;
mod render;
mod ripple;
pub mod state;
pub mod theme;

pub use component::StarfieldCanvas;
pub use config::StarfieldConfig;
pub use mask::{AlphaBuffer, BoxRasterizer, MaskError, MaskRasterizer, MaskScene};
pub use particles::{Particle, ParticleField};
pub use render::CanvasRasterizer;
pub use ripple::{Ripple, RipplePool};
pub use state::{Frame, StarfieldState};
pub use theme::{Color, StarPalette};
