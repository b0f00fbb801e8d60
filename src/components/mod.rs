//! UI components.

pub mod news;
pub mod space_facts;
pub mod starfield;
