//! Data models for projects, palettes, fonts, content, and layout.
//!
//! This module contains all the core data structures used throughout the
//! application. Models are designed to be independent of CLI and engine
//! logic.

pub mod content;
pub mod fonts;
pub mod layout;
pub mod palette;
pub mod project;
pub mod rgb;

// Re-export all model types
pub use content::{Benefit, ContactInfo, ContentConfig};
pub use fonts::FontConfig;
pub use layout::{LayoutConfig, DEFAULT_SECTIONS};
pub use palette::{ColorSource, ColorToken, Palette};
pub use project::ProjectConfig;
pub use rgb::{contrast_ratio, relative_luminance, RgbColor};
