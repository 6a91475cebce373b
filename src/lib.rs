//! Blocksmith - WordPress block theme generator
//!
//! This library turns structured project data (brand palette, fonts,
//! content copy, section layout) into a complete WordPress block theme:
//! a theme.json settings document, Gutenberg block patterns, and a
//! front-page template.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod patterns;
pub mod theme;
