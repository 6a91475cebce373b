//! Block pattern composition and front-page template sequencing.
//!
//! Patterns are reusable Gutenberg block-markup fragments, one per page
//! section. The template sequencer turns an ordered section list into the
//! front-page template that references them.

pub mod composer;
pub mod defaults;
pub mod template;

// Re-export pattern types
pub use composer::{compose_patterns, Pattern};
pub use template::front_page_template;
