//! Theme generation engine.
//!
//! This module turns a project configuration into a WordPress block theme:
//! palette harmonization, WCAG contrast enforcement, theme.json assembly,
//! and the orchestrator that composes the full generation pipeline.

pub mod contrast;
pub mod generator;
pub mod harmonize;
pub mod settings;
pub mod validator;

// Re-export engine types
pub use contrast::{correct_contrast, enforce_contrast};
pub use generator::{parse_override, GeneratedTheme, ThemeGenerator, ThemeOverride};
pub use harmonize::harmonize;
pub use settings::{assemble_theme_json, PaletteEntry, ThemeJson};
pub use validator::{ProjectValidator, ValidationReport};
