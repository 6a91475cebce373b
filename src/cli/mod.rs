//! CLI command handlers for Blocksmith.
//!
//! This module provides headless, scriptable access to theme generation
//! for automation, testing, and CI/CD integration.

pub mod common;
pub mod generate;
pub mod palette;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult};
pub use generate::GenerateArgs;
pub use palette::PaletteArgs;
pub use validate::ValidateArgs;
