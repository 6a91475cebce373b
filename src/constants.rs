//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the theme pattern namespace.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Blocksmith";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "blocksmith";

/// Namespace prefix for registered block pattern slugs (e.g. "blocksmith/hero").
pub const PATTERN_NAMESPACE: &str = "blocksmith";
