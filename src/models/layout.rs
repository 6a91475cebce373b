//! Front-page layout: the ordered list of sections to render.

use serde::{Deserialize, Serialize};

/// The conventional full-page section order used when no layout is set.
pub const DEFAULT_SECTIONS: [&str; 6] = ["header", "hero", "benefits", "about", "contact", "footer"];

/// Ordered selection of page sections.
///
/// Order is significant and maps directly to template output order.
/// Duplicates are kept, and unknown section names are passed through to a
/// generic pattern reference rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LayoutConfig {
    /// Section identifiers in render order.
    #[serde(default)]
    pub sections: Vec<String>,
}

impl LayoutConfig {
    /// Creates a layout from an ordered list of section names.
    #[must_use]
    pub fn new(sections: Vec<String>) -> Self {
        Self { sections }
    }

    /// The sections to render: the configured order, or the conventional
    /// default order when none are configured.
    #[must_use]
    pub fn effective_sections(&self) -> Vec<String> {
        if self.sections.is_empty() {
            DEFAULT_SECTIONS.iter().map(ToString::to_string).collect()
        } else {
            self.sections.clone()
        }
    }
}
