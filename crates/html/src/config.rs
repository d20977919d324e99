//! Conversion settings.

use serde::{Deserialize, Serialize};

/// Default nesting limit of the tree walk.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Span class that marks the editor's default text color. Runs carrying it
/// get no style name.
pub const DEFAULT_RESERVED_SPAN_CLASS: &str = "style_color_0_0_0";

/// Configuration for HTML conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Maximum element nesting depth before the conversion is aborted.
    pub max_depth: usize,
    /// `class` value on a `span` that is not propagated as a style name.
    pub reserved_span_class: Option<String>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            reserved_span_class: Some(DEFAULT_RESERVED_SPAN_CLASS.to_string()),
        }
    }
}

impl ConversionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_reserved_span_class(mut self, class: Option<String>) -> Self {
        self.reserved_span_class = class;
        self
    }
}
