//! Layout options and configuration.

use crate::model::Brush;
use serde::{Deserialize, Serialize};

/// Options controlling how content blocks are paginated.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    /// Color content rows from `alternating_colors`
    pub alternating_rows: bool,

    /// Palette cycled through by alternating rows
    pub alternating_colors: Vec<Brush>,

    /// Where the final block goes
    pub last_item: LastItemPolicy,

    /// Fail instead of overflowing when a block is taller than the page it moves to
    pub reject_oversized: bool,

    /// Ask renderers to outline regions; no effect on layout
    pub debug_overlay: bool,
}

impl LayoutOptions {
    /// Create new layout options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable alternating row colors.
    pub fn with_alternating_rows(mut self, enabled: bool) -> Self {
        self.alternating_rows = enabled;
        self
    }

    /// Set the alternating row palette and enable alternating rows.
    pub fn with_alternating_colors(mut self, colors: Vec<Brush>) -> Self {
        self.alternating_colors = colors;
        self.alternating_rows = true;
        self
    }

    /// Set the last item policy.
    pub fn with_last_item(mut self, policy: LastItemPolicy) -> Self {
        self.last_item = policy;
        self
    }

    /// Reject blocks that do not fit the page they move to.
    pub fn with_reject_oversized(mut self, reject: bool) -> Self {
        self.reject_oversized = reject;
        self
    }

    /// Enable or disable the debug overlay hint.
    pub fn with_debug_overlay(mut self, enabled: bool) -> Self {
        self.debug_overlay = enabled;
        self
    }

    /// Background for the n-th content row, if alternating rows are on.
    pub fn row_background(&self, row_index: usize) -> Option<&Brush> {
        if !self.alternating_rows || self.alternating_colors.is_empty() {
            return None;
        }
        self.alternating_colors
            .get(row_index % self.alternating_colors.len())
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            alternating_rows: false,
            alternating_colors: vec![Brush::white(), Brush::new("#EEEEEE")],
            last_item: LastItemPolicy::KeepOnPage,
            reject_oversized: false,
            debug_overlay: false,
        }
    }
}

/// Placement of the final content block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LastItemPolicy {
    /// Keep the last block on the current page when it fits there
    #[default]
    KeepOnPage,
    /// Always start a new page for the last block, unless the current page
    /// has no rows yet
    OwnPage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_options_builder() {
        let options = LayoutOptions::new()
            .with_alternating_colors(vec![Brush::new("#FFF"), Brush::new("#EEE"), Brush::new("#DDD")])
            .with_last_item(LastItemPolicy::OwnPage)
            .with_reject_oversized(true);

        assert!(options.alternating_rows);
        assert_eq!(options.last_item, LastItemPolicy::OwnPage);
        assert!(options.reject_oversized);
        assert!(!options.debug_overlay);
    }

    #[test]
    fn test_row_background_cycles() {
        let options = LayoutOptions::new()
            .with_alternating_colors(vec![Brush::new("#FFF"), Brush::new("#EEE")]);

        assert_eq!(options.row_background(0).map(Brush::as_str), Some("#FFF"));
        assert_eq!(options.row_background(1).map(Brush::as_str), Some("#EEE"));
        assert_eq!(options.row_background(4).map(Brush::as_str), Some("#FFF"));
    }

    #[test]
    fn test_row_background_disabled() {
        let options = LayoutOptions::default();
        assert!(options.row_background(0).is_none());

        let options = LayoutOptions::new()
            .with_alternating_colors(Vec::new());
        assert!(options.row_background(0).is_none());
    }
}
