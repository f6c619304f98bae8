//! Measurable elements and the content blocks built from them.

use super::Brush;
use serde::Serializer;
use std::fmt;
use std::sync::Arc;

/// Something that can be placed on a page.
///
/// The layout engine never draws elements; it only asks how tall they want
/// to be for a given width and remembers where they were placed.
pub trait Element: fmt::Debug + Send + Sync {
    /// Desired height when laid out with the given width.
    fn measure(&self, available_width: f32) -> f32;

    /// Human-readable identifier used in layout output and logs.
    fn label(&self) -> &str;

    /// Whether the element already paints its own background.
    ///
    /// Alternating row colors replace that background, so the engine warns
    /// once per run when this returns `true`.
    fn has_background(&self) -> bool {
        false
    }
}

/// Shared handle to an element.
pub type ElementRef = Arc<dyn Element>;

/// Serialize an element as its label.
pub(crate) fn serialize_element<S>(element: &ElementRef, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(element.label())
}

/// A fixed-height element with a text label.
#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    label: String,
    height: f32,
    background: Option<Brush>,
}

impl TextElement {
    /// Create a new text element.
    pub fn new(label: impl Into<String>, height: f32) -> Self {
        Self {
            label: label.into(),
            height,
            background: None,
        }
    }

    /// Give the element its own background.
    pub fn with_background(mut self, brush: Brush) -> Self {
        self.background = Some(brush);
        self
    }

    /// The element's own background, if any.
    pub fn background(&self) -> Option<&Brush> {
        self.background.as_ref()
    }

    /// Wrap into a shared element handle.
    pub fn shared(self) -> ElementRef {
        Arc::new(self)
    }
}

impl Element for TextElement {
    fn measure(&self, _available_width: f32) -> f32 {
        self.height
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn has_background(&self) -> bool {
        self.background.is_some()
    }
}

/// One unit of document content.
#[derive(Debug, Clone)]
pub enum ContentBlock {
    /// A regular measurable block
    Item(ElementRef),

    /// Forces the current page to end; takes no space
    PageBreak,
}

impl ContentBlock {
    /// Create an item block from any element.
    pub fn item(element: impl Element + 'static) -> Self {
        ContentBlock::Item(Arc::new(element))
    }

    /// Create a fixed-height text item.
    pub fn text(label: impl Into<String>, height: f32) -> Self {
        Self::item(TextElement::new(label, height))
    }

    /// Check if this block is a page break marker.
    pub fn is_page_break(&self) -> bool {
        matches!(self, ContentBlock::PageBreak)
    }

    /// Get the element of an item block.
    pub fn element(&self) -> Option<&ElementRef> {
        match self {
            ContentBlock::Item(element) => Some(element),
            ContentBlock::PageBreak => None,
        }
    }
}

impl From<ElementRef> for ContentBlock {
    fn from(element: ElementRef) -> Self {
        ContentBlock::Item(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_element_measure() {
        let element = TextElement::new("Line 1", 24.0);
        assert_eq!(element.measure(500.0), 24.0);
        assert_eq!(element.label(), "Line 1");
        assert!(!element.has_background());

        let element = element.with_background(Brush::new("#FF0000"));
        assert!(element.has_background());
    }

    #[test]
    fn test_block_variants() {
        let block = ContentBlock::text("Line 1", 10.0);
        assert!(!block.is_page_break());
        assert_eq!(block.element().map(|e| e.label()), Some("Line 1"));

        assert!(ContentBlock::PageBreak.is_page_break());
        assert!(ContentBlock::PageBreak.element().is_none());
    }
}
