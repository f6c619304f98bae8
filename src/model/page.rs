//! Page-level types produced by the layout engine.

use super::element::serialize_element;
use super::{Brush, ElementRef, Point, RegionKind, Size};
use serde::Serialize;

/// A laid-out page.
#[derive(Debug, Clone, Serialize)]
pub struct CompletedPage {
    /// Page number within its document (1-indexed)
    pub number: u32,

    /// Whether this is the last page of its document
    pub is_last: bool,

    /// Index of the owning document within the batch
    pub document: usize,

    /// Page size in points
    pub size: Size,

    /// Body frame with the placed content rows
    pub body: BodyFrame,

    /// Appendix placements (background, header, ..., page numbers)
    pub regions: Vec<Placement>,

    /// Renderers may outline regions when set; no effect on layout
    pub debug_overlay: bool,
}

impl CompletedPage {
    /// Get the placement of an appendix region.
    pub fn region(&self, kind: RegionKind) -> Option<&Placement> {
        self.regions.iter().find(|p| p.kind == kind)
    }

    /// Check if an appendix region was placed on this page.
    pub fn has_region(&self, kind: RegionKind) -> bool {
        self.region(kind).is_some()
    }

    /// The stamped page number label, if any.
    pub fn page_number_text(&self) -> Option<&str> {
        self.region(RegionKind::PageNumbers)
            .and_then(|p| p.content.text())
    }

    /// Number of content rows on the page (the table head is not counted).
    pub fn row_count(&self) -> usize {
        self.body.rows.len()
    }

    /// Check if the body holds no content rows.
    pub fn is_empty(&self) -> bool {
        self.body.rows.is_empty()
    }

    /// Labels of the content rows, in placement order.
    pub fn row_labels(&self) -> Vec<&str> {
        self.body.rows.iter().map(|r| r.element.label()).collect()
    }
}

/// The body region of a page: an outlined frame holding the content rows.
#[derive(Debug, Clone, Serialize)]
pub struct BodyFrame {
    /// Top-left corner of the frame
    pub position: Point,

    /// Frame size (printable width x body band length)
    pub size: Size,

    /// Outline color
    pub border: Brush,

    /// Table head repeated at the top of every page
    pub head: Option<Row>,

    /// Content rows in input order
    pub rows: Vec<Row>,
}

impl BodyFrame {
    /// Total height taken by the head and the rows.
    pub fn used_height(&self) -> f32 {
        self.head.as_ref().map_or(0.0, |h| h.height) + self.rows.iter().map(|r| r.height).sum::<f32>()
    }
}

/// A content row placed inside the body frame.
#[derive(Debug, Clone, Serialize)]
pub struct Row {
    /// The placed element
    #[serde(serialize_with = "serialize_element")]
    pub element: ElementRef,

    /// Absolute top-left corner on the page
    pub position: Point,

    /// Measured height
    pub height: f32,

    /// Alternating row background, if enabled
    pub background: Option<Brush>,
}

/// An appendix region placed on a page.
#[derive(Debug, Clone, Serialize)]
pub struct Placement {
    /// Which region this is
    pub kind: RegionKind,

    /// What was placed
    pub content: PlacedContent,

    /// Absolute top-left corner on the page
    pub position: Point,

    /// Size of the region band
    pub size: Size,
}

/// The content of a placement.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacedContent {
    /// An element supplied by the document
    Element(#[serde(serialize_with = "serialize_element")] ElementRef),

    /// Text generated during layout (page numbers)
    Text(String),
}

impl PlacedContent {
    /// Label of the element, or the text itself.
    pub fn label(&self) -> &str {
        match self {
            PlacedContent::Element(element) => element.label(),
            PlacedContent::Text(text) => text,
        }
    }

    /// Generated text, if this is a text placement.
    pub fn text(&self) -> Option<&str> {
        match self {
            PlacedContent::Text(text) => Some(text),
            PlacedContent::Element(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextElement;

    fn sample_page() -> CompletedPage {
        CompletedPage {
            number: 1,
            is_last: true,
            document: 0,
            size: Size::a4(),
            body: BodyFrame {
                position: Point::new(40.0, 100.0),
                size: Size::new(515.0, 600.0),
                border: Brush::black(),
                head: Some(Row {
                    element: TextElement::new("Columns", 20.0).shared(),
                    position: Point::new(40.0, 100.0),
                    height: 20.0,
                    background: None,
                }),
                rows: vec![Row {
                    element: TextElement::new("Line 1", 30.0).shared(),
                    position: Point::new(40.0, 120.0),
                    height: 30.0,
                    background: None,
                }],
            },
            regions: vec![Placement {
                kind: RegionKind::PageNumbers,
                content: PlacedContent::Text("1 | 1".to_string()),
                position: Point::new(40.0, 780.0),
                size: Size::new(515.0, 20.0),
            }],
            debug_overlay: false,
        }
    }

    #[test]
    fn test_page_accessors() {
        let page = sample_page();
        assert_eq!(page.row_count(), 1);
        assert!(!page.is_empty());
        assert_eq!(page.row_labels(), vec!["Line 1"]);
        assert_eq!(page.page_number_text(), Some("1 | 1"));
        assert!(!page.has_region(RegionKind::Header));
        assert_eq!(page.body.used_height(), 50.0);
    }

    #[test]
    fn test_page_serializes_labels() {
        let json = serde_json::to_string(&sample_page()).unwrap();
        assert!(json.contains("\"element\":\"Line 1\""));
        assert!(json.contains("\"text\":\"1 | 1\""));
        assert!(json.contains("\"kind\":\"page_numbers\""));
    }
}
