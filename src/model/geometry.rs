//! Geometry primitives shared by the layout engine and its providers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A structural area of a page.
///
/// The set is closed: every page is made of a body plus any number of the
/// appendix regions listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionKind {
    /// Full-page background
    Background,
    /// Page header
    Header,
    /// Description line below the header
    HeaderDescription,
    /// Summary block, usually printed on the last page only
    Summary,
    /// Page footer
    Footer,
    /// Page number label
    PageNumbers,
    /// The region holding the content blocks
    Body,
}

impl RegionKind {
    /// Every region kind.
    pub const ALL: [RegionKind; 7] = [
        RegionKind::Background,
        RegionKind::Header,
        RegionKind::HeaderDescription,
        RegionKind::Summary,
        RegionKind::Footer,
        RegionKind::PageNumbers,
        RegionKind::Body,
    ];

    /// Regions composed onto each finished page, in placement order.
    ///
    /// Page numbers are missing on purpose: they are stamped once the total
    /// page count is known.
    pub const APPENDIXES: [RegionKind; 5] = [
        RegionKind::Background,
        RegionKind::Header,
        RegionKind::HeaderDescription,
        RegionKind::Summary,
        RegionKind::Footer,
    ];

    /// Snake-case name, as used in job files.
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionKind::Background => "background",
            RegionKind::Header => "header",
            RegionKind::HeaderDescription => "header_description",
            RegionKind::Summary => "summary",
            RegionKind::Footer => "footer",
            RegionKind::PageNumbers => "page_numbers",
            RegionKind::Body => "body",
        }
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RegionKind::Background => "Background",
            RegionKind::Header => "Header",
            RegionKind::HeaderDescription => "HeaderDescription",
            RegionKind::Summary => "Summary",
            RegionKind::Footer => "Footer",
            RegionKind::PageNumbers => "PageNumbers",
            RegionKind::Body => "Body",
        };
        f.write_str(name)
    }
}

/// A point in page coordinates (points, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Width and height in points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// US Letter (8.5 x 11 inches).
    pub fn letter() -> Self {
        Self::new(612.0, 792.0)
    }

    /// A4 (210 x 297 mm).
    pub fn a4() -> Self {
        Self::new(595.0, 842.0)
    }

    /// Check if the size is in landscape orientation.
    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }
}

/// Page margins in points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Margin {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Margin {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The same margin on all four sides.
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }
}

/// A vertical band of a page: where a region starts and how tall it is.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Band {
    /// Distance from the top edge of the page
    pub offset: f32,
    /// Height of the band
    pub length: f32,
}

impl Band {
    pub fn new(offset: f32, length: f32) -> Self {
        Self { offset, length }
    }

    /// First offset below the band.
    pub fn end(&self) -> f32 {
        self.offset + self.length
    }

    /// Check if the band has no height.
    pub fn is_empty(&self) -> bool {
        self.length <= 0.0
    }

    /// Check if two bands share any vertical space.
    pub fn overlaps(&self, other: &Band) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.offset < other.end()
            && other.offset < self.end()
    }
}

/// A stroke or fill color, kept as a CSS-style color string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Brush(String);

impl Brush {
    pub fn new(color: impl Into<String>) -> Self {
        Self(color.into())
    }

    pub fn black() -> Self {
        Self::new("#000000")
    }

    pub fn white() -> Self {
        Self::new("#FFFFFF")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::black()
    }
}

impl fmt::Display for Brush {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_kind_names() {
        assert_eq!(RegionKind::HeaderDescription.to_string(), "HeaderDescription");
        assert_eq!(RegionKind::PageNumbers.as_str(), "page_numbers");
        assert!(!RegionKind::APPENDIXES.contains(&RegionKind::PageNumbers));
        assert!(!RegionKind::APPENDIXES.contains(&RegionKind::Body));
    }

    #[test]
    fn test_region_kind_serde() {
        let json = serde_json::to_string(&RegionKind::HeaderDescription).unwrap();
        assert_eq!(json, "\"header_description\"");
        let kind: RegionKind = serde_json::from_str("\"page_numbers\"").unwrap();
        assert_eq!(kind, RegionKind::PageNumbers);
    }

    #[test]
    fn test_band_overlap() {
        let header = Band::new(20.0, 50.0);
        let body = Band::new(70.0, 600.0);
        assert!(!header.overlaps(&body));
        assert!(Band::new(60.0, 20.0).overlaps(&header));
        assert!(!Band::new(30.0, 0.0).overlaps(&header));
        assert_eq!(body.end(), 670.0);
    }

    #[test]
    fn test_page_sizes() {
        assert!(!Size::letter().is_landscape());
        assert!(Size::new(842.0, 595.0).is_landscape());
    }
}
