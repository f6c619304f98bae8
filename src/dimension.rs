//! Page geometry: where each region sits on a page.

use crate::definition::{InclusionPolicy, PrintDefinition};
use crate::model::{Band, Margin, RegionKind, Size};
use std::collections::HashMap;

/// Supplies the vertical band of every region for a page.
///
/// Implementations must be pure functions of their arguments. Bands of
/// different regions on the same page must not overlap; the layout engine
/// relies on it without checking.
pub trait PageGeometry {
    /// Full page size.
    fn page_size(&self) -> Size;

    /// Page margins.
    fn margin(&self) -> Margin;

    /// Page size minus margins.
    fn printable_size(&self) -> Size {
        let page = self.page_size();
        let margin = self.margin();
        Size::new(
            (page.width - margin.left - margin.right).max(0.0),
            (page.height - margin.top - margin.bottom).max(0.0),
        )
    }

    /// Band of `kind` on the given page.
    fn band(&self, kind: RegionKind, page_number: u32, is_last_page: bool) -> Band;
}

/// Geometry that stacks fixed-height regions around a flexible body.
///
/// From the top margin down: header, header description, body. From the
/// bottom margin up: page numbers, footer, summary. A region excluded by the
/// print definition on a page has zero height there and the body grows into
/// its space. The background spans the whole printable area.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintDimension {
    page_size: Size,
    margin: Margin,
    heights: HashMap<RegionKind, f32>,
    definition: PrintDefinition,
}

impl PrintDimension {
    /// Create a geometry with no appendix heights.
    pub fn new(page_size: Size, margin: Margin, definition: PrintDefinition) -> Self {
        Self {
            page_size,
            margin,
            heights: HashMap::new(),
            definition,
        }
    }

    /// A4 page with 40pt margins and an empty definition.
    pub fn a4() -> Self {
        Self::new(Size::a4(), Margin::uniform(40.0), PrintDefinition::new())
    }

    /// Set the height reserved for a region when it is printed.
    pub fn with_height(mut self, kind: RegionKind, height: f32) -> Self {
        match kind {
            RegionKind::Body | RegionKind::Background => {
                log::debug!("{} height is derived from the page, ignoring {}", kind, height);
            }
            _ => {
                self.heights.insert(kind, height.max(0.0));
            }
        }
        self
    }

    /// Replace the print definition.
    pub fn with_definition(mut self, definition: PrintDefinition) -> Self {
        self.definition = definition;
        self
    }

    /// The print definition used to decide which regions take space.
    pub fn definition(&self) -> &PrintDefinition {
        &self.definition
    }

    /// Configured height of a region, printed or not.
    pub fn height(&self, kind: RegionKind) -> f32 {
        self.heights.get(&kind).copied().unwrap_or(0.0)
    }

    /// Height a region actually takes on the given page.
    fn effective_height(&self, kind: RegionKind, page_number: u32, is_last_page: bool) -> f32 {
        if self.definition.should_include(kind, page_number, is_last_page) {
            self.height(kind)
        } else {
            0.0
        }
    }

    /// Height available to the body on the given page.
    pub fn body_height(&self, page_number: u32, is_last_page: bool) -> f32 {
        self.band(RegionKind::Body, page_number, is_last_page).length
    }
}

impl Default for PrintDimension {
    fn default() -> Self {
        Self::a4()
    }
}

impl PageGeometry for PrintDimension {
    fn page_size(&self) -> Size {
        self.page_size
    }

    fn margin(&self) -> Margin {
        self.margin
    }

    fn band(&self, kind: RegionKind, page_number: u32, is_last_page: bool) -> Band {
        let h = |k| self.effective_height(k, page_number, is_last_page);
        let top = self.margin.top;
        let bottom = (self.page_size.height - self.margin.bottom).max(top);

        let header = h(RegionKind::Header);
        let description = h(RegionKind::HeaderDescription);
        let summary = h(RegionKind::Summary);
        let footer = h(RegionKind::Footer);
        let numbers = h(RegionKind::PageNumbers);

        let body_start = top + header + description;
        let body_end = bottom - summary - footer - numbers;

        match kind {
            RegionKind::Background => Band::new(top, bottom - top),
            RegionKind::Header => Band::new(top, header),
            RegionKind::HeaderDescription => Band::new(top + header, description),
            RegionKind::Body => Band::new(body_start, (body_end - body_start).max(0.0)),
            RegionKind::Summary => Band::new(body_end, summary),
            RegionKind::Footer => Band::new(bottom - footer - numbers, footer),
            RegionKind::PageNumbers => Band::new(bottom - numbers, numbers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::PrintRule;

    fn dimension() -> PrintDimension {
        let definition = PrintDefinition::new()
            .with_rule(RegionKind::Header, PrintRule::AllPages)
            .with_rule(RegionKind::HeaderDescription, PrintRule::FirstPage)
            .with_rule(RegionKind::Summary, PrintRule::LastPage)
            .with_rule(RegionKind::Footer, PrintRule::AllPages)
            .with_rule(RegionKind::PageNumbers, PrintRule::AllPages);

        PrintDimension::new(Size::new(600.0, 800.0), Margin::uniform(50.0), definition)
            .with_height(RegionKind::Header, 60.0)
            .with_height(RegionKind::HeaderDescription, 30.0)
            .with_height(RegionKind::Summary, 80.0)
            .with_height(RegionKind::Footer, 40.0)
            .with_height(RegionKind::PageNumbers, 20.0)
    }

    #[test]
    fn test_printable_size() {
        let dim = dimension();
        assert_eq!(dim.printable_size(), Size::new(500.0, 700.0));
    }

    #[test]
    fn test_first_page_bands() {
        let dim = dimension();
        assert_eq!(dim.band(RegionKind::Header, 1, false), Band::new(50.0, 60.0));
        assert_eq!(
            dim.band(RegionKind::HeaderDescription, 1, false),
            Band::new(110.0, 30.0)
        );
        assert_eq!(dim.band(RegionKind::Body, 1, false), Band::new(140.0, 550.0));
        assert_eq!(dim.band(RegionKind::Footer, 1, false), Band::new(690.0, 40.0));
        assert_eq!(dim.band(RegionKind::PageNumbers, 1, false), Band::new(730.0, 20.0));
        assert_eq!(dim.band(RegionKind::Background, 1, false), Band::new(50.0, 700.0));
    }

    #[test]
    fn test_excluded_regions_give_space_to_body() {
        let dim = dimension();
        // No header description after page 1
        assert_eq!(dim.band(RegionKind::Body, 2, false), Band::new(110.0, 580.0));
        // Summary only on the last page
        assert_eq!(dim.band(RegionKind::Body, 2, true), Band::new(110.0, 500.0));
        assert_eq!(dim.band(RegionKind::Summary, 2, true), Band::new(610.0, 80.0));
        assert!(dim.band(RegionKind::Summary, 2, false).is_empty());
    }

    #[test]
    fn test_bands_do_not_overlap() {
        let dim = dimension();
        for page in 1..=3 {
            for last in [false, true] {
                let bands: Vec<Band> = [
                    RegionKind::Header,
                    RegionKind::HeaderDescription,
                    RegionKind::Body,
                    RegionKind::Summary,
                    RegionKind::Footer,
                    RegionKind::PageNumbers,
                ]
                .iter()
                .map(|k| dim.band(*k, page, last))
                .collect();

                for (i, a) in bands.iter().enumerate() {
                    for b in &bands[i + 1..] {
                        assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn test_body_and_background_heights_ignored() {
        let dim = PrintDimension::a4()
            .with_height(RegionKind::Body, 10.0)
            .with_height(RegionKind::Background, 10.0);
        assert_eq!(dim.height(RegionKind::Body), 0.0);
        assert_eq!(dim.body_height(1, false), 842.0 - 80.0);
    }
}
