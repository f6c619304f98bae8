//! The input side of the layout engine.
//!
//! A [`PrintDocument`] bundles everything the engine needs to lay out one
//! document: its content blocks, a supplier for appendix elements, the
//! inclusion policy, the page geometry and layout options.

use crate::definition::{InclusionPolicy, PrintDefinition, PrintRule};
use crate::dimension::{PageGeometry, PrintDimension};
use crate::layout::LayoutOptions;
use crate::model::{Brush, ContentBlock, Element, ElementRef, RegionKind};
use std::collections::HashMap;
use std::sync::Arc;

/// A document that can be paginated.
pub trait PrintDocument {
    /// Content blocks in print order.
    fn items(&self) -> Vec<ContentBlock>;

    /// Supply the element for an appendix region.
    ///
    /// Only called once the inclusion policy has confirmed the region is
    /// printed on the page being composed.
    fn region(&self, kind: RegionKind) -> Option<ElementRef>;

    /// Which regions are printed on which pages.
    fn inclusion(&self) -> &dyn InclusionPolicy;

    /// Where regions sit on each page.
    fn geometry(&self) -> &dyn PageGeometry;

    /// Layout options.
    fn options(&self) -> &LayoutOptions;

    /// Table head repeated at the top of every page body.
    fn table_head(&self) -> TableHead {
        TableHead::default()
    }

    /// Preferred file name for print jobs.
    fn file_name(&self) -> Option<&str> {
        None
    }

    /// Called whenever a new page is started.
    fn on_page_start(&self, page_number: u32) {
        let _ = page_number;
    }
}

/// Fixed-height head placed at the top of every page body.
#[derive(Debug, Clone, Default)]
pub struct TableHead {
    /// Element drawn as the head row
    pub element: Option<ElementRef>,

    /// Height reserved for the head on every page
    pub height: f32,

    /// Outline color of the body frame
    pub border: Brush,
}

impl TableHead {
    /// Create a head from an element, reserving its measured height.
    pub fn new(element: ElementRef, available_width: f32) -> Self {
        let height = element.measure(available_width);
        Self {
            element: Some(element),
            height,
            border: Brush::default(),
        }
    }

    /// Reserve space without drawing a head row.
    pub fn spacer(height: f32) -> Self {
        Self {
            element: None,
            height,
            border: Brush::default(),
        }
    }

    /// Set the body border color.
    pub fn with_border(mut self, border: Brush) -> Self {
        self.border = border;
        self
    }
}

/// A ready-made [`PrintDocument`] backed by in-memory data.
///
/// # Example
///
/// ```
/// use printlayout::{PrintRule, RegionKind, SimpleDocument, TextElement};
///
/// let doc = SimpleDocument::new()
///     .with_region(RegionKind::Header, TextElement::new("Invoice", 60.0), PrintRule::AllPages)
///     .with_item(TextElement::new("Line 1", 20.0))
///     .with_page_break()
///     .with_item(TextElement::new("Line 2", 20.0));
///
/// let pages = printlayout::paginate(&doc).unwrap();
/// assert_eq!(pages.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimpleDocument {
    items: Vec<ContentBlock>,
    regions: HashMap<RegionKind, ElementRef>,
    dimension: PrintDimension,
    table_head: TableHead,
    options: LayoutOptions,
    file_name: Option<String>,
}

impl SimpleDocument {
    /// Create an empty A4 document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page geometry. The dimension's print definition is kept
    /// unless regions are added afterwards.
    pub fn with_dimension(mut self, dimension: PrintDimension) -> Self {
        self.dimension = dimension;
        self
    }

    /// Add an appendix region, printed according to `rule`.
    ///
    /// The region's height is its measured height at the printable width.
    pub fn with_region(mut self, kind: RegionKind, element: impl Element + 'static, rule: PrintRule) -> Self {
        let element: ElementRef = Arc::new(element);
        let width = self.dimension.printable_size().width;
        let height = element.measure(width);
        self.regions.insert(kind, element);
        self.with_rule(kind, rule, height)
    }

    /// Reserve space for a region without supplying an element.
    ///
    /// Page numbers are generated, so this is how they are configured.
    /// For other regions the engine fails with a missing-region error when
    /// the rule selects a page.
    pub fn with_rule(mut self, kind: RegionKind, rule: PrintRule, height: f32) -> Self {
        let mut definition = self.dimension.definition().clone();
        definition.set_rule(kind, rule);
        self.dimension = self.dimension.with_definition(definition).with_height(kind, height);
        self
    }

    /// Append a content item.
    pub fn with_item(mut self, element: impl Element + 'static) -> Self {
        self.items.push(ContentBlock::item(element));
        self
    }

    /// Append a page break.
    pub fn with_page_break(mut self) -> Self {
        self.items.push(ContentBlock::PageBreak);
        self
    }

    /// Append a block.
    pub fn push(&mut self, block: ContentBlock) {
        self.items.push(block);
    }

    /// Set the table head.
    pub fn with_table_head(mut self, head: TableHead) -> Self {
        self.table_head = head;
        self
    }

    /// Set the layout options.
    pub fn with_options(mut self, options: LayoutOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the file name.
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    /// The page geometry.
    pub fn dimension(&self) -> &PrintDimension {
        &self.dimension
    }

    /// The print definition.
    pub fn definition(&self) -> &PrintDefinition {
        self.dimension.definition()
    }

    /// Number of blocks, page breaks included.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl PrintDocument for SimpleDocument {
    fn items(&self) -> Vec<ContentBlock> {
        self.items.clone()
    }

    fn region(&self, kind: RegionKind) -> Option<ElementRef> {
        self.regions.get(&kind).cloned()
    }

    fn inclusion(&self) -> &dyn InclusionPolicy {
        self.dimension.definition()
    }

    fn geometry(&self) -> &dyn PageGeometry {
        &self.dimension
    }

    fn options(&self) -> &LayoutOptions {
        &self.options
    }

    fn table_head(&self) -> TableHead {
        self.table_head.clone()
    }

    fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }
}
