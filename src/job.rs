//! JSON job files.
//!
//! A job describes a whole batch with fixed-height text items, so layouts
//! can be produced without writing any code:
//!
//! ```json
//! {
//!   "file_name": "invoice.pdf",
//!   "documents": [{
//!     "regions": {
//!       "header": { "height": 60, "rule": "all", "label": "ACME Corp." },
//!       "page_numbers": { "height": 12, "rule": "all-but-first" }
//!     },
//!     "table_head": { "label": "Item | Qty | Price", "height": 18 },
//!     "alternating_colors": ["#FFFFFF", "#EEEEEE"],
//!     "items": [{ "label": "Widget", "height": 20 }, "page_break"]
//!   }]
//! }
//! ```

use crate::batch::PrintCollection;
use crate::definition::PrintRule;
use crate::dimension::{PageGeometry, PrintDimension};
use crate::document::{SimpleDocument, TableHead};
use crate::error::{Error, Result};
use crate::layout::{LastItemPolicy, LayoutOptions};
use crate::model::{Brush, ContentBlock, Margin, RegionKind, Size, TextElement};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A batch of documents to lay out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobSpec {
    /// File name of the print job
    pub file_name: Option<String>,

    /// Restart page numbers for every document
    pub individual_page_numbers: bool,

    /// Documents in print order
    pub documents: Vec<DocumentSpec>,
}

/// One document of a job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentSpec {
    /// File name of the document
    pub file_name: Option<String>,

    /// Page size in points (A4 when omitted)
    pub page_size: Option<Size>,

    /// Page margins in points (40pt when omitted)
    pub margin: Option<Margin>,

    /// Appendix regions by kind
    pub regions: BTreeMap<RegionKind, RegionSpec>,

    /// Table head repeated on every page
    pub table_head: Option<TableHeadSpec>,

    /// Color rows from the palette
    pub alternating_rows: bool,

    /// Alternating row palette; setting it enables alternating rows
    pub alternating_colors: Option<Vec<Brush>>,

    /// Placement of the last item
    pub last_item: LastItemPolicy,

    /// Fail on items taller than the page they move to
    pub reject_oversized: bool,

    /// Outline regions in renderers
    pub debug_overlay: bool,

    /// Content items and page breaks
    pub items: Vec<ItemSpec>,
}

/// An appendix region of a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionSpec {
    /// Height reserved when printed
    pub height: f32,

    /// Pages the region is printed on
    #[serde(default)]
    pub rule: PrintRule,

    /// Text of the region. Page numbers are generated and need none; for
    /// other regions, a missing label makes layout fail wherever the rule
    /// selects a page.
    #[serde(default)]
    pub label: Option<String>,
}

/// The table head of a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableHeadSpec {
    /// Height reserved at the top of every body
    pub height: f32,

    /// Text of the head row; only space is reserved when omitted
    #[serde(default)]
    pub label: Option<String>,

    /// Body border color
    #[serde(default)]
    pub border: Option<Brush>,
}

/// A content item or a page break.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemSpec {
    /// The string `"page_break"`
    Marker(Marker),

    /// A fixed-height text item
    Text {
        /// Item text
        label: String,
        /// Item height in points
        height: f32,
        /// Own background of the item
        #[serde(default)]
        background: Option<Brush>,
    },
}

/// Non-content entries of an item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    /// Force a new page
    PageBreak,
}

impl JobSpec {
    /// Parse a job from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidJob(e.to_string()))
    }

    /// Read a job file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Total number of content items, page breaks excluded.
    pub fn item_count(&self) -> usize {
        self.documents
            .iter()
            .flat_map(|d| d.items.iter())
            .filter(|i| matches!(i, ItemSpec::Text { .. }))
            .count()
    }

    /// Build a print collection from the job.
    pub fn into_collection(self) -> Result<PrintCollection> {
        let mut collection = PrintCollection::new()
            .with_individual_page_numbers(self.individual_page_numbers);
        if let Some(name) = self.file_name {
            collection = collection.with_file_name(name);
        }

        for (index, spec) in self.documents.into_iter().enumerate() {
            let document = spec
                .into_document()
                .map_err(|e| match e {
                    Error::InvalidJob(msg) => {
                        Error::InvalidJob(format!("document #{}: {}", index + 1, msg))
                    }
                    other => other,
                })?;
            collection.push(document);
        }

        Ok(collection)
    }
}

impl DocumentSpec {
    /// Build the described document.
    pub fn into_document(self) -> Result<SimpleDocument> {
        let defaults = PrintDimension::a4();
        let page_size = self.page_size.unwrap_or_else(|| defaults.page_size());
        let margin = self.margin.unwrap_or_else(|| defaults.margin());
        if !(page_size.width > 0.0 && page_size.height > 0.0) {
            return Err(Error::InvalidJob(format!(
                "page size {}x{} is not positive",
                page_size.width, page_size.height
            )));
        }

        let mut document = SimpleDocument::new().with_dimension(PrintDimension::new(
            page_size,
            margin,
            Default::default(),
        ));
        if let Some(name) = self.file_name {
            document = document.with_file_name(name);
        }

        for (kind, region) in self.regions {
            if kind == RegionKind::Body {
                return Err(Error::InvalidJob(
                    "the body region cannot be configured".to_string(),
                ));
            }
            check_height("region", kind.as_str(), region.height)?;

            document = match region.label {
                Some(label) if kind != RegionKind::PageNumbers => document.with_region(
                    kind,
                    TextElement::new(label, region.height),
                    region.rule,
                ),
                _ => document.with_rule(kind, region.rule, region.height),
            };
        }

        if let Some(head) = self.table_head {
            check_height("table head", "", head.height)?;
            let width = document.dimension().printable_size().width;
            let mut table_head = match head.label {
                Some(label) => TableHead::new(TextElement::new(label, head.height).shared(), width),
                None => TableHead::spacer(head.height),
            };
            if let Some(border) = head.border {
                table_head = table_head.with_border(border);
            }
            document = document.with_table_head(table_head);
        }

        let mut options = LayoutOptions::new()
            .with_alternating_rows(self.alternating_rows)
            .with_last_item(self.last_item)
            .with_reject_oversized(self.reject_oversized)
            .with_debug_overlay(self.debug_overlay);
        if let Some(colors) = self.alternating_colors {
            options = options.with_alternating_colors(colors);
        }
        document = document.with_options(options);

        for item in self.items {
            match item {
                ItemSpec::Marker(Marker::PageBreak) => document.push(ContentBlock::PageBreak),
                ItemSpec::Text {
                    label,
                    height,
                    background,
                } => {
                    check_height("item", &label, height)?;
                    let mut element = TextElement::new(label, height);
                    if let Some(brush) = background {
                        element = element.with_background(brush);
                    }
                    document.push(ContentBlock::item(element));
                }
            }
        }

        Ok(document)
    }
}

fn check_height(what: &str, name: &str, height: f32) -> Result<()> {
    if height.is_finite() && height >= 0.0 {
        return Ok(());
    }

    let message = if name.is_empty() {
        format!("{} has an invalid height of {}", what, height)
    } else {
        format!("{} '{}' has an invalid height of {}", what, name, height)
    };
    Err(Error::InvalidJob(message))
}
