//! # printlayout
//!
//! Pagination engine for printable reports.
//!
//! A report is a sequence of measurable line items plus a set of appendix
//! regions (background, header, header description, summary, footer and
//! page numbers). The engine distributes the items over fixed-size pages,
//! places the regions each page asks for, and numbers the pages of a whole
//! batch of documents.
//!
//! ## Quick Start
//!
//! ```
//! use printlayout::{PrintCollection, PrintRule, RegionKind, SimpleDocument, TextElement};
//!
//! fn main() -> printlayout::Result<()> {
//!     let mut doc = SimpleDocument::new()
//!         .with_region(RegionKind::Header, TextElement::new("ACME Corp.", 60.0), PrintRule::AllPages)
//!         .with_region(RegionKind::Summary, TextElement::new("Total: 42", 40.0), PrintRule::LastPage)
//!         .with_rule(RegionKind::PageNumbers, PrintRule::AllPages, 12.0);
//!     for i in 0..100 {
//!         doc = doc.with_item(TextElement::new(format!("Line {}", i), 18.0));
//!     }
//!
//!     let output = PrintCollection::from_document(doc).assemble()?;
//!     println!("{}", printlayout::render::to_text(&output)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Greedy pagination**: items keep their input order; space reserved for
//!   last-page regions is given back when an item would otherwise overflow
//! - **Print rules**: every region on all, first, last or selected pages
//! - **Batches**: continuous or per-document page numbers
//! - **Job files**: whole batches described in JSON
//! - **Output**: JSON and plain-text layout plans, file spool queues

pub mod batch;
pub mod definition;
pub mod dimension;
pub mod document;
pub mod error;
pub mod job;
pub mod layout;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use batch::{
    DestinationPicker, PrintCollection, PrintQueue, PrintServer, QueueHandle, SpoolQueue,
    SpoolServer,
};
pub use definition::{InclusionPolicy, PrintDefinition, PrintRule};
pub use dimension::{PageGeometry, PrintDimension};
pub use document::{PrintDocument, SimpleDocument, TableHead};
pub use error::{Error, Result};
pub use job::JobSpec;
pub use layout::{paginate, LastItemPolicy, LayoutOptions, PageSpaceTracker, PaginationState};
pub use model::{
    AssembledDocument, Band, BodyFrame, Brush, CompletedPage, ContentBlock, Element, ElementRef,
    Margin, PlacedContent, Placement, Point, RegionKind, Row, Size, TextElement,
};
pub use render::JsonFormat;

use std::path::Path;

/// Lay out a JSON job file.
///
/// # Example
///
/// ```no_run
/// let output = printlayout::layout_file("invoice.json").unwrap();
/// println!("Pages: {}", output.page_count());
/// ```
pub fn layout_file<P: AsRef<Path>>(path: P) -> Result<AssembledDocument> {
    let job = JobSpec::from_file(path)?;
    job.into_collection()?.assemble()
}

/// Lay out a job given as JSON text.
pub fn layout_json(json: &str) -> Result<AssembledDocument> {
    JobSpec::from_json(json)?.into_collection()?.assemble()
}

/// Lay out a job file and render the plan as JSON.
///
/// # Example
///
/// ```no_run
/// use printlayout::{to_json, JsonFormat};
///
/// let json = to_json("invoice.json", JsonFormat::Pretty).unwrap();
/// std::fs::write("invoice.layout.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let output = layout_file(path)?;
    render::to_json(&output, format)
}

/// Lay out a job file and render the plan as a text outline.
pub fn to_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let output = layout_file(path)?;
    render::to_text(&output)
}
