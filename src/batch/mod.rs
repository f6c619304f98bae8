//! Batches of documents printed as one job.
//!
//! A [`PrintCollection`] paginates its documents in order, concatenates
//! their pages and stamps page numbers, either restarting for every
//! document or running continuously over the whole batch.
//!
//! # Example
//!
//! ```
//! use printlayout::{PrintCollection, PrintRule, RegionKind, SimpleDocument, TextElement};
//!
//! fn main() -> printlayout::Result<()> {
//!     let doc = || {
//!         SimpleDocument::new()
//!             .with_rule(RegionKind::PageNumbers, PrintRule::AllPages, 12.0)
//!             .with_item(TextElement::new("Line", 20.0))
//!     };
//!
//!     let mut batch = PrintCollection::new();
//!     batch.push(doc());
//!     batch.push(doc());
//!
//!     let output = batch.assemble()?;
//!     assert_eq!(output.pages[1].page_number_text(), Some("2 | 2"));
//!     Ok(())
//! }
//! ```

mod output;
mod spool;

pub use output::{DestinationPicker, PrintQueue, PrintServer, QueueHandle};
pub use spool::{SpoolQueue, SpoolServer};

use crate::document::PrintDocument;
use crate::error::Result;
use crate::layout::{stamp_page_number, PaginationState};
use crate::model::AssembledDocument;

/// An ordered batch of documents.
#[derive(Default)]
pub struct PrintCollection {
    documents: Vec<Box<dyn PrintDocument>>,
    file_name: Option<String>,
    individual_page_numbers: bool,
}

impl PrintCollection {
    /// Create an empty batch with continuous page numbering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a batch holding a single document.
    pub fn from_document(document: impl PrintDocument + 'static) -> Self {
        let mut collection = Self::new();
        collection.push(document);
        collection
    }

    /// Set the file name used for print jobs.
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    /// Restart page numbers for every document instead of numbering the
    /// batch continuously.
    pub fn with_individual_page_numbers(mut self, individual: bool) -> Self {
        self.individual_page_numbers = individual;
        self
    }

    /// Append a document.
    pub fn push(&mut self, document: impl PrintDocument + 'static) {
        self.documents.push(Box::new(document));
    }

    /// Append a document (builder form).
    pub fn with_document(mut self, document: impl PrintDocument + 'static) -> Self {
        self.push(document);
        self
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the batch holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Whether page numbers restart for every document.
    pub fn individual_page_numbers(&self) -> bool {
        self.individual_page_numbers
    }

    /// Job file name: the batch's own, or else the first document's.
    pub fn file_name(&self) -> Option<&str> {
        self.file_name
            .as_deref()
            .or_else(|| self.documents.iter().find_map(|d| d.file_name()))
    }

    /// Paginate every document and number the pages.
    pub fn assemble(&self) -> Result<AssembledDocument> {
        let mut output = AssembledDocument {
            file_name: self.file_name().map(str::to_string),
            pages: Vec::new(),
        };

        for (index, document) in self.documents.iter().enumerate() {
            let document = document.as_ref();
            let blocks = document.items();
            log::debug!("Paginate document #{} ({} blocks)", index, blocks.len());

            let mut pages = PaginationState::new(document)
                .with_document_index(index)
                .run(&blocks)?;

            if self.individual_page_numbers {
                let total = pages.len() as u32;
                for (position, page) in (1..).zip(pages.iter_mut()) {
                    stamp_page_number(document, page, position, total);
                }
            }

            output.pages.extend(pages);
        }

        if !self.individual_page_numbers {
            let total = output.page_count();
            for (position, page) in (1..).zip(output.pages.iter_mut()) {
                if let Some(document) = self.documents.get(page.document) {
                    stamp_page_number(document.as_ref(), page, position, total);
                }
            }
        }

        log::info!(
            "Assembled {} page(s) from {} document(s)",
            output.page_count(),
            self.documents.len()
        );
        Ok(output)
    }

    /// Same as [`assemble`](Self::assemble); the result is meant for display.
    pub fn preview(&self) -> Result<AssembledDocument> {
        self.assemble()
    }

    /// Let the user pick a queue and print the batch there.
    ///
    /// Returns `Ok(false)` when there is nothing to print or the user
    /// cancelled.
    pub fn print(&self, picker: &mut dyn DestinationPicker) -> Result<bool> {
        if self.is_empty() {
            log::info!("Nothing to print");
            return Ok(false);
        }

        let Some(queue) = picker.pick() else {
            log::info!("Printing cancelled");
            return Ok(false);
        };

        let mut handle = QueueHandle::new(queue);
        self.submit(&mut handle)?;
        Ok(true)
    }

    /// Print the batch on the named queue of a server.
    ///
    /// Returns `Ok(false)` when there is nothing to print.
    pub fn print_to_queue(&self, server: &dyn PrintServer, queue_name: &str) -> Result<bool> {
        if self.is_empty() {
            log::info!("Nothing to print");
            return Ok(false);
        }

        let mut handle = QueueHandle::open(server, queue_name)?;
        self.submit(&mut handle)?;
        Ok(true)
    }

    fn submit(&self, handle: &mut QueueHandle) -> Result<()> {
        let document = self.assemble()?;
        log::info!(
            "Print {} page(s) on '{}'",
            document.page_count(),
            handle.name()
        );
        handle.submit(&document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::PrintRule;
    use crate::document::SimpleDocument;
    use crate::model::{RegionKind, TextElement};

    fn numbered(items: usize, rule: PrintRule) -> SimpleDocument {
        (0..items).fold(
            SimpleDocument::new().with_rule(RegionKind::PageNumbers, rule, 12.0),
            |doc, i| doc.with_item(TextElement::new(format!("Line {}", i + 1), 20.0)).with_page_break(),
        )
    }

    fn numbers(output: &AssembledDocument) -> Vec<Option<&str>> {
        output.pages.iter().map(|p| p.page_number_text()).collect()
    }

    #[test]
    fn test_continuous_numbering() {
        let batch = PrintCollection::new()
            .with_document(numbered(1, PrintRule::AllPages))
            .with_document(numbered(1, PrintRule::AllPages));

        // Each document is one item plus a trailing break: 2 pages
        let output = batch.assemble().unwrap();
        assert_eq!(
            numbers(&output),
            vec![Some("1 | 4"), Some("2 | 4"), Some("3 | 4"), Some("4 | 4")]
        );
        assert_eq!(output.pages[2].number, 1);
        assert_eq!(output.pages[2].document, 1);
    }

    #[test]
    fn test_individual_numbering() {
        let batch = PrintCollection::new()
            .with_individual_page_numbers(true)
            .with_document(numbered(1, PrintRule::AllPages))
            .with_document(numbered(2, PrintRule::AllPages));

        let output = batch.assemble().unwrap();
        assert_eq!(
            numbers(&output),
            vec![
                Some("1 | 2"),
                Some("2 | 2"),
                Some("1 | 3"),
                Some("2 | 3"),
                Some("3 | 3")
            ]
        );
    }

    #[test]
    fn test_numbering_policy_uses_batch_position() {
        let batch = PrintCollection::new()
            .with_document(numbered(1, PrintRule::AllButFirst))
            .with_document(numbered(1, PrintRule::AllButFirst));

        let output = batch.assemble().unwrap();
        assert_eq!(
            numbers(&output),
            vec![None, Some("2 | 4"), Some("3 | 4"), Some("4 | 4")]
        );
    }

    #[test]
    fn test_file_name_falls_back_to_first_document() {
        let batch = PrintCollection::from_document(SimpleDocument::new().with_file_name("a.pdf"))
            .with_document(SimpleDocument::new().with_file_name("b.pdf"));
        assert_eq!(batch.file_name(), Some("a.pdf"));
        assert_eq!(batch.with_file_name("batch.pdf").file_name(), Some("batch.pdf"));
    }

    #[test]
    fn test_empty_collection() {
        let batch = PrintCollection::new();
        assert!(batch.is_empty());
        assert!(batch.assemble().unwrap().is_empty());

        let mut picker = || -> Option<Box<dyn PrintQueue>> { panic!("picker must not be asked") };
        assert!(!batch.print(&mut picker).unwrap());
    }
}
