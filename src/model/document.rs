//! Document-level output types.

use super::CompletedPage;
use serde::Serialize;

/// The ordered pages of a whole batch, ready for preview or printing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AssembledDocument {
    /// Shared file name used for print jobs
    pub file_name: Option<String>,

    /// Pages in output order
    pub pages: Vec<CompletedPage>,
}

impl AssembledDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by its position in the output (1-indexed).
    pub fn get_page(&self, position: u32) -> Option<&CompletedPage> {
        if position == 0 {
            return None;
        }
        self.pages.get((position - 1) as usize)
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Pages that belong to the given document of the batch.
    pub fn pages_of(&self, document: usize) -> impl Iterator<Item = &CompletedPage> {
        self.pages.iter().filter(move |p| p.document == document)
    }

    /// Labels of all content rows, in output order.
    pub fn row_labels(&self) -> Vec<&str> {
        self.pages.iter().flat_map(|p| p.row_labels()).collect()
    }
}
