//! The pagination engine.
//!
//! Content blocks are consumed strictly in input order in a single pass.
//! Each block is placed on the current page if it fits, otherwise the page
//! is concluded and the block starts the next one. Two space checks are
//! used: a strict one that keeps room for regions printed only on the last
//! page, and a relaxed "second chance" one that ignores that reservation.

use super::compose::compose_page;
use super::options::LastItemPolicy;
use super::tracker::PageSpaceTracker;
use crate::document::PrintDocument;
use crate::error::{Error, Result};
use crate::model::{CompletedPage, ContentBlock, ElementRef};

/// Lay out a document into pages.
///
/// Page numbers start at 1. Exactly one returned page has `is_last` set,
/// and it is the final one.
pub fn paginate(document: &dyn PrintDocument) -> Result<Vec<CompletedPage>> {
    let blocks = document.items();
    PaginationState::new(document).run(&blocks)
}

/// All mutable state of one pagination run.
pub struct PaginationState<'a> {
    document: &'a dyn PrintDocument,
    document_index: usize,
    page_number: u32,
    tracker: PageSpaceTracker<'a>,
    row_counter: usize,
    background_warning_shown: bool,
    pages: Vec<CompletedPage>,
}

impl<'a> PaginationState<'a> {
    /// Start a run on page 1.
    pub fn new(document: &'a dyn PrintDocument) -> Self {
        document.on_page_start(1);
        Self {
            document,
            document_index: 0,
            page_number: 1,
            tracker: PageSpaceTracker::new(document.geometry(), document.table_head()),
            row_counter: 0,
            background_warning_shown: false,
            pages: Vec::new(),
        }
    }

    /// Tag produced pages with the document's position in a batch.
    pub fn with_document_index(mut self, index: usize) -> Self {
        self.document_index = index;
        self
    }

    /// Number of the page currently being filled.
    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    /// Consume the blocks and return the finished pages.
    pub fn run(mut self, blocks: &[ContentBlock]) -> Result<Vec<CompletedPage>> {
        match blocks.split_last() {
            None => {
                log::info!("There are no content blocks to print");
                self.conclude_page(true)?;
            }
            Some((last, rest)) => {
                for block in rest {
                    self.add_block(block)?;
                }
                self.add_last_block(last)?;
            }
        }

        Ok(self.pages)
    }

    fn add_block(&mut self, block: &ContentBlock) -> Result<()> {
        let element = match block {
            ContentBlock::PageBreak => {
                self.conclude_page(false)?;
                self.start_page();
                return Ok(());
            }
            ContentBlock::Item(element) => element,
        };

        let height = self.measure(element);

        if self.tracker.has_space(height, self.page_number, true) {
            self.place(element, height);
        } else if self.tracker.has_space(height, self.page_number, false) {
            log::debug!(
                "Second chance for '{}' on page #{}",
                element.label(),
                self.page_number
            );
            self.place(element, height);
        } else {
            self.conclude_page(false)?;
            self.start_page();
            self.check_oversized(element, height, false)?;
            self.place(element, height);
        }

        Ok(())
    }

    fn add_last_block(&mut self, block: &ContentBlock) -> Result<()> {
        let element = match block {
            ContentBlock::PageBreak => {
                self.conclude_page(false)?;
                self.start_page();
                return self.conclude_page(true);
            }
            ContentBlock::Item(element) => element,
        };

        let height = self.measure(element);
        let fits = self.tracker.has_space(height, self.page_number, true);
        let own_page = self.document.options().last_item == LastItemPolicy::OwnPage;

        // OwnPage never leaves a page with an empty body behind
        if !(fits && (!own_page || self.tracker.is_empty())) {
            self.conclude_page(false)?;
            self.start_page();
            self.check_oversized(element, height, true)?;
        }
        self.place(element, height);

        log::debug!("Last item printed on page #{}", self.page_number);
        self.conclude_page(true)
    }

    fn measure(&self, element: &ElementRef) -> f32 {
        let width = self.document.geometry().printable_size().width;
        element.measure(width)
    }

    fn place(&mut self, element: &ElementRef, height: f32) {
        let options = self.document.options();
        let background = options.row_background(self.row_counter).cloned();

        if background.is_some() {
            self.row_counter += 1;
            if element.has_background() && !self.background_warning_shown {
                self.background_warning_shown = true;
                log::warn!(
                    "'{}' defines its own background, which alternating row colors override",
                    element.label()
                );
            }
        }

        self.tracker.push_row(element.clone(), height, background);
        self.tracker.remove_remaining_space(height);
    }

    /// Check a block against the budget of the fresh page it starts.
    fn check_oversized(&self, element: &ElementRef, height: f32, is_last_page: bool) -> Result<()> {
        let available = self.tracker.remaining(self.page_number, is_last_page);
        if height <= available {
            return Ok(());
        }

        if self.document.options().reject_oversized {
            return Err(Error::BlockTooTall {
                label: element.label().to_string(),
                height,
                available,
            });
        }

        log::warn!(
            "'{}' ({:.2}pt) does not fit on page #{} ({:.2}pt free), placing it anyway",
            element.label(),
            height,
            self.page_number,
            available
        );
        Ok(())
    }

    fn conclude_page(&mut self, is_last_page: bool) -> Result<()> {
        log::debug!(
            "Conclude page #{} (last: {})",
            self.page_number,
            is_last_page
        );

        let fresh = PageSpaceTracker::new(self.document.geometry(), self.document.table_head());
        let tracker = std::mem::replace(&mut self.tracker, fresh);
        let page = compose_page(
            self.document,
            tracker,
            self.page_number,
            is_last_page,
            self.document_index,
        )?;
        self.pages.push(page);
        Ok(())
    }

    fn start_page(&mut self) {
        self.page_number += 1;
        self.document.on_page_start(self.page_number);
    }
}
