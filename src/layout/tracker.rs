//! Remaining-space bookkeeping for the page being filled.

use crate::dimension::PageGeometry;
use crate::document::TableHead;
use crate::model::{Brush, ElementRef, RegionKind};

/// A row placed on the current page, positioned relative to the body top.
#[derive(Debug, Clone)]
pub(crate) struct TrackedRow {
    pub element: ElementRef,
    pub offset: f32,
    pub height: f32,
    pub background: Option<Brush>,
}

/// Tracks the body space used on the page currently being filled.
///
/// A tracker lives for exactly one page. The body height it compares
/// against comes from the geometry for a last-page hypothesis, since the
/// same page may offer less room if it ends up being the last one.
pub struct PageSpaceTracker<'a> {
    geometry: &'a dyn PageGeometry,
    head: TableHead,
    used: f32,
    cursor: f32,
    rows: Vec<TrackedRow>,
}

impl<'a> PageSpaceTracker<'a> {
    /// Start a page, reserving the table head up front.
    pub fn new(geometry: &'a dyn PageGeometry, head: TableHead) -> Self {
        let reserved = head.height.max(0.0);
        Self {
            geometry,
            head,
            used: reserved,
            cursor: reserved,
            rows: Vec::new(),
        }
    }

    /// Body height still free under the given last-page hypothesis.
    pub fn remaining(&self, page_number: u32, is_last_page: bool) -> f32 {
        self.geometry
            .band(RegionKind::Body, page_number, is_last_page)
            .length
            - self.used
    }

    /// Check if a block of `height` fits under the given hypothesis.
    pub fn has_space(&self, height: f32, page_number: u32, is_last_page: bool) -> bool {
        self.remaining(page_number, is_last_page) >= height
    }

    /// Debit the budget. Negative heights are ignored.
    pub fn remove_remaining_space(&mut self, height: f32) {
        self.used += height.max(0.0);
    }

    /// Record a row below the previous one.
    pub(crate) fn push_row(&mut self, element: ElementRef, height: f32, background: Option<Brush>) {
        self.rows.push(TrackedRow {
            element,
            offset: self.cursor,
            height,
            background,
        });
        self.cursor += height.max(0.0);
    }

    /// Height debited so far, table head included.
    pub fn used(&self) -> f32 {
        self.used
    }

    /// Number of rows placed on this page.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if no row has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Outline color of the body frame.
    pub fn border(&self) -> &Brush {
        &self.head.border
    }

    /// The table head reserved on this page.
    pub fn head(&self) -> &TableHead {
        &self.head
    }

    pub(crate) fn into_rows(self) -> (TableHead, Vec<TrackedRow>) {
        (self.head, self.rows)
    }
}
