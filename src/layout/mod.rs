//! Pagination of content blocks into pages.
//!
//! The engine walks the blocks once, tracking the remaining body space of
//! the current page with a [`PageSpaceTracker`], and composes every
//! finished page with its appendix regions.

mod compose;
mod engine;
mod options;
mod tracker;

pub use engine::{paginate, PaginationState};
pub use options::{LastItemPolicy, LayoutOptions};
pub use tracker::PageSpaceTracker;

pub(crate) use compose::stamp_page_number;
