//! Data model for pagination input and output.
//!
//! Input is a sequence of [`ContentBlock`]s built from measurable
//! [`Element`]s. Output is an [`AssembledDocument`] made of
//! [`CompletedPage`]s with absolute placements.

mod document;
mod element;
mod geometry;
mod page;

pub use document::AssembledDocument;
pub use element::{ContentBlock, Element, ElementRef, TextElement};
pub use geometry::{Band, Brush, Margin, Point, RegionKind, Size};
pub use page::{BodyFrame, CompletedPage, PlacedContent, Placement, Row};
