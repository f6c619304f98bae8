//! Rendering of layout plans.
//!
//! Renderers take an [`AssembledDocument`](crate::AssembledDocument) and
//! produce a textual description of every placement, for previews, diffs
//! and downstream drawing code.

mod json;
mod text;

pub use json::{to_json, JsonFormat};
pub use text::to_text;
