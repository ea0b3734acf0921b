//! Helpers for turning effect identifiers into icon filename candidates.
//!
//! Responsibilities are split into focused submodules so that the slug primitives, the
//! identifier normaliser and the synonym-aware candidate generator can be tested
//! independently. None of them touch the filesystem.

mod candidates;
mod slug;
mod variants;

pub use candidates::generate_icon_candidates;
pub use slug::{collapse_whitespace, loose_slug, underscore_key};
pub use variants::name_variants;
