//! Core building blocks: the labeled array container, the period-grouping
//! baseline engine, the drought index calculations, and the time labeler.
//! These are re-exported at the crate root; prefer the root paths.
pub mod array;
pub mod indices;
pub mod timeline;

mod baseline;
