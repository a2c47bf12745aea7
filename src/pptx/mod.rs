//! PPTX (PowerPoint) package writer.
//!
//! This module serializes the in-memory [`Presentation`](crate::Presentation)
//! model into a complete Office Open XML presentation package: content types,
//! package relationships, the presentation part, one slide master with two
//! layouts and a theme, one slide part per slide, and document properties.

mod parts;
mod writer;

pub use writer::PptxWriter;
