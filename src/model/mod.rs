//! In-memory presentation model.
//!
//! This module defines the structures a deck is built from: a
//! [`Presentation`] holding ordered [`Slide`]s, each based on a fixed
//! [`SlideLayout`]. The model is append-only; the PPTX writer turns it into
//! a package without mutating it.

mod presentation;
mod slide;

pub use presentation::*;
pub use slide::*;
