//! # deckgen
//!
//! Programmatic PowerPoint (.pptx) presentation generation.
//!
//! This library builds presentations from an append-only in-memory model and
//! serializes them as Office Open XML packages. It ships one built-in deck —
//! the ten-slide "Sleepwalker" pitch deck — and the small writer needed to
//! persist any deck assembled through the same API.
//!
//! ## Quick Start
//!
//! ```no_run
//! // Build and save the built-in pitch deck
//! deckgen::deck::build_and_save("Sleepwalker_Pitch_Deck.pptx")?;
//!
//! // Or assemble a deck by hand
//! use deckgen::{Presentation, Slide};
//!
//! let mut pres = Presentation::with_title("Quarterly Review");
//! pres.add_slide(Slide::title_slide("Quarterly Review", "FY24 Q3"));
//! pres.add_slide(Slide::content("Highlights", "Revenue up\nChurn down"));
//! pres.save("review.pptx")?;
//! # Ok::<(), deckgen::Error>(())
//! ```
//!
//! ## Features
//!
//! - `async`: async file saving with Tokio (`Presentation::save_async`)

pub mod deck;
pub mod error;
pub mod model;
pub mod pptx;
pub mod render;

// Re-exports
pub use error::{Error, Result};
pub use model::{Metadata, Presentation, Slide, SlideLayout};
pub use pptx::PptxWriter;

use std::path::Path;

/// Serialize a presentation to an in-memory `.pptx` package.
pub fn write_bytes(pres: &Presentation) -> Result<Vec<u8>> {
    PptxWriter::new(pres).write()
}

/// Serialize a presentation and write it to `path`.
///
/// # Example
///
/// ```no_run
/// use deckgen::{write_file, Presentation, Slide};
///
/// let mut pres = Presentation::new();
/// pres.add_slide(Slide::content("Hello", "World"));
/// write_file(&pres, "hello.pptx")?;
/// # Ok::<(), deckgen::Error>(())
/// ```
pub fn write_file(pres: &Presentation, path: impl AsRef<Path>) -> Result<()> {
    pres.save(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_bytes_produces_zip() {
        let mut pres = Presentation::new();
        pres.add_slide(Slide::content("Hello", "World"));

        let bytes = write_bytes(&pres).unwrap();
        // ZIP local file header magic
        assert_eq!(&bytes[..4], &[0x50, 0x4B, 0x03, 0x04]);
    }

    #[test]
    fn test_write_bytes_empty_presentation() {
        let pres = Presentation::new();
        assert!(matches!(
            write_bytes(&pres),
            Err(Error::EmptyPresentation)
        ));
    }
}
