//! Presentation model structures.

use super::Slide;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Presentation metadata written to docProps/core.xml and docProps/app.xml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Presentation title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Presentation author/creator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Presentation subject
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Creation date (W3CDTF / ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,

    /// Last modification date (W3CDTF / ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,

    /// Application that produced the package
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,
}

/// An in-memory presentation: metadata plus an ordered sequence of slides.
///
/// Created empty and populated by append-only operations. Slide order in the
/// saved package equals the order of [`add_slide`](Presentation::add_slide)
/// calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Presentation {
    /// Presentation metadata
    pub metadata: Metadata,

    /// Slides, in creation order
    #[serde(default)]
    pub slides: Vec<Slide>,
}

impl Presentation {
    /// Create a new empty presentation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty presentation with a title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            metadata: Metadata {
                title: Some(title.into()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Append a slide to the presentation.
    pub fn add_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    /// Get the number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Check if the presentation has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Serialize the presentation to an in-memory `.pptx` package.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        crate::pptx::PptxWriter::new(self).write()
    }

    /// Serialize the presentation and write it to `path`.
    ///
    /// The package is assembled fully in memory and persisted with a single
    /// write, so a failing path leaves no partial file behind. An existing
    /// file at `path` is overwritten.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Serialize the presentation and write it to `path` asynchronously.
    #[cfg(feature = "async")]
    pub async fn save_async(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.to_bytes()?;
        tokio::fs::write(path.as_ref(), bytes).await?;
        Ok(())
    }

    /// Convert to JSON string.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Convert to JSON string (compact).
    pub fn to_json_compact(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SlideLayout;

    #[test]
    fn test_presentation_creation() {
        let mut pres = Presentation::new();
        assert!(pres.is_empty());

        pres.add_slide(Slide::title_slide("Hello", "World"));
        assert!(!pres.is_empty());
        assert_eq!(pres.len(), 1);
        assert_eq!(pres.slides[0].layout, SlideLayout::TitleSlide);
    }

    #[test]
    fn test_slide_order_is_creation_order() {
        let mut pres = Presentation::new();
        for i in 0..5 {
            pres.add_slide(Slide::content(format!("Slide {}", i + 1), "body"));
        }
        let titles: Vec<&str> = pres.slides.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Slide 1", "Slide 2", "Slide 3", "Slide 4", "Slide 5"]
        );
    }

    #[test]
    fn test_metadata_serialization() {
        let meta = Metadata {
            title: Some("Test Deck".to_string()),
            author: Some("Test Author".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&meta).unwrap();
        assert!(json.contains("Test Deck"));
        assert!(json.contains("Test Author"));
        // Empty fields should not be serialized
        assert!(!json.contains("subject"));
    }

    #[test]
    fn test_json_roundtrip() {
        let mut pres = Presentation::with_title("Roundtrip");
        pres.add_slide(Slide::content("Title", "a\nb"));

        let json = pres.to_json().unwrap();
        let parsed: Presentation = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.metadata.title, pres.metadata.title);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.slides[0].body, vec!["a", "b"]);
    }
}
