//! Slide and slide layout models.

use serde::{Deserialize, Serialize};

/// A predefined slide layout.
///
/// The layout selects which placeholder regions the slide exposes. Only the
/// two layouts the generator actually emits are modeled; both live on the
/// single built-in slide master.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideLayout {
    /// Centered title with a subtitle beneath it.
    TitleSlide,
    /// Title across the top with a body text area below.
    #[default]
    TitleAndBody,
}

impl SlideLayout {
    /// Part number of the layout inside the package (`slideLayoutN.xml`).
    pub(crate) fn part_index(&self) -> usize {
        match self {
            SlideLayout::TitleSlide => 1,
            SlideLayout::TitleAndBody => 2,
        }
    }

    /// Placeholder type emitted for the title region.
    pub(crate) fn title_ph_type(&self) -> &'static str {
        match self {
            SlideLayout::TitleSlide => "ctrTitle",
            SlideLayout::TitleAndBody => "title",
        }
    }

    /// Placeholder type emitted for the body region.
    pub(crate) fn body_ph_type(&self) -> &'static str {
        match self {
            SlideLayout::TitleSlide => "subTitle",
            SlideLayout::TitleAndBody => "body",
        }
    }

    /// Human-readable layout name (matches the layout part's `cSld` name).
    pub fn name(&self) -> &'static str {
        match self {
            SlideLayout::TitleSlide => "Title Slide",
            SlideLayout::TitleAndBody => "Title and Body",
        }
    }
}

impl std::fmt::Display for SlideLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single slide: a layout plus the text for its two placeholder regions.
///
/// Slides are append-only content. Both text regions are set at construction
/// and never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Slide {
    /// Layout this slide is based on
    pub layout: SlideLayout,

    /// Title placeholder text
    pub title: String,

    /// Body placeholder text, one entry per paragraph.
    ///
    /// Empty entries are preserved and become empty paragraphs.
    #[serde(default)]
    pub body: Vec<String>,
}

impl Slide {
    /// Create a slide with the given layout, title, and body text.
    ///
    /// The body string is split on `'\n'`, one paragraph per line, the same
    /// way mainstream presentation libraries treat multi-line text assigned
    /// to a placeholder.
    pub fn new(layout: SlideLayout, title: impl Into<String>, body: &str) -> Self {
        Self {
            layout,
            title: title.into(),
            body: body.split('\n').map(String::from).collect(),
        }
    }

    /// Create a title slide (title + subtitle).
    pub fn title_slide(title: impl Into<String>, subtitle: &str) -> Self {
        Self::new(SlideLayout::TitleSlide, title, subtitle)
    }

    /// Create a title-and-body content slide.
    pub fn content(title: impl Into<String>, body: &str) -> Self {
        Self::new(SlideLayout::TitleAndBody, title, body)
    }

    /// Body text joined back into a single string.
    pub fn body_text(&self) -> String {
        self.body.join("\n")
    }

    /// Check whether both placeholder regions are empty.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.body.iter().all(|p| p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_splits_on_newlines() {
        let slide = Slide::content("Title", "line one\nline two\nline three");
        assert_eq!(slide.body.len(), 3);
        assert_eq!(slide.body[1], "line two");
        assert_eq!(slide.body_text(), "line one\nline two\nline three");
    }

    #[test]
    fn test_empty_lines_preserved() {
        let slide = Slide::content("Title", "first\n\nlast");
        assert_eq!(slide.body, vec!["first", "", "last"]);
    }

    #[test]
    fn test_layout_placeholders() {
        assert_eq!(SlideLayout::TitleSlide.title_ph_type(), "ctrTitle");
        assert_eq!(SlideLayout::TitleSlide.body_ph_type(), "subTitle");
        assert_eq!(SlideLayout::TitleAndBody.title_ph_type(), "title");
        assert_eq!(SlideLayout::TitleAndBody.body_ph_type(), "body");
    }

    #[test]
    fn test_layout_display() {
        assert_eq!(SlideLayout::TitleSlide.to_string(), "Title Slide");
        assert_eq!(SlideLayout::TitleAndBody.to_string(), "Title and Body");
    }

    #[test]
    fn test_slide_is_empty() {
        assert!(Slide::content("", "").is_empty());
        assert!(!Slide::content("Title", "").is_empty());
    }
}
