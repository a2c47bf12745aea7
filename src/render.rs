//! Outline rendering for presentations.
//!
//! Renders a [`Presentation`] to a plain-text outline or JSON, mostly for
//! CLI inspection of a deck before (or instead of) writing the package.

use crate::error::{Error, Result};
use crate::model::Presentation;

/// JSON output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// Compact single-line JSON
    Compact,
    /// Pretty-printed with 2-space indentation
    #[default]
    Pretty,
}

/// Render a presentation as a plain-text outline.
///
/// One block per slide: `Slide N: title` followed by the indented body
/// lines. Blank body lines are kept.
pub fn to_outline(pres: &Presentation) -> String {
    let mut out = String::new();
    for (idx, slide) in pres.slides.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(&format!("Slide {}: {}\n", idx + 1, slide.title));
        for line in &slide.body {
            if line.is_empty() {
                out.push('\n');
            } else {
                out.push_str(&format!("  {}\n", line));
            }
        }
    }
    out
}

/// Convert a presentation to JSON.
pub fn to_json(pres: &Presentation, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Compact => pres.to_json_compact(),
        JsonFormat::Pretty => pres.to_json(),
    };
    result.map_err(|e| Error::XmlWrite(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Slide;

    fn sample() -> Presentation {
        let mut pres = Presentation::new();
        pres.add_slide(Slide::title_slide("Title", "Subtitle"));
        pres.add_slide(Slide::content("Agenda", "one\ntwo"));
        pres
    }

    #[test]
    fn test_outline_format() {
        let outline = to_outline(&sample());
        assert!(outline.starts_with("Slide 1: Title\n  Subtitle\n"));
        assert!(outline.contains("Slide 2: Agenda\n  one\n  two\n"));
    }

    #[test]
    fn test_outline_keeps_blank_lines() {
        let mut pres = Presentation::new();
        pres.add_slide(Slide::content("T", "a\n\nb"));
        let outline = to_outline(&pres);
        assert!(outline.contains("  a\n\n  b\n"));
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\": \"Agenda\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"title\":\"Agenda\""));
    }
}
