//! Rendering extracted content into annotated context segments.
//!
//! A segment starts with a `### {name}` header and tags each page, sheet, or
//! slide inline so the completion service can cite locations:
//!
//! ```text
//! ### CIM.pdf
//! [Page 1]
//! ...
//!
//! [Page 2]
//! ...
//! ```

use crate::models::ExtractedContent;

/// Separator placed between documents in an assembled context.
pub const SEGMENT_SEPARATOR: &str = "\n\n---\n\n";

/// Suffix appended to a segment cut at its character budget.
pub const TRUNCATION_SUFFIX: &str = "\n...[Content truncated due to length]";

/// Renders one document as an annotated segment.
///
/// Structure precedence is pages, then sheets, then slides, then flat text.
/// The output is never truncated here.
pub fn render_segment(name: &str, content: &ExtractedContent) -> String {
    let body = if let Some(pages) = &content.pages {
        join_entries(
            pages
                .iter()
                .map(|p| format!("[Page {}]\n{}", p.number, p.content)),
        )
    } else if let Some(sheets) = &content.sheets {
        join_entries(
            sheets
                .iter()
                .map(|s| format!("[Sheet: {}]\n{}", s.name, s.content)),
        )
    } else if let Some(slides) = &content.slides {
        join_entries(
            slides
                .iter()
                .map(|s| format!("[Slide {}]\n{}", s.number, s.content)),
        )
    } else {
        content.text.clone()
    };

    format!("### {}\n{}", name, body)
}

fn join_entries(entries: impl Iterator<Item = String>) -> String {
    entries.collect::<Vec<_>>().join("\n\n")
}

/// Cuts `segment` to at most `budget` characters, appending
/// [`TRUNCATION_SUFFIX`] when anything was removed.
///
/// Counts Unicode scalar values, not bytes, so the cut never splits a
/// character.
pub fn truncate_segment(segment: String, budget: usize) -> String {
    match segment.char_indices().nth(budget) {
        Some((cut, _)) => {
            let mut truncated = segment[..cut].to_string();
            truncated.push_str(TRUNCATION_SUFFIX);
            truncated
        }
        None => segment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Page, Sheet, Slide};

    #[test]
    fn flat_text_segment() {
        let out = render_segment("notes.txt", &ExtractedContent::text("hello"));
        assert_eq!(out, "### notes.txt\nhello");
    }

    #[test]
    fn pages_are_tagged_and_separated() {
        let content = ExtractedContent {
            text: "ab".into(),
            pages: Some(vec![
                Page {
                    number: 1,
                    content: "a".into(),
                },
                Page {
                    number: 2,
                    content: "b".into(),
                },
            ]),
            ..Default::default()
        };
        assert_eq!(
            render_segment("CIM.pdf", &content),
            "### CIM.pdf\n[Page 1]\na\n\n[Page 2]\nb"
        );
    }

    #[test]
    fn sheets_and_slides_are_tagged() {
        let sheets = ExtractedContent {
            sheets: Some(vec![Sheet {
                name: "Q1".into(),
                content: "x,1".into(),
            }]),
            ..Default::default()
        };
        assert_eq!(
            render_segment("Budget.xlsx", &sheets),
            "### Budget.xlsx\n[Sheet: Q1]\nx,1"
        );

        let slides = ExtractedContent {
            slides: Some(vec![Slide {
                number: 3,
                content: "Roadmap".into(),
            }]),
            ..Default::default()
        };
        assert_eq!(
            render_segment("Deck.pptx", &slides),
            "### Deck.pptx\n[Slide 3]\nRoadmap"
        );
    }

    #[test]
    fn pages_take_precedence_over_other_structure() {
        let content = ExtractedContent {
            text: "flat".into(),
            pages: Some(vec![Page {
                number: 1,
                content: "page".into(),
            }]),
            sheets: Some(vec![Sheet {
                name: "S".into(),
                content: "sheet".into(),
            }]),
            slides: None,
        };
        assert_eq!(render_segment("x", &content), "### x\n[Page 1]\npage");
    }

    #[test]
    fn truncation_is_exact() {
        let long = "x".repeat(120);
        let out = truncate_segment(long, 100);
        assert_eq!(out.chars().count(), 100 + TRUNCATION_SUFFIX.chars().count());
        assert!(out.ends_with(TRUNCATION_SUFFIX));
    }

    #[test]
    fn truncation_leaves_short_segments_alone() {
        assert_eq!(truncate_segment("short".into(), 5), "short");
        assert_eq!(truncate_segment("short".into(), 50), "short");
    }

    #[test]
    fn truncation_respects_multibyte_chars() {
        let out = truncate_segment("ééééé".into(), 2);
        assert!(out.starts_with("éé\n"));
    }
}
