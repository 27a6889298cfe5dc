//! Post-hoc citation recovery.
//!
//! The completion service is asked to cite sources, but its answer is free
//! text. This module scans the answer for document names and, near each
//! name, for a `Page n`, `Slide n`, or `Sheet: name` qualifier. Both false
//! positives and false negatives are expected; the result is advisory.

use regex::Regex;

use crate::models::{Location, SourceCitation};

/// How far past a document name (in characters, same line) a location
/// qualifier may appear and still be attributed to it.
const LOCATION_WINDOW: usize = 80;

/// Recovers the citations present in `answer`.
///
/// `candidates` are the display names of the documents that were included
/// in the context, in context order. Names are matched case-insensitively;
/// a name listed twice yields one citation. The returned citations follow
/// candidate order.
pub fn recover_citations(answer: &str, candidates: &[String]) -> Vec<SourceCitation> {
    let haystack = answer.to_lowercase();
    let mut seen: Vec<String> = Vec::new();
    let mut citations = Vec::new();

    for name in candidates {
        let needle = name.to_lowercase();
        if needle.is_empty() || seen.contains(&needle) {
            continue;
        }
        seen.push(needle.clone());

        if !haystack.contains(&needle) {
            continue;
        }

        citations.push(SourceCitation {
            document_name: name.clone(),
            location: find_location(answer, name),
        });
    }

    citations
}

/// Tries the page, slide, and sheet patterns in that order.
fn find_location(answer: &str, name: &str) -> Option<Location> {
    let escaped = regex::escape(name);
    let near = format!(r"(?i){}[^\n]{{0,{}}}?", escaped, LOCATION_WINDOW);

    let page = Regex::new(&format!(r"{}\bPage\s*(\d+)", near)).ok()?;
    if let Some(n) = capture_number(&page, answer) {
        return Some(Location::Page(n));
    }

    let slide = Regex::new(&format!(r"{}\bSlide\s*(\d+)", near)).ok()?;
    if let Some(n) = capture_number(&slide, answer) {
        return Some(Location::Slide(n));
    }

    let sheet = Regex::new(&format!(
        r#"{}\bSheet\b:?\s*["'“‘]?([^"'”’,;)\]\n]+)"#,
        near
    ))
    .ok()?;
    if let Some(caps) = sheet.captures(answer) {
        let sheet_name = caps[1].trim().trim_end_matches('.').trim();
        if !sheet_name.is_empty() {
            return Some(Location::Sheet(sheet_name.to_string()));
        }
    }

    None
}

fn capture_number(re: &Regex, answer: &str) -> Option<u32> {
    re.captures(answer)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
