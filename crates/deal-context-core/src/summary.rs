//! Post-processing of generated summaries.

use regex::Regex;

/// Extracts the bullets of the `## Key Points` section of a summary.
///
/// The section runs from its header to the next `##` header or the end of
/// the text. Bullet markers (`-`, `*`, `•`) are stripped. A summary without
/// the section yields an empty list.
pub fn extract_key_points(summary: &str) -> Vec<String> {
    let header = match Regex::new(r"(?m)^##\s*Key Points[ \t]*\r?\n") {
        Ok(re) => re,
        Err(_) => return Vec::new(),
    };
    let Some(m) = header.find(summary) else {
        return Vec::new();
    };

    let rest = &summary[m.end()..];
    let section = match rest.find("\n##") {
        Some(end) => &rest[..end],
        None => rest,
    };

    section
        .lines()
        .map(str::trim)
        .filter_map(|line| {
            line.strip_prefix('-')
                .or_else(|| line.strip_prefix('*'))
                .or_else(|| line.strip_prefix('•'))
        })
        .map(|point| point.trim().to_string())
        .filter(|point| !point.is_empty())
        .collect()
}
