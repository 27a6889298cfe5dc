//! Filename-based format classification.
//!
//! Classification looks only at the filename suffix, never at the bytes: a
//! file named `report.pdf` is handed to the PDF extractor even if it is
//! really a spreadsheet.

/// Extraction strategy selected for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    PlainText,
    Pdf,
    WordDoc,
    Spreadsheet,
    Presentation,
    Json,
    GenericProbe,
}

/// Suffix table, checked in order. The first matching suffix wins.
const SUFFIXES: &[(&str, FormatKind)] = &[
    (".txt", FormatKind::PlainText),
    (".md", FormatKind::PlainText),
    (".csv", FormatKind::PlainText),
    (".pdf", FormatKind::Pdf),
    (".docx", FormatKind::WordDoc),
    (".xlsx", FormatKind::Spreadsheet),
    (".xls", FormatKind::Spreadsheet),
    (".pptx", FormatKind::Presentation),
    (".json", FormatKind::Json),
];

impl FormatKind {
    /// Human-readable kind used in "could not be extracted" placeholders.
    pub fn label(self) -> &'static str {
        match self {
            FormatKind::PlainText => "Text",
            FormatKind::Pdf => "PDF",
            FormatKind::WordDoc => "Word document",
            FormatKind::Spreadsheet => "Spreadsheet",
            FormatKind::Presentation => "Presentation",
            FormatKind::Json => "JSON",
            FormatKind::GenericProbe => "File",
        }
    }
}

/// Classifies a filename. Total: unknown suffixes map to
/// [`FormatKind::GenericProbe`].
pub fn classify(filename: &str) -> FormatKind {
    let lower = filename.to_ascii_lowercase();
    SUFFIXES
        .iter()
        .find(|(suffix, _)| lower.ends_with(suffix))
        .map(|(_, kind)| *kind)
        .unwrap_or(FormatKind::GenericProbe)
}
