//! Core data models shared by the extraction, assembly, and citation stages.
//!
//! These types flow through a single request: a [`DocumentRef`] identifies a
//! stored file, extraction turns its bytes into [`ExtractedContent`], and the
//! answer is annotated with [`SourceCitation`]s recovered from its text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix of the placeholder text produced for binary files that cannot be
/// represented as text. Documents carrying it are left out of the context.
pub const BINARY_MARKER: &str = "[Binary file:";

/// A stored document attached to a deal.
///
/// Supplied by the metadata index for each request; the pipeline never
/// modifies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub id: String,
    /// Display name including its extension (e.g. `"Budget.xlsx"`).
    pub name: String,
    pub storage_path: String,
    pub declared_content_type: Option<String>,
}

/// One page of a paginated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub number: u32,
    pub content: String,
}

/// One worksheet of a workbook, rendered as CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub content: String,
}

/// One slide of a presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub number: u32,
    pub content: String,
}

/// The parsing result for one document.
///
/// `text` is always present. At most one of `pages`, `sheets`, or `slides`
/// is populated, depending on the source format.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractedContent {
    pub text: String,
    pub pages: Option<Vec<Page>>,
    pub sheets: Option<Vec<Sheet>>,
    pub slides: Option<Vec<Slide>>,
}

impl ExtractedContent {
    /// Unstructured content.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Content for a document whose text could not be extracted.
    pub fn placeholder(kind: &str) -> Self {
        Self::text(format!("[{} content could not be extracted]", kind))
    }

    /// Content for a file recognised as binary and not representable as text.
    pub fn binary(name: &str) -> Self {
        Self::text(format!(
            "{} {} - content type not supported]",
            BINARY_MARKER, name
        ))
    }

    pub fn is_binary_placeholder(&self) -> bool {
        self.text.starts_with(BINARY_MARKER)
    }
}

/// Where in a document a citation points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Page(u32),
    Slide(u32),
    Sheet(String),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Page(n) => write!(f, "Page {}", n),
            Location::Slide(n) => write!(f, "Slide {}", n),
            Location::Sheet(name) => write!(f, "Sheet: {}", name),
        }
    }
}

/// A document (and optionally a location within it) that an answer drew on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceCitation {
    pub document_name: String,
    pub location: Option<Location>,
}

impl fmt::Display for SourceCitation {
    /// Renders as `"{name}"` or `"{name} ({location})"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(loc) => write!(f, "{} ({})", self.document_name, loc),
            None => write!(f, "{}", self.document_name),
        }
    }
}

/// Speaker of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One turn of a conversation sent to the completion service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Which flow a context is being assembled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextMode {
    /// Question answering over the deal's documents.
    Qa,
    /// Structured summary of the deal's documents.
    Summarize,
}

impl ContextMode {
    /// Default per-document character budget for this mode.
    pub fn default_budget(self) -> usize {
        match self {
            ContextMode::Qa => 50_000,
            ContextMode::Summarize => 20_000,
        }
    }
}
