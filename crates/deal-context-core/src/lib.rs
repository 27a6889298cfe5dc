//! # Deal Context Core
//!
//! Dependency-light logic for Deal Context: the document data model,
//! filename-based format sniffing, context segment rendering, prompt
//! templates, citation recovery, and summary post-processing.
//!
//! This crate contains no tokio, sqlx, network, or archive-parsing
//! dependencies. Everything here is a pure function of its inputs.

pub mod citations;
pub mod models;
pub mod prompt;
pub mod render;
pub mod sniff;
pub mod summary;

pub use citations::recover_citations;
pub use models::{
    ChatMessage, ContextMode, DocumentRef, ExtractedContent, Location, Page, Role, Sheet, Slide,
    SourceCitation,
};
pub use sniff::{classify, FormatKind};
