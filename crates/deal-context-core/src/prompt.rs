//! Prompt templates for the question-answering and summary flows.
//!
//! The Q&A template asks the completion service to cite every claim with a
//! document name and a page, sheet, or slide. Nothing enforces that format;
//! [`crate::citations`] recovers whatever citations the answer contains.

use serde::Serialize;

use crate::models::ChatMessage;

/// A composed prompt: the system instructions followed by the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
}

const QA_INSTRUCTIONS: &str = "You are a deal analyst assistant. You answer questions about the \
documents uploaded to a deal.

Rules:
- Answer ONLY from the document content provided below. Do not use outside knowledge.
- If the answer is not in the documents, say clearly that the documents do not contain it.
- Cite the source of every factual claim using the document name and a location:
  - PDF and Word documents: the page, e.g. (CIM.pdf, Page 4)
  - Spreadsheets: the sheet, e.g. (Budget.xlsx, Sheet: Q1 Revenue)
  - Presentations: the slide, e.g. (Investor Deck.pptx, Slide 7)
- Use the exact document names shown in the `###` headers.
- Be concise and precise with numbers.";

const SUMMARY_INSTRUCTIONS: &str = "You are a deal analyst. Summarize the documents provided by \
the user using exactly this markdown structure:

## Executive Summary
A short paragraph describing the deal.

## Key Points
- One bullet per key point.

## Financial Highlights
- Revenue, margins, valuation, and other figures.

## Risks & Concerns
- Risks, open issues, and red flags.

## Action Items
- Follow-ups for the deal team.

Omit any section for which the documents contain no supporting content.";

/// Builds the Q&A prompt: instructions plus context as the system turn, then
/// the caller's full message history.
pub fn build_qa_prompt(context: &str, history: &[ChatMessage]) -> CompletionRequest {
    let system = format!(
        "{}\n\n## Deal Documents\n\n{}",
        QA_INSTRUCTIONS, context
    );
    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.push(ChatMessage::system(system));
    messages.extend(history.iter().cloned());
    CompletionRequest { messages }
}

/// Builds the summary prompt: fixed instructions and one user turn carrying
/// the context.
pub fn build_summary_prompt(context: &str) -> CompletionRequest {
    CompletionRequest {
        messages: vec![
            ChatMessage::system(SUMMARY_INSTRUCTIONS),
            ChatMessage::user(format!(
                "Please summarize the following deal documents:\n\n{}",
                context
            )),
        ],
    }
}
