//! The document rendered when the primary path fails.
//!
//! Always built in English with base-family styles, independent of the
//! request locale, so the conditions that broke the primary render
//! cannot recur here.

use crate::engine::ReportRequest;
use crate::error::{error_chain, BuildError};
use acreage_idf::{Block, Document, DocumentMeta, StyledSpan};
use acreage_types::Locale;

pub(crate) fn fallback_document(request: &ReportRequest, error: &BuildError) -> Document {
    let blocks = vec![
        Block::Heading {
            level: 1,
            spans: vec![StyledSpan::bold("Report Generation Failed")],
        },
        Block::Paragraph(vec![StyledSpan::plain(
            "The report could not be rendered from the submitted content. \
             The details below describe what went wrong.",
        )]),
        Block::Heading {
            level: 2,
            spans: vec![StyledSpan::bold("Error Details")],
        },
        Block::Paragraph(vec![StyledSpan::plain(error.to_string())]),
        Block::Heading {
            level: 2,
            spans: vec![StyledSpan::bold("Debug Info")],
        },
        Block::Paragraph(vec![StyledSpan::plain(format!(
            "Prepared for: {}, Location: {}, Language: {}",
            request.prepared_for, request.location, request.locale
        ))]),
        Block::Heading {
            level: 3,
            spans: vec![StyledSpan::bold("Failure Trace")],
        },
        Block::Preformatted(error_chain(error)),
    ];

    Document {
        meta: DocumentMeta {
            prepared_for: request.prepared_for.clone(),
            location: request.location.clone(),
            locale: Locale::English,
        },
        blocks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acreage_render_core::LayoutError;

    fn request() -> ReportRequest {
        ReportRequest {
            markdown_text: "# Report".into(),
            prepared_for: "Asha".into(),
            location: "Pune".into(),
            locale: Locale::Hindi,
        }
    }

    #[test]
    fn always_renders_in_english() {
        let error = BuildError::Assembly("bad block".into());
        let document = fallback_document(&request(), &error);
        assert_eq!(document.meta.locale, Locale::English);
    }

    #[test]
    fn trace_block_carries_the_cause_chain() {
        let error = BuildError::from(LayoutError::Pdf("stream encode failed".into()));
        let document = fallback_document(&request(), &error);
        let trace = document
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::Preformatted(text) => Some(text.clone()),
                _ => None,
            })
            .unwrap();
        assert!(trace.contains("caused by: PDF generation error: stream encode failed"));
    }

    #[test]
    fn debug_info_names_the_requester() {
        let error = BuildError::Style("family missing".into());
        let document = fallback_document(&request(), &error);
        let text: String = document
            .blocks
            .iter()
            .flat_map(|b| match b {
                Block::Paragraph(spans) => spans.clone(),
                _ => Vec::new(),
            })
            .map(|s| s.text)
            .collect();
        assert!(text.contains("Prepared for: Asha"));
        assert!(text.contains("Language: hindi"));
    }
}
