//! The bundled layout engine.
//!
//! Consumes the ordered block stream with its resolved styles, paginates
//! it with a top-down cursor, and serializes the result as a PDF using
//! `lopdf`. Text is set in the PDF base-14 families with WinAnsi
//! encoding; a locale whose family the writer cannot serve renders in
//! the base family (the registry already arranged that unless the
//! catalog over-promised).

mod layout;
mod writer;

use acreage_idf::Document;
use acreage_render_core::{LayoutEngine, LayoutError};
use acreage_style::StyleRegistry;
use acreage_types::PageLayout;
use layout::LayoutPass;

#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfLayoutEngine;

impl LopdfLayoutEngine {
    pub fn new() -> Self {
        Self
    }
}

impl LayoutEngine for LopdfLayoutEngine {
    fn render(
        &self,
        document: &Document,
        styles: &StyleRegistry,
        page: &PageLayout,
    ) -> Result<Vec<u8>, LayoutError> {
        // All layout state lives in the pass; the engine itself is
        // stateless and shareable across concurrent renders.
        let pages = LayoutPass::new(styles, document.meta.locale, page).run(document);
        log::debug!("laid out {} block(s) onto {} page(s)", document.blocks.len(), pages.len());
        writer::write_pdf(&pages, page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acreage_idf::{Block, DocumentMeta, StyledSpan};
    use acreage_style::BuiltinCatalog;
    use acreage_types::Locale;

    fn registry() -> StyleRegistry {
        StyleRegistry::build(&BuiltinCatalog)
    }

    fn doc_with(blocks: Vec<Block>) -> Document {
        Document {
            meta: DocumentMeta {
                prepared_for: "Tester".into(),
                location: "Pune".into(),
                locale: Locale::English,
            },
            blocks,
        }
    }

    #[test]
    fn renders_a_loadable_pdf() {
        let doc = doc_with(vec![
            Block::Heading { level: 1, spans: vec![StyledSpan::bold("Title")] },
            Block::Paragraph(vec![StyledSpan::plain("Body text.")]),
        ]);
        let bytes = LopdfLayoutEngine::new()
            .render(&doc, &registry(), &PageLayout::report_default())
            .unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        let loaded = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(loaded.get_pages().len(), 1);
    }

    #[test]
    fn empty_document_still_produces_one_page() {
        let bytes = LopdfLayoutEngine::new()
            .render(&doc_with(Vec::new()), &registry(), &PageLayout::report_default())
            .unwrap();
        let loaded = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(loaded.get_pages().len(), 1);
    }

    #[test]
    fn long_documents_paginate() {
        let blocks: Vec<Block> = (0..200)
            .map(|i| Block::Paragraph(vec![StyledSpan::plain(format!("Paragraph number {i}."))]))
            .collect();
        let bytes = LopdfLayoutEngine::new()
            .render(&doc_with(blocks), &registry(), &PageLayout::report_default())
            .unwrap();
        let loaded = lopdf::Document::load_mem(&bytes).unwrap();
        assert!(loaded.get_pages().len() > 1);
    }

    #[test]
    fn rendered_text_is_extractable() {
        let doc = doc_with(vec![Block::Paragraph(vec![StyledSpan::plain("FindMeInThePdf")])]);
        let bytes = LopdfLayoutEngine::new()
            .render(&doc, &registry(), &PageLayout::report_default())
            .unwrap();
        let loaded = lopdf::Document::load_mem(&bytes).unwrap();
        let text = loaded.extract_text(&[1]).unwrap();
        assert!(text.contains("FindMeInThePdf"), "extracted: {text}");
    }
}
