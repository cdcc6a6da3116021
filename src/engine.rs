//! The render boundary.
//!
//! `ReportEngine` owns the immutable style registry and a layout engine
//! and exposes one operation: turn a [`ReportRequest`] into PDF bytes.
//! Rendering is synchronous and pure per call; the engine can be shared
//! across threads and calls freely.

use crate::error::{BuildError, InputError};
use crate::fallback;
use acreage_idf::{Block, Document, DocumentMeta, StyledSpan};
use acreage_markdown::assemble_blocks;
use acreage_render_core::LayoutEngine;
use acreage_render_lopdf::LopdfLayoutEngine;
use acreage_style::{FontCatalog, StyleRegistry};
use acreage_types::{Locale, PageLayout};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Emitted when even the fallback document could not be rendered. The
/// one output that is not a valid PDF; still non-empty, so the caller
/// contract holds.
pub(crate) const PLACEHOLDER: &[u8] =
    b"CRITICAL ERROR: could not generate any PDF for this report.";

/// The upstream request body, as the HTTP layer deserializes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportRequest {
    pub markdown_text: String,
    #[serde(rename = "name")]
    pub prepared_for: String,
    pub location: String,
    #[serde(rename = "language", default)]
    pub locale: Locale,
}

pub struct ReportEngine {
    styles: Arc<StyleRegistry>,
    layout: Arc<dyn LayoutEngine>,
    page: PageLayout,
}

impl ReportEngine {
    pub fn new(styles: StyleRegistry, layout: Arc<dyn LayoutEngine>) -> Self {
        Self {
            styles: Arc::new(styles),
            layout,
            page: PageLayout::report_default(),
        }
    }

    /// Builds the registry from the catalog and uses the bundled lopdf
    /// layout engine.
    pub fn with_default_layout(catalog: &dyn FontCatalog) -> Self {
        Self::new(StyleRegistry::build(catalog), Arc::new(LopdfLayoutEngine::new()))
    }

    /// Render a report. The only error is the input rejection; every
    /// failure past validation is absorbed and still yields bytes.
    pub fn render(&self, request: &ReportRequest) -> Result<Vec<u8>, InputError> {
        if request.markdown_text.trim().is_empty() {
            return Err(InputError::new("no markdown content provided"));
        }

        match self.primary(request) {
            Ok(bytes) => Ok(bytes),
            Err(error) => {
                log::error!(
                    "primary render failed for '{}' ({}): {error}",
                    request.prepared_for,
                    request.locale,
                );
                Ok(self.render_fallback(request, &error))
            }
        }
    }

    fn primary(&self, request: &ReportRequest) -> Result<Vec<u8>, BuildError> {
        let document = self.build_document(request);
        let bytes = self
            .layout
            .render(&document, &self.styles, &self.page)?;
        log::debug!("rendered {} bytes for '{}'", bytes.len(), request.prepared_for);
        Ok(bytes)
    }

    /// The report preamble (title, prepared-for, location) followed by
    /// the assembled markdown blocks.
    fn build_document(&self, request: &ReportRequest) -> Document {
        let locale = request.locale;
        let mut blocks = vec![
            Block::Heading {
                level: 1,
                spans: vec![StyledSpan::bold(locale.report_title())],
            },
            Block::Heading {
                level: 3,
                spans: vec![StyledSpan::bold(format!(
                    "{}: {}",
                    locale.prepared_for_label(),
                    request.prepared_for
                ))],
            },
            Block::Heading {
                level: 3,
                spans: vec![StyledSpan::bold(format!(
                    "{}: {}",
                    locale.location_label(),
                    request.location
                ))],
            },
        ];
        blocks.extend(assemble_blocks(&request.markdown_text, locale));

        Document {
            meta: DocumentMeta {
                prepared_for: request.prepared_for.clone(),
                location: request.location.clone(),
                locale,
            },
            blocks,
        }
    }

    /// The fallback document discards all partial state and renders with
    /// default-locale styles only, so a missing locale font can never
    /// take this path down too.
    fn render_fallback(&self, request: &ReportRequest, error: &BuildError) -> Vec<u8> {
        let document = fallback::fallback_document(request, error);
        match self.layout.render(&document, &self.styles, &self.page) {
            Ok(bytes) => bytes,
            Err(fallback_error) => {
                log::error!("fallback render failed as well: {fallback_error}; returning placeholder");
                PLACEHOLDER.to_vec()
            }
        }
    }
}
