use acreage::{BuiltinCatalog, ReportEngine, ReportRequest};
use acreage::types::Locale;
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a rendered PDF with helper methods.
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl RenderedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Extracts the text of every page, concatenated.
    pub fn text(&self) -> Result<String, Box<dyn std::error::Error>> {
        let mut text = String::new();
        for page_num in 1..=self.page_count() {
            text.push_str(&self.doc.extract_text(&[page_num as u32])?);
            text.push('\n');
        }
        Ok(text)
    }
}

pub fn default_engine() -> ReportEngine {
    ReportEngine::with_default_layout(&BuiltinCatalog)
}

pub fn request(markdown: &str) -> ReportRequest {
    ReportRequest {
        markdown_text: markdown.to_string(),
        prepared_for: "Jordan Avery".to_string(),
        location: "Sacramento County".to_string(),
        locale: Locale::English,
    }
}

pub fn render(markdown: &str) -> Result<RenderedPdf, Box<dyn std::error::Error>> {
    let bytes = default_engine().render(&request(markdown))?;
    RenderedPdf::from_bytes(bytes)
}
