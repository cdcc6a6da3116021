use crate::error::LayoutError;
use acreage_idf::Document;
use acreage_style::StyleRegistry;
use acreage_types::PageLayout;

/// A paginating renderer: consumes an ordered, styled block stream and
/// produces the bytes of a complete document.
///
/// Implementations must be pure per call - any state is call-scoped -
/// so one engine value can serve concurrent renders.
pub trait LayoutEngine: Send + Sync {
    fn render(
        &self,
        document: &Document,
        styles: &StyleRegistry,
        page: &PageLayout,
    ) -> Result<Vec<u8>, LayoutError>;
}
