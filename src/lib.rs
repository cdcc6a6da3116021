//! # acreage
//!
//! Markdown-to-PDF report rendering engine. A constrained markdown
//! dialect (model-generated land-use reports) goes in; a paginated,
//! locale-aware PDF always comes out.
//!
//! The caller-visible contract: given non-empty markdown, [`ReportEngine::render`]
//! returns bytes, never an error. Failures inside the render boundary
//! are converted into a fallback error document, and a failure of the
//! fallback itself into a fixed placeholder byte sequence. The only
//! rejection is [`InputError`] for empty input, raised before any
//! document is built.

// Re-export foundation crates
pub use acreage_idf as idf;
pub use acreage_markdown as markdown;
pub use acreage_render_core as render_core;
pub use acreage_style as style;
pub use acreage_types as types;

pub mod engine;
pub mod error;
mod fallback;

pub use engine::{ReportEngine, ReportRequest};
pub use error::{BuildError, InputError};

// Re-export commonly used types from member crates
pub use acreage_idf::{Block, Document, DocumentMeta, Emphasis, StyledSpan};
pub use acreage_render_core::{LayoutEngine, LayoutError};
pub use acreage_render_lopdf::LopdfLayoutEngine;
pub use acreage_style::{BlockKind, BlockStyle, BuiltinCatalog, FontCatalog, StyleRegistry};
#[cfg(feature = "system-fonts")]
pub use acreage_style::SystemCatalog;
pub use acreage_types::{Color, Locale, PageLayout};
