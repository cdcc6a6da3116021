//! The engine's error taxonomy.
//!
//! Only [`InputError`] ever reaches the caller. Everything else is
//! absorbed at the render boundary: font problems degrade to the base
//! family, malformed tables degrade to paragraphs, and any remaining
//! build failure becomes the fallback document (or, failing that, the
//! placeholder bytes).

use acreage_render_core::LayoutError;
use std::error::Error;
use thiserror::Error;

/// Rejection of the request before any rendering is attempted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid markdown input: {reason}")]
pub struct InputError {
    pub reason: String,
}

impl InputError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

/// A failure of the primary render path. Never surfaced; it feeds the
/// fallback document with an error message and a source chain.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("layout failed")]
    Layout(#[from] LayoutError),
    #[error("style resolution failed: {0}")]
    Style(String),
    #[error("document assembly failed: {0}")]
    Assembly(String),
}

/// Renders the full source chain of an error, one cause per line. This
/// is the closest Rust analogue of the traceback the fallback document
/// embeds.
pub fn error_chain(error: &dyn Error) -> String {
    let mut out = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        out.push_str("\ncaused by: ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
