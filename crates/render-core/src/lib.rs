//! Rendering abstractions.
//!
//! The engine treats page layout and byte production as a black box
//! behind [`LayoutEngine`]: it hands over an ordered block stream, the
//! style registry and the page geometry, and gets bytes or a
//! [`LayoutError`] back. The render boundary in the facade crate is
//! responsible for catching that error; implementations just report it.

pub mod error;
pub mod traits;

pub use error::LayoutError;
pub use traits::LayoutEngine;
