pub mod catalog;
pub mod font;
pub mod registry;

pub use catalog::{FamilyQuery, FontCatalog, BuiltinCatalog, BASE_FAMILY, DEVANAGARI_FAMILY, MONO_FAMILY};
#[cfg(feature = "system-fonts")]
pub use catalog::SystemCatalog;
pub use font::{FontStyle, FontWeight};
pub use registry::{BlockKind, BlockStyle, Border, StyleRegistry};
