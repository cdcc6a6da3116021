pub mod color;
pub mod geometry;
pub mod locale;

pub use color::Color;
pub use geometry::{Margins, PageLayout, PageSize};
pub use locale::Locale;
