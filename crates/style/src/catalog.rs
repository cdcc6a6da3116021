//! Font availability as a capability query.
//!
//! The engine never loads font files itself. It asks a [`FontCatalog`]
//! whether a family is registered with the weights it needs, and the
//! style registry picks families based on the answer. Two catalogs are
//! provided: [`BuiltinCatalog`] covers only the PDF base-14 families,
//! and [`SystemCatalog`] (feature `system-fonts`) answers from the
//! fontdb system database.

/// The universally available base family (PDF base-14).
pub const BASE_FAMILY: &str = "Helvetica";

/// The monospace family used for preformatted output (PDF base-14).
pub const MONO_FAMILY: &str = "Courier";

/// The family required for Devanagari-script locales.
pub const DEVANAGARI_FAMILY: &str = "Noto Sans Devanagari";

/// The answer to a family capability query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyQuery {
    pub family: String,
    pub available: bool,
    pub regular: bool,
    pub bold: bool,
    pub italic: bool,
}

impl FamilyQuery {
    pub fn unavailable(family: &str) -> Self {
        Self {
            family: family.to_string(),
            available: false,
            regular: false,
            bold: false,
            italic: false,
        }
    }

    pub fn complete(family: &str) -> Self {
        Self {
            family: family.to_string(),
            available: true,
            regular: true,
            bold: true,
            italic: true,
        }
    }

    /// True when the family can serve regular, bold and italic text.
    pub fn has_all_weights(&self) -> bool {
        self.available && self.regular && self.bold && self.italic
    }
}

/// A queryable view of the fonts registered at process start.
///
/// Implementations must be cheap to query; the registry consults the
/// catalog once per locale during construction and never again.
pub trait FontCatalog: Send + Sync {
    fn query_family(&self, family: &str) -> FamilyQuery;
}

/// Catalog over the PDF base-14 families only. Every base-14 family has
/// all weights by definition; everything else is unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinCatalog;

impl FontCatalog for BuiltinCatalog {
    fn query_family(&self, family: &str) -> FamilyQuery {
        let known = matches!(
            family,
            "Helvetica" | "Courier" | "Times" | "Times-Roman" | "Symbol" | "ZapfDingbats"
        );
        if known {
            FamilyQuery::complete(family)
        } else {
            FamilyQuery::unavailable(family)
        }
    }
}

#[cfg(feature = "system-fonts")]
pub use system::SystemCatalog;

#[cfg(feature = "system-fonts")]
mod system {
    use super::{FamilyQuery, FontCatalog, BuiltinCatalog};

    /// Catalog backed by the fontdb system font database, loaded once at
    /// construction. Base-14 families are always reported available even
    /// when no matching system file exists.
    pub struct SystemCatalog {
        db: fontdb::Database,
    }

    impl SystemCatalog {
        pub fn from_system() -> Self {
            let mut db = fontdb::Database::new();
            db.load_system_fonts();
            log::debug!("loaded {} system font faces", db.faces().count());
            Self { db }
        }
    }

    impl FontCatalog for SystemCatalog {
        fn query_family(&self, family: &str) -> FamilyQuery {
            let builtin = BuiltinCatalog.query_family(family);
            if builtin.available {
                return builtin;
            }

            let mut query = FamilyQuery::unavailable(family);
            let wanted = family.to_lowercase();
            for face in self.db.faces() {
                let matches = face
                    .families
                    .iter()
                    .any(|(name, _)| name.to_lowercase() == wanted);
                if !matches {
                    continue;
                }
                query.available = true;
                let bold = face.weight.0 >= 600;
                let italic = face.style != fontdb::Style::Normal;
                match (bold, italic) {
                    (false, false) => query.regular = true,
                    (true, false) => query.bold = true,
                    (false, true) => query.italic = true,
                    (true, true) => {}
                }
            }
            query
        }
    }
}
