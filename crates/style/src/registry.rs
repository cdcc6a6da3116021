//! The locale- and kind-indexed style table.
//!
//! Built once at process start from a [`FontCatalog`] query and never
//! mutated afterwards, so concurrent renders can share it freely.

use crate::catalog::{FontCatalog, BASE_FAMILY, DEVANAGARI_FAMILY, MONO_FAMILY};
use crate::font::{FontStyle, FontWeight};
use acreage_types::{Color, Locale};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockKind {
    Heading1,
    Heading2,
    Heading3,
    Paragraph,
    BulletItem,
    NumberedItem,
    TableCell,
    TableHeader,
    Disclaimer,
    Preformatted,
}

impl BlockKind {
    pub const ALL: [BlockKind; 10] = [
        BlockKind::Heading1,
        BlockKind::Heading2,
        BlockKind::Heading3,
        BlockKind::Paragraph,
        BlockKind::BulletItem,
        BlockKind::NumberedItem,
        BlockKind::TableCell,
        BlockKind::TableHeader,
        BlockKind::Disclaimer,
        BlockKind::Preformatted,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

/// The resolved visual style for one block kind in one locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockStyle {
    pub font_family: String,
    pub font_size: f32,
    pub line_height: f32,
    pub color: Color,
    pub space_before: f32,
    pub space_after: f32,
    pub indent: f32,
    pub padding: f32,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub background: Option<Color>,
    pub border: Option<Border>,
}

impl Default for BlockStyle {
    fn default() -> Self {
        Self {
            font_family: BASE_FAMILY.to_string(),
            font_size: 10.0,
            line_height: 14.0,
            color: Color::default(),
            space_before: 0.0,
            space_after: 6.0,
            indent: 0.0,
            padding: 0.0,
            font_weight: FontWeight::Regular,
            font_style: FontStyle::Normal,
            background: None,
            border: None,
        }
    }
}

/// Immutable (BlockKind, Locale) -> style table, plus the text font
/// family chosen per locale.
#[derive(Debug)]
pub struct StyleRegistry {
    styles: HashMap<(BlockKind, Locale), BlockStyle>,
    families: HashMap<Locale, String>,
    fallback: BlockStyle,
}

impl StyleRegistry {
    /// Construct the registry from the font availability query.
    ///
    /// A script locale whose family is missing any of the three weights
    /// falls back to the base family as a whole: fidelity of the script
    /// is lost but every block still renders.
    pub fn build(catalog: &dyn FontCatalog) -> Self {
        let mut families = HashMap::new();
        for locale in Locale::ALL {
            families.insert(locale, Self::resolve_family(catalog, locale));
        }

        let mut styles = HashMap::new();
        for locale in Locale::ALL {
            let family = families[&locale].clone();
            for kind in BlockKind::ALL {
                styles.insert((kind, locale), Self::style_for(kind, &family));
            }
        }

        Self { styles, families, fallback: BlockStyle::default() }
    }

    fn resolve_family(catalog: &dyn FontCatalog, locale: Locale) -> String {
        if !locale.needs_script_font() {
            return BASE_FAMILY.to_string();
        }
        let query = catalog.query_family(DEVANAGARI_FAMILY);
        if query.has_all_weights() {
            query.family
        } else {
            log::warn!(
                "font family '{}' is not fully registered (available: {}, regular: {}, bold: {}, italic: {}); \
                 falling back to '{}' for locale {}",
                DEVANAGARI_FAMILY,
                query.available,
                query.regular,
                query.bold,
                query.italic,
                BASE_FAMILY,
                locale,
            );
            BASE_FAMILY.to_string()
        }
    }

    fn style_for(kind: BlockKind, family: &str) -> BlockStyle {
        let base = BlockStyle { font_family: family.to_string(), ..BlockStyle::default() };
        let accent = |hex: &str| Color::from_hex(hex).unwrap_or_default();

        match kind {
            BlockKind::Heading1 => BlockStyle {
                font_size: 18.0,
                line_height: 21.6,
                space_after: 12.0,
                color: accent("#2C3E50"),
                font_weight: FontWeight::Bold,
                ..base
            },
            BlockKind::Heading2 => BlockStyle {
                font_size: 14.0,
                line_height: 16.8,
                space_after: 10.0,
                color: accent("#16a085"),
                font_weight: FontWeight::Bold,
                ..base
            },
            BlockKind::Heading3 => BlockStyle {
                font_size: 12.0,
                line_height: 14.4,
                space_after: 8.0,
                color: accent("#34495e"),
                font_weight: FontWeight::Bold,
                ..base
            },
            BlockKind::Paragraph => base,
            BlockKind::BulletItem | BlockKind::NumberedItem => BlockStyle {
                space_after: 4.0,
                indent: 20.0,
                ..base
            },
            BlockKind::TableCell => BlockStyle {
                font_size: 9.0,
                line_height: 11.0,
                space_after: 0.0,
                padding: 6.0,
                border: Some(Border { width: 1.0, color: accent("#bdc3c7") }),
                ..base
            },
            BlockKind::TableHeader => BlockStyle {
                font_size: 10.0,
                line_height: 12.0,
                space_after: 0.0,
                padding: 6.0,
                color: accent("#2c3e50"),
                font_weight: FontWeight::Bold,
                background: Some(accent("#ecf0f1")),
                border: Some(Border { width: 1.0, color: accent("#bdc3c7") }),
                ..base
            },
            BlockKind::Disclaimer => BlockStyle {
                font_size: 9.0,
                line_height: 11.0,
                space_before: 12.0,
                padding: 10.0,
                color: Color::gray(128),
                font_style: FontStyle::Italic,
                border: Some(Border { width: 1.0, color: Color::gray(211) }),
                ..base
            },
            BlockKind::Preformatted => BlockStyle {
                font_family: MONO_FAMILY.to_string(),
                font_size: 9.0,
                line_height: 11.0,
                indent: 10.0,
                color: Color::gray(90),
                ..base
            },
        }
    }

    pub fn style(&self, kind: BlockKind, locale: Locale) -> &BlockStyle {
        self.styles.get(&(kind, locale)).unwrap_or(&self.fallback)
    }

    /// The text font family serving this locale after fallback.
    pub fn family(&self, locale: Locale) -> &str {
        self.families
            .get(&locale)
            .map(String::as_str)
            .unwrap_or(BASE_FAMILY)
    }
}
