//! Intermediate Document Format (IDF)
//!
//! The in-memory representation of a report between markdown parsing and
//! layout. A [`Document`] is an ordered list of typed [`Block`]s plus the
//! request metadata; every text-bearing block holds styled spans rather
//! than raw markdown.

use acreage_style::BlockKind;
use acreage_types::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    #[default]
    Plain,
    Bold,
    Italic,
}

/// A run of text tagged with one emphasis style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub emphasis: Emphasis,
}

impl StyledSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), emphasis: Emphasis::Plain }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self { text: text.into(), emphasis: Emphasis::Bold }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self { text: text.into(), emphasis: Emphasis::Italic }
    }
}

/// Flattens spans back to their unstyled text.
pub fn plain_text(spans: &[StyledSpan]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}

/// One table cell: an ordered sequence of styled spans.
pub type Cell = Vec<StyledSpan>;

#[derive(Debug, Clone, PartialEq)]
pub struct TableBlock {
    /// The single header row. Always present; spans are forced bold by
    /// the accumulator.
    pub header: Vec<Cell>,
    pub rows: Vec<Vec<Cell>>,
    /// Column width hint for the layout engine, as fractions of the
    /// available width. Sums to 1.
    pub column_fractions: Vec<f32>,
}

impl TableBlock {
    /// The width split consumed by the layout engine: a two-column table
    /// gets a 35%/65% split, anything else divides evenly.
    pub fn width_hint(columns: usize) -> Vec<f32> {
        match columns {
            0 => Vec::new(),
            2 => vec![0.35, 0.65],
            n => vec![1.0 / n as f32; n],
        }
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }
}

/// One structurally-classified unit of report content. Ordering within a
/// [`Document`] is significant and preserved from the input.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading { level: u8, spans: Vec<StyledSpan> },
    Paragraph(Vec<StyledSpan>),
    BulletItem(Vec<StyledSpan>),
    NumberedItem { marker: String, spans: Vec<StyledSpan> },
    Table(TableBlock),
    Disclaimer(Vec<StyledSpan>),
    /// Monospace verbatim text. Not produced by the markdown parser;
    /// used by the fallback document for the failure trace.
    Preformatted(String),
}

impl Block {
    /// The style table key for this block. Tables carry two kinds (header
    /// and cell); this returns the cell kind, the layout engine looks up
    /// the header kind itself.
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Heading { level: 1, .. } => BlockKind::Heading1,
            Block::Heading { level: 2, .. } => BlockKind::Heading2,
            Block::Heading { .. } => BlockKind::Heading3,
            Block::Paragraph(_) => BlockKind::Paragraph,
            Block::BulletItem(_) => BlockKind::BulletItem,
            Block::NumberedItem { .. } => BlockKind::NumberedItem,
            Block::Table(_) => BlockKind::TableCell,
            Block::Disclaimer(_) => BlockKind::Disclaimer,
            Block::Preformatted(_) => BlockKind::Preformatted,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentMeta {
    pub prepared_for: String,
    pub location: String,
    pub locale: Locale,
}

/// An ordered sequence of blocks plus request metadata. Built once per
/// render call, consumed once by the layout engine, then discarded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub meta: DocumentMeta,
    pub blocks: Vec<Block>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_column_width_hint_is_uneven() {
        assert_eq!(TableBlock::width_hint(2), vec![0.35, 0.65]);
    }

    #[test]
    fn other_widths_split_evenly() {
        let hint = TableBlock::width_hint(4);
        assert_eq!(hint.len(), 4);
        for f in hint {
            assert!((f - 0.25).abs() < 1e-6);
        }
    }

    #[test]
    fn heading_levels_map_to_kinds() {
        let spans = vec![StyledSpan::plain("x")];
        assert_eq!(Block::Heading { level: 1, spans: spans.clone() }.kind(), BlockKind::Heading1);
        assert_eq!(Block::Heading { level: 2, spans: spans.clone() }.kind(), BlockKind::Heading2);
        assert_eq!(Block::Heading { level: 3, spans }.kind(), BlockKind::Heading3);
    }
}
