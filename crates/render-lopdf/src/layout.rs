//! Cursor-based pagination: turns the block stream into positioned text
//! lines and rectangles per page. Widths are estimated with a flat
//! per-character approximation, which is coarse but stable and keeps the
//! pass free of font-file access.

use acreage_idf::{Block, Cell, Document, Emphasis, StyledSpan, TableBlock};
use acreage_style::{BlockKind, BlockStyle, FontStyle, FontWeight, StyleRegistry};
use acreage_types::{Color, Locale, PageLayout};

/// Rough advance width of one character, as a fraction of the font size.
const CHAR_WIDTH_FACTOR: f32 = 0.6;

pub(crate) fn char_width(font_size: f32) -> f32 {
    font_size * CHAR_WIDTH_FACTOR
}

/// How a run of text on a laid-out line is painted.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TextPaint {
    pub family: String,
    pub size: f32,
    pub color: Color,
    pub bold: bool,
    pub italic: bool,
}

impl TextPaint {
    fn of(style: &BlockStyle) -> Self {
        Self {
            family: style.font_family.clone(),
            size: style.font_size,
            color: style.color,
            bold: style.font_weight == FontWeight::Bold,
            italic: style.font_style == FontStyle::Italic,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Fragment {
    pub text: String,
    pub emphasis: Emphasis,
}

#[derive(Debug, Clone)]
pub(crate) struct LaidLine {
    pub x: f32,
    /// Top of the line, measured from the page top.
    pub y: f32,
    pub paint: TextPaint,
    pub fragments: Vec<Fragment>,
}

#[derive(Debug, Clone)]
pub(crate) struct LaidRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: Option<Color>,
    pub stroke: Option<(f32, Color)>,
}

#[derive(Debug, Clone)]
pub(crate) enum LaidElement {
    Text(LaidLine),
    Rect(LaidRect),
}

#[derive(Debug, Default)]
pub(crate) struct LaidPage {
    pub elements: Vec<LaidElement>,
}

/// One layout invocation. All cursor state is call-scoped.
pub(crate) struct LayoutPass<'a> {
    styles: &'a StyleRegistry,
    locale: Locale,
    page: &'a PageLayout,
    pages: Vec<LaidPage>,
    y: f32,
}

impl<'a> LayoutPass<'a> {
    pub(crate) fn new(styles: &'a StyleRegistry, locale: Locale, page: &'a PageLayout) -> Self {
        Self {
            styles,
            locale,
            page,
            pages: vec![LaidPage::default()],
            y: page.margins.top,
        }
    }

    pub(crate) fn run(mut self, document: &Document) -> Vec<LaidPage> {
        for block in &document.blocks {
            match block {
                Block::Heading { spans, .. } => self.flow_text(block.kind(), spans, None),
                Block::Paragraph(spans) => self.flow_text(block.kind(), spans, None),
                Block::BulletItem(spans) => self.flow_text(block.kind(), spans, Some("\u{2022}")),
                Block::NumberedItem { marker, spans } => {
                    self.flow_text(block.kind(), spans, Some(marker))
                }
                Block::Disclaimer(spans) => self.flow_disclaimer(spans),
                Block::Preformatted(text) => self.flow_preformatted(text),
                Block::Table(table) => self.flow_table(table),
            }
        }
        self.pages
    }

    fn style(&self, kind: BlockKind) -> &BlockStyle {
        self.styles.style(kind, self.locale)
    }

    fn bottom_limit(&self) -> f32 {
        self.page.size.height_pt() - self.page.margins.bottom
    }

    fn new_page(&mut self) {
        self.pages.push(LaidPage::default());
        self.y = self.page.margins.top;
    }

    fn page_is_pristine(&self) -> bool {
        self.pages
            .last()
            .map(|p| p.elements.is_empty())
            .unwrap_or(true)
    }

    /// Break the page if `height` does not fit, unless the current page
    /// is still empty (an oversized block renders where it is rather
    /// than looping on page breaks).
    fn reserve(&mut self, height: f32) {
        if self.y + height > self.bottom_limit() && !self.page_is_pristine() {
            self.new_page();
        }
    }

    fn push(&mut self, element: LaidElement) {
        if let Some(page) = self.pages.last_mut() {
            page.elements.push(element);
        }
    }

    /// Lay out a plain text block line by line, breaking pages between
    /// lines. A list marker becomes the leading fragment of the first
    /// line.
    fn flow_text(&mut self, kind: BlockKind, spans: &[StyledSpan], marker: Option<&str>) {
        let style = self.style(kind).clone();
        let x = self.page.margins.left + style.indent;
        let max_width = (self.page.content_width() - style.indent).max(char_width(style.font_size));
        let lines = wrap_spans(spans, marker, style.font_size, max_width);

        self.y += style.space_before;
        let paint = TextPaint::of(&style);
        for fragments in lines {
            self.reserve(style.line_height);
            self.push(LaidElement::Text(LaidLine {
                x,
                y: self.y,
                paint: paint.clone(),
                fragments,
            }));
            self.y += style.line_height;
        }
        self.y += style.space_after;
    }

    /// The disclaimer renders inside a bordered box and never splits
    /// across pages.
    fn flow_disclaimer(&mut self, spans: &[StyledSpan]) {
        let style = self.style(BlockKind::Disclaimer).clone();
        let box_width = self.page.content_width();
        let text_width = (box_width - 2.0 * style.padding).max(char_width(style.font_size));
        let lines = wrap_spans(spans, None, style.font_size, text_width);
        let box_height = lines.len() as f32 * style.line_height + 2.0 * style.padding;

        self.reserve(style.space_before + box_height);
        self.y += style.space_before;

        if let Some(border) = style.border {
            self.push(LaidElement::Rect(LaidRect {
                x: self.page.margins.left,
                y: self.y,
                width: box_width,
                height: box_height,
                fill: None,
                stroke: Some((border.width, border.color)),
            }));
        }

        let paint = TextPaint::of(&style);
        let mut line_y = self.y + style.padding;
        for fragments in lines {
            self.push(LaidElement::Text(LaidLine {
                x: self.page.margins.left + style.padding,
                y: line_y,
                paint: paint.clone(),
                fragments,
            }));
            line_y += style.line_height;
        }
        self.y += box_height + style.space_after;
    }

    fn flow_preformatted(&mut self, text: &str) {
        let style = self.style(BlockKind::Preformatted).clone();
        let x = self.page.margins.left + style.indent;
        let max_width = (self.page.content_width() - style.indent).max(char_width(style.font_size));
        let paint = TextPaint::of(&style);

        self.y += style.space_before;
        for raw_line in text.lines() {
            let spans = [StyledSpan::plain(raw_line)];
            let wrapped = wrap_spans(&spans, None, style.font_size, max_width);
            if wrapped.is_empty() {
                // Keep blank source lines as vertical space.
                self.y += style.line_height;
                continue;
            }
            for fragments in wrapped {
                self.reserve(style.line_height);
                self.push(LaidElement::Text(LaidLine {
                    x,
                    y: self.y,
                    paint: paint.clone(),
                    fragments,
                }));
                self.y += style.line_height;
            }
        }
        self.y += style.space_after;
    }

    /// Tables render as a measured grid. The whole table moves to the
    /// next page when it does not fit; splitting a table across pages is
    /// not supported.
    fn flow_table(&mut self, table: &TableBlock) {
        let columns = table.column_count();
        if columns == 0 {
            return;
        }
        let header_style = self.style(BlockKind::TableHeader).clone();
        let cell_style = self.style(BlockKind::TableCell).clone();
        let total_width = self.page.content_width();
        let col_widths: Vec<f32> = table
            .column_fractions
            .iter()
            .map(|f| f * total_width)
            .collect();

        // Wrap every cell up front so row heights are known before any
        // page-break decision.
        let header_lines = wrap_row(&table.header, &header_style, &col_widths);
        let body_lines: Vec<Vec<Vec<Vec<Fragment>>>> = table
            .rows
            .iter()
            .map(|row| wrap_row(row, &cell_style, &col_widths))
            .collect();

        let header_height = row_height(&header_lines, &header_style);
        let body_heights: Vec<f32> = body_lines
            .iter()
            .map(|r| row_height(r, &cell_style))
            .collect();
        let table_height: f32 = header_height + body_heights.iter().sum::<f32>();

        self.reserve(table_height);
        let x0 = self.page.margins.left;
        let top = self.y;

        if let Some(bg) = header_style.background {
            self.push(LaidElement::Rect(LaidRect {
                x: x0,
                y: top,
                width: total_width,
                height: header_height,
                fill: Some(bg),
                stroke: None,
            }));
        }

        self.emit_row(&header_lines, &header_style, &col_widths, self.y, header_height);
        let mut row_top = top + header_height;
        for (lines, height) in body_lines.iter().zip(&body_heights) {
            self.emit_row(lines, &cell_style, &col_widths, row_top, *height);
            row_top += height;
        }

        // The grid goes on top of backgrounds and text.
        if let Some(border) = cell_style.border {
            self.emit_grid(
                x0,
                top,
                &col_widths,
                header_height,
                &body_heights,
                border.width,
                border.color,
            );
        }

        self.y = top + table_height + cell_style.space_after.max(7.0);
    }

    fn emit_row(
        &mut self,
        cells: &[Vec<Vec<Fragment>>],
        style: &BlockStyle,
        col_widths: &[f32],
        row_top: f32,
        _row_height: f32,
    ) {
        let paint = TextPaint::of(style);
        let mut cell_x = self.page.margins.left;
        for (column, lines) in cells.iter().enumerate() {
            let mut line_y = row_top + style.padding;
            for fragments in lines {
                self.push(LaidElement::Text(LaidLine {
                    x: cell_x + style.padding,
                    y: line_y,
                    paint: paint.clone(),
                    fragments: fragments.clone(),
                }));
                line_y += style.line_height;
            }
            cell_x += col_widths.get(column).copied().unwrap_or(0.0);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn emit_grid(
        &mut self,
        x0: f32,
        top: f32,
        col_widths: &[f32],
        header_height: f32,
        body_heights: &[f32],
        width: f32,
        color: Color,
    ) {
        let total_width: f32 = col_widths.iter().sum();
        let total_height: f32 = header_height + body_heights.iter().sum::<f32>();
        let stroke = Some((width, color));

        // Horizontal rules: table top, after the header, after each row.
        let mut y = top;
        for h in std::iter::once(&header_height).chain(body_heights) {
            self.push(hairline(x0, y, total_width, stroke));
            y += h;
        }
        self.push(hairline(x0, y, total_width, stroke));

        // Vertical rules as thin rects.
        let mut x = x0;
        for w in col_widths.iter().chain(std::iter::once(&0.0)) {
            self.push(LaidElement::Rect(LaidRect {
                x,
                y: top,
                width: 0.0,
                height: total_height,
                fill: None,
                stroke,
            }));
            x += w;
        }
    }
}

fn hairline(x: f32, y: f32, width: f32, stroke: Option<(f32, Color)>) -> LaidElement {
    LaidElement::Rect(LaidRect { x, y, width, height: 0.0, fill: None, stroke })
}

fn row_height(cells: &[Vec<Vec<Fragment>>], style: &BlockStyle) -> f32 {
    let max_lines = cells.iter().map(Vec::len).max().unwrap_or(0).max(1);
    max_lines as f32 * style.line_height + 2.0 * style.padding
}

fn wrap_row(row: &[Cell], style: &BlockStyle, col_widths: &[f32]) -> Vec<Vec<Vec<Fragment>>> {
    row.iter()
        .enumerate()
        .map(|(i, cell)| {
            let width = col_widths.get(i).copied().unwrap_or(0.0);
            let text_width = (width - 2.0 * style.padding).max(char_width(style.font_size));
            wrap_spans(cell, None, style.font_size, text_width)
        })
        .collect()
}

/// Greedy word wrap over styled spans. Returns lines of fragments with
/// emphasis preserved; words from adjacent spans are separated by a
/// single space. An optional marker is prepended as the first word.
pub(crate) fn wrap_spans(
    spans: &[StyledSpan],
    marker: Option<&str>,
    font_size: f32,
    max_width: f32,
) -> Vec<Vec<Fragment>> {
    let cw = char_width(font_size);
    let mut words: Vec<(&str, Emphasis)> = Vec::new();
    if let Some(m) = marker {
        words.push((m, Emphasis::Plain));
    }
    for span in spans {
        for word in span.text.split_whitespace() {
            words.push((word, span.emphasis));
        }
    }

    let mut lines: Vec<Vec<Fragment>> = Vec::new();
    let mut line: Vec<Fragment> = Vec::new();
    let mut line_chars = 0usize;

    for (word, emphasis) in words {
        let word_chars = word.chars().count();
        let needed = if line_chars == 0 { word_chars } else { line_chars + 1 + word_chars };
        if line_chars > 0 && needed as f32 * cw > max_width {
            lines.push(std::mem::take(&mut line));
            line_chars = 0;
        }

        match line.last_mut() {
            Some(last) if last.emphasis == emphasis => {
                last.text.push(' ');
                last.text.push_str(word);
            }
            Some(last) => {
                last.text.push(' ');
                line.push(Fragment { text: word.to_string(), emphasis });
            }
            None => line.push(Fragment { text: word.to_string(), emphasis }),
        }
        line_chars = if line_chars == 0 { word_chars } else { line_chars + 1 + word_chars };
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Estimated width of a fragment in points; the writer uses the same
/// approximation to advance between fragments.
pub(crate) fn fragment_width(fragment: &Fragment, font_size: f32) -> f32 {
    fragment.text.chars().count() as f32 * char_width(font_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> Vec<StyledSpan> {
        vec![StyledSpan::plain(text)]
    }

    #[test]
    fn short_text_stays_on_one_line() {
        let lines = wrap_spans(&plain("hello world"), None, 10.0, 500.0);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0][0].text, "hello world");
    }

    #[test]
    fn long_text_wraps_greedily() {
        let text = "alpha beta gamma delta epsilon zeta eta theta";
        // ~10 chars per line at size 10 (char width 6pt, 60pt available).
        let lines = wrap_spans(&plain(text), None, 10.0, 60.0);
        assert!(lines.len() > 2);
        for line in &lines {
            let chars: usize = line.iter().map(|f| f.text.chars().count()).sum();
            assert!(chars <= 10, "line too long: {line:?}");
        }
    }

    #[test]
    fn emphasis_boundaries_become_fragments() {
        let spans = vec![
            StyledSpan::bold("bold"),
            StyledSpan::plain("and"),
            StyledSpan::italic("italic"),
        ];
        let lines = wrap_spans(&spans, None, 10.0, 500.0);
        assert_eq!(lines.len(), 1);
        let emphases: Vec<Emphasis> = lines[0].iter().map(|f| f.emphasis).collect();
        assert_eq!(emphases, vec![Emphasis::Bold, Emphasis::Plain, Emphasis::Italic]);
    }

    #[test]
    fn marker_leads_the_first_line() {
        let lines = wrap_spans(&plain("item text"), Some("3."), 10.0, 500.0);
        assert!(lines[0][0].text.starts_with("3. "));
    }

    #[test]
    fn empty_spans_produce_no_lines() {
        assert!(wrap_spans(&[], None, 10.0, 500.0).is_empty());
    }

    #[test]
    fn single_oversized_word_is_not_dropped() {
        let lines = wrap_spans(&plain("supercalifragilistic"), None, 10.0, 12.0);
        assert_eq!(lines.len(), 1);
    }
}
