//! Table accumulation: buffers consecutive table-row events and turns
//! them into a finished table block.

use crate::inline::parse_spans;
use acreage_idf::{Block, Cell, Emphasis, StyledSpan, TableBlock};
use itertools::Itertools;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Scanning,
    InTable,
}

/// A two-state machine over the line-event stream. Rows buffer as raw
/// cell strings until a non-table event (or end of input) finalizes the
/// table; the triggering event is not consumed and must be reprocessed
/// by the caller. All state is call-scoped.
#[derive(Debug)]
pub struct TableAccumulator {
    state: State,
    rows: Vec<Vec<String>>,
}

impl Default for TableAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl TableAccumulator {
    pub fn new() -> Self {
        Self { state: State::Scanning, rows: Vec::new() }
    }

    /// Feed a data row.
    pub fn row(&mut self, cells: Vec<String>) {
        if self.state == State::Scanning {
            self.state = State::InTable;
            self.rows.clear();
        }
        self.rows.push(cells);
    }

    /// Feed a separator row. Separators carry no data and do not close
    /// the table; they only keep it open.
    pub fn separator(&mut self) {
        if self.state == State::Scanning {
            self.state = State::InTable;
            self.rows.clear();
        }
    }

    /// Finalize the buffered rows into blocks and return to `Scanning`.
    ///
    /// The first buffered row becomes the header with every span forced
    /// bold. A structural problem (row arity differing from the header)
    /// degrades the whole buffer to one paragraph per row, cells joined
    /// with `" | "`, so the rest of the document is unaffected.
    pub fn finish(&mut self) -> Vec<Block> {
        if self.state == State::Scanning {
            return Vec::new();
        }
        self.state = State::Scanning;
        let rows = std::mem::take(&mut self.rows);
        if rows.is_empty() {
            return Vec::new();
        }

        let columns = rows[0].len();
        if let Some(bad) = rows.iter().find(|r| r.len() != columns) {
            log::warn!(
                "malformed table: header has {} cells but a row has {}; degrading {} row(s) to paragraphs",
                columns,
                bad.len(),
                rows.len()
            );
            return degrade_to_paragraphs(rows);
        }

        let mut iter = rows.into_iter();
        let header: Vec<Cell> = iter
            .next()
            .map(|cells| cells.iter().map(|c| bold_cell(c)).collect())
            .unwrap_or_default();
        let body: Vec<Vec<Cell>> = iter
            .map(|cells| cells.iter().map(|c| parse_spans(c)).collect())
            .collect();

        vec![Block::Table(TableBlock {
            header,
            rows: body,
            column_fractions: TableBlock::width_hint(columns),
        })]
    }
}

/// Emphasis markers in the header still get consumed, but every span is
/// rendered bold regardless of what they said.
fn bold_cell(text: &str) -> Cell {
    parse_spans(text)
        .into_iter()
        .map(|span| StyledSpan { emphasis: Emphasis::Bold, ..span })
        .collect()
}

fn degrade_to_paragraphs(rows: Vec<Vec<String>>) -> Vec<Block> {
    rows.into_iter()
        .map(|cells| Block::Paragraph(parse_spans(&cells.iter().join(" | "))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use acreage_idf::plain_text;

    fn cells(row: &[&str]) -> Vec<String> {
        row.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_accumulator_emits_nothing() {
        let mut acc = TableAccumulator::new();
        assert!(acc.finish().is_empty());
    }

    #[test]
    fn separator_only_table_emits_nothing() {
        let mut acc = TableAccumulator::new();
        acc.separator();
        assert!(acc.finish().is_empty());
    }

    #[test]
    fn first_row_becomes_bold_header() {
        let mut acc = TableAccumulator::new();
        acc.row(cells(&["Detail", "**Breakdown**"]));
        acc.row(cells(&["Business Model", "Roadside cafe"]));
        let blocks = acc.finish();
        assert_eq!(blocks.len(), 1);
        let Block::Table(table) = &blocks[0] else {
            panic!("expected table block, got {:?}", blocks[0]);
        };
        assert_eq!(table.rows.len(), 1);
        for cell in &table.header {
            for span in cell {
                assert_eq!(span.emphasis, Emphasis::Bold);
            }
        }
        assert_eq!(plain_text(&table.header[1]), "Breakdown");
    }

    #[test]
    fn separators_contribute_zero_rows() {
        let mut acc = TableAccumulator::new();
        acc.row(cells(&["a", "b"]));
        acc.separator();
        acc.row(cells(&["1", "2"]));
        acc.row(cells(&["3", "4"]));
        let blocks = acc.finish();
        let Block::Table(table) = &blocks[0] else { panic!() };
        // 4 input rows incl. separator -> header + 2 data rows.
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn two_columns_get_uneven_split() {
        let mut acc = TableAccumulator::new();
        acc.row(cells(&["k", "v"]));
        acc.row(cells(&["a", "b"]));
        let Block::Table(table) = &acc.finish()[0] else { panic!() };
        assert_eq!(table.column_fractions, vec![0.35, 0.65]);
    }

    #[test]
    fn three_columns_split_evenly() {
        let mut acc = TableAccumulator::new();
        acc.row(cells(&["a", "b", "c"]));
        let Block::Table(table) = &acc.finish()[0] else { panic!() };
        assert_eq!(table.column_fractions.len(), 3);
    }

    #[test]
    fn arity_mismatch_degrades_to_paragraphs() {
        let mut acc = TableAccumulator::new();
        acc.row(cells(&["a", "b"]));
        acc.row(cells(&["1", "2", "3"]));
        let blocks = acc.finish();
        assert_eq!(blocks.len(), 2);
        let Block::Paragraph(spans) = &blocks[1] else {
            panic!("expected degraded paragraph, got {:?}", blocks[1]);
        };
        assert_eq!(plain_text(spans), "1 | 2 | 3");
    }

    #[test]
    fn accumulator_resets_after_finish() {
        let mut acc = TableAccumulator::new();
        acc.row(cells(&["a"]));
        assert_eq!(acc.finish().len(), 1);
        assert!(acc.finish().is_empty());
        acc.row(cells(&["b"]));
        assert_eq!(acc.finish().len(), 1);
    }
}
