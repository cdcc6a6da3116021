//! Block assembly: the full pass from raw text to an ordered block list.

use crate::inline::parse_spans;
use crate::line::{classify, LineEvent};
use crate::table::TableAccumulator;
use acreage_idf::Block;
use acreage_types::Locale;

/// Assemble the markdown text into blocks, in input order.
///
/// Blank lines are skipped and in particular do not close an open table
/// (the model routinely blank-pads its tables). After the pass, if no
/// disclaimer block exists anywhere in the output, the locale-default
/// disclaimer is appended as the final block - a report always ends
/// with one.
pub fn assemble_blocks(markdown: &str, locale: Locale) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut table = TableAccumulator::new();

    for raw in markdown.lines() {
        match classify(raw) {
            LineEvent::Blank => continue,
            LineEvent::TableRow(cells) => table.row(cells),
            LineEvent::TableSeparator => table.separator(),
            event => {
                // A non-table event finalizes any open table first, then
                // is processed normally.
                blocks.extend(table.finish());
                blocks.push(block_for(event));
            }
        }
    }
    blocks.extend(table.finish());

    let has_disclaimer = blocks.iter().any(|b| matches!(b, Block::Disclaimer(_)));
    if !has_disclaimer {
        log::debug!("no disclaimer in model output; appending the {locale} default");
        blocks.push(Block::Disclaimer(parse_spans(locale.default_disclaimer())));
    }

    blocks
}

fn block_for(event: LineEvent) -> Block {
    match event {
        LineEvent::Heading { level, text } => {
            Block::Heading { level, spans: parse_spans(&text) }
        }
        LineEvent::Bullet(text) => Block::BulletItem(parse_spans(&text)),
        LineEvent::Numbered { marker, text } => {
            Block::NumberedItem { marker, spans: parse_spans(&text) }
        }
        LineEvent::Disclaimer(text) => Block::Disclaimer(parse_spans(&text)),
        LineEvent::Plain(text) => Block::Paragraph(parse_spans(&text)),
        // Handled by the caller's match arms above.
        LineEvent::Blank | LineEvent::TableRow(_) | LineEvent::TableSeparator => {
            unreachable!("table and blank events never reach block_for")
        }
    }
}
