//! PDF serialization: turns laid-out pages into content streams and a
//! page tree, using the base-14 Type1 fonts with WinAnsi encoding.

use crate::layout::{fragment_width, LaidElement, LaidLine, LaidPage, LaidRect, TextPaint};
use acreage_idf::Emphasis;
use acreage_render_core::LayoutError;
use acreage_types::{Color, PageLayout};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};
use std::io::Cursor;

/// Internal resource name -> base-14 font, registered on every page.
const FONTS: [(&str, &str); 5] = [
    ("F1", "Helvetica"),
    ("F2", "Helvetica-Bold"),
    ("F3", "Helvetica-Oblique"),
    ("F4", "Helvetica-BoldOblique"),
    ("F5", "Courier"),
];

pub(crate) fn write_pdf(pages: &[LaidPage], page: &PageLayout) -> Result<Vec<u8>, LayoutError> {
    let width = page.size.width_pt();
    let height = page.size.height_pt();

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut font_dict = Dictionary::new();
    for (resource, base_font) in FONTS {
        let entry = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => base_font,
            "Encoding" => "WinAnsiEncoding",
        };
        font_dict.set(resource.as_bytes(), Object::Dictionary(entry));
    }
    let resources_id = doc.add_object(dictionary! { "Font" => Object::Dictionary(font_dict) });

    // A document always has at least one page, even when nothing was laid out.
    let mut page_ids = Vec::with_capacity(pages.len().max(1));
    let empty = [LaidPage::default()];
    let laid_pages: &[LaidPage] = if pages.is_empty() { &empty } else { pages };

    for laid in laid_pages {
        let content = page_content(laid, height);
        let encoded = content
            .encode()
            .map_err(|e| LayoutError::Pdf(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        page_ids.push(page_id);
    }

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<_>>(),
        "Count" => page_ids.len() as i64,
        "Resources" => resources_id,
        "MediaBox" => vec![0f32.into(), 0f32.into(), width.into(), height.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut cursor = Cursor::new(Vec::new());
    doc.save_to(&mut cursor)
        .map_err(|e| LayoutError::Pdf(e.to_string()))?;
    Ok(cursor.into_inner())
}

fn page_content(page: &LaidPage, page_height: f32) -> Content {
    let mut operations = Vec::new();
    for element in &page.elements {
        match element {
            LaidElement::Rect(rect) => rect_ops(&mut operations, rect, page_height),
            LaidElement::Text(line) => text_ops(&mut operations, line, page_height),
        }
    }
    Content { operations }
}

fn rect_ops(ops: &mut Vec<Operation>, rect: &LaidRect, page_height: f32) {
    // PDF y grows upward; laid-out y is measured from the page top.
    let y = page_height - rect.y - rect.height;

    if let Some(fill) = rect.fill {
        let (r, g, b) = rgb(fill);
        ops.push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
        ops.push(Operation::new(
            "re",
            vec![rect.x.into(), y.into(), rect.width.into(), rect.height.into()],
        ));
        ops.push(Operation::new("f", vec![]));
    }
    if let Some((line_width, color)) = rect.stroke {
        let (r, g, b) = rgb(color);
        ops.push(Operation::new("RG", vec![r.into(), g.into(), b.into()]));
        ops.push(Operation::new("w", vec![line_width.into()]));
        ops.push(Operation::new(
            "re",
            vec![rect.x.into(), y.into(), rect.width.into(), rect.height.into()],
        ));
        ops.push(Operation::new("S", vec![]));
    }
}

fn text_ops(ops: &mut Vec<Operation>, line: &LaidLine, page_height: f32) {
    // Baseline approximation: one em below the top of the line.
    let baseline = page_height - line.y - line.paint.size;
    let (r, g, b) = rgb(line.paint.color);

    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));

    let mut x = line.x;
    for fragment in &line.fragments {
        let font = resource_for(&line.paint, fragment.emphasis);
        ops.push(Operation::new("Tf", vec![font.into(), line.paint.size.into()]));
        ops.push(Operation::new(
            "Tm",
            vec![
                1f32.into(),
                0f32.into(),
                0f32.into(),
                1f32.into(),
                x.into(),
                baseline.into(),
            ],
        ));
        ops.push(Operation::new(
            "Tj",
            vec![Object::string_literal(encode_win_ansi(&fragment.text))],
        ));
        x += fragment_width(fragment, line.paint.size);
    }
    ops.push(Operation::new("ET", vec![]));
}

/// Picks the base-14 resource serving this paint and emphasis. Families
/// the writer cannot embed fall back to Helvetica.
fn resource_for(paint: &TextPaint, emphasis: Emphasis) -> &'static str {
    if paint.family == "Courier" {
        return "F5";
    }
    let bold = paint.bold || emphasis == Emphasis::Bold;
    let italic = paint.italic || emphasis == Emphasis::Italic;
    match (bold, italic) {
        (false, false) => "F1",
        (true, false) => "F2",
        (false, true) => "F3",
        (true, true) => "F4",
    }
}

/// WinAnsi (CP1252) encoding with a handful of typographic mappings.
/// Codepoints the encoding cannot express degrade to `?` - script
/// fidelity beyond Latin-1 requires embedded fonts, which base-14
/// output does not carry.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{2022}' => 0x95, // bullet
            '\u{2013}' => 0x96, // en dash
            '\u{2014}' => 0x97, // em dash
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2026}' => 0x85, // ellipsis
            c if (c as u32) <= 0xFF => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}

fn rgb(color: Color) -> (f32, f32, f32) {
    (
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_ansi_keeps_ascii() {
        assert_eq!(encode_win_ansi("Report 42"), b"Report 42".to_vec());
    }

    #[test]
    fn win_ansi_maps_bullet() {
        assert_eq!(encode_win_ansi("\u{2022}"), vec![0x95]);
    }

    #[test]
    fn win_ansi_degrades_devanagari() {
        assert_eq!(encode_win_ansi("\u{0905}"), vec![b'?']);
    }

    #[test]
    fn empty_layout_yields_valid_pdf() {
        let bytes = write_pdf(&[], &PageLayout::report_default()).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }
}
