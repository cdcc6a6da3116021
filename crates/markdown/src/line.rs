//! Line classification: one typed event per trimmed input line.

use acreage_types::Locale;

/// The classification of a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    Blank,
    Heading { level: u8, text: String },
    Bullet(String),
    Numbered { marker: String, text: String },
    TableRow(Vec<String>),
    TableSeparator,
    Disclaimer(String),
    Plain(String),
}

/// Classify one raw line. Rules apply first-match-wins, in this order:
/// table row, heading (deepest prefix first; the prefixes are disjoint
/// because of the required trailing space), bullet, numbered item,
/// disclaimer marker, plain. The input is trimmed before matching.
pub fn classify(raw: &str) -> LineEvent {
    let line = raw.trim();
    if line.is_empty() {
        return LineEvent::Blank;
    }

    if line.len() >= 2 && line.starts_with('|') && line.ends_with('|') {
        return classify_table_row(line);
    }

    if let Some(text) = line.strip_prefix("### ") {
        return LineEvent::Heading { level: 3, text: text.trim().to_string() };
    }
    if let Some(text) = line.strip_prefix("## ") {
        return LineEvent::Heading { level: 2, text: text.trim().to_string() };
    }
    if let Some(text) = line.strip_prefix("# ") {
        return LineEvent::Heading { level: 1, text: text.trim().to_string() };
    }

    if let Some(text) = line.strip_prefix("* ").or_else(|| line.strip_prefix("- ")) {
        return LineEvent::Bullet(text.trim().to_string());
    }

    if let Some(event) = classify_numbered(line) {
        return event;
    }

    if Locale::DISCLAIMER_MARKERS.iter().any(|m| line.starts_with(m)) {
        return LineEvent::Disclaimer(line.to_string());
    }

    LineEvent::Plain(line.to_string())
}

fn classify_table_row(line: &str) -> LineEvent {
    // Split on the delimiter and discard the empty leading/trailing
    // fields produced by the outer pipes.
    let fields: Vec<&str> = line.split('|').collect();
    let cells: Vec<String> = fields[1..fields.len() - 1]
        .iter()
        .map(|c| c.trim().to_string())
        .collect();

    let is_separator = cells.iter().all(|c| {
        c.chars().all(|ch| matches!(ch, '-' | ':' | ' '))
    });
    if is_separator {
        LineEvent::TableSeparator
    } else {
        LineEvent::TableRow(cells)
    }
}

/// Matches `^\d+\.\s`; the marker keeps the literal digits exactly as
/// written, never re-sequenced.
fn classify_numbered(line: &str) -> Option<LineEvent> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = &line[digits..];
    let after_dot = rest.strip_prefix('.')?;
    if !after_dot.starts_with(char::is_whitespace) {
        return None;
    }
    Some(LineEvent::Numbered {
        marker: line[..digits + 1].to_string(),
        text: after_dot.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines() {
        assert_eq!(classify(""), LineEvent::Blank);
        assert_eq!(classify("   \t "), LineEvent::Blank);
    }

    #[test]
    fn heading_levels() {
        assert_eq!(
            classify("# Top"),
            LineEvent::Heading { level: 1, text: "Top".into() }
        );
        assert_eq!(
            classify("## Mid"),
            LineEvent::Heading { level: 2, text: "Mid".into() }
        );
        assert_eq!(
            classify("### Deep"),
            LineEvent::Heading { level: 3, text: "Deep".into() }
        );
    }

    #[test]
    fn hash_without_space_is_plain() {
        assert_eq!(classify("#No space"), LineEvent::Plain("#No space".into()));
        assert_eq!(classify("#"), LineEvent::Plain("#".into()));
    }

    #[test]
    fn bullets_accept_both_markers() {
        assert_eq!(classify("* first"), LineEvent::Bullet("first".into()));
        assert_eq!(classify("- second"), LineEvent::Bullet("second".into()));
    }

    #[test]
    fn numbered_keeps_literal_marker() {
        assert_eq!(
            classify("3. Third step"),
            LineEvent::Numbered { marker: "3.".into(), text: "Third step".into() }
        );
        assert_eq!(
            classify("12. Twelfth"),
            LineEvent::Numbered { marker: "12.".into(), text: "Twelfth".into() }
        );
    }

    #[test]
    fn numbered_requires_dot_and_space() {
        assert_eq!(classify("3 Third"), LineEvent::Plain("3 Third".into()));
        assert_eq!(classify("3.Third"), LineEvent::Plain("3.Third".into()));
    }

    #[test]
    fn table_row_cells_are_trimmed() {
        assert_eq!(
            classify("| Detail | Breakdown |"),
            LineEvent::TableRow(vec!["Detail".into(), "Breakdown".into()])
        );
    }

    #[test]
    fn table_row_keeps_inner_empty_cells() {
        assert_eq!(
            classify("| a || c |"),
            LineEvent::TableRow(vec!["a".into(), "".into(), "c".into()])
        );
    }

    #[test]
    fn separator_rows_detected() {
        assert_eq!(classify("|---|---|"), LineEvent::TableSeparator);
        assert_eq!(classify("| :--- | ---: |"), LineEvent::TableSeparator);
    }

    #[test]
    fn pipe_lines_without_closing_pipe_are_plain() {
        assert_eq!(classify("| open"), LineEvent::Plain("| open".into()));
        assert_eq!(classify("|"), LineEvent::Plain("|".into()));
    }

    #[test]
    fn disclaimer_markers_in_both_scripts() {
        assert_eq!(
            classify("Disclaimer: for information only"),
            LineEvent::Disclaimer("Disclaimer: for information only".into())
        );
        assert_eq!(
            classify("अस्वीकरण: केवल सूचना के लिए"),
            LineEvent::Disclaimer("अस्वीकरण: केवल सूचना के लिए".into())
        );
    }

    #[test]
    fn table_beats_heading_inside_pipes() {
        // First-match-wins: a pipe-delimited line is a row even if a cell
        // starts with a heading prefix.
        assert_eq!(
            classify("| # not a heading |"),
            LineEvent::TableRow(vec!["# not a heading".into()])
        );
    }
}
