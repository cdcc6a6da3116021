//! Inline emphasis: rewrites `**bold**` and `*italic*` marker runs into
//! styled spans.
//!
//! Exactly two passes, in a fixed order: bold first, then italic within
//! the remaining plain text. The order is a correctness invariant -
//! scanning for single asterisks first would split every bold marker
//! pair. Unmatched markers stay literal. Triple-marker nesting is
//! unsupported: `***x***` resolves the first bold pair non-greedily,
//! the same way the two-pass rewrite always has.

use acreage_idf::{Emphasis, StyledSpan};

/// Parse raw text into an ordered span sequence.
pub fn parse_spans(text: &str) -> Vec<StyledSpan> {
    let mut spans = Vec::new();
    for (segment, bold) in split_delimited(text, "**") {
        if bold {
            push_span(&mut spans, segment, Emphasis::Bold);
        } else {
            for (inner, italic) in split_delimited(&segment, "*") {
                let emphasis = if italic { Emphasis::Italic } else { Emphasis::Plain };
                push_span(&mut spans, inner, emphasis);
            }
        }
    }
    spans
}

/// Splits `text` on non-greedy `delim`-delimited pairs. Returns segments
/// tagged with whether they were inside a pair. Delimiters without a
/// closing partner are left in the surrounding plain segment.
fn split_delimited(text: &str, delim: &str) -> Vec<(String, bool)> {
    let mut out = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find(delim) {
        let after = &rest[open + delim.len()..];
        let Some(close) = after.find(delim) else { break };
        if open > 0 {
            out.push((rest[..open].to_string(), false));
        }
        out.push((after[..close].to_string(), true));
        rest = &after[close + delim.len()..];
    }
    if !rest.is_empty() {
        out.push((rest.to_string(), false));
    }
    out
}

// Empty runs (`****`) consume their markers but render nothing.
fn push_span(spans: &mut Vec<StyledSpan>, text: String, emphasis: Emphasis) {
    if !text.is_empty() {
        spans.push(StyledSpan { text, emphasis });
    }
}
