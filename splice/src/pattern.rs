use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::block::NamedBlock;

// ---------------------------------------------------------------------------
// Sentinel shapes
// ---------------------------------------------------------------------------
//
// Three fixed shapes cover the whole grammar:
//
//   NAME='...'            single-quoted assignment, value free of quotes
//   #NAME_S ... #NAME_E   marker-comment span, markers kept in the output
//   echo " ... "          help-text fence, one line per fence
//
// All matching is multi-line with dot-matches-newline; the leading group is
// greedy, so when a sentinel appears more than once the last occurrence wins.

/// A help-text fence: a line ending in `echo "`, interior lines, and a line
/// that starts with the closing `"`.
static ECHO_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?ms)^ *echo "$.+?^""#).expect("echo fence pattern is valid")
});

fn assignment_pattern(name: &str) -> Regex {
    let name = regex::escape(name);
    Regex::new(&format!(r"(?s)\A(.*)({name}='([^']+)')(.*)\z"))
        .expect("assignment pattern is valid")
}

fn marker_pattern(name: &str) -> Regex {
    let name = regex::escape(name);
    Regex::new(&format!(r"(?s)\A(.+#{name}_S)(.*)(#{name}_E.+)\z"))
        .expect("marker pattern is valid")
}

// ---------------------------------------------------------------------------
// Match functions
// ---------------------------------------------------------------------------

/// Locate a `NAME='...'` assignment. The body is the text between the quotes;
/// the span covers the whole assignment, which is what gets replaced.
pub fn match_quoted_assignment<'a>(source: &'a str, name: &str) -> Option<NamedBlock<'a>> {
    let caps = assignment_pattern(name).captures(source)?;
    let assignment = caps.get(2)?;
    Some(NamedBlock {
        prefix: caps.get(1)?.as_str(),
        body: caps.get(3)?.as_str(),
        suffix: caps.get(4)?.as_str(),
        span: assignment.range(),
    })
}

/// Locate a `#NAME_S` ... `#NAME_E` span. The markers stay in the prefix and
/// suffix; only the text between them is replaced.
pub fn match_marker_block<'a>(source: &'a str, name: &str) -> Option<NamedBlock<'a>> {
    let caps = marker_pattern(name).captures(source)?;
    let body = caps.get(2)?;
    Some(NamedBlock {
        prefix: caps.get(1)?.as_str(),
        body: body.as_str(),
        suffix: caps.get(3)?.as_str(),
        span: body.range(),
    })
}

/// Find the byte span of a bare opening marker `#NAME_S`, used to point an
/// unterminated-block diagnostic at the place the block began.
pub fn find_opening_marker(source: &str, name: &str) -> Option<Range<usize>> {
    let marker = format!("#{}_S", name);
    let start = source.find(&marker)?;
    Some(start..start + marker.len())
}

/// Find every help-text fence, in source order. Fence lines land in the
/// prefix/suffix; the span covers the full match, fences included, because
/// reformatting discards them.
pub fn find_help_fences(source: &str) -> Vec<NamedBlock<'_>> {
    ECHO_FENCE
        .find_iter(source)
        .map(|m| {
            let text = m.as_str();
            // The match always has at least two lines: the opening fence ends
            // at the first newline, the closing `"` starts after the last.
            let first_nl = text.find('\n').unwrap_or(text.len());
            let last_nl = text.rfind('\n').unwrap_or(0);
            NamedBlock {
                prefix: &text[..first_nl],
                body: &text[(first_nl + 1).min(last_nl)..last_nl],
                suffix: &text[last_nl + 1..],
                span: m.range(),
            }
        })
        .collect()
}
