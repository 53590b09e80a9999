//! The text-level driver: turns a `&str` into break opportunities,
//! hard-wrapped lines, or lines plus soft-break offsets.
//!
//! Indexing is in code points, not bytes, matching the conformance suite.
//! There is no synthetic end-of-text boundary: a text of `n`
//! code points has exactly `n - 1` adjacent pairs, and only those pairs can
//! produce a boundary.

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

use crate::class::{default_resolver, BreakClass, Resolver};
use crate::rules::RuleSet;
use crate::state::Machine;
use crate::tables::break_property;

#[cfg(feature = "std")]
use crate::error::Error;

/// The kind of a non-prohibited boundary.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum BreakKind {
    /// A line must break here.
    Required,
    /// A line may break here.
    Allowed,
}

fn resolved_classes(text: &str, resolver: Resolver) -> Vec<BreakClass> {
    text.chars()
        .map(|c| {
            let cp = c as u32;
            resolver(cp, break_property(cp))
        })
        .collect()
}

fn is_line_ending(class: BreakClass) -> bool {
    matches!(
        class,
        BreakClass::Mandatory | BreakClass::CarriageReturn | BreakClass::LineFeed | BreakClass::NextLine
    )
}

/// All non-prohibited boundaries of `text`, in increasing index order.
///
/// `index` is 1-based: the number of code points to the left of the
/// boundary. Empty text and single-code-point text
/// produce no boundaries, since there are no adjacent pairs to evaluate.
pub fn linebreak_locations(
    text: &str,
    resolver: Option<Resolver>,
    rules: Option<&RuleSet>,
) -> Vec<(usize, BreakKind)> {
    let resolver = resolver.unwrap_or(default_resolver);
    let default_rules;
    let rules = match rules {
        Some(r) => r,
        None => {
            default_rules = RuleSet::default();
            &default_rules
        }
    };

    let classes = resolved_classes(text, resolver);
    let mut machine = Machine::new();
    let mut out = Vec::new();
    for i in 0..classes.len().saturating_sub(1) {
        match machine.step(classes[i], classes[i + 1], rules) {
            crate::rules::Verdict::Prohibited => {}
            crate::rules::Verdict::Required => out.push((i + 1, BreakKind::Required)),
            crate::rules::Verdict::Allowed => out.push((i + 1, BreakKind::Allowed)),
        }
    }
    out
}

/// Byte-oriented entry point: validates `bytes` as UTF-8 before delegating
/// to [`linebreak_locations`], surfacing [`Error::InvalidEncoding`] instead
/// of the panic `&str` conversion would otherwise require of the caller.
#[cfg(feature = "std")]
pub fn linebreak_locations_bytes(
    bytes: &[u8],
    resolver: Option<Resolver>,
    rules: Option<&RuleSet>,
) -> Result<Vec<(usize, BreakKind)>, Error> {
    let text = core::str::from_utf8(bytes)
        .map_err(|e| Error::InvalidEncoding { offset: e.valid_up_to() })?;
    Ok(linebreak_locations(text, resolver, rules))
}

/// Splits `text` at required boundaries only, dropping the trailing
/// line-ending code point(s) (`BK`/`CR`/`LF`/`NL`) from each resulting line.
///
/// Only a trailing line that trims down to nothing is suppressed (text
/// ending exactly at a required boundary); an interior blank line -- e.g.
/// a paragraph separator between two required breaks -- is kept as `""`.
pub fn apply_required_linebreaks(
    text: &str,
    resolver: Option<Resolver>,
    rules: Option<&RuleSet>,
) -> Vec<String> {
    let resolver = resolver.unwrap_or(default_resolver);
    let boundaries = linebreak_locations(text, Some(resolver), rules);
    let chars: Vec<char> = text.chars().collect();

    let mut cuts: Vec<usize> = boundaries
        .iter()
        .filter(|(_, kind)| *kind == BreakKind::Required)
        .map(|(index, _)| *index)
        .collect();
    cuts.push(chars.len());
    let last = cuts.len() - 1;

    let mut lines = Vec::with_capacity(cuts.len());
    let mut start = 0;
    for (i, cut) in cuts.into_iter().enumerate() {
        let mut end = cut;
        while end > start {
            let cp = chars[end - 1] as u32;
            if is_line_ending(resolver(cp, break_property(cp))) {
                end -= 1;
            } else {
                break;
            }
        }
        if end > start || i != last {
            lines.push(chars[start..end].iter().collect());
        }
        start = cut;
    }
    lines
}

/// Hard lines (as in [`apply_required_linebreaks`]) paired with the
/// code-point offsets, relative to each line's own start, at which a soft
/// break is allowed.
pub fn identify_linebreak_positions(
    text: &str,
    resolver: Option<Resolver>,
    rules: Option<&RuleSet>,
) -> Vec<(String, Vec<usize>)> {
    apply_required_linebreaks(text, resolver, rules)
        .into_iter()
        .map(|line| {
            let offsets = linebreak_locations(&line, resolver, rules)
                .into_iter()
                .filter(|(_, kind)| *kind == BreakKind::Allowed)
                .map(|(index, _)| index)
                .collect();
            (line, offsets)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_single_code_point_have_no_boundaries() {
        assert_eq!(linebreak_locations("", None, None), Vec::new());
        assert_eq!(linebreak_locations("a", None, None), Vec::new());
    }

    #[test]
    fn hello_cruel_world() {
        let boundaries = linebreak_locations("hello,\ncruel world", None, None);
        assert_eq!(
            boundaries,
            alloc::vec![(7, BreakKind::Required), (13, BreakKind::Allowed)]
        );
    }

    #[test]
    fn combining_mark_and_zwj_examples_emit_no_boundaries() {
        assert_eq!(linebreak_locations("a\u{0308}b", None, None), Vec::new());
        assert_eq!(linebreak_locations("\r\n", None, None), Vec::new());
        assert_eq!(linebreak_locations("\u{200D}\u{231A}", None, None), Vec::new());
    }

    #[test]
    fn apply_required_linebreaks_strips_trailing_newline() {
        assert_eq!(apply_required_linebreaks("abc\n", None, None), alloc::vec!["abc"]);
        assert_eq!(
            apply_required_linebreaks("hello,\nyou cruel, cruel world", None, None),
            alloc::vec!["hello,", "you cruel, cruel world"]
        );
    }

    #[test]
    fn apply_required_linebreaks_keeps_interior_blank_line() {
        assert_eq!(
            apply_required_linebreaks("a\n\nb", None, None),
            alloc::vec!["a", "", "b"]
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn linebreak_locations_bytes_rejects_invalid_utf8() {
        let err = linebreak_locations_bytes(&[b'a', 0xFF, b'b'], None, None).unwrap_err();
        assert!(matches!(err, crate::error::Error::InvalidEncoding { offset: 1 }));
    }

    #[cfg(feature = "std")]
    #[test]
    fn linebreak_locations_bytes_matches_str_path_on_valid_input() {
        let from_bytes = linebreak_locations_bytes("hello,\ncruel world".as_bytes(), None, None).unwrap();
        let from_str = linebreak_locations("hello,\ncruel world", None, None);
        assert_eq!(from_bytes, from_str);
    }

    #[test]
    fn identify_linebreak_positions_pairs_lines_with_soft_offsets() {
        let result = identify_linebreak_positions("hello,\nyou cruel, cruel world", None, None);
        assert_eq!(
            result,
            alloc::vec![
                (String::from("hello,"), Vec::new()),
                (String::from("you cruel, cruel world"), alloc::vec![4, 11, 17]),
            ]
        );
    }
}
