//! Conformance against the UAX #14 test file (`LineBreakTest.txt`).
//!
//! The file itself (~7,000 cases) is a Unicode Character Database artifact
//! and is not vendored in this repository; this test is `#[ignore]`d until
//! `tests/LineBreakTest.txt` is placed alongside this file, mirroring the
//! convention of treating large UCD fixtures as an external download rather
//! than a checked-in blob.

use std::char;
use std::fs::File;
use std::io::{self, prelude::*, BufReader};
use std::iter::from_fn;

use unicode_linebreak_rules::{linebreak_locations, BreakKind, RuleSet};

const TEST_FILE: &str = "tests/LineBreakTest.txt";

#[test]
#[ignore = "requires tests/LineBreakTest.txt, not vendored in this repository"]
fn conformance() -> io::Result<()> {
    let file = File::open(TEST_FILE)?;
    let rules = RuleSet::with_numeric_context();

    for line in BufReader::new(file)
        .lines()
        .map(|l| l.unwrap())
        .filter(|l| !l.starts_with('#'))
    {
        let (line, comment) = {
            let mut split = line.splitn(2, "# ");
            let line = split.next().unwrap();
            let comment = split.next().unwrap_or("");
            (line, comment)
        };

        let mut items = line.split_whitespace();
        items.next(); // leading '×'
        let (spots, string): (Vec<_>, String) = from_fn(|| {
            let hex = items.next()?;
            let codepoint = u32::from_str_radix(hex, 16)
                .ok()
                .and_then(char::from_u32)
                .expect("invalid codepoint");
            let is_break = match items.next() {
                Some("÷") => true,
                Some("×") => false,
                _ => unreachable!(),
            };
            Some((is_break, codepoint))
        })
        .unzip();

        // `spots[k]` is the marker immediately after the (k+1)-th code
        // point, i.e. the boundary at 1-based index k+1 -- except the very
        // last marker, which denotes the standard's always-present
        // end-of-text boundary rather than a real adjacent pair; this
        // driver has no synthetic end-of-text boundary, so that trailing
        // marker is dropped.
        let real_pairs = spots.len().saturating_sub(1);
        let expected: Vec<usize> = spots[..real_pairs]
            .iter()
            .enumerate()
            .filter(|(_, &is_break)| is_break)
            .map(|(k, _)| k + 1)
            .collect();

        let actual: Vec<usize> = linebreak_locations(&string, None, Some(&rules))
            .into_iter()
            .map(|(i, _)| i)
            .collect();

        assert_eq!(actual, expected, "string: {:?}, comment: {}", string, comment);
    }

    Ok(())
}

#[test]
fn concrete_scenarios_from_the_standard() {
    let cases: &[(&str, &[(usize, BreakKind)])] = &[
        (
            "hello,\ncruel world",
            &[(7, BreakKind::Required), (13, BreakKind::Allowed)],
        ),
        ("a\u{0308}b", &[]),
        ("\r\n", &[]),
        ("\u{200D}\u{231A}", &[]),
    ];

    for (text, expected) in cases {
        let actual = linebreak_locations(text, None, None);
        assert_eq!(&actual, expected, "text: {:?}", text);
    }
}
