//! Runtime `LineBreak.txt` loading (`std`-only, non-default path).
//!
//! The baked table in [`crate::tables`] is the normal path; this module
//! exists for regenerating classifications against a newer Unicode version
//! without rebuilding the crate, e.g. to validate a new UCD release before
//! vendoring it into `build.rs`.

use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;

use crate::class::BreakClass;
use crate::error::Error;

/// A `Line_Break` table parsed at runtime from a `LineBreak.txt`-shaped
/// file, as an alternative to the build-time baked table.
#[derive(Debug, Default)]
pub struct TableSource {
    ranges: BTreeMap<u32, (u32, BreakClass)>,
}

impl TableSource {
    /// Parses the file at `path`. Lines are `RANGE ; CLASS`, where `RANGE`
    /// is a hex scalar or `START..END`; comment (`#`) and blank lines are
    /// ignored.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| Error::DataLoad {
            path: path.display().to_string(),
            line: 0,
            message: e.to_string(),
        })?;

        let mut source = TableSource::default();
        for (line_no, line) in std::io::BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| Error::DataLoad {
                path: path.display().to_string(),
                line: line_no + 1,
                message: e.to_string(),
            })?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            source.parse_line(path, line_no + 1, line)?;
        }
        Ok(source)
    }

    fn parse_line(&mut self, path: &Path, line_no: usize, line: &str) -> Result<(), Error> {
        let invalid = |message: &str| Error::DataLoad {
            path: path.display().to_string(),
            line: line_no,
            message: message.to_string(),
        };

        let semi = line.find(';').ok_or_else(|| invalid("missing ';' separator"))?;
        let (range, rest) = line.split_at(semi);
        let class_field = rest[1..]
            .split(|c: char| c == '#')
            .next()
            .unwrap_or("")
            .trim();
        let class = class_from_key(class_field).ok_or_else(|| invalid("unrecognized Line_Break class"))?;

        let range = range.trim();
        let (start, end) = match range.split_once("..") {
            Some((start, end)) => (
                u32::from_str_radix(start, 16).map_err(|_| invalid("bad range start"))?,
                u32::from_str_radix(end, 16).map_err(|_| invalid("bad range end"))?,
            ),
            None => {
                let cp = u32::from_str_radix(range, 16).map_err(|_| invalid("bad code point"))?;
                (cp, cp)
            }
        };
        self.ranges.insert(start, (end, class));
        Ok(())
    }

    /// Looks up the class of `codepoint`, falling back to `Unknown` if no
    /// range covers it.
    pub fn lookup(&self, codepoint: u32) -> BreakClass {
        self.ranges
            .range(..=codepoint)
            .next_back()
            .filter(|(_, (end, _))| codepoint <= *end)
            .map(|(_, (_, class))| *class)
            .unwrap_or(BreakClass::Unknown)
    }
}

fn class_from_key(key: &str) -> Option<BreakClass> {
    use BreakClass::*;
    Some(match key {
        "BK" => Mandatory,
        "CR" => CarriageReturn,
        "LF" => LineFeed,
        "CM" => CombiningMark,
        "NL" => NextLine,
        "SG" => Surrogate,
        "WJ" => WordJoiner,
        "ZW" => ZeroWidthSpace,
        "GL" => NonBreakingGlue,
        "SP" => Space,
        "ZWJ" => ZeroWidthJoiner,
        "B2" => BeforeAndAfter,
        "BA" => After,
        "BB" => Before,
        "HY" => Hyphen,
        "CB" => Contingent,
        "CL" => ClosePunctuation,
        "CP" => CloseParenthesis,
        "EX" => Exclamation,
        "IN" => Inseparable,
        "NS" => NonStarter,
        "OP" => OpenPunctuation,
        "QU" => Quotation,
        "IS" => InfixSeparator,
        "NU" => Numeric,
        "PO" => Postfix,
        "PR" => Prefix,
        "SY" => Symbol,
        "AI" => Ambiguous,
        "AL" => Alphabetic,
        "CJ" => ConditionalJapaneseStarter,
        "EB" => EmojiBase,
        "EM" => EmojiModifier,
        "H2" => HangulLvSyllable,
        "H3" => HangulLvtSyllable,
        "HL" => HebrewLetter,
        "ID" => Ideographic,
        "JL" => HangulLJamo,
        "JV" => HangulVJamo,
        "JT" => HangulTJamo,
        "RI" => RegionalIndicator,
        "SA" => ComplexContext,
        "XX" => Unknown,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_ranges_and_singletons() {
        let mut file = tempfile_with_contents(
            "# comment\n0041;AL\n0900..0903;CM\n",
        );
        let source = TableSource::load_from_path(file.path()).unwrap();
        assert_eq!(source.lookup(0x0041), BreakClass::Alphabetic);
        assert_eq!(source.lookup(0x0901), BreakClass::CombiningMark);
        assert_eq!(source.lookup(0x0904), BreakClass::Unknown);
    }

    #[test]
    fn malformed_line_is_data_load_error() {
        let file = tempfile_with_contents("not a valid line\n");
        let err = TableSource::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, Error::DataLoad { line: 1, .. }));
    }

    fn tempfile_with_contents(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }
}
