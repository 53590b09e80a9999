//! Baked Unicode data, generated at build time from `LineBreak.txt`
//! (required) and `DerivedGeneralCategory.txt` (optional, used only to
//! resolve `SA` precisely in [`crate::class::default_resolver`]).

use crate::class::BreakClass;
use core::mem;

include!(concat!(env!("OUT_DIR"), "/tables.rs"));

/// Returns the raw `Line_Break` property of the given code point.
///
/// Every scalar in `0..=0x10FFFF` has a defined class; unassigned or
/// out-of-range values resolve to [`BreakClass::Unknown`].
#[inline]
pub fn break_property(codepoint: u32) -> BreakClass {
    if codepoint > 0x10FFFF {
        return BreakClass::Unknown;
    }
    let codepoint = codepoint as usize;
    if (PAGE_INDICES[codepoint >> 8] & UNIFORM_PAGE) != 0 {
        unsafe { mem::transmute((PAGE_INDICES[codepoint >> 8] & !UNIFORM_PAGE) as u8) }
    } else {
        BREAK_PROP_DATA[PAGE_INDICES[codepoint >> 8]][codepoint & 0xFF]
    }
}

/// Returns whether `codepoint`'s General_Category is `Mn` or `Mc`.
///
/// Only meaningful when [`HAS_GENERAL_CATEGORY`] is `true`; otherwise the
/// baked range table is empty and this always returns `false`.
pub(crate) fn general_category_is_mark(codepoint: u32) -> bool {
    MARK_RANGES
        .binary_search_by(|&(start, end)| {
            if codepoint < start {
                core::cmp::Ordering::Greater
            } else if codepoint > end {
                core::cmp::Ordering::Less
            } else {
                core::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totality_over_full_range() {
        // Spot-check a handful of boundary scalars rather than all 0x110000;
        // the conformance suite exercises the full table against real text.
        for cp in [0, 0xA, 0xD, 0x10FFFF, 0x110000, 0xD800] {
            let _ = break_property(cp);
        }
    }

    #[test]
    fn out_of_range_is_unknown() {
        assert_eq!(break_property(0x110000), BreakClass::Unknown);
        assert_eq!(break_property(u32::MAX), BreakClass::Unknown);
    }
}
