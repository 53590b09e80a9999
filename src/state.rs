//! The state machine that layers LB7-LB10's space-run and
//! combining-mark-chain handling around the otherwise-stateless rule
//! cascade, plus the two tailorable rules (LB21a, LB30a) whose
//! lookbehind/parity requirements don't fit a pure pairwise `Rule`.
//!
//! The numbered comments below follow UAX #14's own LB7-LB10 transition
//! order, one arm per transition.

use crate::class::BreakClass::{self, *};
use crate::rules::{RuleSet, Verdict};

fn is_space_anchor(c: BreakClass) -> bool {
    matches!(c, OP | QU | CL | CP | B2 | ZW)
}

/// Per-call driver state: the carry (LB7-LB10) plus two small extensions
/// used only by [`Machine::classify`] -- the previous base class (LB21a)
/// and a running regional-indicator parity count (LB30a). None of this is
/// shared across calls; a fresh `Machine` is created per text.
#[derive(Clone, Debug, Default)]
pub(crate) struct Machine {
    carry: Option<BreakClass>,
    prev_base: Option<BreakClass>,
    /// Length of the consecutive-RI run ending at (and including) the
    /// character immediately preceding the current step's `l`.
    ri_run_before_l: u32,
}

impl Machine {
    pub(crate) fn new() -> Self {
        Machine::default()
    }

    /// Runs the required + tailorable rule cascade for a pair, after
    /// resolving the two pieces of context a pure pairwise `Rule` cannot
    /// see:
    ///
    /// - LB21a: a Hebrew letter immediately followed by a hyphen or
    ///   "after"-class character does not break after that hyphen.
    /// - LB30a: regional indicators pair up two at a time; a break is
    ///   allowed between a pair only when an even number of RIs precede it.
    ///
    /// `ri_count_at_l` is the length of the consecutive-RI run ending at
    /// (and including) `l`, as seen from the start of the text.
    fn classify(&self, l: BreakClass, r: BreakClass, ri_count_at_l: u32, rules: &RuleSet) -> Verdict {
        if matches!(l, HY | BA) && self.prev_base == Some(HL) {
            return Verdict::Prohibited;
        }
        if l == RI && r == RI {
            return if ri_count_at_l % 2 == 0 {
                Verdict::Allowed
            } else {
                Verdict::Prohibited
            };
        }
        rules.classify(l, r)
    }

    /// Advances the machine by one pair, returning the verdict for the
    /// boundary between `l` and `r`.
    pub(crate) fn step(&mut self, l: BreakClass, r: BreakClass, rules: &RuleSet) -> Verdict {
        // Length of the consecutive-RI run ending at (and including) `l`,
        // carried forward from the previous call's `ri_run_before_l`.
        let ri_count_at_l = if l == RI { self.ri_run_before_l + 1 } else { 0 };

        let verdict = if is_space_anchor(l) && r == SP {
            // 1. (x, SP) where x is a space anchor: prohibited; remember x.
            self.carry = Some(l);
            Verdict::Prohibited
        } else if matches!(l, CM | ZWJ) && r == SP && matches!(self.carry, Some(c) if is_space_anchor(c)) {
            // 2. A CM/ZWJ chain tail sitting before a space run inherits
            // the anchor's "prohibit before SP" behavior.
            Verdict::Prohibited
        } else if matches!(r, CM | ZWJ) && !matches!(l, SP | BK | CR | LF | NL | ZW | CM | ZWJ) {
            // 3. Start of a combining-mark/ZWJ chain: classify against the
            // base, then remember the base as carry.
            let v = self.classify(l, CM, ri_count_at_l, rules);
            self.carry = Some(l);
            v
        } else if l == SP && r == SP {
            // 4. Space runs never break internally.
            Verdict::Prohibited
        } else if matches!(l, CM | ZWJ) && matches!(r, CM | ZWJ) {
            // 5. Mid-chain: another CM/ZWJ stays attached.
            Verdict::Prohibited
        } else if l == ZWJ && matches!(r, ID | EB | EM) && self.carry.is_none() {
            // 6. LB8a: ZWJ directly before an emoji-ish character.
            self.classify(ZWJ, r, ri_count_at_l, rules)
        } else if l == ZWJ && matches!(r, CM | ZWJ) && self.carry.is_none() {
            // 7. An orphan ZWJ starting a new chain is treated as AL.
            self.carry = Some(AL);
            self.classify(AL, r, ri_count_at_l, rules)
        } else if matches!(l, CM | ZWJ) && self.carry.is_none() {
            // 8. LB10: an orphan CM/ZWJ (no chain base recorded) acts as AL.
            self.classify(AL, r, ri_count_at_l, rules)
        } else if matches!(l, CM | ZWJ) && self.carry.is_some() {
            // 9. End of a chain: classify using the chain's base class.
            let base = self.carry.take().unwrap();
            self.classify(base, r, ri_count_at_l, rules)
        } else if l == SP && self.carry == Some(ZW) {
            // 10. LB7 beats LB18: a space run after a ZWSP still breaks
            // like a ZW would.
            let v = self.classify(ZW, r, ri_count_at_l, rules);
            self.carry = None;
            v
        } else if l == SP && self.carry == Some(OP) {
            // 11. LB14: OP SP* stays closed.
            self.carry = None;
            Verdict::Prohibited
        } else if l == SP && r == OP && self.carry == Some(QU) {
            // 12. LB15.
            self.carry = None;
            Verdict::Prohibited
        } else if l == SP && r == NS && self.carry == Some(CL) {
            // 13. LB16 (CL).
            self.carry = None;
            Verdict::Prohibited
        } else if l == SP && r == NS && self.carry == Some(CP) {
            // 14. LB16 (CP).
            self.carry = None;
            Verdict::Prohibited
        } else if l == SP && r == B2 && self.carry == Some(B2) {
            // 15. LB17.
            self.carry = None;
            Verdict::Prohibited
        } else {
            // 16. No space-run/chain context applies: just run the cascade.
            self.classify(l, r, ri_count_at_l, rules)
        };

        self.ri_run_before_l = ri_count_at_l;
        self.prev_base = Some(l);

        verdict
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleSet;

    #[test]
    fn combining_mark_chain_attaches_to_base() {
        let rules = RuleSet::default();
        let mut m = Machine::new();
        // "a" + combining diaeresis: LB9 prohibits a break before the mark.
        assert_eq!(m.step(AL, CM, &rules), Verdict::Prohibited);
    }

    #[test]
    fn orphan_combining_mark_acts_as_alphabetic() {
        let rules = RuleSet::default();
        let mut m = Machine::new();
        assert_eq!(m.step(CM, AL, &rules), Verdict::Prohibited); // AL x AL via LB28
    }

    #[test]
    fn regional_indicators_pair_up() {
        let rules = RuleSet::default();
        let mut m = Machine::new();
        assert_eq!(m.step(RI, RI, &rules), Verdict::Prohibited); // 1st pair: keep together
        assert_eq!(m.step(RI, RI, &rules), Verdict::Allowed); // boundary between flags
        assert_eq!(m.step(RI, RI, &rules), Verdict::Prohibited); // 2nd pair: keep together
    }

    #[test]
    fn hebrew_letter_hyphen_stays_attached() {
        let rules = RuleSet::default();
        let mut m = Machine::new();
        m.step(AL, HL, &rules);
        assert_eq!(m.step(HL, HY, &rules), Verdict::Prohibited); // LB21: HY always attaches left anyway
        assert_eq!(m.step(HY, AL, &rules), Verdict::Prohibited); // LB21a: no break after HL-HY
    }

    #[test]
    fn space_run_after_open_punctuation_stays_closed() {
        let rules = RuleSet::default();
        let mut m = Machine::new();
        assert_eq!(m.step(OP, SP, &rules), Verdict::Prohibited);
        assert_eq!(m.step(SP, SP, &rules), Verdict::Prohibited);
        assert_eq!(m.step(SP, AL, &rules), Verdict::Prohibited); // LB14 beats LB18
    }
}
