//! The tailoring surface: replace or remove individual rules in the
//! tailorable segment of a [`RuleSet`], without touching the required
//! block.

use crate::error::Error;
use crate::rules::{Rule, RuleSet};

/// Builds a [`RuleSet`] from the default tailorable block by applying
/// positional `replace`/`remove` edits.
///
/// Indices refer to positions in [`crate::rules::default_tailorable_rules`]
/// (LB12a = 0, LB13 = 1, ..., LB30b = 21); the required block is never
/// addressable here.
#[derive(Clone, Debug, Default)]
pub struct RuleSetBuilder {
    rules: RuleSet,
}

impl RuleSetBuilder {
    /// Starts from [`RuleSet::default`].
    pub fn new() -> Self {
        RuleSetBuilder {
            rules: RuleSet::default(),
        }
    }

    /// Replaces the tailorable rule at `index` with `rule`.
    pub fn replace_rule(mut self, index: usize, rule: Rule) -> Result<Self, Error> {
        let len = self.rules.tailorable.len();
        match self.rules.tailorable.get_mut(index) {
            Some(slot) => {
                *slot = rule;
                Ok(self)
            }
            None => Err(Error::InvalidTailoring { index, len }),
        }
    }

    /// Removes the tailorable rule at `index`, shifting later rules left.
    pub fn remove_rule(mut self, index: usize) -> Result<Self, Error> {
        let len = self.rules.tailorable.len();
        if index >= len {
            return Err(Error::InvalidTailoring { index, len });
        }
        self.rules.tailorable.remove(index);
        Ok(self)
    }

    /// Consumes the builder, producing the tailored [`RuleSet`].
    pub fn build(self) -> RuleSet {
        self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::BreakClass::{self, *};
    use crate::rules::Verdict;

    fn always_allowed(_l: BreakClass, _r: BreakClass) -> Option<Verdict> {
        Some(Verdict::Allowed)
    }

    #[test]
    fn replace_rule_swaps_in_place() {
        let rules = RuleSetBuilder::new()
            .replace_rule(18, always_allowed) // lb28 slot
            .unwrap()
            .build();
        assert_eq!(rules.classify(AL, AL), Verdict::Allowed);
    }

    #[test]
    fn out_of_range_replace_is_invalid_tailoring() {
        let err = RuleSetBuilder::new().replace_rule(999, always_allowed);
        assert!(matches!(err, Err(Error::InvalidTailoring { index: 999, .. })));
    }

    #[test]
    fn remove_rule_shifts_later_entries() {
        let before = RuleSetBuilder::new().build();
        let after = RuleSetBuilder::new().remove_rule(0).unwrap().build();
        assert_eq!(after.tailorable.len(), before.tailorable.len() - 1);
    }
}
