//! Rule fragment trees and their interpretation.
//!
//! Each evaluation role is a closed enum, so every variant's semantics and
//! wording sit in one `match`:
//!
//! - [`Rule`]: whole-board satisfaction
//! - [`Predicate`]: per-cell test (nouns and predicates)
//! - [`Group`]: cell groupings
//! - [`GroupPredicate`]: per-group test
//!
//! Trees are immutable once built and hold no evaluation state; evaluating
//! or describing the same tree twice gives the same answer.

mod group;
mod group_predicate;
mod predicate;
mod rule;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::grammar::{Constructor, FragmentRole};

pub use group::Group;
pub use group_predicate::GroupPredicate;
pub use predicate::Predicate;
pub use rule::Rule;

/// Cells of one group. A board has nine cells, so groups never spill.
pub type CellGroup = SmallVec<[usize; 9]>;

/// Any fragment, tagged by role.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fragment {
    Rule(Rule),
    Predicate(Predicate),
    Group(Group),
    GroupPredicate(GroupPredicate),
}

impl Fragment {
    #[must_use]
    pub fn role(&self) -> FragmentRole {
        match self {
            Fragment::Rule(_) => FragmentRole::Rule,
            Fragment::Predicate(_) => FragmentRole::Predicate,
            Fragment::Group(_) => FragmentRole::Group,
            Fragment::GroupPredicate(_) => FragmentRole::GroupPredicate,
        }
    }

    #[must_use]
    pub fn constructor(&self) -> Constructor {
        match self {
            Fragment::Rule(rule) => rule.constructor(),
            Fragment::Predicate(predicate) => predicate.constructor(),
            Fragment::Group(group) => group.constructor(),
            Fragment::GroupPredicate(predicate) => predicate.constructor(),
        }
    }

    #[must_use]
    pub fn variant(&self) -> usize {
        match self {
            Fragment::Rule(rule) => rule.variant(),
            Fragment::Predicate(predicate) => predicate.variant(),
            Fragment::Group(group) => group.variant(),
            Fragment::GroupPredicate(_) => 0,
        }
    }

    /// Natural-language phrase. Only predicates distinguish `plural`.
    #[must_use]
    pub fn describe(&self, plural: bool) -> String {
        match self {
            Fragment::Rule(rule) => rule.describe(),
            Fragment::Predicate(predicate) => predicate.describe(plural),
            Fragment::Group(group) => group.describe(),
            Fragment::GroupPredicate(predicate) => predicate.describe().to_string(),
        }
    }

    #[must_use]
    pub fn into_rule(self) -> Option<Rule> {
        match self {
            Fragment::Rule(rule) => Some(rule),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_predicate(self) -> Option<Predicate> {
        match self {
            Fragment::Predicate(predicate) => Some(predicate),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_group(self) -> Option<Group> {
        match self {
            Fragment::Group(group) => Some(group),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_group_predicate(self) -> Option<GroupPredicate> {
        match self {
            Fragment::GroupPredicate(predicate) => Some(predicate),
            _ => None,
        }
    }
}

impl From<Rule> for Fragment {
    fn from(rule: Rule) -> Self {
        Fragment::Rule(rule)
    }
}

impl From<Predicate> for Fragment {
    fn from(predicate: Predicate) -> Self {
        Fragment::Predicate(predicate)
    }
}

impl From<Group> for Fragment {
    fn from(group: Group) -> Self {
        Fragment::Group(group)
    }
}

impl From<GroupPredicate> for Fragment {
    fn from(predicate: GroupPredicate) -> Self {
        Fragment::GroupPredicate(predicate)
    }
}
