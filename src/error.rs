//! Errors raised while building rules.
//!
//! All of these indicate a grammar or constructor mismatch rather than an
//! expected runtime condition. They are returned instead of guessed around:
//! a silently wrong rule is worse than a visible failure.

use thiserror::Error;

use crate::core::config::ConfigError;
use crate::grammar::{Constructor, FragmentKind, FragmentRole, TagSet};

/// Rule construction failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleError {
    /// Every entry of `kind` conflicts with the tags already claimed.
    #[error("no grammar entry of kind {kind} fits the tag budget {used}")]
    NoApplicableEntry { kind: FragmentKind, used: TagSet },

    /// A variant index outside the constructor's range.
    #[error("variant {variant} is out of range for {constructor} ({count} variants)")]
    MalformedVariant {
        constructor: Constructor,
        variant: usize,
        count: usize,
    },

    /// An entry with no variant to draw.
    #[error("{constructor} has no variants")]
    NoVariants { constructor: Constructor },

    /// A child slot holds a fragment of the wrong role, or is missing.
    #[error("{constructor} expects a {expected} in child slot {slot}, found {}", .found.map_or_else(|| "nothing".to_string(), |r| r.to_string()))]
    ChildMismatch {
        constructor: Constructor,
        slot: usize,
        expected: FragmentRole,
        found: Option<FragmentRole>,
    },

    /// More children than the constructor holds.
    #[error("{constructor} holds {expected} children but was given {found}")]
    ChildCount {
        constructor: Constructor,
        expected: usize,
        found: usize,
    },

    /// A child kind no entry with positive weight can produce.
    #[error("{parent} refers to kind {kind}, which has no entry with positive weight")]
    UnreachableKind { parent: Constructor, kind: FragmentKind },

    /// The root kind cannot always be generated.
    #[error("grammar has no tag-free RULE entry with positive weight")]
    NoTagFreeRoot,
}

/// Failure to start an engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid grammar: {0}")]
    Grammar(#[from] RuleError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::FragmentTag;

    #[test]
    fn test_messages() {
        let err = RuleError::NoApplicableEntry {
            kind: FragmentKind::Noun,
            used: TagSet::of(&[FragmentTag::Color]),
        };
        assert_eq!(err.to_string(), "no grammar entry of kind NOUN fits the tag budget {COLOR}");

        let err = RuleError::ChildMismatch {
            constructor: Constructor::GroupRule,
            slot: 1,
            expected: FragmentRole::GroupPredicate,
            found: None,
        };
        assert_eq!(
            err.to_string(),
            "GroupRule expects a group predicate in child slot 1, found nothing"
        );

        let err = RuleError::MalformedVariant {
            constructor: Constructor::ColorNoun,
            variant: 3,
            count: 3,
        };
        assert_eq!(err.to_string(), "variant 3 is out of range for ColorNoun (3 variants)");

        let err = RuleError::NoVariants {
            constructor: Constructor::ShapeNoun,
        };
        assert_eq!(err.to_string(), "ShapeNoun has no variants");
    }
}
