//! Grammar entries: what a fragment kind may expand into.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::tags::{FragmentTag, TagSet};

/// Grammar kind requested when generating a fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FragmentKind {
    Rule,
    Noun,
    Predicate,
    Group,
    GroupPredicate,
}

impl FragmentKind {
    /// The evaluation role fragments of this kind play.
    ///
    /// Nouns are predicates used in subject position.
    #[must_use]
    pub const fn role(self) -> FragmentRole {
        match self {
            FragmentKind::Rule => FragmentRole::Rule,
            FragmentKind::Noun | FragmentKind::Predicate => FragmentRole::Predicate,
            FragmentKind::Group => FragmentRole::Group,
            FragmentKind::GroupPredicate => FragmentRole::GroupPredicate,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            FragmentKind::Rule => "RULE",
            FragmentKind::Noun => "NOUN",
            FragmentKind::Predicate => "PREDICATE",
            FragmentKind::Group => "GROUP",
            FragmentKind::GroupPredicate => "GROUP_PREDICATE",
        }
    }
}

impl std::fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Evaluation capability of a fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FragmentRole {
    /// Whole-board satisfaction.
    Rule,
    /// Per-cell test.
    Predicate,
    /// Produces groups of cells.
    Group,
    /// Per-group test.
    GroupPredicate,
}

impl std::fmt::Display for FragmentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FragmentRole::Rule => "rule",
            FragmentRole::Predicate => "predicate",
            FragmentRole::Group => "group",
            FragmentRole::GroupPredicate => "group predicate",
        };
        f.write_str(name)
    }
}

/// Which concrete fragment an entry builds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Constructor {
    // Rules
    Universal,
    Existential,
    NegativeUniversal,
    GroupRule,
    LineRule,

    // Nouns
    ColorNoun,
    ShapeNoun,
    RowNoun,
    ColumnNoun,
    EmptyCellNoun,

    // Predicates
    ColorPredicate,
    ShapePredicate,
    RowPredicate,
    ColumnPredicate,
    AdjacencyPredicate,

    // Groups
    ColorGroup,
    ShapeGroup,
    IdenticalGroup,
    LineGroup,
    AdjacentGroup,

    // Group predicates
    ColorGroupPredicate,
    ShapeGroupPredicate,
    ColorDistinctGroupPredicate,
    ShapeDistinctGroupPredicate,
    ColorShapeGroupPredicate,
    ContiguousGroupPredicate,
}

impl Constructor {
    /// Grammar kind this constructor produces.
    #[must_use]
    pub const fn kind(self) -> FragmentKind {
        use Constructor::*;
        match self {
            Universal | Existential | NegativeUniversal | GroupRule | LineRule => FragmentKind::Rule,
            ColorNoun | ShapeNoun | RowNoun | ColumnNoun | EmptyCellNoun => FragmentKind::Noun,
            ColorPredicate | ShapePredicate | RowPredicate | ColumnPredicate | AdjacencyPredicate => {
                FragmentKind::Predicate
            }
            ColorGroup | ShapeGroup | IdenticalGroup | LineGroup | AdjacentGroup => FragmentKind::Group,
            ColorGroupPredicate
            | ShapeGroupPredicate
            | ColorDistinctGroupPredicate
            | ShapeDistinctGroupPredicate
            | ColorShapeGroupPredicate
            | ContiguousGroupPredicate => FragmentKind::GroupPredicate,
        }
    }

    /// Roles of the children the built node holds, in slot order.
    #[must_use]
    pub const fn child_roles(self) -> &'static [FragmentRole] {
        use Constructor::*;
        match self {
            Universal | Existential | NegativeUniversal => {
                &[FragmentRole::Predicate, FragmentRole::Predicate]
            }
            GroupRule => &[FragmentRole::Group, FragmentRole::GroupPredicate],
            LineRule | AdjacencyPredicate => &[FragmentRole::Predicate],
            _ => &[],
        }
    }
}

impl std::fmt::Display for Constructor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// One producible variant of a grammar kind.
///
/// ```
/// use rust_zendo::grammar::{Constructor, FragmentKind, FragmentTag, GrammarEntry};
///
/// let entry = GrammarEntry::new(Constructor::AdjacencyPredicate, 20)
///     .with_tags(&[FragmentTag::Position])
///     .with_children(&[FragmentKind::Noun])
///     .separate_tags();
///
/// assert_eq!(entry.kind(), FragmentKind::Predicate);
/// assert_eq!(entry.variant_count, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarEntry {
    /// Node built by this entry.
    pub constructor: Constructor,

    /// Relative selection weight.
    pub weight: u32,

    /// Tags claimed by this entry.
    pub tags: TagSet,

    /// Kinds generated for each child slot, in order.
    pub children: SmallVec<[FragmentKind; 2]>,

    /// Number of flavors; the variant is drawn from `0..variant_count`.
    pub variant_count: usize,

    /// Children get a fresh tag budget (position still propagates).
    pub separate_tags: bool,
}

impl GrammarEntry {
    /// Entry with no tags, no children and a single variant.
    pub fn new(constructor: Constructor, weight: u32) -> Self {
        Self {
            constructor,
            weight,
            tags: TagSet::EMPTY,
            children: SmallVec::new(),
            variant_count: 1,
            separate_tags: false,
        }
    }

    #[must_use]
    pub fn with_tags(mut self, tags: &[FragmentTag]) -> Self {
        self.tags = TagSet::of(tags);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: &[FragmentKind]) -> Self {
        self.children = children.iter().copied().collect();
        self
    }

    #[must_use]
    pub fn with_variants(mut self, count: usize) -> Self {
        assert!(count >= 1, "An entry needs at least one variant");
        self.variant_count = count;
        self
    }

    #[must_use]
    pub fn separate_tags(mut self) -> Self {
        self.separate_tags = true;
        self
    }

    /// Kind this entry is registered under.
    #[must_use]
    pub const fn kind(&self) -> FragmentKind {
        self.constructor.kind()
    }

    /// Budget handed to this entry's children, given the parent's budget
    /// after this entry's own tags were claimed.
    #[must_use]
    pub const fn child_budget(&self, used: TagSet) -> TagSet {
        if self.separate_tags {
            used.isolated()
        } else {
            used
        }
    }
}
