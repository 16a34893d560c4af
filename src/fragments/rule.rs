//! Whole-board rules: the roots of fragment trees.

use serde::{Deserialize, Serialize};

use crate::core::grid::{Axis, Grid, CELL_COUNT};
use crate::grammar::Constructor;

use super::group::Group;
use super::group_predicate::GroupPredicate;
use super::predicate::Predicate;

/// A rule a board either follows or breaks.
///
/// ```
/// use rust_zendo::core::{Color, Grid, Shape};
/// use rust_zendo::fragments::{Predicate, Rule};
///
/// let rule = Rule::Universal {
///     noun: Predicate::ColorNoun(Color::Red),
///     predicate: Predicate::Shape(Shape::Circle),
/// };
///
/// assert_eq!(rule.describe(), "Every red symbol is a circle");
/// assert!(rule.evaluate(&Grid::empty()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    /// Every cell matching `noun` matches `predicate`.
    Universal { noun: Predicate, predicate: Predicate },
    /// Some cell matches both.
    Existential { noun: Predicate, predicate: Predicate },
    /// No cell matches both.
    NegativeUniversal { noun: Predicate, predicate: Predicate },
    /// Every non-empty group satisfies `predicate`.
    Grouped { group: Group, predicate: GroupPredicate },
    /// Some full row (or column) matches `noun` in every cell.
    Line { axis: Axis, noun: Predicate },
}

impl Rule {
    /// Whether `grid` follows this rule.
    #[must_use]
    pub fn evaluate(&self, grid: &Grid) -> bool {
        let both = |noun: &Predicate, predicate: &Predicate, cell: usize| {
            noun.cell_valid(grid, cell) && predicate.cell_valid(grid, cell)
        };

        match self {
            Rule::Universal { noun, predicate } => {
                (0..CELL_COUNT).all(|cell| !noun.cell_valid(grid, cell) || predicate.cell_valid(grid, cell))
            }
            Rule::Existential { noun, predicate } => {
                (0..CELL_COUNT).any(|cell| both(noun, predicate, cell))
            }
            Rule::NegativeUniversal { noun, predicate } => {
                !(0..CELL_COUNT).any(|cell| both(noun, predicate, cell))
            }
            Rule::Grouped { group, predicate } => group
                .groups(grid)
                .iter()
                .filter(|cells| !cells.is_empty())
                .all(|cells| predicate.group_valid(grid, cells)),
            Rule::Line { axis, noun } => axis
                .lines()
                .any(|line| line.iter().all(|&cell| noun.cell_valid(grid, cell))),
        }
    }

    /// Natural-language statement of the rule.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Rule::Universal { noun, predicate } => {
                format!("Every {} is {}", noun.describe(false), predicate.describe(false))
            }
            Rule::Existential { noun, predicate } => {
                format!("There is a {} that is {}", noun.describe(false), predicate.describe(false))
            }
            Rule::NegativeUniversal { noun, predicate } => {
                format!("No {} is {}", noun.describe(false), predicate.describe(false))
            }
            Rule::Grouped { group, predicate } => {
                format!("{} {}", group.describe(), predicate.describe())
            }
            Rule::Line { axis, noun } => {
                format!("There is a {} filled with {}", axis.name(), noun.describe(true))
            }
        }
    }

    #[must_use]
    pub fn constructor(&self) -> Constructor {
        match self {
            Rule::Universal { .. } => Constructor::Universal,
            Rule::Existential { .. } => Constructor::Existential,
            Rule::NegativeUniversal { .. } => Constructor::NegativeUniversal,
            Rule::Grouped { .. } => Constructor::GroupRule,
            Rule::Line { .. } => Constructor::LineRule,
        }
    }

    #[must_use]
    pub fn variant(&self) -> usize {
        match self {
            Rule::Line { axis, .. } => axis.index(),
            _ => 0,
        }
    }

    /// Constructors of the direct children, in slot order.
    #[must_use]
    pub fn child_constructors(&self) -> Vec<Constructor> {
        match self {
            Rule::Universal { noun, predicate }
            | Rule::Existential { noun, predicate }
            | Rule::NegativeUniversal { noun, predicate } => {
                vec![noun.constructor(), predicate.constructor()]
            }
            Rule::Grouped { group, predicate } => vec![group.constructor(), predicate.constructor()],
            Rule::Line { noun, .. } => vec![noun.constructor()],
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}
