//! Properties a group of cells must share.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::grid::{neighbors, Grid, CELL_COUNT};
use crate::grammar::Constructor;

/// Test applied to one group of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupPredicate {
    SameColor,
    SameShape,
    DistinctColors,
    DistinctShapes,
    /// Uniform in color, or uniform in shape, or both.
    SameColorOrShape,
    /// Cells form one orthogonally connected component.
    Contiguous,
}

impl GroupPredicate {
    /// Whether `cells` of `grid` satisfy this predicate.
    ///
    /// An empty group is vacuously valid. Cells are board indices; one
    /// outside the board panics like indexing `grid` would.
    #[must_use]
    pub fn group_valid(&self, grid: &Grid, cells: &[usize]) -> bool {
        if cells.is_empty() {
            return true;
        }

        let colors = || cells.iter().map(|&cell| grid[cell].color());
        let shapes = || cells.iter().map(|&cell| grid[cell].shape());

        match self {
            GroupPredicate::SameColor => uniform(colors()),
            GroupPredicate::SameShape => uniform(shapes()),
            GroupPredicate::DistinctColors => distinct(colors().flatten().map(|c| c.index())),
            GroupPredicate::DistinctShapes => distinct(shapes().flatten().map(|s| s.index())),
            GroupPredicate::SameColorOrShape => uniform(colors()) || uniform(shapes()),
            GroupPredicate::Contiguous => connected(cells),
        }
    }

    /// Plural verb phrase completing a group's subject.
    #[must_use]
    pub fn describe(&self) -> &'static str {
        match self {
            GroupPredicate::SameColor => "are the same color",
            GroupPredicate::SameShape => "are the same shape",
            GroupPredicate::DistinctColors => "are different colors",
            GroupPredicate::DistinctShapes => "are different shapes",
            GroupPredicate::SameColorOrShape => "are the same color or shape",
            GroupPredicate::Contiguous => "form connected clusters",
        }
    }

    #[must_use]
    pub fn constructor(&self) -> Constructor {
        match self {
            GroupPredicate::SameColor => Constructor::ColorGroupPredicate,
            GroupPredicate::SameShape => Constructor::ShapeGroupPredicate,
            GroupPredicate::DistinctColors => Constructor::ColorDistinctGroupPredicate,
            GroupPredicate::DistinctShapes => Constructor::ShapeDistinctGroupPredicate,
            GroupPredicate::SameColorOrShape => Constructor::ColorShapeGroupPredicate,
            GroupPredicate::Contiguous => Constructor::ContiguousGroupPredicate,
        }
    }
}

fn uniform<T: PartialEq>(mut values: impl Iterator<Item = T>) -> bool {
    match values.next() {
        Some(first) => values.all(|v| v == first),
        None => true,
    }
}

/// No value index (0..3) occurs twice.
fn distinct(values: impl Iterator<Item = usize>) -> bool {
    let mut seen = [false; 3];
    for value in values {
        if std::mem::replace(&mut seen[value], true) {
            return false;
        }
    }
    true
}

/// Flood fill from the first cell over neighbors inside the group.
///
/// Cells must be board indices below [`CELL_COUNT`].
fn connected(cells: &[usize]) -> bool {
    let mut unvisited = [false; CELL_COUNT];
    for &cell in cells {
        unvisited[cell] = true;
    }

    let mut queue = VecDeque::from([cells[0]]);
    unvisited[cells[0]] = false;

    while let Some(cell) = queue.pop_front() {
        for next in neighbors(cell) {
            if unvisited[next] {
                unvisited[next] = false;
                queue.push_back(next);
            }
        }
    }

    !unvisited.contains(&true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(tokens: &str) -> Grid {
        tokens.parse().unwrap()
    }

    #[test]
    fn test_same_color_and_shape() {
        let g = grid("rC rT rS yC __ __ __ __ __");

        assert!(GroupPredicate::SameColor.group_valid(&g, &[0, 1, 2]));
        assert!(!GroupPredicate::SameColor.group_valid(&g, &[0, 3]));
        assert!(GroupPredicate::SameShape.group_valid(&g, &[0, 3]));
        assert!(!GroupPredicate::SameShape.group_valid(&g, &[0, 1]));
    }

    #[test]
    fn test_distinct() {
        let g = grid("rC yT bS rT __ __ __ __ __");

        assert!(GroupPredicate::DistinctColors.group_valid(&g, &[0, 1, 2]));
        assert!(!GroupPredicate::DistinctColors.group_valid(&g, &[0, 3]));
        assert!(GroupPredicate::DistinctShapes.group_valid(&g, &[0, 1, 2]));
        assert!(!GroupPredicate::DistinctShapes.group_valid(&g, &[1, 3]));
    }

    #[test]
    fn test_same_color_or_shape_is_inclusive() {
        let g = grid("rC rT yC rC __ __ __ __ __");

        assert!(GroupPredicate::SameColorOrShape.group_valid(&g, &[0, 1]));
        assert!(GroupPredicate::SameColorOrShape.group_valid(&g, &[0, 2]));
        assert!(GroupPredicate::SameColorOrShape.group_valid(&g, &[0, 3]));
        assert!(!GroupPredicate::SameColorOrShape.group_valid(&g, &[1, 2]));
    }

    #[test]
    fn test_contiguous() {
        let g = grid("rC rC rC rC rC rC rC rC rC");
        let contiguous = GroupPredicate::Contiguous;

        assert!(contiguous.group_valid(&g, &[4]));
        assert!(contiguous.group_valid(&g, &[0, 1]));
        assert!(contiguous.group_valid(&g, &[1, 0]));
        assert!(!contiguous.group_valid(&g, &[0, 4]));
        assert!(!contiguous.group_valid(&g, &[2, 3]));
        assert!(contiguous.group_valid(&g, &[0, 3, 6, 7, 8]));
        assert!(!contiguous.group_valid(&g, &[0, 2, 1, 8]));
    }

    #[test]
    fn test_contiguous_corner_block() {
        let g = grid("rC rC rC rC rC rC rC rC rC");
        assert!(GroupPredicate::Contiguous.group_valid(&g, &[8, 7, 4, 5]));
        assert!(!GroupPredicate::Contiguous.group_valid(&g, &[8, 6]));
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_contiguous_off_board_cell_panics() {
        let g = grid("rC rC rC rC rC rC rC rC rC");
        GroupPredicate::Contiguous.group_valid(&g, &[0, 16]);
    }

    #[test]
    fn test_empty_group_is_vacuous() {
        let g = Grid::empty();
        for predicate in [
            GroupPredicate::SameColor,
            GroupPredicate::DistinctShapes,
            GroupPredicate::Contiguous,
        ] {
            assert!(predicate.group_valid(&g, &[]));
        }
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(GroupPredicate::Contiguous.describe(), "form connected clusters");
        assert_eq!(GroupPredicate::SameColorOrShape.describe(), "are the same color or shape");
        assert_eq!(
            GroupPredicate::DistinctColors.constructor(),
            Constructor::ColorDistinctGroupPredicate
        );
    }
}
