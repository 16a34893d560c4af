//! Cell groupings checked as units by a group predicate.

use serde::{Deserialize, Serialize};

use crate::core::grid::{Axis, Grid, ADJACENT_PAIRS, CELL_COUNT};
use crate::core::symbol::{Color, Shape};
use crate::grammar::Constructor;

use super::CellGroup;

/// Partitions (or subsets) of the filled cells of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Group {
    /// One group per color.
    Color,
    /// One group per shape.
    Shape,
    /// One group per (color, shape) pair, color-major.
    Identical,
    /// One group per row or column, filled cells only.
    Line(Axis),
    /// One group per orthogonally adjacent pair of filled cells.
    Adjacent,
}

impl Group {
    /// Groups of `grid`. Some may be empty.
    #[must_use]
    pub fn groups(&self, grid: &Grid) -> Vec<CellGroup> {
        match self {
            Group::Color => Color::ALL
                .into_iter()
                .map(|color| cells_where(grid, |cell| grid[cell].color() == Some(color)))
                .collect(),

            Group::Shape => Shape::ALL
                .into_iter()
                .map(|shape| cells_where(grid, |cell| grid[cell].shape() == Some(shape)))
                .collect(),

            Group::Identical => Color::ALL
                .into_iter()
                .flat_map(|color| Shape::ALL.into_iter().map(move |shape| (color, shape)))
                .map(|(color, shape)| {
                    cells_where(grid, |cell| {
                        grid[cell].color() == Some(color) && grid[cell].shape() == Some(shape)
                    })
                })
                .collect(),

            Group::Line(axis) => axis
                .lines()
                .map(|line| line.into_iter().filter(|&cell| !grid[cell].is_empty()).collect())
                .collect(),

            Group::Adjacent => ADJACENT_PAIRS
                .iter()
                .filter(|&&(a, b)| !grid[a].is_empty() && !grid[b].is_empty())
                .map(|&(a, b)| CellGroup::from_slice(&[a, b]))
                .collect(),
        }
    }

    /// Plural subject phrase. Groups are always described in the plural.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Group::Color => "Symbols of the same color".to_string(),
            Group::Shape => "Symbols of the same shape".to_string(),
            Group::Identical => "Identical symbols".to_string(),
            Group::Line(axis) => format!("Symbols in the same {}", axis.name()),
            Group::Adjacent => "Adjacent symbols".to_string(),
        }
    }

    #[must_use]
    pub fn constructor(&self) -> Constructor {
        match self {
            Group::Color => Constructor::ColorGroup,
            Group::Shape => Constructor::ShapeGroup,
            Group::Identical => Constructor::IdenticalGroup,
            Group::Line(_) => Constructor::LineGroup,
            Group::Adjacent => Constructor::AdjacentGroup,
        }
    }

    #[must_use]
    pub fn variant(&self) -> usize {
        match self {
            Group::Line(axis) => axis.index(),
            _ => 0,
        }
    }
}

fn cells_where(grid: &Grid, keep: impl Fn(usize) -> bool) -> CellGroup {
    (0..CELL_COUNT).filter(|&cell| !grid[cell].is_empty() && keep(cell)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(tokens: &str) -> Grid {
        tokens.parse().unwrap()
    }

    fn as_vecs(groups: Vec<CellGroup>) -> Vec<Vec<usize>> {
        groups.into_iter().map(|g| g.to_vec()).collect()
    }

    #[test]
    fn test_color_groups() {
        let g = grid("rC rT __ bS __ __ __ __ rS");
        assert_eq!(as_vecs(Group::Color.groups(&g)), vec![vec![0, 1, 8], vec![], vec![3]]);
    }

    #[test]
    fn test_shape_groups() {
        let g = grid("rC rT __ bS __ __ __ __ yC");
        assert_eq!(as_vecs(Group::Shape.groups(&g)), vec![vec![0, 8], vec![1], vec![3]]);
    }

    #[test]
    fn test_identical_groups() {
        let g = grid("rC rC __ bS __ __ __ __ __");
        let groups = as_vecs(Group::Identical.groups(&g));

        assert_eq!(groups.len(), 9);
        assert_eq!(groups[0], vec![0, 1]); // red circle
        assert_eq!(groups[8], vec![3]); // blue square
        assert_eq!(groups.iter().filter(|g| g.is_empty()).count(), 7);
    }

    #[test]
    fn test_line_groups() {
        let g = grid("rC __ rT __ __ __ bS bS __");

        assert_eq!(
            as_vecs(Group::Line(Axis::Row).groups(&g)),
            vec![vec![0, 2], vec![], vec![6, 7]]
        );
        assert_eq!(
            as_vecs(Group::Line(Axis::Column).groups(&g)),
            vec![vec![0, 6], vec![7], vec![2]]
        );
    }

    #[test]
    fn test_adjacent_groups() {
        let g = grid("rC rT __ yC __ __ __ __ __");
        assert_eq!(as_vecs(Group::Adjacent.groups(&g)), vec![vec![0, 1], vec![0, 3]]);

        let full = grid("rC rC rC rC rC rC rC rC rC");
        assert_eq!(Group::Adjacent.groups(&full).len(), 12);

        assert!(Group::Adjacent.groups(&Grid::empty()).is_empty());
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(Group::Line(Axis::Column).describe(), "Symbols in the same column");
        assert_eq!(Group::Identical.describe(), "Identical symbols");
        assert_eq!(Group::Line(Axis::Column).variant(), 1);
        assert_eq!(Group::Adjacent.constructor(), Constructor::AdjacentGroup);
    }
}
