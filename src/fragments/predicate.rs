//! Per-cell predicates.
//!
//! Nouns and predicates share this type: a noun is a predicate used in
//! subject position ("every *red symbol* is ..."). They differ in wording,
//! and the row/column nouns additionally require a non-empty cell while
//! the row/column predicates do not.

use serde::{Deserialize, Serialize};

use crate::core::grid::{neighbors, Column, Grid, Row};
use crate::core::symbol::{Color, Shape};
use crate::grammar::Constructor;

/// Test applied to one cell of a board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Predicate {
    // === Nouns ===
    /// "red symbol"
    ColorNoun(Color),
    /// "circle"
    ShapeNoun(Shape),
    /// "symbol in the top row"
    RowNoun(Row),
    /// "symbol in the left column"
    ColumnNoun(Column),
    /// "blank cell"
    EmptyCellNoun,

    // === Predicates ===
    /// "red"
    Color(Color),
    /// "a circle"
    Shape(Shape),
    /// "in the top row"; holds for empty cells too.
    Row(Row),
    /// "in the left column"; holds for empty cells too.
    Column(Column),
    /// "next to a ...": some orthogonal neighbor satisfies the noun.
    AdjacentTo(Box<Predicate>),
}

impl Predicate {
    /// Whether `cell` of `grid` satisfies this predicate.
    #[must_use]
    pub fn cell_valid(&self, grid: &Grid, cell: usize) -> bool {
        let symbol = grid[cell];
        match self {
            Predicate::ColorNoun(color) | Predicate::Color(color) => symbol.color() == Some(*color),
            Predicate::ShapeNoun(shape) | Predicate::Shape(shape) => symbol.shape() == Some(*shape),
            Predicate::RowNoun(row) => !symbol.is_empty() && row.contains(cell),
            Predicate::ColumnNoun(column) => !symbol.is_empty() && column.contains(cell),
            Predicate::EmptyCellNoun => symbol.is_empty(),
            Predicate::Row(row) => row.contains(cell),
            Predicate::Column(column) => column.contains(cell),
            Predicate::AdjacentTo(noun) => neighbors(cell).any(|n| noun.cell_valid(grid, n)),
        }
    }

    /// Natural-language phrase, singular or plural.
    #[must_use]
    pub fn describe(&self, plural: bool) -> String {
        let symbols = if plural { "symbols" } else { "symbol" };
        let s = if plural { "s" } else { "" };

        match self {
            Predicate::ColorNoun(color) => format!("{} {symbols}", color.name()),
            Predicate::ShapeNoun(shape) => format!("{}{s}", shape.name()),
            Predicate::RowNoun(row) => format!("{symbols} in the {} row", row.name()),
            Predicate::ColumnNoun(column) => format!("{symbols} in the {} column", column.name()),
            Predicate::EmptyCellNoun => format!("blank cell{s}"),
            Predicate::Color(color) => color.name().to_string(),
            Predicate::Shape(shape) => {
                let article = if plural { "" } else { "a " };
                format!("{article}{}{s}", shape.name())
            }
            Predicate::Row(row) => format!("in the {} row", row.name()),
            Predicate::Column(column) => format!("in the {} column", column.name()),
            Predicate::AdjacentTo(noun) => {
                if plural {
                    format!("next to {}", noun.describe(true))
                } else {
                    format!("next to a {}", noun.describe(false))
                }
            }
        }
    }

    #[must_use]
    pub fn constructor(&self) -> Constructor {
        match self {
            Predicate::ColorNoun(_) => Constructor::ColorNoun,
            Predicate::ShapeNoun(_) => Constructor::ShapeNoun,
            Predicate::RowNoun(_) => Constructor::RowNoun,
            Predicate::ColumnNoun(_) => Constructor::ColumnNoun,
            Predicate::EmptyCellNoun => Constructor::EmptyCellNoun,
            Predicate::Color(_) => Constructor::ColorPredicate,
            Predicate::Shape(_) => Constructor::ShapePredicate,
            Predicate::Row(_) => Constructor::RowPredicate,
            Predicate::Column(_) => Constructor::ColumnPredicate,
            Predicate::AdjacentTo(_) => Constructor::AdjacencyPredicate,
        }
    }

    /// Variant index this node was built from.
    #[must_use]
    pub fn variant(&self) -> usize {
        match self {
            Predicate::ColorNoun(color) | Predicate::Color(color) => color.index(),
            Predicate::ShapeNoun(shape) | Predicate::Shape(shape) => shape.index(),
            Predicate::RowNoun(row) | Predicate::Row(row) => row.index(),
            Predicate::ColumnNoun(column) | Predicate::Column(column) => column.index(),
            Predicate::EmptyCellNoun | Predicate::AdjacentTo(_) => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::symbol::Symbol;

    fn grid(tokens: &str) -> Grid {
        tokens.parse().unwrap()
    }

    #[test]
    fn test_color_and_shape() {
        let g = grid("rC yT __ __ __ __ __ __ bS");

        assert!(Predicate::ColorNoun(Color::Red).cell_valid(&g, 0));
        assert!(!Predicate::ColorNoun(Color::Red).cell_valid(&g, 1));
        assert!(!Predicate::Color(Color::Red).cell_valid(&g, 2));
        assert!(Predicate::Shape(Shape::Square).cell_valid(&g, 8));
        assert!(!Predicate::ShapeNoun(Shape::Circle).cell_valid(&g, 3));
    }

    #[test]
    fn test_row_noun_requires_symbol_but_row_predicate_does_not() {
        let g = grid("rC __ __ __ __ __ __ __ __");

        assert!(Predicate::RowNoun(Row::Top).cell_valid(&g, 0));
        assert!(!Predicate::RowNoun(Row::Top).cell_valid(&g, 1));
        assert!(Predicate::Row(Row::Top).cell_valid(&g, 1));
        assert!(!Predicate::Row(Row::Middle).cell_valid(&g, 1));

        assert!(!Predicate::ColumnNoun(Column::Middle).cell_valid(&g, 4));
        assert!(Predicate::Column(Column::Middle).cell_valid(&g, 4));
    }

    #[test]
    fn test_empty_cell() {
        let g = grid("rC __ __ __ __ __ __ __ __");
        assert!(!Predicate::EmptyCellNoun.cell_valid(&g, 0));
        assert!(Predicate::EmptyCellNoun.cell_valid(&g, 5));
    }

    #[test]
    fn test_adjacency() {
        let g = grid("__ __ __ __ bS __ __ __ __");
        let next_to_blue = Predicate::AdjacentTo(Box::new(Predicate::ColorNoun(Color::Blue)));

        for cell in [1, 3, 5, 7] {
            assert!(next_to_blue.cell_valid(&g, cell), "cell {cell}");
        }
        for cell in [0, 2, 4, 6, 8] {
            assert!(!next_to_blue.cell_valid(&g, cell), "cell {cell}");
        }
    }

    #[test]
    fn test_adjacency_does_not_wrap_rows() {
        // Cell 2 (end of top row) and cell 3 (start of middle row) are not neighbors.
        let g = Grid::empty().with(3, Symbol::new(Color::Red, Shape::Circle));
        let next_to_red = Predicate::AdjacentTo(Box::new(Predicate::ColorNoun(Color::Red)));
        assert!(!next_to_red.cell_valid(&g, 2));
        assert!(next_to_red.cell_valid(&g, 0));
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(Predicate::ColorNoun(Color::Yellow).describe(false), "yellow symbol");
        assert_eq!(Predicate::ColorNoun(Color::Yellow).describe(true), "yellow symbols");
        assert_eq!(Predicate::ShapeNoun(Shape::Triangle).describe(true), "triangles");
        assert_eq!(Predicate::RowNoun(Row::Bottom).describe(false), "symbol in the bottom row");
        assert_eq!(Predicate::ColumnNoun(Column::Right).describe(true), "symbols in the right column");
        assert_eq!(Predicate::EmptyCellNoun.describe(true), "blank cells");
        assert_eq!(Predicate::Color(Color::Blue).describe(true), "blue");
        assert_eq!(Predicate::Shape(Shape::Square).describe(false), "a square");
        assert_eq!(Predicate::Shape(Shape::Square).describe(true), "squares");
        assert_eq!(Predicate::Row(Row::Middle).describe(false), "in the middle row");
        assert_eq!(Predicate::Column(Column::Left).describe(false), "in the left column");

        let adjacency = Predicate::AdjacentTo(Box::new(Predicate::EmptyCellNoun));
        assert_eq!(adjacency.describe(false), "next to a blank cell");
        assert_eq!(adjacency.describe(true), "next to blank cells");
    }

    #[test]
    fn test_constructor_and_variant() {
        assert_eq!(Predicate::Row(Row::Bottom).constructor(), Constructor::RowPredicate);
        assert_eq!(Predicate::Row(Row::Bottom).variant(), 2);
        assert_eq!(Predicate::ShapeNoun(Shape::Triangle).variant(), 1);
        assert_eq!(Predicate::EmptyCellNoun.variant(), 0);
    }
}
