//! Grid symbols: a color, a shape, or nothing at all.
//!
//! Colors and shapes are closed three-valued enums. Their `index()` is the
//! value a grammar variant selects (red = 0, circle = 0, ...).

use serde::{Deserialize, Serialize};

/// Symbol color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Yellow,
    Blue,
}

impl Color {
    /// All colors in variant order.
    pub const ALL: [Color; 3] = [Color::Red, Color::Yellow, Color::Blue];

    /// Variant index of this color.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Color for a variant index, `None` when out of range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Lowercase letter used in grid tables.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Yellow => 'y',
            Color::Blue => 'b',
        }
    }

    /// English name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
        }
    }

    fn from_letter(letter: char) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.letter() == letter)
    }
}

/// Symbol shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Shape {
    Circle,
    Triangle,
    Square,
}

impl Shape {
    /// All shapes in variant order.
    pub const ALL: [Shape; 3] = [Shape::Circle, Shape::Triangle, Shape::Square];

    /// Variant index of this shape.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Shape for a variant index, `None` when out of range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Uppercase letter used in grid tables.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Shape::Circle => 'C',
            Shape::Triangle => 'T',
            Shape::Square => 'S',
        }
    }

    /// English name, singular.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Triangle => "triangle",
            Shape::Square => "square",
        }
    }

    fn from_letter(letter: char) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.letter() == letter)
    }
}

/// Content of one grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    #[default]
    Empty,
    Filled { color: Color, shape: Shape },
}

impl Symbol {
    /// Create a filled symbol.
    #[must_use]
    pub const fn new(color: Color, shape: Shape) -> Self {
        Symbol::Filled { color, shape }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Symbol::Empty)
    }

    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Symbol::Empty => None,
            Symbol::Filled { color, .. } => Some(color),
        }
    }

    #[must_use]
    pub const fn shape(self) -> Option<Shape> {
        match self {
            Symbol::Empty => None,
            Symbol::Filled { shape, .. } => Some(shape),
        }
    }

    /// Packed form: 0 for empty, otherwise `color + 3 * shape + 1`.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Symbol::Empty => 0,
            Symbol::Filled { color, shape } => (color.index() + shape.index() * 3 + 1) as u8,
        }
    }

    /// Inverse of [`Symbol::code`]. Codes above 9 are rejected.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Symbol::Empty),
            1..=9 => {
                let packed = usize::from(code - 1);
                Some(Symbol::new(
                    Color::from_index(packed % 3)?,
                    Shape::from_index(packed / 3)?,
                ))
            }
            _ => None,
        }
    }

    /// Parse a two-character table token (`rC`, `bS`, `__`, `..`).
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        let (first, second) = (chars.next()?, chars.next()?);
        if chars.next().is_some() {
            return None;
        }

        match (first, second) {
            ('_', '_') | ('.', '.') => Some(Symbol::Empty),
            _ => Some(Symbol::new(Color::from_letter(first)?, Shape::from_letter(second)?)),
        }
    }
}

impl std::fmt::Display for Symbol {
    /// Two-character token; empty cells render as two spaces.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Empty => f.write_str("  "),
            Symbol::Filled { color, shape } => write!(f, "{}{}", color.letter(), shape.letter()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_layout() {
        assert_eq!(Symbol::Empty.code(), 0);
        assert_eq!(Symbol::new(Color::Red, Shape::Circle).code(), 1);
        assert_eq!(Symbol::new(Color::Blue, Shape::Circle).code(), 3);
        assert_eq!(Symbol::new(Color::Red, Shape::Triangle).code(), 4);
        assert_eq!(Symbol::new(Color::Blue, Shape::Square).code(), 9);
    }

    #[test]
    fn test_from_code() {
        for code in 0..=9u8 {
            let symbol = Symbol::from_code(code).unwrap();
            assert_eq!(symbol.code(), code);
        }
        assert!(Symbol::from_code(10).is_none());
    }

    #[test]
    fn test_empty_has_no_attributes() {
        assert!(Symbol::Empty.is_empty());
        assert_eq!(Symbol::Empty.color(), None);
        assert_eq!(Symbol::Empty.shape(), None);
        assert_eq!(Symbol::default(), Symbol::Empty);
    }

    #[test]
    fn test_tokens() {
        assert_eq!(Symbol::new(Color::Yellow, Shape::Triangle).to_string(), "yT");
        assert_eq!(Symbol::Empty.to_string(), "  ");

        assert_eq!(Symbol::from_token("bS"), Some(Symbol::new(Color::Blue, Shape::Square)));
        assert_eq!(Symbol::from_token("__"), Some(Symbol::Empty));
        assert_eq!(Symbol::from_token(".."), Some(Symbol::Empty));
        assert_eq!(Symbol::from_token("Cr"), None);
        assert_eq!(Symbol::from_token("rCx"), None);
        assert_eq!(Symbol::from_token("r"), None);
    }

    #[test]
    fn test_variant_indices() {
        assert_eq!(Color::from_index(1), Some(Color::Yellow));
        assert_eq!(Color::from_index(3), None);
        assert_eq!(Shape::Square.index(), 2);
        assert_eq!(Shape::from_index(7), None);
    }
}
