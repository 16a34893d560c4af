//! Attribute tags and tag budgets.
//!
//! A tag names the board dimension a fragment constrains. While one rule
//! is generated, the tags already claimed form its budget; an entry whose
//! tags intersect the budget is not eligible.

use serde::{Deserialize, Serialize};

/// Board dimension constrained by a fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FragmentTag {
    Shape,
    Color,
    Position,
}

impl FragmentTag {
    pub const ALL: [FragmentTag; 3] = [FragmentTag::Shape, FragmentTag::Color, FragmentTag::Position];

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            FragmentTag::Shape => "SHAPE",
            FragmentTag::Color => "COLOR",
            FragmentTag::Position => "POSITION",
        }
    }
}

/// Small set of tags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagSet(u8);

impl TagSet {
    pub const EMPTY: TagSet = TagSet(0);

    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    #[must_use]
    pub fn of(tags: &[FragmentTag]) -> Self {
        tags.iter().fold(Self::EMPTY, |set, &tag| set.with(tag))
    }

    #[must_use]
    pub const fn with(self, tag: FragmentTag) -> Self {
        Self(self.0 | tag.bit())
    }

    pub fn insert(&mut self, tag: FragmentTag) {
        self.0 |= tag.bit();
    }

    /// Add every tag of `other`.
    pub fn extend(&mut self, other: TagSet) {
        self.0 |= other.0;
    }

    #[must_use]
    pub const fn contains(self, tag: FragmentTag) -> bool {
        self.0 & tag.bit() != 0
    }

    #[must_use]
    pub const fn intersects(self, other: TagSet) -> bool {
        self.0 & other.0 != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = FragmentTag> {
        FragmentTag::ALL.into_iter().filter(move |&tag| self.contains(tag))
    }

    /// Budget handed to a child of a separate-tags entry: fresh, except that
    /// a claimed position stays claimed.
    #[must_use]
    pub const fn isolated(self) -> Self {
        if self.contains(FragmentTag::Position) {
            Self::EMPTY.with(FragmentTag::Position)
        } else {
            Self::EMPTY
        }
    }
}

impl std::fmt::Display for TagSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, tag) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(tag.name())?;
        }
        f.write_str("}")
    }
}
