//! Typed node assembly.
//!
//! The generator decides a constructor, builds the children, draws a
//! variant, and only then asks for the node. The node is built in one step
//! from those parts, so a half-built fragment never exists. Variants are
//! decoded into typed values here; an index the type cannot represent is a
//! [`RuleError::MalformedVariant`].

use std::vec::IntoIter;

use crate::core::grid::{Axis, Column, Row};
use crate::core::symbol::{Color, Shape};
use crate::error::RuleError;
use crate::fragments::{Fragment, Group, GroupPredicate, Predicate, Rule};
use crate::grammar::{Constructor, FragmentRole};

/// Build the node for `constructor` from a variant index and its children.
pub fn assemble(
    constructor: Constructor,
    variant: usize,
    children: Vec<Fragment>,
) -> Result<Fragment, RuleError> {
    use Constructor::*;

    let mut slots = Slots::new(constructor, children);
    let variants = Variants { constructor, variant };

    let fragment = match constructor {
        Universal | Existential | NegativeUniversal => {
            variants.none()?;
            let noun = slots.predicate()?;
            let predicate = slots.predicate()?;
            let rule = match constructor {
                Universal => Rule::Universal { noun, predicate },
                Existential => Rule::Existential { noun, predicate },
                _ => Rule::NegativeUniversal { noun, predicate },
            };
            rule.into()
        }
        GroupRule => {
            variants.none()?;
            Rule::Grouped {
                group: slots.group()?,
                predicate: slots.group_predicate()?,
            }
            .into()
        }
        LineRule => Rule::Line {
            axis: variants.decode(Axis::from_index, 2)?,
            noun: slots.predicate()?,
        }
        .into(),

        ColorNoun => Predicate::ColorNoun(variants.decode(Color::from_index, 3)?).into(),
        ShapeNoun => Predicate::ShapeNoun(variants.decode(Shape::from_index, 3)?).into(),
        RowNoun => Predicate::RowNoun(variants.decode(Row::from_index, 3)?).into(),
        ColumnNoun => Predicate::ColumnNoun(variants.decode(Column::from_index, 3)?).into(),
        EmptyCellNoun => {
            variants.none()?;
            Predicate::EmptyCellNoun.into()
        }

        ColorPredicate => Predicate::Color(variants.decode(Color::from_index, 3)?).into(),
        ShapePredicate => Predicate::Shape(variants.decode(Shape::from_index, 3)?).into(),
        RowPredicate => Predicate::Row(variants.decode(Row::from_index, 3)?).into(),
        ColumnPredicate => Predicate::Column(variants.decode(Column::from_index, 3)?).into(),
        AdjacencyPredicate => {
            variants.none()?;
            Predicate::AdjacentTo(Box::new(slots.predicate()?)).into()
        }

        ColorGroup => variants.plain(Group::Color)?,
        ShapeGroup => variants.plain(Group::Shape)?,
        IdenticalGroup => variants.plain(Group::Identical)?,
        LineGroup => Group::Line(variants.decode(Axis::from_index, 2)?).into(),
        AdjacentGroup => variants.plain(Group::Adjacent)?,

        ColorGroupPredicate => variants.plain(GroupPredicate::SameColor)?,
        ShapeGroupPredicate => variants.plain(GroupPredicate::SameShape)?,
        ColorDistinctGroupPredicate => variants.plain(GroupPredicate::DistinctColors)?,
        ShapeDistinctGroupPredicate => variants.plain(GroupPredicate::DistinctShapes)?,
        ColorShapeGroupPredicate => variants.plain(GroupPredicate::SameColorOrShape)?,
        ContiguousGroupPredicate => variants.plain(GroupPredicate::Contiguous)?,
    };

    slots.finish()?;
    Ok(fragment)
}

struct Variants {
    constructor: Constructor,
    variant: usize,
}

impl Variants {
    fn decode<T>(&self, from_index: fn(usize) -> Option<T>, count: usize) -> Result<T, RuleError> {
        from_index(self.variant).ok_or(RuleError::MalformedVariant {
            constructor: self.constructor,
            variant: self.variant,
            count,
        })
    }

    /// Constructors without flavors only accept variant 0.
    fn none(&self) -> Result<(), RuleError> {
        self.decode(|v| (v == 0).then_some(()), 1)
    }

    fn plain(&self, node: impl Into<Fragment>) -> Result<Fragment, RuleError> {
        self.none()?;
        Ok(node.into())
    }
}

struct Slots {
    constructor: Constructor,
    children: IntoIter<Fragment>,
    given: usize,
    taken: usize,
}

impl Slots {
    fn new(constructor: Constructor, children: Vec<Fragment>) -> Self {
        Self {
            constructor,
            given: children.len(),
            children: children.into_iter(),
            taken: 0,
        }
    }

    fn take<T>(
        &mut self,
        expected: FragmentRole,
        unwrap: fn(Fragment) -> Option<T>,
    ) -> Result<T, RuleError> {
        let slot = self.taken;
        self.taken += 1;

        let child = self.children.next();
        let found = child.as_ref().map(Fragment::role);
        child.and_then(unwrap).ok_or(RuleError::ChildMismatch {
            constructor: self.constructor,
            slot,
            expected,
            found,
        })
    }

    fn predicate(&mut self) -> Result<Predicate, RuleError> {
        self.take(FragmentRole::Predicate, Fragment::into_predicate)
    }

    fn group(&mut self) -> Result<Group, RuleError> {
        self.take(FragmentRole::Group, Fragment::into_group)
    }

    fn group_predicate(&mut self) -> Result<GroupPredicate, RuleError> {
        self.take(FragmentRole::GroupPredicate, Fragment::into_group_predicate)
    }

    /// Every child must have been consumed.
    fn finish(self) -> Result<(), RuleError> {
        if self.given != self.taken {
            return Err(RuleError::ChildCount {
                constructor: self.constructor,
                expected: self.taken,
                found: self.given,
            });
        }
        Ok(())
    }
}
