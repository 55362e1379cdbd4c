/*!
Functional dependencies.

A functional dependency *L* → *R* is a pair of [attribute sets](crate::structures::attribute::AttributeSet).
Two dependencies are equal just in case their left sides are equal and their right sides are equal.

The textual representation of a dependency lists the attributes of each side separated by commas and/or whitespace, with the sides separated by `->`.

```rust
# use fd_closure::structures::dependency::FD;
# use fd_closure::structures::attribute::attribute_set;
let fd: FD = "A B -> C".parse().unwrap();

assert_eq!(fd.left(), &attribute_set(["A", "B"]));
assert_eq!(fd.right(), &attribute_set(["C"]));
assert_eq!(fd.to_string(), "A, B -> C");
assert!(!fd.is_trivial());
```

Either side may be empty, though an empty side is of little use in derivation.
*/

use std::str::FromStr;

use crate::{
    structures::attribute::{Attribute, AttributeSet},
    types::err::{self},
};

/// A functional dependency.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FD {
    left: AttributeSet,
    right: AttributeSet,
}

impl FD {
    /// A fresh dependency, `left` → `right`.
    pub fn new(left: AttributeSet, right: AttributeSet) -> Self {
        FD { left, right }
    }

    /// The determining (left) side of the dependency.
    pub fn left(&self) -> &AttributeSet {
        &self.left
    }

    /// The dependent (right) side of the dependency.
    pub fn right(&self) -> &AttributeSet {
        &self.right
    }

    /// Extends the left side of the dependency with the given attributes.
    pub fn add_to_left(&mut self, attributes: &AttributeSet) {
        self.left.extend(attributes.iter().cloned());
    }

    /// Extends the right side of the dependency with the given attributes.
    pub fn add_to_right(&mut self, attributes: &AttributeSet) {
        self.right.extend(attributes.iter().cloned());
    }

    /// Whether the dependency is trivial, i.e. the right side is a subset of the left side.
    pub fn is_trivial(&self) -> bool {
        self.right.is_subset(&self.left)
    }

    /// An iterator over all attributes of the dependency, without duplicates.
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.left.union(&self.right)
    }
}

impl std::fmt::Display for FD {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let join = |side: &AttributeSet| side.iter().map(|a| a.as_str()).collect::<Vec<_>>().join(", ");
        match (self.left.is_empty(), self.right.is_empty()) {
            (true, true) => write!(f, "->"),
            (true, false) => write!(f, "-> {}", join(&self.right)),
            (false, true) => write!(f, "{} ->", join(&self.left)),
            (false, false) => write!(f, "{} -> {}", join(&self.left), join(&self.right)),
        }
    }
}

fn parse_side(side: &str) -> AttributeSet {
    side.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|name| !name.is_empty())
        .map(|name| name.to_owned())
        .collect()
}

impl FromStr for FD {
    type Err = err::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut sides = s.split("->");

        let left = match sides.next() {
            Some(side) => parse_side(side),
            None => return Err(err::ParseError::MissingArrow),
        };

        let right = match sides.next() {
            Some(side) => parse_side(side),
            None => return Err(err::ParseError::MissingArrow),
        };

        if sides.next().is_some() {
            return Err(err::ParseError::MultipleArrows);
        }

        Ok(FD { left, right })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::attribute::attribute_set;

    #[test]
    fn parse_separators() {
        let spaced: FD = "A B -> C D".parse().unwrap();
        let commas: FD = "A,B->C,D".parse().unwrap();
        let mixed: FD = " B, A ->  D C ".parse().unwrap();

        assert_eq!(spaced, commas);
        assert_eq!(spaced, mixed);
        assert_eq!(spaced.left(), &attribute_set(["A", "B"]));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("A B".parse::<FD>(), Err(err::ParseError::MissingArrow));
        assert_eq!(
            "A -> B -> C".parse::<FD>(),
            Err(err::ParseError::MultipleArrows)
        );
    }

    #[test]
    fn empty_sides() {
        let fd: FD = "A ->".parse().unwrap();
        assert!(fd.right().is_empty());
        assert!(fd.is_trivial());
        assert_eq!(fd.to_string(), "A ->");

        let fd: FD = "-> A".parse().unwrap();
        assert!(fd.left().is_empty());
        assert_eq!(fd.to_string(), "-> A");
    }

    #[test]
    fn display_round_trip() {
        let fd: FD = "name, id -> email".parse().unwrap();
        assert_eq!(fd.to_string(), "id, name -> email");
        assert_eq!(fd.to_string().parse::<FD>(), Ok(fd));
    }

    #[test]
    fn mutators() {
        let mut fd: FD = "A -> B".parse().unwrap();
        let extra = attribute_set(["C"]);

        fd.add_to_left(&extra);
        fd.add_to_right(&extra);

        assert_eq!(fd, "A C -> B C".parse::<FD>().unwrap());
        assert_eq!(fd.attributes().count(), 3);
    }
}
