/*!
Sets of functional dependencies.

An [FdSet] is a deduplicated collection of [functional dependencies](FD), used both as the input to a derivation and as the accumulator of derived dependencies.
Two sets are equal just in case they contain the same dependencies.

```rust
# use fd_closure::structures::{dependency::FD, fd_set::FdSet};
let mut fds = FdSet::new();
assert!(fds.add("A -> B".parse::<FD>().unwrap()));
assert!(!fds.add("A -> B".parse::<FD>().unwrap()));

assert_eq!(fds.len(), 1);
```

Sets may be read from text, one dependency per line.
Blank lines, and lines beginning with `#`, are skipped.

```rust
# use fd_closure::structures::fd_set::FdSet;
let text = b"
## employees
id -> name, dept
## departments
dept -> manager
";

let fds = FdSet::read_from(text.as_slice()).unwrap();
assert_eq!(fds.len(), 2);
assert_eq!(fds.attributes().len(), 4);
```
*/

use std::{collections::BTreeSet, io::BufRead};

use crate::{
    misc::log::targets::{self},
    structures::{attribute::AttributeSet, dependency::FD},
    types::err::{self},
};

/// A set of functional dependencies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FdSet {
    fds: BTreeSet<FD>,
}

impl FdSet {
    /// A fresh, empty, set.
    pub fn new() -> Self {
        FdSet::default()
    }

    /// Adds a dependency to the set, returning true if the dependency was not already present.
    pub fn add(&mut self, fd: FD) -> bool {
        self.fds.insert(fd)
    }

    /// Adds each dependency of `other` to the set, returning the count of dependencies which were not already present.
    pub fn add_all(&mut self, other: &FdSet) -> usize {
        let before = self.fds.len();
        self.fds.extend(other.fds.iter().cloned());
        self.fds.len() - before
    }

    /// The number of dependencies in the set.
    pub fn len(&self) -> usize {
        self.fds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fds.is_empty()
    }

    pub fn contains(&self, fd: &FD) -> bool {
        self.fds.contains(fd)
    }

    /// Whether every dependency of `other` is in the set.
    pub fn is_superset(&self, other: &FdSet) -> bool {
        self.fds.is_superset(&other.fds)
    }

    /// An iterator over the dependencies of the set, in order.
    pub fn iter(&self) -> std::collections::btree_set::Iter<'_, FD> {
        self.fds.iter()
    }

    /// The attribute universe of the set.
    /// That is, every attribute which appears on either side of some dependency.
    pub fn attributes(&self) -> AttributeSet {
        self.fds
            .iter()
            .flat_map(|fd| fd.attributes())
            .cloned()
            .collect()
    }

    /// Reads a set of dependencies, one per line.
    ///
    /// ```rust,ignore
    /// let fds = FdSet::read_from(BufReader::new(&file))?;
    /// ```
    pub fn read_from(mut reader: impl BufRead) -> Result<Self, err::ErrorKind> {
        let mut fds = FdSet::new();
        let mut buffer = String::with_capacity(128);
        let mut line_counter = 0;

        loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ErrorKind::Read(line_counter + 1)),
            }

            let line = buffer.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match line.parse::<FD>() {
                Ok(fd) => {
                    fds.add(fd);
                }
                Err(e) => {
                    log::error!(target: targets::PARSE, "Line {line_counter}: {e} in '{line}'");
                    return Err(err::ErrorKind::Dependency(line_counter, e));
                }
            }
        }

        log::info!(target: targets::PARSE, "Read {} dependencies from {line_counter} lines", fds.len());
        Ok(fds)
    }
}

impl std::fmt::Display for FdSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for fd in &self.fds {
            writeln!(f, "{fd}")?;
        }
        Ok(())
    }
}

impl FromIterator<FD> for FdSet {
    fn from_iter<I: IntoIterator<Item = FD>>(iter: I) -> Self {
        FdSet {
            fds: iter.into_iter().collect(),
        }
    }
}

impl Extend<FD> for FdSet {
    fn extend<I: IntoIterator<Item = FD>>(&mut self, iter: I) {
        self.fds.extend(iter);
    }
}

impl IntoIterator for FdSet {
    type Item = FD;
    type IntoIter = std::collections::btree_set::IntoIter<FD>;

    fn into_iter(self) -> Self::IntoIter {
        self.fds.into_iter()
    }
}

impl<'s> IntoIterator for &'s FdSet {
    type Item = &'s FD;
    type IntoIter = std::collections::btree_set::Iter<'s, FD>;

    fn into_iter(self) -> Self::IntoIter {
        self.fds.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::attribute::attribute_set;

    fn fd(s: &str) -> FD {
        s.parse().unwrap()
    }

    #[test]
    fn deduplication() {
        let mut fds = FdSet::new();
        assert!(fds.add(fd("A B -> C")));
        assert!(!fds.add(fd("B, A -> C")));
        assert!(fds.add(fd("A B -> C D")));
        assert_eq!(fds.len(), 2);
    }

    #[test]
    fn add_all_counts_fresh() {
        let mut fds: FdSet = [fd("A -> B"), fd("B -> C")].into_iter().collect();
        let other: FdSet = [fd("B -> C"), fd("C -> D")].into_iter().collect();

        assert_eq!(fds.add_all(&other), 1);
        assert_eq!(fds.len(), 3);
        assert!(fds.is_superset(&other));
        assert!(!other.is_superset(&fds));
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a: FdSet = [fd("A -> B"), fd("B -> C")].into_iter().collect();
        let b: FdSet = [fd("B -> C"), fd("A -> B")].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn attribute_universe() {
        let fds: FdSet = [fd("A -> B"), fd("B C -> D")].into_iter().collect();
        assert_eq!(fds.attributes(), attribute_set(["A", "B", "C", "D"]));
        assert!(FdSet::new().attributes().is_empty());
    }

    #[test]
    fn read_errors() {
        let text = b"A -> B\n\nB C\n";
        assert_eq!(
            FdSet::read_from(text.as_slice()),
            Err(err::ErrorKind::Dependency(3, err::ParseError::MissingArrow))
        );
    }

    #[test]
    fn read_skips_comments() {
        let text = b"# employees\n\nid -> name, dept\n  # departments\ndept -> manager\n";
        let fds = FdSet::read_from(text.as_slice()).unwrap();
        let expected: FdSet = [fd("id -> name dept"), fd("dept -> manager")].into_iter().collect();

        assert_eq!(fds, expected);
    }

    #[test]
    fn display_and_read() {
        let fds: FdSet = [fd("A -> B"), fd("B C -> D")].into_iter().collect();
        let text = fds.to_string();
        assert_eq!(text, "A -> B\nB, C -> D\n");
        assert_eq!(FdSet::read_from(text.as_bytes()), Ok(fds));
    }
}
