/*!
The closure of a set of functional dependencies, and of a set of attributes.

# Closure of a set of dependencies

The closure of a set of dependencies 𝐅 is the least set which contains 𝐅 and is closed under the [axioms](crate::procedures::axioms), where augmentation is by any single attribute of the attribute universe of 𝐅.

The closure is built in rounds, with an accumulator initialised to a copy of 𝐅:
1. The attribute universe of the accumulator is collected.
2. Each dependency of the accumulator is augmented by each attribute of the universe.
3. Trivial dependencies are derived from the accumulator together with the augmented dependencies, and transitive dependencies from all of these.
4. Everything derived is added to the accumulator.

Rounds continue until a round adds nothing to the accumulator.
Each round reads a fixed snapshot of the accumulator, and the accumulator only grows.
As there are at most 2^(2*n*) dependencies over *n* attributes, rounds always end, though perhaps only after a long time.

```rust
# use fd_closure::procedures::closure::fd_set_closure;
# use fd_closure::structures::{dependency::FD, fd_set::FdSet};
let fds: FdSet = ["A -> B".parse::<FD>().unwrap()].into_iter().collect();

let closure = fd_set_closure(&fds);
assert_eq!(closure.len(), 6);
assert!(closure.contains(&"A B -> A B".parse().unwrap()));
```

# Closure of a set of attributes

The closure *X*⁺ of a set of attributes *X* is every attribute determined by *X*.
This gives a cheap test of whether a dependency is implied by a set of dependencies, without building the closure of the set.

```rust
# use fd_closure::structures::{attribute::attribute_set, dependency::FD, fd_set::FdSet};
# use fd_closure::procedures::closure::attribute_closure;
let fds: FdSet = ["A -> B", "B C -> D"]
    .into_iter()
    .map(|s| s.parse::<FD>().unwrap())
    .collect();

assert_eq!(attribute_closure(&attribute_set(["A", "C"]), &fds), attribute_set(["A", "B", "C", "D"]));
assert!(fds.implies(&"A C -> D".parse().unwrap()));
assert!(!fds.implies(&"A -> D".parse().unwrap()));
```
*/

use crate::{
    config::Config,
    misc::log::targets::{self},
    procedures::axioms::{trivial, transitive_by},
    structures::{
        attribute::{singleton, union, AttributeSet},
        dependency::FD,
        fd_set::FdSet,
    },
};

/// The closure of the given set of dependencies, with the default configuration.
pub fn fd_set_closure(fd_set: &FdSet) -> FdSet {
    fd_set_closure_with(fd_set, &Config::default())
}

/// The closure of the given set of dependencies, with the given configuration.
pub fn fd_set_closure_with(fd_set: &FdSet, config: &Config) -> FdSet {
    let mut closed = fd_set.clone();
    let mut round = 0;

    loop {
        round += 1;
        let size = closed.len();

        let mut scratch = closed.clone();

        for attribute in closed.attributes() {
            let augmenting = singleton(&attribute);
            for fd in &closed {
                scratch.add(FD::new(
                    union(fd.left(), &augmenting),
                    union(fd.right(), &augmenting),
                ));
            }
        }

        let trivial_fds = trivial(&scratch);
        scratch.add_all(&trivial_fds);
        let transitive_fds = transitive_by(&scratch, config.transitivity.value);
        scratch.add_all(&transitive_fds);

        let added = closed.add_all(&scratch);
        log::debug!(target: targets::CLOSURE, "Round {round}: {size} + {added} dependencies");

        if closed.len() == size {
            break;
        }
    }

    log::info!(target: targets::CLOSURE, "Closure of {} dependencies: {} dependencies after {round} rounds", fd_set.len(), closed.len());
    closed
}

/// The closure of the given attributes with respect to the given set of dependencies.
///
/// That is, the given attributes together with the right side of each dependency whose left side is contained in the closure.
pub fn attribute_closure(attributes: &AttributeSet, fd_set: &FdSet) -> AttributeSet {
    let mut closed = attributes.clone();

    loop {
        let size = closed.len();

        for fd in fd_set {
            if fd.left().is_subset(&closed) {
                closed.extend(fd.right().iter().cloned());
            }
        }

        if closed.len() == size {
            break;
        }
    }

    closed
}

impl FdSet {
    /// Whether the given dependency follows from the set.
    ///
    /// In other words, whether the right side of the dependency is contained in the [closure](attribute_closure) of the left side.
    pub fn implies(&self, fd: &FD) -> bool {
        fd.right().is_subset(&attribute_closure(fd.left(), self))
    }
}
