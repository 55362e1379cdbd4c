use crate::{
    config::Transitivity,
    misc::log::targets::{self},
    structures::{dependency::FD, fd_set::FdSet},
};

/// The dependencies derived by exhaustive (exact) transitivity on the given set of dependencies.
///
/// See [transitive_by] for details, and [Transitivity::Exact] for the rule.
///
/// ```rust
/// # use fd_closure::procedures::axioms::transitive;
/// # use fd_closure::structures::{dependency::FD, fd_set::FdSet};
/// let fds: FdSet = ["A -> B", "B -> C", "C -> D"]
///     .into_iter()
///     .map(|s| s.parse::<FD>().unwrap())
///     .collect();
///
/// let derived = transitive(&fds);
/// assert_eq!(derived.len(), 3);
/// assert!(derived.contains(&"A -> D".parse().unwrap()));
/// ```
pub fn transitive(fd_set: &FdSet) -> FdSet {
    transitive_by(fd_set, Transitivity::Exact)
}

/// The dependencies derived by exhaustive transitivity, chained by the given rule.
///
/// Every ordered pair of dependencies *L* → *M*, *M'* → *N* (a dependency may be paired with itself) is examined, and *L* → *N* is derived if `rule` [chains](Transitivity::chains) *M* to *M'*.
/// Pairs are examined again, with derived dependencies included, until a round derives nothing new.
///
/// Only dependencies which are not in the given set are returned.
/// A derivation which re-derives some given dependency is left out of the result.
pub fn transitive_by(fd_set: &FdSet, rule: Transitivity) -> FdSet {
    let mut known = fd_set.clone();
    let mut derived = FdSet::new();
    let mut round = 0;

    loop {
        round += 1;
        let mut fresh = FdSet::new();

        for first in &known {
            for second in &known {
                if rule.chains(first.right(), second.left()) {
                    let fd = FD::new(first.left().clone(), second.right().clone());
                    if !known.contains(&fd) {
                        fresh.add(fd);
                    }
                }
            }
        }

        if fresh.is_empty() {
            break;
        }

        known.add_all(&fresh);
        derived.add_all(&fresh);
    }

    log::trace!(target: targets::AXIOMS, "Transitive ({rule}): {} from {} in {round} rounds", derived.len(), fd_set.len());
    derived
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fds(fds: &[&str]) -> FdSet {
        fds.iter().map(|s| s.parse::<FD>().unwrap()).collect()
    }

    #[test]
    fn chain() {
        let derived = transitive(&fds(&["A -> B", "B -> C"]));
        assert_eq!(derived, fds(&["A -> C"]));
    }

    #[test]
    fn long_chain() {
        let derived = transitive(&fds(&["A -> B", "B -> C", "C -> D", "D -> E"]));
        assert_eq!(
            derived,
            fds(&["A -> C", "A -> D", "A -> E", "B -> D", "B -> E", "C -> E"])
        );
    }

    #[test]
    fn exact_only() {
        let given = fds(&["A -> B C", "B -> D"]);
        assert!(transitive(&given).is_empty());

        let containment = transitive_by(&given, Transitivity::Containment);
        assert_eq!(containment, fds(&["A -> D"]));
    }

    #[test]
    fn self_pairing() {
        assert!(transitive(&fds(&["A -> A"])).is_empty());
        assert!(transitive(&FdSet::new()).is_empty());
    }

    #[test]
    fn cycle() {
        let derived = transitive(&fds(&["A -> B", "B -> A"]));
        assert_eq!(derived, fds(&["A -> A", "B -> B"]));
    }

    #[test]
    fn saturated() {
        let mut given = fds(&["A -> B", "B -> C", "C -> A", "C -> D"]);
        let derived = transitive(&given);
        given.add_all(&derived);

        assert!(transitive(&given).is_empty());
    }
}
