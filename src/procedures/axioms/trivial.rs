use crate::{
    generic::power_set::power_set,
    misc::log::targets::{self},
    structures::{dependency::FD, fd_set::FdSet},
};

/// The trivial dependencies with respect to the given set of dependencies.
///
/// For each dependency *L* → *R* the dependency *L* → *S* is derived, for every non-empty subset *S* of *L*.
/// Only derived dependencies are returned, and a dependency with an empty left side derives nothing.
///
/// ```rust
/// # use fd_closure::procedures::axioms::trivial;
/// # use fd_closure::structures::{dependency::FD, fd_set::FdSet};
/// let fds: FdSet = ["A B -> C".parse::<FD>().unwrap()].into_iter().collect();
///
/// let trivial_fds = trivial(&fds);
/// assert_eq!(trivial_fds.len(), 3);
/// assert!(trivial_fds.iter().all(|fd| fd.is_trivial()));
/// ```
pub fn trivial(fd_set: &FdSet) -> FdSet {
    let mut trivial = FdSet::new();

    for fd in fd_set {
        for subset in power_set(fd.left()) {
            if !subset.is_empty() {
                trivial.add(FD::new(fd.left().clone(), subset));
            }
        }
    }

    log::trace!(target: targets::AXIOMS, "Trivial: {} from {}", trivial.len(), fd_set.len());
    trivial
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fds(fds: &[&str]) -> FdSet {
        fds.iter().map(|s| s.parse::<FD>().unwrap()).collect()
    }

    #[test]
    fn subsets_of_left() {
        let expected = fds(&["A B -> A", "A B -> B", "A B -> A B"]);
        assert_eq!(trivial(&fds(&["A B -> C"])), expected);
    }

    #[test]
    fn no_echo() {
        let derived = trivial(&fds(&["A -> B"]));
        assert_eq!(derived, fds(&["A -> A"]));
        assert!(!derived.contains(&"A -> B".parse().unwrap()));
    }

    #[test]
    fn empty_left() {
        assert!(trivial(&fds(&["-> A"])).is_empty());
        assert!(trivial(&FdSet::new()).is_empty());
    }

    #[test]
    fn sound() {
        let derived = trivial(&fds(&["A B C -> D", "D -> E", "E F -> A"]));

        // 7 + 1 + 3
        assert_eq!(derived.len(), 11);
        for fd in &derived {
            assert!(!fd.right().is_empty());
            assert!(fd.is_trivial());
        }
    }
}
