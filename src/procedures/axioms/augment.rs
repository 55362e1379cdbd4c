use crate::{
    misc::log::targets::{self},
    structures::{attribute::AttributeSet, fd_set::FdSet},
};

/// Augments each dependency of the given set with the given attributes.
///
/// For each dependency *L* → *R* the dependency *L* ∪ `attributes` → *R* ∪ `attributes` is derived.
/// One dependency is derived from each given dependency, though distinct dependencies may coincide after augmentation (e.g. *A* → *B* and *A*, *C* → *B* by *C*).
/// Augmenting by the empty set returns a copy of the given set.
///
/// ```rust
/// # use fd_closure::procedures::axioms::augment;
/// # use fd_closure::structures::{attribute::attribute_set, dependency::FD, fd_set::FdSet};
/// let fds: FdSet = ["A -> B".parse::<FD>().unwrap()].into_iter().collect();
///
/// let augmented = augment(&fds, &attribute_set(["C"]));
/// assert!(augmented.contains(&"A C -> B C".parse().unwrap()));
/// ```
pub fn augment(fd_set: &FdSet, attributes: &AttributeSet) -> FdSet {
    let augmented: FdSet = fd_set
        .iter()
        .map(|fd| {
            let mut fd = fd.clone();
            fd.add_to_left(attributes);
            fd.add_to_right(attributes);
            fd
        })
        .collect();

    log::trace!(target: targets::AXIOMS, "Augment: {} by {} attributes", augmented.len(), attributes.len());
    augmented
}
