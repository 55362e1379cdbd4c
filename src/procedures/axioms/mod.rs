/*!
Armstrong's axioms.

Each axiom takes a set of functional dependencies and returns a fresh set of derived dependencies.
Derived dependencies may already be in the given set, and so the typical use of an axiom is to [add](crate::structures::fd_set::FdSet::add_all) the result to the given set.

- [trivial] (reflexivity): *L* → *S* for every non-empty subset *S* of *L*.
- [augment] (augmentation): *L* ∪ *A* → *R* ∪ *A* from *L* → *R*.
- [transitive] (transitivity): *L* → *N* from *L* → *M* and *M* → *N*.
*/

mod augment;
mod transitive;
mod trivial;

pub use augment::augment;
pub use transitive::{transitive, transitive_by};
pub use trivial::trivial;
