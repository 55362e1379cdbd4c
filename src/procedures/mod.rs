/*!
Procedures for deriving functional dependencies.

- The [axioms] each derive some collection of dependencies from a set of dependencies, in a single application of the rule.
- The [closure] of a set of dependencies applies the axioms until nothing new is derived.

All procedures are pure: the given sets are only read, and results are fresh sets.
*/

pub mod axioms;
pub mod closure;
