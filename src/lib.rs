//! A library for deriving the functional dependencies implied by a set of functional dependencies.
//!
//! fd_closure implements the derivation rules of normalisation theory (Armstrong's axioms) over a relational schema's attributes, and the closure of a set of functional dependencies under those rules.
//! Everything is a pure computation: given some functional dependencies, the library returns those which follow from them.
//!
//! # Orientation
//!
//! - The [structures] are attributes, sets of attributes, [functional dependencies](structures::dependency), and [sets](structures::fd_set) of those.
//! - The [axioms](procedures::axioms) are three independent derivation rules, each of which takes a set of functional dependencies and returns a set of derived functional dependencies:
//!   + [trivial](procedures::axioms::trivial) (reflexivity),
//!   + [augment](procedures::axioms::augment) (augmentation), and
//!   + [transitive](procedures::axioms::transitive) (transitivity).
//! - The [closure](procedures::closure) applies the axioms until nothing new can be derived.
//!
//! The [power set](generic::power_set) of a set is used to enumerate trivial dependencies.
//!
//! # Examples
//!
//! ```rust
//! # use fd_closure::procedures::closure::fd_set_closure;
//! # use fd_closure::structures::{dependency::FD, fd_set::FdSet};
//! let mut fds = FdSet::new();
//! fds.add("A -> B".parse::<FD>().unwrap());
//! fds.add("B -> C".parse::<FD>().unwrap());
//!
//! let closure = fd_set_closure(&fds);
//!
//! assert!(closure.is_superset(&fds));
//! assert!(closure.contains(&"A -> C".parse::<FD>().unwrap()));
//! ```
//!
//! # Costs
//!
//! The number of distinct functional dependencies over *n* attributes is 2^(2*n*), and the closure of a set of functional dependencies may contain most of these.
//! So, while any closure is finite, a closure over a few dozen attributes will not be computed in any reasonable amount of time or space.
//! No limit is imposed by the library.
//!
//! # Logs
//!
//! Calls to [log!](log) are made with targets listed in [misc::log].
//! For example, with [env_logger](https://docs.rs/env_logger/latest/env_logger/) the size of the closure after each round can be seen with `RUST_LOG=closure=debug …`

pub mod config;
pub mod generic;
pub mod misc;
pub mod procedures;
pub mod structures;
pub mod types;
