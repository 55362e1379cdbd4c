//! Key structures: attributes, functional dependencies, and sets of functional dependencies.
//!
//! ## Attributes and schemas
//!
//! An [attribute](attribute::Attribute) is a name, and nothing more.
//! Attributes are compared by equality of names.
//!
//! A relational schema is some set of attributes, and every functional dependency is implicitly relative to some schema.
//! Schemas do not have an implementation. \
//! Instead, the *attribute universe* of a set of functional dependencies (the attributes which appear in some dependency) serves as the schema of interest.
//!
//! ## Functional dependencies
//!
//! A [functional dependency](dependency::FD) *L* → *R* is a pair of sets of attributes, read as the values of *L* determine the values of *R*.
//!
//! Structures are values.
//! A derivation always builds fresh sets and dependencies, and never revises those it derives from.

pub mod attribute;
pub mod dependency;
pub mod fd_set;
