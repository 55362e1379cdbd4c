/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [closure](crate::procedures::closure) of a set of functional dependencies.
    pub const CLOSURE: &str = "closure";

    /// Logs related to the [axioms](crate::procedures::axioms).
    pub const AXIOMS: &str = "axioms";

    /// Logs related to [power sets](crate::generic::power_set).
    pub const POWER_SET: &str = "power_set";

    /// Logs related to reading functional dependencies.
    pub const PARSE: &str = "parse";
}
