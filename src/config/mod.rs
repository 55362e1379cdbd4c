/*!
Configuration of a closure.

All options are contained within [Config].
The default configuration uses the narrow (exact) rule for transitivity.

Within a closure the exact rule derives what the textbook rule derives, as trivial dependencies bridge from a right side to any of its subsets.
Still, the textbook rule may be requested.

```rust
# use fd_closure::config::{Config, Transitivity};
# use fd_closure::procedures::closure::fd_set_closure_with;
# use fd_closure::structures::{dependency::FD, fd_set::FdSet};
let fds: FdSet = ["A -> B C", "B -> D"]
    .into_iter()
    .map(|s| s.parse::<FD>().unwrap())
    .collect();

let exact = fd_set_closure_with(&fds, &Config::default());
assert!(exact.contains(&"A -> D".parse().unwrap()));

let mut config = Config::default();
config.transitivity.value = Transitivity::Containment;

let containment = fd_set_closure_with(&fds, &config);
assert_eq!(exact, containment);
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod transitivity;
pub use transitivity::Transitivity;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The rule used to chain dependencies by transitivity.
    pub transitivity: ConfigOption<Transitivity>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            transitivity: ConfigOption {
                name: "transitivity",
                min: Transitivity::MIN,
                max: Transitivity::MAX,
                value: Transitivity::Exact,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_within_bounds() {
        let config = Config::default();
        let (min, max) = config.transitivity.min_max();

        assert_eq!(config.transitivity.name, "transitivity");
        assert!(min <= config.transitivity.value && config.transitivity.value <= max);
    }
}
