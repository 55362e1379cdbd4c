/*!
The power set of a set, i.e. the set of all subsets.

```rust
# use std::collections::BTreeSet;
# use fd_closure::generic::power_set::power_set;
let set: BTreeSet<char> = "abc".chars().collect();
let subsets = power_set(&set);

assert_eq!(subsets.len(), 8);
assert!(subsets.contains(&BTreeSet::new()));
assert!(subsets.contains(&set));
```

The power set is built recursively: the power set of the empty set is the set containing the empty set, and otherwise for some element *e* of *S* the power set of *S* is the power set *P* of *S* \ {*e*} together with each member of *P* extended by *e*.

The depth of recursion is the size of the given set, and the size of the result is 2 to the power of the size of the given set.
So, this is only of use for small sets, such as the side of a functional dependency.
*/

use std::collections::BTreeSet;

/// The power set of `set`.
pub fn power_set<E: Ord + Clone>(set: &BTreeSet<E>) -> BTreeSet<BTreeSet<E>> {
    let mut remaining = set.iter();
    let the_power_set = subsets_of(&mut remaining);
    log::trace!(target: crate::misc::log::targets::POWER_SET, "{} subsets of {} elements", the_power_set.len(), set.len());
    the_power_set
}

// Takes the first remaining element as the element to extend subsets of the rest with.
fn subsets_of<'s, E: Ord + Clone + 's>(
    remaining: &mut impl Iterator<Item = &'s E>,
) -> BTreeSet<BTreeSet<E>> {
    let element = match remaining.next() {
        None => return BTreeSet::from([BTreeSet::new()]),
        Some(element) => element,
    };

    let mut subsets = subsets_of(remaining);

    let extended = subsets
        .iter()
        .map(|subset| {
            let mut subset = subset.clone();
            subset.insert(element.clone());
            subset
        })
        .collect::<Vec<_>>();

    subsets.extend(extended);
    subsets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let subsets = power_set(&BTreeSet::<u8>::new());
        assert_eq!(subsets, BTreeSet::from([BTreeSet::new()]));
    }

    #[test]
    fn cardinality() {
        for size in 0..8_u32 {
            let set: BTreeSet<u32> = (0..size).collect();
            let subsets = power_set(&set);

            assert_eq!(subsets.len(), 2_usize.pow(size));
            assert!(subsets.contains(&BTreeSet::new()));
            assert!(subsets.contains(&set));
            assert!(subsets.iter().all(|subset| subset.is_subset(&set)));
        }
    }

    #[test]
    fn input_untouched() {
        let set: BTreeSet<&str> = ["a", "b"].into_iter().collect();
        let copy = set.clone();
        let _ = power_set(&set);
        assert_eq!(set, copy);
    }

    #[test]
    fn pairs() {
        let set: BTreeSet<char> = "pq".chars().collect();
        let expected: BTreeSet<BTreeSet<char>> = [
            BTreeSet::new(),
            BTreeSet::from(['p']),
            BTreeSet::from(['q']),
            BTreeSet::from(['p', 'q']),
        ]
        .into_iter()
        .collect();

        assert_eq!(power_set(&set), expected);
    }
}
