/*!
Attributes (aka. 'columns') and sets of attributes.

An attribute is a name, compared by equality.

```rust
# use fd_closure::structures::attribute::{attribute_set, AttributeSet};
let some_attributes: AttributeSet = attribute_set(["name", "id", "name"]);

assert_eq!(some_attributes.len(), 2);
assert!(some_attributes.contains("id"));
```

Sets of attributes are ordered, which gives a canonical order to functional dependencies and to their display.
The order has no meaning beyond this.
*/

use std::collections::BTreeSet;

/// An attribute, aka. a 'column'.
pub type Attribute = String;

/// A set of attributes.
pub type AttributeSet = BTreeSet<Attribute>;

/// A set of attributes from anything which can be turned into attributes.
pub fn attribute_set<A: Into<Attribute>>(attributes: impl IntoIterator<Item = A>) -> AttributeSet {
    attributes.into_iter().map(|a| a.into()).collect()
}

/// The attribute set containing only the given attribute.
pub fn singleton(attribute: &str) -> AttributeSet {
    let mut set = AttributeSet::new();
    set.insert(attribute.to_owned());
    set
}

/// The union of two sets of attributes, as a fresh set.
pub fn union(a: &AttributeSet, b: &AttributeSet) -> AttributeSet {
    a.union(b).cloned().collect()
}
