use std::collections::BTreeMap;
use stubgen_descriptor::{ConstructorDescriptor, MethodDescriptor, TypeDescriptor};

/// Every abstract, accessible method reachable through the type's
/// hierarchy, counted once.
///
/// Declared and inherited members are merged into a signature-keyed
/// map before filtering, so a method re-exposed by several ancestors
/// collapses to one entry and return-type covariance never splits a
/// key. The `BTreeMap` fixes the rendered order to the canonical
/// signature sort, making repeated runs byte-identical.
pub fn collect_methods(token: &TypeDescriptor) -> Vec<&MethodDescriptor> {
    let mut merged: BTreeMap<String, &MethodDescriptor> = BTreeMap::new();
    for method in token
        .declared_methods
        .iter()
        .chain(token.inherited_methods.iter())
    {
        merged.entry(method.signature()).or_insert(method);
    }

    merged
        .into_values()
        .filter(|method| method.modifiers.is_abstract && !method.modifiers.is_private())
        .collect()
}

/// Non-private constructors declared directly on the type. Interfaces
/// contribute none.
pub fn collect_constructors(token: &TypeDescriptor) -> Vec<&ConstructorDescriptor> {
    if token.is_interface() {
        return Vec::new();
    }
    token
        .constructors
        .iter()
        .filter(|constructor| !constructor.modifiers.is_private())
        .collect()
}
