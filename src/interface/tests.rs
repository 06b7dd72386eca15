#![cfg(test)]

use std::cmp::Ordering;

use super::*;
use crate::util::panic::assert_panics;

#[test]
fn test_empty_interface() {
    let interface = ElementInterface::<i32>::new();

    assert!(
        interface.try_compare().is_err(),
        "A new interface should have no compare callback."
    );
    assert!(interface.try_copy().is_err());
    assert!(interface.try_display().is_err());
    assert!(interface.try_drop().is_err());
    assert!(interface.try_hash().is_err());
    assert!(interface.try_priority().is_err());

    assert_eq!(
        interface.try_copy().unwrap_err(),
        MissingCallback { callback: "copy" },
        "The error should name the missing callback."
    );
}

#[test]
fn test_missing_callback_panics() {
    assert_panics!(
        {
            ElementInterface::<i32>::new().compare()
        },
        "Fetching a missing callback should panic."
    );
}

#[test]
fn test_trait_backed_callbacks() {
    let interface = ElementInterface::<i32>::ordered()
        .with_clone_copy()
        .with_debug_display()
        .with_default_hash()
        .with_ord_priority();

    let compare = interface.compare();
    assert_eq!(compare(&1, &2), Ordering::Less);
    assert_eq!(compare(&2, &2), Ordering::Equal);
    assert_eq!(compare(&3, &2), Ordering::Greater);

    let copy = interface.copy();
    assert_eq!(copy(&7), 7, "The trait-backed copy callback should clone.");

    let mut rendered = String::new();
    (interface.display())(&42, &mut rendered).unwrap();
    assert_eq!(
        rendered, "42",
        "The trait-backed display callback should write the Debug form."
    );

    let hash = interface.hash();
    assert_eq!(hash(&42), hash(&42), "Equal elements should hash equally.");

    assert_eq!(
        (interface.priority())(&3, &1),
        Ordering::Greater,
        "The trait-backed priority callback should rank greater elements higher."
    );
}

#[test]
fn test_custom_callbacks() {
    fn reversed(a: &i32, b: &i32) -> Ordering {
        b.cmp(a)
    }

    let interface = ElementInterface::new().with_compare(reversed);
    assert_eq!(
        (interface.compare())(&1, &2),
        Ordering::Greater,
        "A custom compare callback should replace the default ordering."
    );
}

#[test]
fn test_interface_is_copied_by_value() {
    let original = ElementInterface::<i32>::new();
    let replacement = original.with_compare(i32::cmp as CompareFn<i32>);

    assert!(
        original.try_compare().is_err(),
        "Builders should leave the record they were called on untouched."
    );
    assert!(replacement.try_compare().is_ok());
}
