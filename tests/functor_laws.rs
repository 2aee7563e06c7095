//! Property-based tests for the Functor laws.
//!
//! Verifies the identity and composition laws for the `Functor`
//! implementations shipped by this crate.

use proptest::prelude::*;
use selectlist::persistent::SelectionList;
use selectlist::typeclass::Functor;

// =============================================================================
// Strategy for generating SelectionList
// =============================================================================

fn selection_list_strategy() -> impl Strategy<Value = SelectionList<i32>> {
    prop::collection::vec(any::<i32>(), 1..20)
        .prop_flat_map(|elements| {
            let length = elements.len();
            (Just(elements), 0..length)
        })
        .prop_map(|(elements, position)| {
            let mut iterator = elements.into_iter();
            let selected = iterator.next().expect("strategy generates at least one element");
            SelectionList::from_list(selected, iterator).goto(position)
        })
}

proptest! {
    // =========================================================================
    // Identity Law: fa.fmap(|x| x) == fa
    // =========================================================================

    #[test]
    fn prop_selection_list_identity(list in selection_list_strategy()) {
        let mapped = list.clone().fmap(|element| element);
        prop_assert_eq!(mapped, list);
    }

    #[test]
    fn prop_option_identity(value in prop::option::of(any::<i32>())) {
        prop_assert_eq!(value.fmap(|element| element), value);
    }

    // =========================================================================
    // Composition Law: fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
    // =========================================================================

    #[test]
    fn prop_selection_list_composition(list in selection_list_strategy()) {
        let first = |n: i32| n.wrapping_mul(3);
        let second = |n: i32| n.wrapping_sub(1);

        let sequential = list.clone().fmap(first).fmap(second);
        let composed = list.fmap(move |n| second(first(n)));
        prop_assert_eq!(sequential, composed);
    }

    #[test]
    fn prop_option_composition(value in prop::option::of(any::<i32>())) {
        let first = |n: i32| n.wrapping_add(10);
        let second = |n: i32| n.wrapping_mul(2);

        let sequential = value.fmap(first).fmap(second);
        let composed = value.fmap(move |n| second(first(n)));
        prop_assert_eq!(sequential, composed);
    }

    // =========================================================================
    // fmap_ref agrees with fmap
    // =========================================================================

    #[test]
    fn prop_fmap_ref_agrees_with_fmap(list in selection_list_strategy()) {
        let by_reference = list.fmap_ref(|n| n.wrapping_add(5));
        let by_value = list.fmap(|n| n.wrapping_add(5));
        prop_assert_eq!(by_reference, by_value);
    }

    // =========================================================================
    // Structure preservation
    // =========================================================================

    #[test]
    fn prop_fmap_preserves_selection(list in selection_list_strategy()) {
        let mapped = list.clone().fmap(|n| n.to_string());
        prop_assert_eq!(mapped.len(), list.len());
        prop_assert_eq!(mapped.selected_index(), list.selected_index());
    }
}
