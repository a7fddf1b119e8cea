#![cfg(all(feature = "typeclass", feature = "control"))]
//! Operational tests for the choice family.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use lawvere::control::{Choice2, Choice3, Choice4, CoProduct2, CoProduct3, CoProduct4};
use lawvere::typeclass::{Applicative, Bifunctor, Functor, Monad};
use rstest::rstest;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Discriminant behavior
// =============================================================================

#[rstest]
fn exactly_one_branch_executes() {
    use std::cell::Cell;

    let value: Choice4<i32, bool, u8, String> = Choice4::c(9);

    let executions = Cell::new(0);
    let tag = value.match_with(
        |_| {
            executions.set(executions.get() + 1);
            "a"
        },
        |_| {
            executions.set(executions.get() + 1);
            "b"
        },
        |_| {
            executions.set(executions.get() + 1);
            "c"
        },
        |_| {
            executions.set(executions.get() + 1);
            "d"
        },
    );
    assert_eq!(tag, "c");
    assert_eq!(executions.get(), 1);
}

#[rstest]
fn repeated_match_selects_the_same_branch() {
    let value: Choice2<i32, String> = Choice2::b("stable".to_string());
    for _ in 0..5 {
        assert_eq!(value.clone().match_with(|_| "a", |_| "b"), "b");
    }
}

#[rstest]
fn inspectors_agree_with_match() {
    let value: Choice3<i32, bool, String> = Choice3::b(true);
    assert!(!value.is_a());
    assert!(value.is_b());
    assert!(!value.is_c());
    assert_eq!(value.match_with(|_| "a", |_| "b", |_| "c"), "b");
}

// =============================================================================
// Equality and hash contract
// =============================================================================

#[rstest]
fn equal_constructor_and_payload_means_equal_and_same_hash() {
    let left: Choice3<i32, i32, i32> = Choice3::b(7);
    let right: Choice3<i32, i32, i32> = Choice3::b(7);

    assert_eq!(left, right);
    assert_eq!(hash_of(&left), hash_of(&right));
}

#[rstest]
fn different_constructors_are_never_equal() {
    let by_a: Choice3<i32, i32, i32> = Choice3::a(7);
    let by_b: Choice3<i32, i32, i32> = Choice3::b(7);
    let by_c: Choice3<i32, i32, i32> = Choice3::c(7);

    assert_ne!(by_a, by_b);
    assert_ne!(by_b, by_c);
    assert_ne!(by_a, by_c);
}

#[rstest]
fn different_payloads_are_not_equal() {
    assert_ne!(Choice2::<i32, String>::a(1), Choice2::a(2));
}

// =============================================================================
// Projections
// =============================================================================

#[rstest]
#[case(Choice3::a(1), Some(1), None, None)]
#[case(Choice3::b("two"), None, Some("two"), None)]
#[case(Choice3::c(3.0), None, None, Some(3.0))]
fn projections_match_the_populated_slot(
    #[case] value: Choice3<i32, &'static str, f64>,
    #[case] expected_a: Option<i32>,
    #[case] expected_b: Option<&'static str>,
    #[case] expected_c: Option<f64>,
) {
    assert_eq!(value.project_a(), expected_a);
    assert_eq!(value.project_b(), expected_b);
    assert_eq!(value.project_c(), expected_c);
}

// =============================================================================
// Combinator surface across arities
// =============================================================================

#[rstest]
fn fmap_only_touches_the_last_slot() {
    let last: Choice4<i32, bool, u8, String> = Choice4::d("value".to_string());
    assert_eq!(last.fmap(|s| s.len()), Choice4::d(5));

    let earlier: Choice4<i32, bool, u8, String> = Choice4::a(-1);
    assert_eq!(earlier.fmap(|s| s.len()), Choice4::a(-1));
}

#[rstest]
fn flat_map_chains_successes() {
    let parse = |s: String| -> Choice2<String, i32> {
        s.parse().map_or_else(|_| Choice2::a(format!("bad: {s}")), Choice2::b)
    };

    let chained = Choice2::<String, String>::b("21".to_string())
        .flat_map(parse)
        .flat_map(|n| Choice2::b(n * 2));
    assert_eq!(chained, Choice2::b(42));

    let failed = Choice2::<String, String>::b("x".to_string()).flat_map(parse);
    assert_eq!(failed, Choice2::a("bad: x".to_string()));
}

#[rstest]
fn map2_combines_last_slots() {
    let left: Choice3<String, u8, i32> = Choice3::c(40);
    let right: Choice3<String, u8, i32> = Choice3::c(2);
    assert_eq!(left.map2(right, |a, b| a + b), Choice3::c(42));
}

#[rstest]
fn map2_first_failure_wins() {
    let left: Choice3<String, u8, i32> = Choice3::a("left failed".to_string());
    let right: Choice3<String, u8, i32> = Choice3::b(9);
    assert_eq!(
        left.map2(right, |a, b| a + b),
        Choice3::a("left failed".to_string())
    );
}

#[rstest]
fn product_pairs_last_slots() {
    let left: Choice2<String, i32> = Choice2::b(1);
    let right: Choice2<String, &str> = Choice2::b("one");
    assert_eq!(left.product(right), Choice2::b((1, "one")));
}

#[rstest]
fn then_discards_the_first_payload() {
    let first: Choice2<String, i32> = Choice2::b(1);
    let second: Choice2<String, &str> = Choice2::b("next");
    assert_eq!(first.then(second), Choice2::b("next"));
}

#[rstest]
fn bimap_ref_leaves_the_original_usable() {
    let value: Choice4<i32, bool, String, u8> = Choice4::c("warn".to_string());
    let mapped = value.bimap_ref(|s| s.len(), |byte| i32::from(*byte));
    assert_eq!(mapped, Choice4::c(4));
    assert!(value.is_c());
}

// =============================================================================
// Arity conversion chains
// =============================================================================

#[rstest]
fn diverge_chain_widens_through_the_family() {
    let start: Choice2<i32, bool> = Choice2::a(7);
    let widened: Choice4<i32, bool, String, u8> = start.diverge::<String>().diverge::<u8>();
    assert_eq!(widened, Choice4::a(7));
}

#[rstest]
fn converge_can_route_to_any_remaining_slot() {
    let value: Choice4<i32, bool, String, u8> = Choice4::d(200);

    let to_first = value.clone().converge(|byte| Choice3::a(i32::from(byte)));
    assert_eq!(to_first, Choice3::a(200));

    let to_last = value.converge(|byte| Choice3::c(byte.to_string()));
    assert_eq!(to_last, Choice3::c("200".to_string()));
}

// =============================================================================
// Effectful traversal
// =============================================================================

#[rstest]
fn traverse_option_declines_only_from_the_last_slot() {
    let last: Choice3<i32, bool, &str> = Choice3::c("nope");
    assert_eq!(last.traverse_option(|s| s.parse::<u32>().ok()), None);

    let earlier: Choice3<i32, bool, &str> = Choice3::a(1);
    assert_eq!(
        earlier.traverse_option(|s| s.parse::<u32>().ok()),
        Some(Choice3::a(1))
    );
}

#[rstest]
fn traverse_result_carries_the_error_reason() {
    let last: Choice4<i32, bool, u8, &str> = Choice4::d("nope");
    let traversed = last.traverse_result(|s| s.parse::<u32>().map_err(|_| "unparseable"));
    assert_eq!(traversed, Err("unparseable"));
}

#[rstest]
fn traverse_maps_the_constructor_over_the_effect() {
    let last: Choice2<i32, &str> = Choice2::b("42");
    let traversed = last.traverse(|s| s.parse::<u32>().ok(), Some);
    assert_eq!(traversed, Some(Choice2::b(42)));
}
