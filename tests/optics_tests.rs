#![cfg(all(feature = "typeclass", feature = "optics"))]
//! Operational tests for the optics surface.

use lawvere::optics::{iso, simple_iso, FunctionLens, Iso, Lens};
use lawvere::typeclass::{FunctorFamily, OptionFamily, ResultFamily};
use lawvere::{iso as iso_macro, lens};
use rstest::rstest;

#[derive(Clone, PartialEq, Debug)]
struct Address {
    street: String,
    city: String,
}

#[derive(Clone, PartialEq, Debug)]
struct Person {
    name: String,
    address: Address,
}

fn sample_person() -> Person {
    Person {
        name: "Alice".to_string(),
        address: Address {
            street: "Main St".to_string(),
            city: "Tokyo".to_string(),
        },
    }
}

// =============================================================================
// Lens basics
// =============================================================================

#[rstest]
fn view_set_modify_through_a_field_lens() {
    let name = lens!(Person, name);

    let person = sample_person();
    assert_eq!(name.view(person.clone()), "Alice");

    let renamed = name.set(person.clone(), "Bob".to_string());
    assert_eq!(renamed.name, "Bob");
    assert_eq!(renamed.address, person.address);

    let shouted = name.modify(person, |name| name.to_uppercase());
    assert_eq!(shouted.name, "ALICE");
}

#[rstest]
fn composition_reaches_nested_fields() {
    let street = lens!(Person, address).compose(lens!(Address, street));

    let person = sample_person();
    assert_eq!(street.view(person.clone()), "Main St");

    let moved = street.set(person, "Oak Ave".to_string());
    assert_eq!(moved.address.street, "Oak Ave");
    assert_eq!(moved.address.city, "Tokyo");
}

#[rstest]
fn effectful_update_declines_without_rebuilding() {
    let name = lens!(Person, name);

    let declined = name.apply::<OptionFamily, _>(
        |current| {
            if current.is_empty() {
                Some("anon".to_string())
            } else {
                None
            }
        },
        sample_person(),
    );
    assert_eq!(declined, None);
}

#[rstest]
fn effectful_update_reports_the_failure_reason() {
    let name = lens!(Person, name);

    let failed = name.apply::<ResultFamily<String>, _>(
        |current| Err(format!("cannot rename {current}")),
        sample_person(),
    );
    assert_eq!(failed, Err("cannot rename Alice".to_string()));
}

#[rstest]
fn effectful_update_threads_success_through_the_rebuild() {
    let name = lens!(Person, name);

    let renamed = name.apply::<ResultFamily<String>, _>(
        |current| Ok(current.to_lowercase()),
        sample_person(),
    );
    assert_eq!(renamed.map(|person| person.name), Ok("alice".to_string()));
}

// =============================================================================
// Polymorphic (type-changing) lenses
// =============================================================================

#[rstest]
fn a_lens_may_change_the_container_type() {
    // Reads the first element of a pair, writes a replacement of a
    // different type, changing the pair's type.
    let first = FunctionLens::new(
        |pair: &(i32, bool)| pair.0,
        |pair: (i32, bool), replacement: String| (replacement, pair.1),
    );

    assert_eq!(first.view((7, true)), 7);
    assert_eq!(
        first.set((7, true), "seven".to_string()),
        ("seven".to_string(), true)
    );
    assert_eq!(
        first.modify((7, false), |n| n.to_string()),
        ("7".to_string(), false)
    );
}

#[rstest]
fn remapping_combinators_compose() {
    let first = FunctionLens::new(
        |pair: &(i32, bool)| pair.0,
        |pair: (i32, bool), replacement: i32| (replacement, pair.1),
    );

    let remapped = first
        .map_a(|n: i32| n.to_string())
        .map_b(|text: String| i32::try_from(text.len()).unwrap_or(i32::MAX));

    assert_eq!(remapped.view((42, true)), "42");
    assert_eq!(remapped.set((42, true), "four".to_string()), (4, true));
}

// =============================================================================
// Iso basics
// =============================================================================

#[rstest]
fn iso_view_and_review_are_the_two_directions() {
    let celsius = iso(
        |fahrenheit: f64| (fahrenheit - 32.0) / 1.8,
        |celsius: f64| celsius.mul_add(1.8, 32.0),
    );

    assert!((celsius.view(212.0) - 100.0).abs() < f64::EPSILON);
    assert!((celsius.review(100.0) - 212.0).abs() < f64::EPSILON);
}

#[rstest]
fn iso_macro_builds_a_function_iso() {
    let swap = iso_macro!(
        |(a, b): (i32, String)| (b, a),
        |(b, a): (String, i32)| (a, b)
    );

    assert_eq!(
        swap.view((42, "hello".to_string())),
        ("hello".to_string(), 42)
    );
    assert_eq!(
        swap.review(("hello".to_string(), 42)),
        (42, "hello".to_string())
    );
}

#[rstest]
fn reverse_of_a_simple_iso_stays_simple() {
    let chars = simple_iso(
        |text: String| text.chars().collect::<Vec<char>>(),
        |chars: Vec<char>| chars.into_iter().collect::<String>(),
    );

    let rendered = chars.reverse();
    assert_eq!(rendered.view(vec!['h', 'i']), "hi");

    // Reversing twice converts the original way again.
    assert_eq!(rendered.reverse().view("hi".to_string()), vec!['h', 'i']);
}

#[rstest]
fn iso_acts_as_a_lens() {
    let chars = simple_iso(
        |text: String| text.chars().collect::<Vec<char>>(),
        |chars: Vec<char>| chars.into_iter().collect::<String>(),
    );

    let reversed = chars.modify("stressed".to_string(), |mut letters| {
        letters.reverse();
        letters
    });
    assert_eq!(reversed, "desserts");

    assert_eq!(chars.set("ignored".to_string(), vec!['n', 'e', 'w']), "new");
}

#[rstest]
fn iso_effectful_apply_maps_the_backward_direction() {
    let parse = simple_iso(
        |text: String| text.parse::<i32>().unwrap_or_default(),
        |number: i32| number.to_string(),
    );

    let bumped = parse.apply::<OptionFamily, _>(|n| n.checked_add(1), "41".to_string());
    assert_eq!(bumped, Some("42".to_string()));

    let overflowed = parse.apply::<OptionFamily, _>(|n| n.checked_add(1), i32::MAX.to_string());
    assert_eq!(overflowed, None);
}

#[rstest]
fn derived_iso_combinators_rebuild_both_directions() {
    let parse = simple_iso(
        |text: String| text.parse::<i32>().unwrap_or_default(),
        |number: i32| number.to_string(),
    );

    // map_s/map_t rebuild the container sides.
    let trimmed = parse.di_map(
        |text: &str| text.trim().to_string(),
        |text: String| format!("[{text}]"),
    );
    assert_eq!(trimmed.view("  42  "), 42);
    assert_eq!(trimmed.set("  0  ", 7), "[7]");
}

#[rstest]
fn generic_code_can_stay_polymorphic_over_the_family() {
    // The same lens call site works for any family the caller picks.
    fn tag_focus<Fam, L>(lens: &L, source: Person) -> Fam::Wrapped<Person>
    where
        Fam: FunctorFamily,
        L: Lens<Person, Person, String, String>,
        Fam::Wrapped<String>: From<String>,
    {
        lens.apply::<Fam, _>(|name| format!("<{name}>").into(), source)
    }

    let name = lens!(Person, name);
    let tagged = tag_focus::<OptionFamily, _>(&name, sample_person());
    assert_eq!(tagged.map(|person| person.name), Some("<Alice>".to_string()));
}
