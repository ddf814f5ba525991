//! Property tests: matchers behave the same on both sides of `==` and `!=` is
//! always the negation of `==`.

use mockextras::{
    matcher::{self, AnyOf, Matcher},
    Any, Type, Value,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::None),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        (-1.0e6f64..1.0e6).prop_map(Value::from),
        "[a-z ]{0,8}".prop_map(Value::from),
        prop::collection::vec(any::<u8>(), 0..8).prop_map(Value::bytes),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
            prop::collection::vec(inner, 0..4).prop_map(Value::Tuple),
        ]
    })
}

fn arb_type() -> impl Strategy<Value = Type> {
    prop_oneof![
        Just(Type::OBJECT),
        Just(Type::NONE),
        Just(Type::NUMBER),
        Just(Type::INT),
        Just(Type::SEQUENCE),
        Just(Type::TEXT),
        Just(Type::STR),
        Just(Type::LIST),
    ]
}

fn arb_matcher() -> impl Strategy<Value = Box<dyn Matcher>> {
    prop_oneof![
        arb_type().prop_map(|ty| Box::new(Any::of(ty)) as Box<dyn Matcher>),
        arb_value().prop_map(|needle| Box::new(matcher::contains(needle)) as Box<dyn Matcher>),
        prop::collection::vec(arb_scalar(), 0..6)
            .prop_map(|values| Box::new(AnyOf::from_values(values).unwrap()) as Box<dyn Matcher>),
    ]
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// The default `Any` matches every value from both sides.
    #[test]
    fn any_matches_everything(value in arb_value()) {
        let whatever = matcher::any();

        prop_assert!(whatever == value);
        prop_assert!(value == whatever);
        prop_assert!(!(whatever != value));
    }

    /// `Any` constrained to the runtime type of a value always matches it.
    #[test]
    fn any_matches_own_type(value in arb_value()) {
        prop_assert!(Any::of(value.type_()) == value);
    }

    /// `Any` only matches values of the expected type or of a subtype.
    #[test]
    fn any_follows_type_hierarchy(value in arb_value(), ty in arb_type()) {
        let expected = value.type_().is_subtype_of(ty);

        prop_assert_eq!(Any::of(ty) == value, expected);
    }

    /// A list always contains each of its elements.
    #[test]
    fn contains_every_element(items in prop::collection::vec(arb_value(), 1..6)) {
        let list = Value::List(items.clone());

        for item in items {
            prop_assert!(matcher::contains(item) == list);
        }
    }

    /// An `AnyOf` built from discrete values matches exactly those values.
    #[test]
    fn any_of_matches_members(
        values in prop::collection::vec(arb_scalar(), 0..6),
        candidate in arb_scalar()
    ) {
        let matcher = AnyOf::from_values(values.clone()).unwrap();

        for value in &values {
            prop_assert!(matcher == *value);
        }

        prop_assert_eq!(matcher == candidate, values.contains(&candidate));
    }

    /// For every candidate a matcher can compare, `==` gives the same result
    /// on both sides and `!=` is its negation.
    #[test]
    fn symmetric_and_consistent(matcher in arb_matcher(), value in arb_value()) {
        if let Ok(matched) = matcher.matches(&value) {
            let arg = mockextras::Arg::from(value.clone());
            let slot = mockextras::Arg::Matcher(matcher.into());

            prop_assert_eq!(slot == value, matched);
            prop_assert_eq!(value == slot, matched);
            prop_assert_eq!(arg == slot, slot == arg);
            prop_assert_eq!(slot.matches_value(&value).map(|m| !m), Ok(!matched));
        }
    }

    /// `not_matches` is the negation of `matches` whenever `matches` succeeds.
    #[test]
    fn negation_is_consistent(matcher in arb_matcher(), value in arb_value()) {
        match matcher.matches(&value) {
            Ok(matched) => prop_assert_eq!(matcher.not_matches(&value), Ok(!matched)),
            Err(error) => prop_assert_eq!(matcher.not_matches(&value), Err(error)),
        }
    }
}
