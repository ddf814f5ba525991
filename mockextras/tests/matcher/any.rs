use mockextras::{
    call,
    matcher::{any, instance_of, Any},
    Call, Object, Type, Value,
};

#[test]
fn matches_any_value() {
    let whatever = any();

    assert!(whatever == "hello");
    assert!(whatever == 100);
    assert!(whatever == Value::list(0..10));
    assert!(whatever == Value::None);
}

#[test]
fn matches_only_the_expected_type() {
    let anystring = instance_of(Type::STR);

    assert!(anystring == "hello");
    assert!(anystring == "monkey");
    assert!(anystring == String::from("bonjour"));
    assert!(anystring != Value::list(["hello", "world"]));
    assert!(anystring != Value::bytes(*b"hello"));
}

#[test]
fn resolves_types_by_name() {
    let base = Type::class("tests::matcher::any::Request").unwrap();
    let derived = Type::register("tests::matcher::any::GetRequest", base).unwrap();

    let matcher = Any::named("tests::matcher::any::Request").unwrap();
    let request = Value::from(Object::new(derived).with_field("path", "/"));

    assert!(matcher == request);
    assert!(matcher != "/");
    assert_eq!(matcher.to_string(), "Any(tests::matcher::any::Request)");
}

#[test]
fn type_constraint_inside_a_call() {
    let expected = call!("bye bye", instance_of(Type::NUMBER));

    assert_eq!(call!("bye bye", 1), expected);
    assert_eq!(call!("bye bye", 2.5), expected);
    assert_ne!(call!("bye bye", "1"), expected);
    assert_ne!(Call::default(), expected);
}
