use mockextras::{any_of, call, matcher::AnyOf, Call, Value};

#[test]
fn discrete_values() {
    let matcher = any_of![1, 2, 3].unwrap();

    assert!(matcher == 2);
    assert!(matcher != 4);
}

#[test]
fn single_iterable_collapses_duplicates() {
    let matcher = AnyOf::from_iterable(Value::list([1, 2, 2, 3])).unwrap();

    assert!(matcher == 2);
    assert_eq!(matcher.len(), 3);
    assert!(matcher.members().contains(&Value::from(3)));
}

#[test]
fn single_string_is_one_value() {
    let matcher = AnyOf::from_iterable("hello").unwrap();

    assert!(matcher == "hello");
    assert!(matcher != "e");
    assert_eq!(matcher.to_string(), r#"AnyOf({"hello"})"#);
}

#[test]
fn selects_stub_entry() {
    let stub: Vec<(Call, &str)> = vec![
        (call!("get", any_of!["/", "/index.html"].unwrap()), "index"),
        (call!("get", AnyOf::from_iterable(Value::tuple(["/a", "/b"])).unwrap()), "ab"),
    ];

    let lookup = |call: &Call| stub.iter().find(|(c, _)| c == call).map(|(_, ret)| *ret);

    assert_eq!(lookup(&call!("get", "/index.html")), Some("index"));
    assert_eq!(lookup(&call!("get", "/b")), Some("ab"));
    assert_eq!(lookup(&call!("get", "/c")), None);
}

#[test]
#[should_panic(expected = "unhashable type")]
fn failure() {
    let _ = call!(Value::list([1])) == call!(any_of![1].unwrap());
}
