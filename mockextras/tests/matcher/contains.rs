use mockextras::{
    call,
    matcher::{contains, Matcher},
    Call, Error, Value,
};

#[test]
fn success() {
    let contains_five = contains(5);

    assert!(contains_five == Value::list(0..10));
    assert!(contains_five != Value::list(0..4));

    let contains_ello = contains("ello");

    assert!(contains_ello == "hello");
    assert!(contains_ello != "bye bye");
}

#[test]
fn selects_stub_entry() {
    let stub: Vec<(Call, u32)> = vec![
        (call!("hello", "world"), 100),
        (call!("bye bye", contains("monkey")), 200),
    ];

    let result = stub
        .iter()
        .find(|(c, _)| *c == call!("bye bye", "uncle monkey"))
        .map(|(_, ret)| *ret);

    assert_eq!(result, Some(200));
}

#[test]
fn asserts_recorded_calls() {
    let recorded = vec![call!("bye bye", "world"), call!("bye bye", "Fred")];

    assert_eq!(
        recorded,
        [call!("bye bye", contains("or")), call!("bye bye", contains("red"))]
    );
}

#[test]
fn non_container_is_an_error() {
    assert_eq!(
        contains(1).matches(&Value::from(5)),
        Err(Error::NotAContainer {
            type_name: "int".into()
        })
    );
}

#[test]
#[should_panic]
fn failure() {
    let _ = call!("bye bye", 5) == call!("bye bye", contains(1));
}
