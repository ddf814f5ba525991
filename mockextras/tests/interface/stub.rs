use mockextras::{
    any_of, call,
    matcher::{any, contains, instance_of},
    Call, Type, Value,
};

/// Minimal stub table: returns the result of the first entry whose call
/// signature equals the passed call.
struct Stub<R> {
    entries: Vec<(Call, R)>,
}

impl<R: Clone> Stub<R> {
    fn new(entries: Vec<(Call, R)>) -> Self {
        Self { entries }
    }

    fn invoke(&self, call: &Call) -> Option<R> {
        self.entries
            .iter()
            .find(|(signature, _)| signature == call)
            .map(|(_, ret)| ret.clone())
    }
}

#[test]
fn success() {
    let stub = Stub::new(vec![
        (call!("hello", "world"), 100),
        (call!("bye bye", any()), 200),
    ]);

    assert_eq!(stub.invoke(&call!("bye bye", "anything")), Some(200));
    assert_eq!(stub.invoke(&call!("bye bye", "world")), Some(200));
    assert_eq!(stub.invoke(&call!("bye bye", "Fred")), Some(200));
    assert_eq!(stub.invoke(&call!("bye bye", Value::list(0..100))), Some(200));
    assert_eq!(
        stub.invoke(&call!(
            "bye bye",
            Value::map([("a", 1000), ("b", 2000)]).unwrap()
        )),
        Some(200)
    );
    assert_eq!(stub.invoke(&call!("hello", "world")), Some(100));
}

#[test]
fn no_entry() {
    let stub = Stub::new(vec![(call!("bye bye", any()), 200)]);

    assert_eq!(stub.invoke(&call!("hello", "world")), None);
    assert_eq!(stub.invoke(&call!("bye bye")), None);
    assert_eq!(stub.invoke(&call!("bye bye", 1, 2)), None);
}

#[test]
fn first_entry_wins() {
    let stub = Stub::new(vec![
        (call!("get", contains("admin")), "forbidden"),
        (call!("get", instance_of(Type::STR)), "ok"),
        (call!("get", any()), "bad request"),
    ]);

    assert_eq!(stub.invoke(&call!("get", "/admin/users")), Some("forbidden"));
    assert_eq!(stub.invoke(&call!("get", "/users")), Some("ok"));
}

#[test]
fn keyword_arguments() {
    let stub = Stub::new(vec![
        (call!("connect"; port = any_of![80, 443].unwrap()), "web"),
        (call!("connect"; port = any()), "other"),
    ]);

    assert_eq!(stub.invoke(&call!("connect"; port = 443)), Some("web"));
    assert_eq!(stub.invoke(&call!("connect"; port = 22)), Some("other"));
    assert_eq!(stub.invoke(&call!("connect")), None);
}

#[test]
#[should_panic]
fn failure() {
    let stub = Stub::new(vec![(call!("bye bye", contains("monkey")), 200)]);

    stub.invoke(&call!("bye bye", 5));
}
