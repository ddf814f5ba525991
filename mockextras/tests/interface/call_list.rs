use mockextras::{
    any_of, call,
    matcher::{any, contains},
    Call,
};

/// Asserts that exactly one call was recorded and that it equals `expected`.
fn assert_called_once_with(recorded: &[Call], expected: &Call) {
    assert_eq!(recorded.len(), 1, "expected exactly one call");
    assert_eq!(recorded[0], *expected);
}

#[test]
fn success() {
    let mut recorded = vec![call!("bye bye", "world")];

    assert_called_once_with(&recorded, &call!("bye bye", any()));

    recorded.push(call!("bye bye", "Fred"));

    assert_eq!(
        recorded,
        vec![call!("bye bye", "world"), call!("bye bye", any())]
    );
    assert_eq!(
        recorded,
        vec![call!("bye bye", any()), call!("bye bye", any())]
    );
    assert_eq!(
        vec![call!("bye bye", any()), call!("bye bye", any())],
        recorded
    );
}

#[test]
fn mixed_matchers() {
    let recorded = vec![
        call!("GET", "/index.html"; status = 200),
        call!("POST", "/login"; status = 302),
    ];

    assert_eq!(
        recorded,
        vec![
            call!(any_of!["GET", "HEAD"].unwrap(), contains("index"); status = 200),
            call!("POST", any(); status = any_of![301, 302].unwrap()),
        ]
    );
}

#[test]
#[should_panic]
fn failure() {
    let recorded = vec![call!("bye bye", "world"), call!("hello", "Fred")];

    assert_eq!(
        recorded,
        vec![call!("bye bye", any()), call!("bye bye", any())]
    );
}
