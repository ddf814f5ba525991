#![warn(
    unused,
    clippy::pedantic,
    future_incompatible,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility
)]
#![allow(clippy::module_name_repetitions)]

//! `mockextras` provides matchers that act as wildcards when comparing call
//! arguments, either to select the result of a stub or to assert the calls a
//! mock received.
//!
//! ```
//! use mockextras::{call, matcher::any, Call};
//!
//! let stub: Vec<(Call, u32)> = vec![
//!     (call!("hello", "world"), 100),
//!     (call!("bye bye", any()), 200),
//! ];
//!
//! let lookup = |call: Call| stub.iter().find(|(c, _)| *c == call).map(|(_, ret)| *ret);
//!
//! assert_eq!(lookup(call!("bye bye", "world")), Some(200));
//! assert_eq!(lookup(call!("bye bye", vec![1, 2, 3])), Some(200));
//! assert_eq!(lookup(call!("hello", "world")), Some(100));
//! assert_eq!(lookup(call!("hello", "Fred")), None);
//! ```
//!
//! The following matchers are defined in the [`matcher`] module:
//! - [`Any`](matcher::Any)
//! - [`Contains`](matcher::Contains)
//! - [`AnyOf`](matcher::AnyOf)

pub mod call;
pub mod error;
pub mod matcher;
pub mod types;
pub mod value;

pub use call::{Arg, Call};
pub use error::{Error, Result};
pub use matcher::{any, contains, instance_of, Any, AnyOf, Contains, Matcher};
pub use types::Type;
pub use value::{Object, Value};
