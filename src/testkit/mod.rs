//! Testing utilities for modelschema.
//!
//! - **Builders**: terse constructors for getters, setters and method sets
//! - **[`RecordingPolicy`]**: a policy that records every hook call and lets
//!   a test choose the setter verdict
//! - **Assertion macros**: [`crate::assert_has_diagnostic!`]
//!
//! ```rust,ignore
//! use modelschema::testkit::{getter, method_set, RecordingPolicy};
//!
//! let set = method_set("Person", vec![getter("Person", "getName", "String")]);
//! let (extractor, policy) = RecordingPolicy::extractor();
//! let result = extractor.extract(&set);
//! assert_eq!(policy.calls().len(), 2);
//! ```

pub mod assertions;
pub mod helpers;

pub use helpers::{
    extractor_with, getter, method_set, setter, HookCall, RecordingPolicy,
};
