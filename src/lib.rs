//! # Person Builder Patterns
//!
//! Two variants of the builder pattern for assembling a [`Person`] record:
//!
//! ## Pattern 1: Deferred-Action Builder
//! - Configuration calls record mutation closures; no record exists
//!   until `build()` is called
//! - Steps replay in recording order, so later steps override earlier
//!   ones on the same field
//! - One builder produces any number of independent records
//!
//! ## Pattern 2: Fluent Sub-Builders
//! - Related fields (address, job) grouped behind secondary builders
//! - A sub-builder borrows the parent and returns it from its
//!   completion method, closing the group
//!
//! Run examples with: `cargo run --example <name>`

pub mod deferred;
pub mod fluent;
pub mod person;

pub use person::Person;
