//! Verifier combinators
//!
//! Combinators build new verifiers out of existing ones:
//!
//! - [`And`] / [`and`]: sequential, stops at the first failure
//! - [`Or`] / [`or`]: exhaustive, aggregates every branch's reason
//! - [`Not`] / [`not`]: inversion
//! - [`ArrayOf`] / [`is_array_of`]: per-element verification
//!
//! A combinator is itself a verifier, so combinators nest freely.

pub mod and;
pub mod each;
pub mod not;
pub mod or;

pub use and::{And, and};
pub use each::{ArrayOf, is_array_of};
pub use not::{Not, not};
pub use or::{Or, or};
