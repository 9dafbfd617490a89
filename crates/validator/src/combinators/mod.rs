//! Aggregate combinators
//!
//! Combinators compose existing rules into larger ones. [`ForAll`] is the
//! AND-with-collect-all aggregate: every sub-rule runs, every failure is
//! reported, in evaluation order.

pub mod for_all;

pub use for_all::{ForAll, for_all};
