//! Built-in leaf rules
//!
//! # Categories
//!
//! - **Primitive**: type checks other rules delegate to
//! - **Character class**: alphabetic, alphanumeric, float-shaped content
//! - **String**: length bounds and casing category
//!
//! # Examples
//!
//! ```rust,ignore
//! use sieve_validator::prelude::*;
//!
//! let username = ForAll::new(rule_set![
//!     MinimumLength::new(3),
//!     MaximumLength::new(20),
//!     TextCase::new(CaseCategory::AllLower),
//! ])?;
//! ```

pub mod char_class;
pub mod length;
pub mod primitive;
pub mod text_case;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use char_class::{Alpha, AlphaNumeric, FloatNumber, alpha, alpha_numeric, float_number};
pub use length::{MaximumLength, MinimumLength, maximum_length, minimum_length};
pub use primitive::{NumericValue, TextValue, numeric_value, text_value};
pub use text_case::{CaseCategory, TextCase, text_case};
