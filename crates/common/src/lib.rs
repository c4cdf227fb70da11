//! Shared types and helpers used across the membership service crates.

pub mod types;
pub mod validation;

pub use types::{MAX_GENERATED_ID, MIN_GENERATED_ID, MemberId};
pub use validation::{is_valid_date, is_valid_email, parse_date};
