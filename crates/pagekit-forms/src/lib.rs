//! Client-side form validation.
//!
//! [`FormValidator`] checks individual fields (required, email, number with
//! optional bounds) or a whole form, and keeps one feedback element under
//! each invalid field. Fields are reached through
//! [`pagekit_bridge::FieldElement`], so the same rules apply to any UI
//! binding.

mod parse;
mod validator;

pub use parse::{is_email, parse_float_prefix};
pub use validator::FormValidator;
