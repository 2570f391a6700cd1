//! Form domain layer
//!
//! Type-safe state for the sign-up form: field value objects and the
//! form itself with its dynamic tech list.

mod field;
mod signup_form;

pub use field::{FieldValue, FormField};
pub use signup_form::{FormFocus, SignupForm, TechRow, FORM_BUTTONS};
