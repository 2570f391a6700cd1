//! Declarative schema validation for the sign-up form
//!
//! Rules live in `rules`, the engine that runs them and aggregates
//! failures lives in `schema`.

mod errors;
pub mod rules;
mod schema;

pub use errors::{FieldError, FieldErrors};
pub use schema::{validate, AvatarFile, SignupInput, Tech, TechInput, ValidatedSignup};
