//! Form domain layer
//!
//! Type-safe form handling for the business profile form.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{Form, RecommendationForm};
