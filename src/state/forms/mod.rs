//! Form domain layer
//!
//! Field state, the submission status machine and the controller that ties
//! them to a form-intake endpoint. The contact forms and the newsletter
//! signup are all instances of the same workflow, parametrized by
//! [`FormSchema`].

mod controller;
mod error;
mod field;
mod form_state;
mod schema;

pub use controller::SubmissionController;
pub use error::FormError;
pub use field::{FieldKind, FormField};
pub use form_state::{Form, FormStatus, SubmissionForm};
pub use schema::{FieldSpec, FormSchema, PostSuccess, NEWSLETTER_REVERT_DELAY};
