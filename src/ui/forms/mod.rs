//! Form rendering module
//!
//! - `field_renderer`: single field rendering
//! - `submission_form`: the contact form panel and the newsletter strip

mod field_renderer;
mod submission_form;

pub use field_renderer::{draw_field, field_height};
pub use submission_form::{draw_contact_form, draw_newsletter, form_help_text};
