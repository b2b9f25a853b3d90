//! Form state management

use super::error::FormError;
use super::field::{FieldKind, FormField};
use super::schema::FormSchema;
use serde_json::{Map, Value};

/// Trait for common form navigation
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Submission lifecycle of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// Field values plus status for one form instance
#[derive(Debug, Clone)]
pub struct SubmissionForm {
    pub fields: Vec<FormField>,
    pub status: FormStatus,
    /// Focus slot; `fields.len()` is the submit button
    pub active_field_index: usize,
}

impl SubmissionForm {
    /// Fresh form with every field empty
    pub fn new(schema: &FormSchema) -> Self {
        Self {
            fields: schema.fields.iter().map(FormField::from_spec).collect(),
            status: FormStatus::Idle,
            active_field_index: 0,
        }
    }

    #[allow(dead_code)]
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Ordered name -> value mapping of the current inputs
    pub fn values(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .map(|f| {
                let value = Value::String(f.submitted_value().to_string());
                (f.name.clone(), value)
            })
            .collect()
    }

    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.active_field_index = 0;
    }

    /// Returns true if the submit button is the active slot
    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == self.fields.len()
    }

    /// Required and email checks, first failing field wins
    pub fn validate(&self) -> Result<(), FormError> {
        for field in &self.fields {
            if field.required && field.is_empty() {
                return Err(FormError::MissingRequired(field.label.clone()));
            }
            if field.kind == FieldKind::Email && !field.is_empty() && !field.is_valid_email() {
                return Err(FormError::InvalidEmail(field.label.clone()));
            }
        }
        Ok(())
    }
}

impl Form for SubmissionForm {
    fn field_count(&self) -> usize {
        self.fields.len() + 1 // inputs plus the submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len());
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_field_index)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}
