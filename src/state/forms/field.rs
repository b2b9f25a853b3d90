//! Form field value objects

use super::schema::FieldSpec;

/// Input flavour of a field, mirroring the HTML input types the forms use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Phone,
    Multiline,
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub value: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl FormField {
    /// Create an empty field from its spec
    pub fn from_spec(spec: &FieldSpec) -> Self {
        Self {
            name: spec.name.to_string(),
            label: spec.label.to_string(),
            placeholder: spec.placeholder.to_string(),
            value: String::new(),
            kind: spec.kind,
            required: spec.required,
        }
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match self.kind {
            // Single-line inputs drop newlines
            FieldKind::Text | FieldKind::Email | FieldKind::Phone if c == '\n' => {}
            _ => self.value.push(c),
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == FieldKind::Multiline
    }

    /// Value as sent; email inputs strip surrounding whitespace, others keep it
    pub fn submitted_value(&self) -> &str {
        match self.kind {
            FieldKind::Email => self.value.trim(),
            _ => &self.value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.submitted_value().is_empty()
    }

    /// Loose `local@domain` check, matching what an email input accepts
    pub fn is_valid_email(&self) -> bool {
        let value = self.value.trim();
        match value.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.is_empty()
                    && !domain.contains('@')
                    && !value.chars().any(char::is_whitespace)
            }
            None => false,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> &str {
        &self.value
    }
}
