//! Form schemas: what a form collects, where it goes, and what happens after

use super::field::FieldKind;
use std::time::Duration;

/// Delay before the newsletter signup returns to its idle state
pub const NEWSLETTER_REVERT_DELAY: Duration = Duration::from_secs(3);

/// Static description of one input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

/// Behaviour after a successful submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostSuccess {
    /// Stay on the confirmation for the rest of the page view
    Permanent,
    /// Return to an empty, idle form after the delay
    RevertAfter(Duration),
}

/// Configuration of one submission workflow instance
#[derive(Debug, Clone)]
pub struct FormSchema {
    pub title: &'static str,
    pub endpoint: String,
    pub fields: Vec<FieldSpec>,
    /// Constant key/value added to every request body
    pub discriminator: Option<(&'static str, &'static str)>,
    pub post_success: PostSuccess,
    pub submit_label: &'static str,
    pub failure_notice: &'static str,
    pub success_title: &'static str,
    pub success_message: &'static str,
}

impl FormSchema {
    /// Contact form used on the home and contact pages
    pub fn contact(endpoint: impl Into<String>) -> Self {
        Self {
            title: "Contact Me",
            endpoint: endpoint.into(),
            fields: vec![
                FieldSpec {
                    name: "name",
                    label: "Your Name",
                    placeholder: "Enter your name",
                    kind: FieldKind::Text,
                    required: true,
                },
                FieldSpec {
                    name: "email",
                    label: "Email",
                    placeholder: "Enter your email",
                    kind: FieldKind::Email,
                    required: true,
                },
                FieldSpec {
                    name: "phone",
                    label: "Phone",
                    placeholder: "Enter your phone number",
                    kind: FieldKind::Phone,
                    required: false,
                },
                FieldSpec {
                    name: "message",
                    label: "Your Message/Comments",
                    placeholder: "Type your message here...",
                    kind: FieldKind::Multiline,
                    required: true,
                },
            ],
            discriminator: None,
            post_success: PostSuccess::Permanent,
            submit_label: "Send →",
            failure_notice: "There was an error sending your message. Please try again.",
            success_title: "Message Sent!",
            success_message: "Thank you for your message. I'll get back to you soon!",
        }
    }

    /// Footer newsletter signup
    pub fn newsletter(endpoint: impl Into<String>) -> Self {
        Self {
            title: "Get the latest information",
            endpoint: endpoint.into(),
            fields: vec![FieldSpec {
                name: "email",
                label: "Email address",
                placeholder: "Email address",
                kind: FieldKind::Email,
                required: true,
            }],
            discriminator: Some(("type", "newsletter_subscription")),
            post_success: PostSuccess::RevertAfter(NEWSLETTER_REVERT_DELAY),
            submit_label: "→",
            failure_notice: "There was an error subscribing. Please try again.",
            success_title: "Subscribed",
            success_message: "✅ Thank you for subscribing!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_schema_fields_in_order() {
        let schema = FormSchema::contact("https://intake.test/f/contact");
        let names: Vec<_> = schema.fields.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["name", "email", "phone", "message"]);
        assert_eq!(schema.post_success, PostSuccess::Permanent);
        assert!(schema.discriminator.is_none());
    }

    #[test]
    fn test_contact_phone_is_optional() {
        let schema = FormSchema::contact("x");
        let required: Vec<_> = schema
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();
        assert_eq!(required, vec!["name", "email", "message"]);
    }

    #[test]
    fn test_newsletter_schema() {
        let schema = FormSchema::newsletter("https://intake.test/f/news");
        assert_eq!(schema.fields.len(), 1);
        assert_eq!(schema.fields[0].kind, FieldKind::Email);
        assert_eq!(
            schema.discriminator,
            Some(("type", "newsletter_subscription"))
        );
        assert_eq!(
            schema.post_success,
            PostSuccess::RevertAfter(Duration::from_secs(3))
        );
    }
}
