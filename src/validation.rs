//! validation.rs
//! Schema checks for contact-form submissions. Pure: nothing here touches the store.

use validator::ValidateEmail;

use crate::error::ValidationError;
use crate::models::contact_model::{ContactDraft, ContactForm};

/// Top-level domains reserved for special use; never deliverable.
const SPECIAL_USE_TLDS: [&str; 6] = ["localhost", "invalid", "test", "example", "local", "onion"];

/// Domain must be dotted and must not end in a special-use TLD.
fn has_deliverable_domain(email: &str) -> bool {
    let domain = match email.rsplit_once('@') {
        Some((_, domain)) => domain.trim_end_matches('.').to_ascii_lowercase(),
        None => return false,
    };
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !SPECIAL_USE_TLDS.contains(&tld),
        None => false,
    }
}

fn required_text(
    errors: &mut ValidationError,
    field: &str,
    value: Option<String>,
) -> Option<String> {
    match value {
        None => {
            errors.add(field, format!("{} is required", field));
            None
        }
        Some(v) if v.trim().is_empty() => {
            errors.add(field, format!("{} must not be empty", field));
            None
        }
        Some(v) => Some(v),
    }
}

/// Checks a raw submission and turns it into a draft, collecting every
/// violated field instead of stopping at the first one.
pub fn validate_contact_form(form: ContactForm) -> Result<ContactDraft, ValidationError> {
    let mut errors = ValidationError::default();

    let name = required_text(&mut errors, "name", form.name);
    let email = match required_text(&mut errors, "email", form.email) {
        Some(email) if !email.validate_email() || !has_deliverable_domain(&email) => {
            errors.add("email", "value is not a valid email address");
            None
        }
        other => other,
    };
    let message = required_text(&mut errors, "message", form.message);

    match (name, email, message) {
        (Some(name), Some(email), Some(message)) if errors.is_empty() => Ok(ContactDraft {
            name,
            email,
            service: form.service,
            message,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: Option<&str>, email: Option<&str>, message: Option<&str>) -> ContactForm {
        ContactForm {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
            service: Some("SEO".to_string()),
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn accepts_complete_submission() {
        let draft =
            validate_contact_form(form(Some("John Doe"), Some("john.doe@example.com"), Some("hi")))
                .unwrap();
        assert_eq!(draft.name, "John Doe");
        assert_eq!(draft.email, "john.doe@example.com");
        assert_eq!(draft.service.as_deref(), Some("SEO"));
        assert_eq!(draft.message, "hi");
    }

    #[test]
    fn service_is_optional() {
        let mut f = form(Some("Jane"), Some("jane@example.com"), Some("hello"));
        f.service = None;
        let draft = validate_contact_form(f).unwrap();
        assert!(draft.service.is_none());
    }

    #[test]
    fn missing_name_is_rejected() {
        let err = validate_contact_form(form(None, Some("test@example.com"), Some("msg")))
            .unwrap_err();
        assert!(err.has_field("name"));
        assert_eq!(err.fields.len(), 1);
    }

    #[test]
    fn blank_message_is_rejected() {
        let err = validate_contact_form(form(Some("Test"), Some("test@example.com"), Some("   ")))
            .unwrap_err();
        assert!(err.has_field("message"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        for bad in [
            "invalid-email",
            "@example.com",
            "john@",
            "john doe@example.com",
            "john@localhost",
            "a@b",
            "x@host.invalid",
            "x@mail.test",
        ] {
            let err = validate_contact_form(form(Some("Test"), Some(bad), Some("msg")))
                .unwrap_err();
            assert!(err.has_field("email"), "{} should be rejected", bad);
        }
    }

    #[test]
    fn dotted_public_domains_are_accepted() {
        for good in ["john.doe@example.com", "ops@mail.acme.io", "Sales@Company.CO.UK"] {
            assert!(
                validate_contact_form(form(Some("Test"), Some(good), Some("msg"))).is_ok(),
                "{} should be accepted",
                good
            );
        }
    }

    #[test]
    fn reports_every_violated_field() {
        let err = validate_contact_form(ContactForm::default()).unwrap_err();
        assert!(err.has_field("name"));
        assert!(err.has_field("email"));
        assert!(err.has_field("message"));
        assert!(!err.has_field("service"));
    }
}
