//! Form Validation
//!
//! Pure check over an [`RsvpForm`]; returns the user-facing messages in a
//! fixed order, empty when the form is valid. Only presence is validated:
//! the children count is constrained by the input widget and the bus
//! service enum is closed by construction.

use crate::models::RsvpForm;

pub const MSG_NAME_REQUIRED: &str = "El nombre es obligatorio";
pub const MSG_LAST_NAME_REQUIRED: &str = "El apellido es obligatorio";
pub const MSG_COMPANION_NAME_REQUIRED: &str = "El nombre del acompañante es obligatorio";
pub const MSG_COMPANION_LAST_NAME_REQUIRED: &str = "El apellido del acompañante es obligatorio";

/// Validate a form, returning an ordered list of error messages
pub fn validate(form: &RsvpForm) -> Vec<String> {
    let mut errors = Vec::new();

    if form.name.trim().is_empty() {
        errors.push(MSG_NAME_REQUIRED.to_string());
    }
    if form.last_name.trim().is_empty() {
        errors.push(MSG_LAST_NAME_REQUIRED.to_string());
    }

    // Companion fields are required only while they are visible
    if form.will_attend && form.has_companion {
        if let Some(companion) = &form.companion {
            if companion.name.trim().is_empty() {
                errors.push(MSG_COMPANION_NAME_REQUIRED.to_string());
            }
            if companion.last_name.trim().is_empty() {
                errors.push(MSG_COMPANION_LAST_NAME_REQUIRED.to_string());
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::CompanionField;

    fn valid_form() -> RsvpForm {
        RsvpForm {
            name: "Ana".to_string(),
            last_name: "Ruiz".to_string(),
            ..RsvpForm::default()
        }
    }

    #[test]
    fn valid_form_has_no_errors() {
        assert!(validate(&valid_form()).is_empty());
    }

    #[test]
    fn whitespace_only_name_is_rejected() {
        for name in ["", "   ", "\t\n"] {
            let mut form = valid_form();
            form.name = name.to_string();
            let errors = validate(&form);
            assert_eq!(errors, vec![MSG_NAME_REQUIRED.to_string()], "name = {name:?}");
        }
    }

    #[test]
    fn errors_keep_declaration_order() {
        let mut form = RsvpForm::default();
        form.toggle_companion();
        let errors = validate(&form);
        assert_eq!(
            errors,
            vec![
                MSG_NAME_REQUIRED.to_string(),
                MSG_LAST_NAME_REQUIRED.to_string(),
                MSG_COMPANION_NAME_REQUIRED.to_string(),
                MSG_COMPANION_LAST_NAME_REQUIRED.to_string(),
            ]
        );
    }

    #[test]
    fn companion_fields_not_checked_when_not_attending() {
        let mut form = valid_form();
        form.toggle_companion();
        form.set_attendance(false);
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn companion_last_name_checked_independently() {
        let mut form = valid_form();
        form.toggle_companion();
        form.update_companion(CompanionField::Name, "Mar");
        let errors = validate(&form);
        assert_eq!(errors, vec![MSG_COMPANION_LAST_NAME_REQUIRED.to_string()]);
    }
}
