//! Form State Machine
//!
//! Transition functions over the single mutable [`RsvpForm`] of a form
//! session. No I/O here; persistence happens in [`crate::submit`].

use crate::models::{Companion, RsvpForm};

/// Named companion field for [`RsvpForm::update_companion`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanionField {
    Name,
    LastName,
    DietaryRestrictions,
}

impl RsvpForm {
    /// Set the attendance flag
    ///
    /// Dependent fields are NOT cleared: they stay in memory so the user
    /// can flip back without losing input. The mapper excludes them from
    /// persistence while `will_attend` is false.
    pub fn set_attendance(&mut self, will_attend: bool) {
        self.will_attend = will_attend;
    }

    /// Flip the companion toggle
    ///
    /// Turning on initializes an empty [`Companion`] with a fresh id;
    /// turning off clears it. This is the single place that keeps
    /// `has_companion` and `companion` in agreement.
    pub fn toggle_companion(&mut self) {
        self.has_companion = !self.has_companion;
        self.companion = if self.has_companion {
            Some(Companion::new())
        } else {
            None
        };
    }

    /// Set one companion field; no-op while no companion is present
    pub fn update_companion(&mut self, field: CompanionField, value: impl Into<String>) {
        let Some(companion) = self.companion.as_mut() else {
            return;
        };
        let value = value.into();
        match field {
            CompanionField::Name => companion.name = value,
            CompanionField::LastName => companion.last_name = value,
            CompanionField::DietaryRestrictions => companion.dietary_restrictions = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_companion_keeps_flag_and_record_in_agreement() {
        let mut form = RsvpForm::default();
        assert!(!form.has_companion);
        assert!(form.companion.is_none());

        for _ in 0..5 {
            form.toggle_companion();
            assert_eq!(form.has_companion, form.companion.is_some());
        }
    }

    #[test]
    fn toggle_on_generates_fresh_companion() {
        let mut form = RsvpForm::default();
        form.toggle_companion();
        let first_id = form.companion.as_ref().unwrap().id.clone();
        form.update_companion(CompanionField::Name, "Mar");

        form.toggle_companion();
        form.toggle_companion();
        let companion = form.companion.as_ref().unwrap();
        assert_ne!(companion.id, first_id);
        assert!(companion.name.is_empty());
    }

    #[test]
    fn update_companion_is_noop_without_companion() {
        let mut form = RsvpForm::default();
        form.update_companion(CompanionField::Name, "Mar");
        assert!(form.companion.is_none());

        form.toggle_companion();
        form.update_companion(CompanionField::Name, "Mar");
        form.update_companion(CompanionField::LastName, "Sol");
        form.update_companion(CompanionField::DietaryRestrictions, "Sin gluten");
        let companion = form.companion.as_ref().unwrap();
        assert_eq!(companion.name, "Mar");
        assert_eq!(companion.last_name, "Sol");
        assert_eq!(companion.dietary_restrictions, "Sin gluten");
    }

    #[test]
    fn set_attendance_leaves_dependent_fields_in_memory() {
        let mut form = RsvpForm::default();
        form.dietary_restrictions = "Vegetariana".to_string();
        form.set_attendance(false);
        assert!(!form.will_attend);
        assert_eq!(form.dietary_restrictions, "Vegetariana");
    }
}
