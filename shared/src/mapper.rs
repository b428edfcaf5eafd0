//! Record Mapper
//!
//! Pure mapping from a validated [`RsvpForm`] to the persisted
//! [`RsvpRecord`]. Attendance-dependent fields are dropped entirely for a
//! declined response; empty free-text fields become explicit nulls. Values
//! are persisted exactly as typed — trimming is a validator concern only.

use crate::models::{AttendingRecord, DeclinedRecord, RsvpForm, RsvpRecord};

/// Empty string → null, anything else kept verbatim
fn text_or_null(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Build the persisted record for one submission
///
/// `submitted_at` (Unix milliseconds) and `user_agent` come from the
/// execution environment at submit time, never from the form.
pub fn prepare_record(form: &RsvpForm, submitted_at: i64, user_agent: &str) -> RsvpRecord {
    if !form.will_attend {
        return RsvpRecord::Declined(DeclinedRecord {
            name: form.name.clone(),
            last_name: form.last_name.clone(),
            will_attend: false,
            submitted_at,
            user_agent: user_agent.to_string(),
        });
    }

    let mut record = AttendingRecord {
        name: form.name.clone(),
        last_name: form.last_name.clone(),
        will_attend: true,
        submitted_at,
        user_agent: user_agent.to_string(),
        dietary_restrictions: text_or_null(&form.dietary_restrictions),
        has_companion: form.has_companion,
        companion_name: None,
        companion_last_name: None,
        companion_dietary_restrictions: None,
        number_of_children: form.number_of_children,
        bus_service: form.bus_service,
        song_suggestion: text_or_null(&form.song_suggestion),
    };

    if form.has_companion {
        if let Some(companion) = &form.companion {
            record.companion_name = Some(text_or_null(&companion.name));
            record.companion_last_name = Some(text_or_null(&companion.last_name));
            record.companion_dietary_restrictions =
                Some(text_or_null(&companion.dietary_restrictions));
        }
    }

    RsvpRecord::Attending(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::CompanionField;
    use crate::models::BusService;

    const UA: &str = "Mozilla/5.0 (test)";

    #[test]
    fn declined_form_maps_to_base_keys_only() {
        let mut form = RsvpForm {
            name: "Luis".to_string(),
            last_name: "Paz".to_string(),
            ..RsvpForm::default()
        };
        // Dependent fields filled in, then attendance flipped off: none of
        // them may leak into the record.
        form.dietary_restrictions = "Vegana".to_string();
        form.song_suggestion = "Una canción".to_string();
        form.number_of_children = 3;
        form.bus_service = BusService::Roundtrip;
        form.toggle_companion();
        form.set_attendance(false);

        let record = prepare_record(&form, 42, UA);
        let json = serde_json::to_value(&record).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 5);
        assert_eq!(json["willAttend"], serde_json::json!(false));
        assert_eq!(json["submittedAt"], serde_json::json!(42));
        assert_eq!(json["userAgent"], serde_json::json!(UA));
        assert!(!obj.contains_key("hasCompanion"));
        assert!(!obj.contains_key("numberOfChildren"));
        assert!(!obj.contains_key("busService"));
    }

    #[test]
    fn attending_without_companion_nulls_empty_text() {
        let form = RsvpForm {
            name: "Ana".to_string(),
            last_name: "Ruiz".to_string(),
            bus_service: BusService::Roundtrip,
            ..RsvpForm::default()
        };

        let record = prepare_record(&form, 42, UA);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["dietaryRestrictions"], serde_json::Value::Null);
        assert_eq!(json["songSuggestion"], serde_json::Value::Null);
        assert_eq!(json["busService"], serde_json::json!("roundtrip"));
        assert_eq!(json["hasCompanion"], serde_json::json!(false));
        assert_eq!(json["numberOfChildren"], serde_json::json!(0));
        assert!(!json.as_object().unwrap().contains_key("companionName"));
    }

    #[test]
    fn companion_values_are_kept_raw_or_nulled() {
        let mut form = RsvpForm {
            name: "Carlos".to_string(),
            last_name: "López".to_string(),
            ..RsvpForm::default()
        };
        form.toggle_companion();
        // Raw value with surrounding whitespace must persist as typed
        form.update_companion(CompanionField::Name, " Ana ");
        form.update_companion(CompanionField::LastName, "Martín");

        let record = prepare_record(&form, 42, UA);
        assert_eq!(record.companion_name(), Some(" Ana "));
        assert_eq!(record.companion_last_name(), Some("Martín"));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json["companionDietaryRestrictions"],
            serde_json::Value::Null
        );
    }
}
