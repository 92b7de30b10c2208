//! # Update planning
//!
//! [`plan`] turns an edited [`UserRecord`] plus the two password inputs into the
//! [`UpdateRequest`] that will be sent, or rejects the attempt locally.
//!
//! The policy is a *non-empty filter*, not a diff: every allowed field whose
//! edited value is present and not `""` is sent, even if it equals the value
//! that was loaded. Blank means "leave unchanged", never "erase".
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. date of birth after `today` → [`ValidationError::DobInFuture`]
//! 2. date of birth equal to `today` → [`ValidationError::DobIsToday`]
//! 3. password and confirmation disagree → [`ValidationError::PasswordMismatch`]
//!
//! The function is pure; the caller supplies `today`.

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::models::{PasswordChange, UpdateRequest, UserRecord};

/// Build the partial update for one submission attempt.
pub fn plan(
    original: &UserRecord,
    edited: &UserRecord,
    password: &str,
    confirm_password: &str,
    today: NaiveDate,
) -> Result<UpdateRequest, ValidationError> {
    if let Some(dob) = edited.date_of_birth {
        if dob > today {
            return Err(ValidationError::DobInFuture);
        }
        if dob == today {
            return Err(ValidationError::DobIsToday);
        }
    }

    let mut request = UpdateRequest {
        email: non_blank(&edited.email),
        full_name: non_blank(&edited.full_name),
        qualification: non_blank(&edited.qualification),
        date_of_birth: edited.date_of_birth,
        password: None,
    };

    match (password.is_empty(), confirm_password.is_empty()) {
        (true, true) => {}
        (false, false) if password == confirm_password => {
            request.password = Some(PasswordChange {
                password: password.to_string(),
                confirm_password: confirm_password.to_string(),
            });
        }
        _ => return Err(ValidationError::PasswordMismatch),
    }

    tracing::debug!(
        fields = ?request.field_names(),
        unchanged = unchanged_count(original, &request),
        "planned profile update"
    );

    Ok(request)
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

/// Fields in `request` that carry the value already loaded.
fn unchanged_count(original: &UserRecord, request: &UpdateRequest) -> usize {
    [
        request.email.is_some() && request.email == original.email,
        request.full_name.is_some() && request.full_name == original.full_name,
        request.qualification.is_some() && request.qualification == original.qualification,
        request.date_of_birth.is_some() && request.date_of_birth == original.date_of_birth,
    ]
    .into_iter()
    .filter(|same| *same)
    .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn record(email: &str, full_name: &str) -> UserRecord {
        UserRecord {
            email: Some(email.to_string()),
            full_name: Some(full_name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_nothing_edited_yields_empty_request() {
        let original = record("a@x.com", "A");
        let edited = UserRecord {
            email: Some(String::new()),
            full_name: None,
            qualification: Some(String::new()),
            date_of_birth: None,
            ..Default::default()
        };

        let request = plan(&original, &edited, "", "", today()).unwrap();
        assert!(request.is_empty());
    }

    #[test]
    fn test_scenario_rename_keeps_unchanged_email() {
        let original = record("a@x.com", "A");
        let edited = UserRecord {
            qualification: Some(String::new()),
            date_of_birth: None,
            ..record("a@x.com", "B")
        };

        let request = plan(&original, &edited, "", "", today()).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "email": "a@x.com", "full_name": "B" })
        );
    }

    #[test]
    fn test_future_dob_rejected_before_password_check() {
        let original = UserRecord::default();
        let edited = UserRecord {
            date_of_birth: today().succ_opt(),
            ..Default::default()
        };

        // The mismatched passwords would fail too, but the date check runs first.
        assert_eq!(
            plan(&original, &edited, "x", "y", today()),
            Err(ValidationError::DobInFuture)
        );
        assert_eq!(
            plan(&original, &edited, "", "", today()),
            Err(ValidationError::DobInFuture)
        );
    }

    #[test]
    fn test_far_future_dob_rejected() {
        let edited = UserRecord {
            date_of_birth: NaiveDate::from_ymd_opt(2100, 1, 1),
            ..Default::default()
        };
        assert_eq!(
            plan(&UserRecord::default(), &edited, "", "", today()),
            Err(ValidationError::DobInFuture)
        );
    }

    #[test]
    fn test_dob_today_rejected() {
        let edited = UserRecord {
            date_of_birth: Some(today()),
            ..Default::default()
        };
        assert_eq!(
            plan(&UserRecord::default(), &edited, "", "", today()),
            Err(ValidationError::DobIsToday)
        );
    }

    #[test]
    fn test_past_dob_is_sent() {
        let dob = today().pred_opt();
        let edited = UserRecord {
            date_of_birth: dob,
            ..Default::default()
        };

        let request = plan(&UserRecord::default(), &edited, "", "", today()).unwrap();
        assert_eq!(request.date_of_birth, dob);
        assert_eq!(request.field_names(), vec!["date_of_birth"]);
    }

    #[test]
    fn test_single_password_field_is_a_mismatch() {
        let original = UserRecord::default();
        for (password, confirm) in [("secret", ""), ("", "secret")] {
            assert_eq!(
                plan(&original, &original, password, confirm, today()),
                Err(ValidationError::PasswordMismatch),
                "password={password:?} confirm={confirm:?}"
            );
        }
    }

    #[test]
    fn test_unequal_passwords_are_a_mismatch() {
        let original = UserRecord::default();
        assert_eq!(
            plan(&original, &original, "x", "y", today()),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn test_matching_passwords_are_both_sent() {
        let original = record("a@x.com", "A");
        let request = plan(&original, &original, "n3w-pass", "n3w-pass", today()).unwrap();

        assert_eq!(
            request.password,
            Some(PasswordChange {
                password: "n3w-pass".into(),
                confirm_password: "n3w-pass".into(),
            })
        );
        assert_eq!(
            request.field_names(),
            vec!["email", "full_name", "password", "confirm_password"]
        );
    }

    #[test]
    fn test_whitespace_is_not_blank() {
        let edited = UserRecord {
            qualification: Some("  ".into()),
            ..Default::default()
        };
        let request = plan(&UserRecord::default(), &edited, "", "", today()).unwrap();
        assert_eq!(request.qualification.as_deref(), Some("  "));
    }

    #[test]
    fn test_plan_is_deterministic() {
        let original = record("a@x.com", "A");
        let edited = UserRecord {
            qualification: Some("MSc".into()),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1),
            ..record("b@x.com", "B")
        };

        let first = plan(&original, &edited, "pw", "pw", today());
        let second = plan(&original, &edited, "pw", "pw", today());
        assert_eq!(first, second);
        assert!(first.is_ok());
    }

    #[test]
    fn test_unchanged_count() {
        let original = record("a@x.com", "A");
        let request = UpdateRequest {
            email: Some("a@x.com".into()),
            full_name: Some("B".into()),
            ..Default::default()
        };
        assert_eq!(unchanged_count(&original, &request), 1);
    }
}
