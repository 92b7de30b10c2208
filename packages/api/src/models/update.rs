//! Partial-update body for `PUT /api/account/{id}`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A new password together with its confirmation.
///
/// Both halves travel together or not at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordChange {
    pub password: String,
    pub confirm_password: String,
}

/// Fields the client asks the server to change. Absent fields are left
/// untouched server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(flatten)]
    pub password: Option<PasswordChange>,
}

impl UpdateRequest {
    pub fn is_empty(&self) -> bool {
        self.field_names().is_empty()
    }

    /// Wire names of the fields present in this request, in serialisation order.
    pub fn field_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.email.is_some() {
            names.push("email");
        }
        if self.full_name.is_some() {
            names.push("full_name");
        }
        if self.qualification.is_some() {
            names.push("qualification");
        }
        if self.date_of_birth.is_some() {
            names.push("date_of_birth");
        }
        if self.password.is_some() {
            names.push("password");
            names.push("confirm_password");
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_request_serialises_to_empty_object() {
        let request = UpdateRequest::default();
        assert!(request.is_empty());
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({}));
    }

    #[test]
    fn test_wire_shape() {
        let request = UpdateRequest {
            full_name: Some("B".into()),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 17),
            password: Some(PasswordChange {
                password: "hunter22".into(),
                confirm_password: "hunter22".into(),
            }),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "full_name": "B",
                "date_of_birth": "1990-05-17",
                "password": "hunter22",
                "confirm_password": "hunter22"
            })
        );
        assert_eq!(
            request.field_names(),
            vec!["full_name", "date_of_birth", "password", "confirm_password"]
        );
    }
}
