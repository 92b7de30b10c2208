//! # Account record as served by `/api/account/{id}`
//!
//! [`UserRecord`] is the editable projection of an account. It is decoded once
//! when the edit page loads and then mutated in place by form input.
//!
//! ## Absent vs. empty
//!
//! Every editable field is optional. JSON `null` and a missing key both decode
//! to `None` ("absent"), while `""` is kept as `Some("")` ("empty"). The update
//! planner treats both the same way, but keeping them apart lets the form show
//! exactly what the server sent.
//!
//! ## Date of birth
//!
//! The account service has historically exposed the field as `dob`, so both
//! `date_of_birth` and `dob` are accepted on input. Values may be an ISO date
//! (`2001-02-03`), an RFC 3339 timestamp, or an HTTP-date
//! (`Sat, 03 Feb 2001 00:00:00 GMT`); only the calendar day is kept.

use std::fmt;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque, server-assigned account identifier.
///
/// The server may send it as a JSON string or integer; either way it is kept
/// as text and only ever interpolated into request paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => UserId(s),
            RawId::Number(n) => UserId(n.to_string()),
        })
    }
}

/// Editable account fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub qualification: Option<String>,
    #[serde(default, alias = "dob", deserialize_with = "lenient_date")]
    pub date_of_birth: Option<NaiveDate>,
}

impl UserRecord {
    /// Name to show in page chrome, falling back to the email address.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.email.as_deref())
            .unwrap_or_default()
    }
}

fn lenient_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_date(s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unrecognised date: {s}"))),
    }
}

/// Parse the date encodings the account service is known to emit.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.date_naive());
    }
    // HTTP-dates end in "GMT", which rfc2822 parsing accepts as an obsolete zone.
    DateTime::parse_from_rfc2822(s).ok().map(|ts| ts.date_naive())
}
