use serde::{Deserialize, Serialize};

use crate::MemberId;

/// A persisted membership record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Server-assigned identifier, immutable after creation.
    pub id: MemberId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Date of birth as `YYYY-MM-DD`.
    pub date_of_birth: String,
}

impl Member {
    /// Creates a new member record.
    pub fn new(
        id: MemberId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        date_of_birth: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            date_of_birth: date_of_birth.into(),
        }
    }
}

/// A partial patch for a [`Member`].
///
/// Absent and empty-string fields both mean "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
}

impl MemberUpdate {
    /// Creates an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the first name.
    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    /// Sets the last name.
    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    /// Sets the email.
    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    /// Sets the date of birth.
    pub fn date_of_birth(mut self, value: impl Into<String>) -> Self {
        self.date_of_birth = Some(value.into());
        self
    }

    /// Returns the email if it is present and non-empty.
    pub fn email_value(&self) -> Option<&str> {
        non_empty(&self.email)
    }

    /// Returns the date of birth if it is present and non-empty.
    pub fn date_of_birth_value(&self) -> Option<&str> {
        non_empty(&self.date_of_birth)
    }

    /// Iterates over the non-empty fields as `(json_key, value)` pairs.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("firstName", non_empty(&self.first_name)),
            ("lastName", non_empty(&self.last_name)),
            ("email", non_empty(&self.email)),
            ("dateOfBirth", non_empty(&self.date_of_birth)),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
    }

    /// Returns true if applying this update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.fields().next().is_none()
    }

    /// Overwrites the fields of `member` with the non-empty fields of this update.
    pub fn apply_to(&self, member: &mut Member) {
        if let Some(v) = non_empty(&self.first_name) {
            member.first_name = v.to_string();
        }
        if let Some(v) = non_empty(&self.last_name) {
            member.last_name = v.to_string();
        }
        if let Some(v) = non_empty(&self.email) {
            member.email = v.to_string();
        }
        if let Some(v) = non_empty(&self.date_of_birth) {
            member.date_of_birth = v.to_string();
        }
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_member() -> Member {
        Member::new(
            MemberId::new(123_456),
            "John",
            "Doe",
            "John.Doe@gmail.com",
            "1990-01-01",
        )
    }

    #[test]
    fn member_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(sample_member()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 123456,
                "firstName": "John",
                "lastName": "Doe",
                "email": "John.Doe@gmail.com",
                "dateOfBirth": "1990-01-01"
            })
        );
    }

    #[test]
    fn update_skips_absent_and_empty_fields() {
        let update = MemberUpdate::new().first_name("").email("new@x.com");
        let fields: Vec<_> = update.fields().collect();
        assert_eq!(fields, vec![("email", "new@x.com")]);
        assert!(update.email_value().is_some());
        assert!(update.date_of_birth_value().is_none());
    }

    #[test]
    fn apply_only_overwrites_non_empty_fields() {
        let mut member = sample_member();
        MemberUpdate::new()
            .email("new@x.com")
            .last_name("")
            .apply_to(&mut member);

        assert_eq!(member.email, "new@x.com");
        assert_eq!(member.first_name, "John");
        assert_eq!(member.last_name, "Doe");
        assert_eq!(member.date_of_birth, "1990-01-01");
    }

    #[test]
    fn empty_update_is_empty() {
        assert!(MemberUpdate::new().is_empty());
        assert!(MemberUpdate::new().first_name("").is_empty());
        assert!(!MemberUpdate::new().last_name("Smith").is_empty());
    }

    #[test]
    fn update_deserializes_partial_payload() {
        let update: MemberUpdate = serde_json::from_str(r#"{"email":"new@x.com"}"#).unwrap();
        assert_eq!(update, MemberUpdate::new().email("new@x.com"));
    }
}
