//! Member commands.

use member_store::{Member, MemberId};
use serde::Deserialize;

/// Command to create a new member.
///
/// Carries everything except the ID, which the service always assigns.
/// A client-supplied `id` is ignored when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMember {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: String,
}

impl CreateMember {
    /// Creates a new CreateMember command.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        date_of_birth: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            date_of_birth: date_of_birth.into(),
        }
    }

    /// Returns true if every field is non-empty.
    pub fn has_required_fields(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.date_of_birth,
        ]
        .iter()
        .all(|field| !field.is_empty())
    }

    /// Builds the member record under the given ID.
    pub fn into_member(self, id: MemberId) -> Member {
        Member {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            date_of_birth: self.date_of_birth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_supplied_id_is_ignored() {
        let cmd: CreateMember = serde_json::from_str(
            r#"{"id":1,"firstName":"John","lastName":"Doe","email":"j@d.com","dateOfBirth":"1990-01-01"}"#,
        )
        .unwrap();
        let member = cmd.into_member(MemberId::new(654_321));
        assert_eq!(member.id, MemberId::new(654_321));
        assert_eq!(member.first_name, "John");
    }

    #[test]
    fn missing_field_fails_to_deserialize() {
        let result: Result<CreateMember, _> =
            serde_json::from_str(r#"{"firstName":"John","lastName":"Doe","email":"j@d.com"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn empty_field_is_not_complete() {
        let cmd = CreateMember::new("John", "", "j@d.com", "1990-01-01");
        assert!(!cmd.has_required_fields());
        assert!(CreateMember::new("John", "Doe", "j@d.com", "1990-01-01").has_required_fields());
    }
}
