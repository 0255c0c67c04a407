//! Member-related DTOs.

use folio_core::validation::rules::{not_blank, valid_username};
use folio_core::{AuditFields, Member, MemberId};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a new member.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMemberRequest {
    #[validate(
        length(min = 1, max = 32, message = "Username must be 1-32 characters"),
        custom(function = "valid_username")
    )]
    pub username: String,

    #[validate(range(max = 150, message = "Age must be at most 150"))]
    #[serde(default)]
    pub age: u32,

    #[validate(
        length(max = 64, message = "Team name cannot exceed 64 characters"),
        custom(function = "not_blank")
    )]
    pub team_name: Option<String>,
}

/// Member view: the team is resolved to its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDto {
    pub id: Option<MemberId>,
    pub username: String,
    pub team_name: Option<String>,
    #[serde(flatten)]
    pub audit: AuditFields,
}

/// Username-only projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernameOnlyDto {
    pub username: String,
}

impl From<&Member> for UsernameOnlyDto {
    fn from(member: &Member) -> Self {
        Self {
            username: member.username.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: &str, team_name: Option<&str>) -> CreateMemberRequest {
        CreateMemberRequest {
            username: username.to_string(),
            age: 10,
            team_name: team_name.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request("member1", Some("teamA")).validate().is_ok());
        assert!(request("member1", None).validate().is_ok());
    }

    #[test]
    fn test_invalid_username() {
        assert!(request("", None).validate().is_err());
        assert!(request("1abc", None).validate().is_err());
        assert!(request(&"a".repeat(33), None).validate().is_err());
    }

    #[test]
    fn test_blank_team_name() {
        assert!(request("member1", Some("  ")).validate().is_err());
    }

    #[test]
    fn test_age_bounds() {
        let mut req = request("member1", None);
        req.age = 151;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_username_only_from_member() {
        let member = Member::with_age("AAA", 10);
        assert_eq!(UsernameOnlyDto::from(&member).username, "AAA");
    }

    #[test]
    fn test_member_dto_flattens_audit_fields() {
        let dto = MemberDto {
            id: Some(MemberId(7)),
            username: "member1".to_string(),
            team_name: None,
            audit: AuditFields {
                created_by: Some("system".to_string()),
                ..AuditFields::default()
            },
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["created_by"], "system");
        assert!(json.get("audit").is_none());
    }
}
