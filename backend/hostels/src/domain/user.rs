use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Owner,
    Admin,
}

/// Actions gated on the caller's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    BookHostel,
    WriteReview,
    ListHostel,
    ViewOwnerDashboard,
    ViewAdminDashboard,
}

impl Role {
    pub fn capabilities(self) -> &'static [Capability] {
        match self {
            Role::Student => &[Capability::BookHostel, Capability::WriteReview],
            Role::Owner => &[Capability::ListHostel, Capability::ViewOwnerDashboard],
            Role::Admin => &[Capability::ViewAdminDashboard],
        }
    }

    pub fn can(self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Owner => "owner",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub college: Option<String>,
    pub college_id: Option<String>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub college: Option<String>,
    pub college_id: Option<String>,
}

impl User {
    pub fn new(name: String, email: String, phone: String, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone,
            role,
            college: None,
            college_id: None,
            verified: false,
            created_at: Utc::now(),
        }
    }

    pub fn with_college(mut self, college: Option<String>, college_id: Option<String>) -> Self {
        self.college = college;
        self.college_id = college_id;
        self
    }

    pub fn update_profile(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if update.college.is_some() {
            self.college = update.college;
        }
        if update.college_id.is_some() {
            self.college_id = update.college_id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new(
            "John Doe".to_string(),
            "john@example.com".to_string(),
            "+91 9876543210".to_string(),
            Role::Student,
        );

        assert_eq!(user.email, "john@example.com");
        assert_eq!(user.role, Role::Student);
        assert!(!user.verified);
        assert!(user.college.is_none());
    }

    #[test]
    fn test_role_capabilities() {
        assert!(Role::Student.can(Capability::BookHostel));
        assert!(Role::Student.can(Capability::WriteReview));
        assert!(!Role::Student.can(Capability::ListHostel));

        assert!(Role::Owner.can(Capability::ListHostel));
        assert!(Role::Owner.can(Capability::ViewOwnerDashboard));
        assert!(!Role::Owner.can(Capability::ViewAdminDashboard));

        assert!(Role::Admin.can(Capability::ViewAdminDashboard));
        assert!(!Role::Admin.can(Capability::BookHostel));
    }

    #[test]
    fn test_update_profile_keeps_unset_fields() {
        let mut user = User::new(
            "John Doe".to_string(),
            "john@example.com".to_string(),
            "+91 9876543210".to_string(),
            Role::Student,
        )
        .with_college(Some("SNIST".to_string()), Some("snist".to_string()));

        user.update_profile(ProfileUpdate {
            phone: Some("+91 9000000000".to_string()),
            ..Default::default()
        });

        assert_eq!(user.name, "John Doe");
        assert_eq!(user.phone, "+91 9000000000");
        assert_eq!(user.college.as_deref(), Some("SNIST"));
    }

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::Owner).unwrap(), "\"owner\"");
        assert_eq!(Role::Admin.to_string(), "admin");
    }
}
