use uuid::Uuid;

use crate::domain::user::{Capability, Role};
use crate::usecase::error::UsecaseError;

/// The authenticated caller of a use case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Actor {
    pub user_id: Uuid,
    pub role: Role,
}

impl Actor {
    pub fn new(user_id: Uuid, role: Role) -> Self {
        Self { user_id, role }
    }

    pub fn require(&self, capability: Capability) -> Result<(), UsecaseError> {
        if self.role.can(capability) {
            return Ok(());
        }

        tracing::warn!(user_id = %self.user_id, role = %self.role, ?capability, "capability check failed");
        Err(UsecaseError::Forbidden(format!(
            "{} accounts cannot perform {:?}",
            self.role, capability
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_allows_granted_capability() {
        let actor = Actor::new(Uuid::new_v4(), Role::Owner);
        assert!(actor.require(Capability::ListHostel).is_ok());
    }

    #[test]
    fn test_require_rejects_missing_capability() {
        let actor = Actor::new(Uuid::new_v4(), Role::Student);

        let err = actor.require(Capability::ViewAdminDashboard).unwrap_err();
        assert!(matches!(err, UsecaseError::Forbidden(_)));
        assert!(err.to_string().starts_with("student accounts"));
    }
}
