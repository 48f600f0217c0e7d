// src/application/authorization.rs
//
// The single authorization policy: every capability decision goes through
// `ensure_capability` at the request boundary instead of ad-hoc role checks
// scattered through handlers.
use crate::application::{
    dto::AuthenticatedAccount,
    error::{ApplicationError, ApplicationResult},
};

pub fn ensure_capability(
    actor: &AuthenticatedAccount,
    resource: &str,
    action: &str,
) -> ApplicationResult<()> {
    if actor.has_capability(resource, action) {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(format!(
            "missing capability {resource}:{action}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::{AccountId, Role};
    use chrono::{Duration, Utc};

    fn actor(role: Role) -> AuthenticatedAccount {
        let now = Utc::now();
        AuthenticatedAccount {
            id: AccountId::new(1).unwrap(),
            email: "amy@x.com".into(),
            role,
            capabilities: role.default_capabilities(),
            issued_at: now,
            expires_at: now + Duration::hours(1),
        }
    }

    #[test]
    fn user_role_can_mutate_own_cart_but_not_manage_catalog() {
        let user = actor(Role::User);
        assert!(ensure_capability(&user, "cart", "update").is_ok());
        assert!(matches!(
            ensure_capability(&user, "catalog", "manage"),
            Err(ApplicationError::Forbidden(_))
        ));
    }

    #[test]
    fn admin_role_can_manage_catalog() {
        let admin = actor(Role::Admin);
        assert!(ensure_capability(&admin, "catalog", "manage").is_ok());
    }
}
