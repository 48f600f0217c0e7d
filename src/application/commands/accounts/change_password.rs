use super::AccountCommandService;
use crate::{
    application::{
        dto::AuthenticatedAccount,
        error::{ApplicationError, ApplicationResult},
    },
    domain::account::{AccountUpdate, PasswordHash},
};

pub struct ChangePasswordCommand {
    pub current_password: String,
    pub new_password: String,
}

impl AccountCommandService {
    /// Rotates the actor's own password. The account id comes from verified
    /// token claims, so a missing account is reported as `NotFound` without
    /// any enumeration exposure; a wrong current password is the same
    /// undistinguished credential failure as login.
    ///
    /// No minimum-strength policy is applied beyond non-empty, matching the
    /// reference behavior.
    pub async fn change_password(
        &self,
        actor: &AuthenticatedAccount,
        command: ChangePasswordCommand,
    ) -> ApplicationResult<()> {
        if command.new_password.is_empty() {
            return Err(ApplicationError::validation("new password cannot be empty"));
        }

        let account = self
            .account_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("account not found"))?;

        self.password_hasher
            .verify(&command.current_password, account.password_hash.as_str())
            .await?;

        let hashed = self.password_hasher.hash(&command.new_password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let update = AccountUpdate::new(actor.id).with_password_hash(password_hash);
        self.account_repo.update(update).await?;

        Ok(())
    }
}
