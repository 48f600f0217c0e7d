use super::AccountCommandService;
use crate::{
    application::{
        authorization::ensure_capability,
        dto::{AccountDto, AuthenticatedAccount},
        error::{ApplicationError, ApplicationResult},
    },
    domain::account::{AccountUpdate, DisplayName, PreferencesPatch},
};

pub struct UpdateProfileCommand {
    pub name: Option<String>,
    pub preferences: Option<PreferencesPatch>,
}

impl AccountCommandService {
    /// Updates the actor's own profile. The name replaces only when provided
    /// and non-empty; the preferences patch is a shallow field-level
    /// overwrite applied via `Preferences::apply_patch`. Email and role are
    /// immutable and not accepted here.
    pub async fn update_profile(
        &self,
        actor: &AuthenticatedAccount,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<AccountDto> {
        ensure_capability(actor, "profile", "update")?;

        let account = self
            .account_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("account not found"))?;

        let mut update = AccountUpdate::new(actor.id);

        if let Some(name) = command.name.filter(|n| !n.trim().is_empty()) {
            update = update.with_name(DisplayName::new(name)?);
        }

        if let Some(patch) = command.preferences.filter(|p| !p.is_empty()) {
            let mut preferences = account.preferences.clone();
            preferences.apply_patch(patch);
            update = update.with_preferences(preferences);
        }

        if update.is_empty() {
            return Ok(account.into());
        }

        let updated = self.account_repo.update(update).await?;
        Ok(updated.into())
    }
}
