use super::AccountCommandService;
use crate::{
    application::{
        dto::{AccountDto, AuthTokenDto, TokenSubject},
        error::{ApplicationError, ApplicationResult},
    },
    domain::account::{
        DisplayName, EmailAddress, NewAccount, PasswordHash, Preferences, PreferencesPatch, Role,
    },
};

pub struct RegisterAccountCommand {
    pub name: String,
    pub email: String,
    pub password: String,
    pub preferences: Option<PreferencesPatch>,
}

#[derive(Debug)]
pub struct RegisterResult {
    pub token: AuthTokenDto,
    pub account: AccountDto,
}

impl AccountCommandService {
    /// Self-registration. Always creates a `user` role account; admin
    /// accounts are provisioned out of band. A duplicate email surfaces from
    /// the store's atomic insert, never from a separate existence check.
    pub async fn register(
        &self,
        command: RegisterAccountCommand,
    ) -> ApplicationResult<RegisterResult> {
        let name = DisplayName::new(command.name)?;
        let email = EmailAddress::new(command.email)?;
        if command.password.is_empty() {
            return Err(ApplicationError::validation("password cannot be empty"));
        }

        let mut preferences = Preferences::default();
        if let Some(patch) = command.preferences {
            preferences.apply_patch(patch);
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_account = NewAccount::new(
            name,
            email,
            password_hash,
            Role::User,
            preferences,
            self.clock.now(),
        );
        let account = self.account_repo.insert(new_account).await?;

        let token = self
            .token_service
            .issue(TokenSubject::for_account(&account))
            .await?;

        Ok(RegisterResult {
            token,
            account: account.into(),
        })
    }
}
