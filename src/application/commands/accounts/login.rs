use super::AccountCommandService;
use crate::{
    application::{
        dto::{AccountDto, AuthTokenDto, TokenSubject},
        error::{ApplicationError, ApplicationResult},
    },
    domain::account::{Account, EmailAddress},
};

pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginResult {
    pub token: AuthTokenDto,
    pub account: AccountDto,
}

impl AccountCommandService {
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<LoginResult> {
        let email = EmailAddress::new(command.email)
            // a malformed email can't match any account; same failure shape
            .map_err(|_| ApplicationError::InvalidCredentials)?;

        let account = self.authenticate(&email, &command.password).await?;

        let token = self
            .token_service
            .issue(TokenSubject::for_account(&account))
            .await?;

        Ok(LoginResult {
            token,
            account: account.into(),
        })
    }

    /// Unknown email and wrong password collapse into one undistinguished
    /// failure so the login surface cannot be used to enumerate accounts.
    async fn authenticate(
        &self,
        email: &EmailAddress,
        password: &str,
    ) -> ApplicationResult<Account> {
        let account = self
            .account_repo
            .find_by_email(email)
            .await?
            .ok_or(ApplicationError::InvalidCredentials)?;

        self.password_hasher
            .verify(password, account.password_hash.as_str())
            .await?;

        Ok(account)
    }
}
