// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedAccount,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::account::{AccountId, Capability, Role};
use chrono::{DateTime, Utc};
use std::time::{SystemTime, UNIX_EPOCH};

pub fn parse_claims(
    facts: Vec<biscuit_auth::builder::Fact>,
) -> ApplicationResult<AuthenticatedAccount> {
    let ctx = ClaimsContext::from_facts(facts);
    build_authenticated_account(ctx)
}

fn build_authenticated_account(ctx: ClaimsContext) -> ApplicationResult<AuthenticatedAccount> {
    let (account_id_i64, email, role, issued_at, expires_at) = validate_claims(&ctx)?;

    let account_id = AccountId::new(account_id_i64)
        .map_err(|err| ApplicationError::invalid_token(err.to_string()))?;

    let mut all_caps = role.default_capabilities();
    all_caps.extend(ctx.capabilities);

    Ok(AuthenticatedAccount {
        id: account_id,
        email,
        role,
        capabilities: all_caps,
        issued_at: DateTime::<Utc>::from(issued_at),
        expires_at: DateTime::<Utc>::from(expires_at),
    })
}

fn validate_claims(
    ctx: &ClaimsContext,
) -> ApplicationResult<(i64, String, Role, SystemTime, SystemTime)> {
    let account_id = ctx
        .account_id
        .ok_or_else(|| ApplicationError::invalid_token("missing account id"))?;
    let email = ctx
        .email
        .clone()
        .ok_or_else(|| ApplicationError::invalid_token("missing email"))?;
    let role = ctx
        .role
        .ok_or_else(|| ApplicationError::invalid_token("missing role"))?;
    let issued_at = ctx
        .issued_at
        .ok_or_else(|| ApplicationError::invalid_token("missing issued_at"))?;
    let expires_at = ctx
        .expires_at
        .ok_or_else(|| ApplicationError::invalid_token("missing expires_at"))?;

    Ok((account_id, email, role, issued_at, expires_at))
}

#[derive(Default)]
struct ClaimsContext {
    account_id: Option<i64>,
    email: Option<String>,
    role: Option<Role>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
    capabilities: std::collections::HashSet<Capability>,
}

impl ClaimsContext {
    fn from_facts(facts: Vec<biscuit_auth::builder::Fact>) -> Self {
        let mut ctx = ClaimsContext::default();
        for fact in facts {
            ctx.apply_predicate(fact.predicate);
        }
        ctx
    }

    fn apply_predicate(&mut self, predicate: biscuit_auth::builder::Predicate) {
        match predicate.name.as_str() {
            "account" => self.handle_account(&predicate),
            "role" => self.handle_role(&predicate),
            "issued_at" => self.handle_issued_at(&predicate),
            "expires_at" => self.handle_expires_at(&predicate),
            "right" => self.handle_right(&predicate),
            _ => {}
        }
    }

    fn handle_account(&mut self, predicate: &biscuit_auth::builder::Predicate) {
        if predicate.terms.len() == 2 {
            if let biscuit_auth::builder::Term::Integer(id) = predicate.terms[0] {
                self.account_id = Some(id);
            }
            if let biscuit_auth::builder::Term::Str(email) = predicate.terms[1].clone() {
                self.email = Some(email);
            }
        }
    }

    fn handle_role(&mut self, predicate: &biscuit_auth::builder::Predicate) {
        if let Some(term) = predicate.terms.first() {
            if let biscuit_auth::builder::Term::Str(role_name) = term.clone() {
                if let Ok(parsed) = role_name.parse() {
                    self.role = Some(parsed);
                }
            }
        }
    }

    fn handle_issued_at(&mut self, predicate: &biscuit_auth::builder::Predicate) {
        if let Some(term) = predicate.terms.first() {
            if let biscuit_auth::builder::Term::Date(seconds) = term {
                self.issued_at = Some(UNIX_EPOCH + std::time::Duration::from_secs(*seconds));
            }
        }
    }

    fn handle_expires_at(&mut self, predicate: &biscuit_auth::builder::Predicate) {
        if let Some(term) = predicate.terms.first() {
            if let biscuit_auth::builder::Term::Date(seconds) = term {
                self.expires_at = Some(UNIX_EPOCH + std::time::Duration::from_secs(*seconds));
            }
        }
    }

    fn handle_right(&mut self, predicate: &biscuit_auth::builder::Predicate) {
        if predicate.terms.len() == 2 {
            if let (
                biscuit_auth::builder::Term::Str(resource),
                biscuit_auth::builder::Term::Str(action),
            ) = (predicate.terms[0].clone(), predicate.terms[1].clone())
            {
                self.capabilities.insert(Capability::new(resource, action));
            }
        }
    }
}
