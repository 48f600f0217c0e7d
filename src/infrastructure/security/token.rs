// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedAccount, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenService,
};
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, AuthorizerBuilder, Term},
    builder_ext::AuthorizerExt,
};
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime},
};

/// Issues and verifies sealed biscuits signed with a server-held Ed25519 root
/// key. Tokens are stateless: there is no revocation list, and rotating the
/// root key is the only way to invalidate outstanding tokens.
#[derive(Clone)]
pub struct BiscuitTokenService {
    root: Arc<KeyPair>,
    public: PublicKey,
    ttl: Duration,
}

impl BiscuitTokenService {
    pub fn new(private_key_hex: &str, ttl: Duration) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let keypair = KeyPair::from(&private);
        let public = keypair.public();

        Ok(Self {
            root: Arc::new(keypair),
            public,
            ttl,
        })
    }
}

fn build_code_and_params(
    subject: &TokenSubject,
    issued_at: SystemTime,
    expires_at: SystemTime,
) -> (String, HashMap<String, Term>) {
    let mut params: HashMap<String, Term> = HashMap::new();
    params.insert("aid".to_string(), i64::from(subject.account_id).into());
    params.insert("aemail".to_string(), subject.email.clone().into());
    params.insert("arole".to_string(), subject.role.as_str().into());
    params.insert("issued".to_string(), issued_at.into());
    params.insert("exp".to_string(), expires_at.into());

    let mut code = String::from(
        r#"
                account({aid}, {aemail});
                role({arole});
                issued_at({issued});
                expires_at({exp});
                check if time($now), $now >= {issued};
                check if time($now), $now <= {exp};
                token_type("session");
                check if token_type("session");
                "#,
    );

    // Capability facts go straight into the code block so the builder needs
    // no separate fact-folding step.
    for cap in subject.capabilities.iter() {
        let res = cap.resource.replace('\\', "\\\\").replace('"', "\\\"");
        let act = cap.action.replace('\\', "\\\\").replace('"', "\\\"");
        code.push_str(&format!(
            r#"right("{}", "{}");
"#,
            res, act
        ));
    }

    (code, params)
}

fn seal_and_serialize(token: Biscuit) -> Result<String, ApplicationError> {
    let sealed = token
        .seal()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
    sealed
        .to_base64()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))
}

fn ttl_to_expires_in_seconds(ttl: Duration) -> i64 {
    ChronoDuration::from_std(ttl)
        .unwrap_or_else(|_| ChronoDuration::seconds(ttl.as_secs() as i64))
        .num_seconds()
        .max(0)
}

fn build_and_serialize_biscuit(
    code: &str,
    params: HashMap<String, Term>,
    root: &KeyPair,
) -> Result<String, ApplicationError> {
    let builder = Biscuit::builder()
        .code_with_params(code, params, HashMap::new())
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

    let token = builder
        .build(root)
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

    seal_and_serialize(token)
}

#[async_trait]
impl TokenService for BiscuitTokenService {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = SystemTime::now();
        let expires_at = issued_at
            .checked_add(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;
        let (code, params) = build_code_and_params(&subject, issued_at, expires_at);

        let serialized = build_and_serialize_biscuit(&code, params, self.root.as_ref())?;

        Ok(AuthTokenDto {
            token: serialized,
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
            expires_in: ttl_to_expires_in_seconds(self.ttl),
        })
    }

    async fn verify(&self, token: &str) -> ApplicationResult<AuthenticatedAccount> {
        // Signature and structure first; claims are never read from a token
        // that does not verify against the root public key.
        let biscuit = Biscuit::from_base64(token, self.public)
            .map_err(|err| ApplicationError::invalid_token(err.to_string()))?;

        let view = biscuit
            .authorizer()
            .map_err(|err| ApplicationError::invalid_token(err.to_string()))?;
        let (facts, _, _, _) = view.dump();
        let claims = super::claims::parse_claims(facts)?;

        if Utc::now() >= claims.expires_at {
            return Err(ApplicationError::TokenExpired);
        }

        // Enforce the caveats embedded in the token itself. The allow-all
        // policy lets authorization succeed once every check passes; the
        // checks carry the actual constraints.
        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .allow_all()
            .build(&biscuit)
            .map_err(|err| ApplicationError::invalid_token(err.to_string()))?;
        authorizer
            .authorize()
            .map_err(|err| ApplicationError::invalid_token(err.to_string()))?;

        Ok(claims)
    }
}
