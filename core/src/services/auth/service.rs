//! Main identity verification engine implementation

use std::sync::Arc;

use sc_shared::utils::email::{is_valid_email, mask_email};
use sc_shared::utils::validation::validators;
use tracing::{info, warn};

use crate::domain::entities::otp::PendingOtp;
use crate::domain::entities::user::User;
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::otp::OtpStore;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;
use super::password::{hash_password, verify_password};
use super::traits::MailServiceTrait;

const MAIL_SUBJECT: &str = "SnapCloud Verification Code";
const MSG_CODE_SENT: &str = "Verification code sent to email";
const MSG_CODE_UNCONFIRMED: &str =
    "Verification code generated but delivery could not be confirmed. \
     Contact support to receive the code.";

/// Identity verification engine
///
/// Orchestrates registration, email ownership verification, and credential
/// login over injected collaborators. All shared state is handed in through
/// the constructor; the engine itself holds nothing ambient and is safe to
/// call from any number of concurrent request handlers.
pub struct AuthService<U, M>
where
    U: UserRepository,
    M: MailServiceTrait,
{
    /// User repository for durable account state
    user_repository: Arc<U>,
    /// Ledger of pending verification codes
    otp_store: Arc<OtpStore>,
    /// Token service for session issuance
    token_service: Arc<TokenService>,
    /// Outbound mail transport; may be absent entirely
    mail_service: Option<Arc<M>>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, M> AuthService<U, M>
where
    U: UserRepository,
    M: MailServiceTrait,
{
    /// Create a new engine instance
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for account persistence
    /// * `otp_store` - Ledger of pending verification codes
    /// * `token_service` - Service for session token issuance
    /// * `mail_service` - Outbound mail transport, `None` when unconfigured
    /// * `config` - Engine configuration
    pub fn new(
        user_repository: Arc<U>,
        otp_store: Arc<OtpStore>,
        token_service: Arc<TokenService>,
        mail_service: Option<Arc<M>>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            otp_store,
            token_service,
            mail_service,
            config,
        }
    }

    /// Register an account and send a verification code to its address
    ///
    /// An address that is already registered *and* verified is refused; an
    /// unverified one is re-registered in place (the password is replaced
    /// and any pending code for the address is superseded). No token is
    /// issued until the address is verified.
    ///
    /// Mail delivery failure does not fail the call: the code exists in the
    /// ledger either way and the response message reports delivery as
    /// unconfirmed.
    pub async fn register(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        validate_required(email, "email")?;
        validate_required(password, "password")?;
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }

        let user = match self.user_repository.find_by_email(email).await? {
            Some(existing) if existing.is_verified => {
                warn!(
                    email = %mask_email(email),
                    event = "register_conflict",
                    "Registration attempt for an already verified address"
                );
                return Err(AuthError::EmailAlreadyRegistered {
                    email: email.to_string(),
                }
                .into());
            }
            Some(mut existing) => {
                // Unverified re-registration replaces the password
                existing.set_password_hash(hash_password(password)?);
                existing
            }
            None => User::new(email.to_string(), hash_password(password)?),
        };
        let user = self.user_repository.save(user).await?;

        let code = PendingOtp::generate_code();
        self.otp_store.put(email, &code, self.config.otp_ttl_seconds);
        info!(
            email = %mask_email(email),
            event = "otp_generated",
            ttl_seconds = self.config.otp_ttl_seconds,
            "Generated verification code"
        );

        let delivered = self.send_otp_mail(email, &code).await;
        let message = if delivered {
            MSG_CODE_SENT
        } else {
            warn!(
                email = %mask_email(email),
                event = "mail_delivery_unconfirmed",
                "Verification code generated but mail delivery was not confirmed"
            );
            MSG_CODE_UNCONFIRMED
        };

        Ok(AuthResponse::registered(user.email, user.role, message))
    }

    /// Verify a code for an address and issue a session token
    ///
    /// The ledger check is atomic per address: the code is consumed on the
    /// first success, and concurrent attempts with the same correct code
    /// yield exactly one winner. Not-found, expired, and mismatched codes
    /// all surface as the same invalid-code error.
    pub async fn verify_otp(&self, email: &str, otp: &str) -> DomainResult<AuthResponse> {
        validate_required(email, "email")?;
        validate_required(otp, "otp")?;

        self.otp_store.check_and_consume(email, otp).map_err(|cause| {
            warn!(
                email = %mask_email(email),
                cause = %cause,
                event = "otp_rejected",
                "Verification code rejected"
            );
            AuthError::InvalidOtp { cause }
        })?;

        // Defensive: a consumed code implies a prior registration, but the
        // account could have been removed by an operator in the meantime
        let mut user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        user.verify();
        let user = self.user_repository.save(user).await?;
        info!(
            email = %mask_email(email),
            event = "email_verified",
            "Email address verified"
        );

        self.issue_session(user)
    }

    /// Authenticate by credential and issue a session token
    ///
    /// An unknown address, a wrong password, and (by policy) an unverified
    /// account produce the same error kind and message, so the response
    /// shape reveals nothing about which accounts exist.
    pub async fn authenticate(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        validate_required(email, "email")?;
        validate_required(password, "password")?;

        let mut user = match self.user_repository.find_by_email(email).await? {
            Some(user) => user,
            None => {
                warn!(
                    email = %mask_email(email),
                    reason = "unknown_email",
                    event = "login_failed",
                    "Login failed"
                );
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !verify_password(password, &user.password_hash)? {
            warn!(
                email = %mask_email(email),
                reason = "password_mismatch",
                event = "login_failed",
                "Login failed"
            );
            return Err(AuthError::InvalidCredentials.into());
        }

        if self.config.require_verified_login && !user.is_verified {
            warn!(
                email = %mask_email(email),
                reason = "email_not_verified",
                event = "login_failed",
                "Login failed"
            );
            return Err(AuthError::InvalidCredentials.into());
        }

        user.update_last_login();
        let user = self.user_repository.save(user).await?;
        info!(
            email = %mask_email(email),
            event = "login_succeeded",
            "Login succeeded"
        );

        self.issue_session(user)
    }

    /// Issue a session token for a user
    ///
    /// The single issuance path shared by `verify_otp` and `authenticate`.
    fn issue_session(&self, user: User) -> DomainResult<AuthResponse> {
        let issued = self.token_service.issue(&user.email, user.role)?;
        Ok(AuthResponse::success(
            issued.access_token,
            user.email,
            user.role,
            issued.expires_at,
        ))
    }

    /// Deliver the verification code, observing only a boolean outcome
    ///
    /// An absent transport reads as an unconfirmed delivery, not a distinct
    /// condition.
    async fn send_otp_mail(&self, email: &str, code: &str) -> bool {
        let Some(mail_service) = &self.mail_service else {
            return false;
        };

        let body = format!(
            "Your SnapCloud verification code is: {}\nThis code expires in {} minutes.",
            code,
            self.config.otp_ttl_minutes()
        );
        mail_service.send(email, MAIL_SUBJECT, &body).await
    }
}

fn validate_required(value: &str, field: &str) -> Result<(), ValidationError> {
    if validators::not_empty(value) {
        Ok(())
    } else {
        Err(ValidationError::RequiredField {
            field: field.to_string(),
        })
    }
}
