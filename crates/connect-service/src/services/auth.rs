//! Authentication service
//!
//! Email OTP sign-in: a short-lived code is issued per email, and a matching
//! submission either logs into the existing account or creates a fresh one.
//! Tokens follow the usual access/refresh pair with refresh rotation.

use connect_cache::{OtpVerification, RefreshTokenData};
use connect_common::AppError;
use connect_common::auth::{OtpCode, normalize_email};
use connect_core::Snowflake;
use connect_core::entities::User;
use tracing::{info, instrument, warn};

use crate::dto::{
    AuthResponse, CurrentUserResponse, LogoutRequest, OtpRequestedResponse, RefreshTokenRequest,
    RequestOtpRequest, VerifyOtpRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Issue a one-time sign-in code for an email address
    ///
    /// Requesting again replaces any previously issued code. The code is
    /// handed to the mail delivery path; in development it can be echoed to
    /// the log instead.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn request_otp(
        &self,
        request: RequestOtpRequest,
    ) -> ServiceResult<OtpRequestedResponse> {
        let email = normalize_email(&request.email);
        let code = OtpCode::generate();

        self.ctx
            .otp_store()
            .store(&email, code.as_str())
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if self.ctx.otp_config().echo_to_log {
            info!(email = %email, code = %code.as_str(), "OTP issued (log echo enabled)");
        } else {
            info!(email = %email, "OTP issued");
        }

        Ok(OtpRequestedResponse {
            email,
            expires_in: self.ctx.otp_config().expiry_seconds,
        })
    }

    /// Verify a submitted code and sign the user in
    ///
    /// A first-time email gets an account created on the spot with a
    /// placeholder profile; onboarding fills in the rest.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn verify_otp(&self, request: VerifyOtpRequest) -> ServiceResult<AuthResponse> {
        let email = normalize_email(&request.email);

        let outcome = self
            .ctx
            .otp_store()
            .verify(&email, &request.code)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        match outcome {
            OtpVerification::Valid => {}
            OtpVerification::Invalid => {
                warn!(email = %email, "OTP verification failed: code mismatch");
                return Err(ServiceError::App(AppError::InvalidOtp));
            }
            OtpVerification::Expired => {
                warn!(email = %email, "OTP verification failed: no active code");
                return Err(ServiceError::App(AppError::OtpExpired));
            }
            OtpVerification::AttemptsExhausted => {
                warn!(email = %email, "OTP verification failed: attempt limit reached");
                return Err(ServiceError::App(AppError::TooManyOtpAttempts));
            }
        }

        let user = match self.ctx.user_repo().find_by_email(&email).await? {
            Some(user) => user,
            None => self.create_account(&email).await?,
        };

        info!(user_id = %user.id, "User signed in via OTP");

        self.issue_tokens(&user).await
    }

    /// Refresh access token using refresh token
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(
        &self,
        request: RefreshTokenRequest,
    ) -> ServiceResult<AuthResponse> {
        // Validate refresh token exists in Redis
        let refresh_data = self
            .ctx
            .refresh_token_store()
            .validate(&request.refresh_token)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?
            .ok_or(ServiceError::App(AppError::InvalidToken))?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(refresh_data.user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", refresh_data.user_id.to_string()))?;

        // Rotate: revoke the old token before issuing a new pair
        self.ctx
            .refresh_token_store()
            .revoke(&request.refresh_token)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        info!(user_id = %user.id, "Tokens refreshed");

        self.issue_tokens(&user).await
    }

    /// Logout user by revoking refresh token(s)
    #[instrument(skip(self, request))]
    pub async fn logout(&self, user_id: Snowflake, request: LogoutRequest) -> ServiceResult<()> {
        if let Some(token) = request.refresh_token {
            self.ctx
                .refresh_token_store()
                .revoke(&token)
                .await
                .map_err(|e| ServiceError::internal(e.to_string()))?;
        } else {
            self.ctx
                .refresh_token_store()
                .revoke_all_for_user(user_id)
                .await
                .map_err(|e| ServiceError::internal(e.to_string()))?;
        }

        info!(user_id = %user_id, "User logged out");
        Ok(())
    }

    /// Create an account for a first-time email
    async fn create_account(&self, email: &str) -> ServiceResult<User> {
        let user_id = self.ctx.generate_id();
        let username = self.pick_username(email, user_id).await?;
        let name = email_local_part(email).to_string();

        let user = User::new(user_id, username, name, email.to_string());
        self.ctx.user_repo().create(&user).await?;

        info!(user_id = %user_id, "Account created at first sign-in");
        Ok(user)
    }

    /// Derive an available username from the email local part
    ///
    /// On collision, fall back to a suffix from the snowflake; the full id
    /// is unique so the third candidate always works.
    async fn pick_username(&self, email: &str, user_id: Snowflake) -> ServiceResult<String> {
        let base = sanitize_username(email_local_part(email));

        let candidates = [
            base.clone(),
            format!("{base}_{}", user_id.into_inner() % 10_000),
            format!("{base}_{}", user_id.into_inner()),
        ];

        for candidate in candidates {
            if !self.ctx.user_repo().username_exists(&candidate).await? {
                return Ok(candidate);
            }
        }

        Err(ServiceError::internal("username derivation exhausted"))
    }

    /// Generate tokens and persist the refresh half
    async fn issue_tokens(&self, user: &User) -> ServiceResult<AuthResponse> {
        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(user.id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        let refresh_data = RefreshTokenData::new(user.id);
        self.ctx
            .refresh_token_store()
            .store(&token_pair.refresh_token, &refresh_data)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentUserResponse::from(user),
        ))
    }
}

/// Everything before the '@', or the whole string if there is none
fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Keep only username-safe characters, lowercased
fn sanitize_username(raw: &str) -> String {
    let cleaned: String = raw
        .to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '.')
        .collect();

    if cleaned.len() < 2 {
        "student".to_string()
    } else {
        cleaned
    }
}
