use crate::application::error::ServiceError;
use crate::application::use_cases::auth::authenticate::ResolveIdentity;
use crate::application::use_cases::auth::login::{Login as LoginUc, LoginRequest as LoginDto};
use crate::application::use_cases::auth::register::{
    Register as RegisterUc, RegisterRequest as RegisterDto,
};
use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::config::Config;
use axum::{Json, Router, extract::State, routing::post};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub name: String,
    pub gender: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    #[serde(rename = "jwtToken")]
    pub jwt_token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<usize>,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/register/", post(register))
        .route("/login/", post(login))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/register/", tag = "Auth", request_body = RegisterRequest, responses(
    (status = 200, body = String),
    (status = 400, description = "Short password or username taken")
))]
pub async fn register(
    State(ctx): State<AppContext>,
    Json(req): Json<RegisterRequest>,
) -> Result<&'static str, ServiceError> {
    let repo = ctx.user_repo();
    let uc = RegisterUc {
        repo: repo.as_ref(),
    };
    let dto = RegisterDto {
        username: req.username,
        password: req.password,
        name: req.name,
        gender: req.gender,
    };
    uc.execute(&dto).await?;
    Ok("User created successfully")
}

#[utoipa::path(post, path = "/login/", tag = "Auth", request_body = LoginRequest, responses(
    (status = 200, body = LoginResponse),
    (status = 400, description = "Invalid user or password")
))]
pub async fn login(
    State(ctx): State<AppContext>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ServiceError> {
    let repo = ctx.user_repo();
    let uc = LoginUc {
        repo: repo.as_ref(),
    };
    let dto = LoginDto {
        username: req.username,
        password: req.password,
    };
    let user = uc.execute(&dto).await?;
    let token = issue_token(&ctx.cfg, &user.username)?;
    Ok(Json(LoginResponse { jwt_token: token }))
}

pub fn issue_token(cfg: &Config, username: &str) -> Result<String, ServiceError> {
    let exp = cfg
        .jwt_expires_secs
        .map(|secs| (chrono::Utc::now().timestamp() + secs) as usize);
    let claims = Claims {
        username: username.to_string(),
        exp,
    };
    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(cfg.jwt_secret.as_bytes()),
    )
    .map_err(|e| ServiceError::Internal(e.to_string()))
}

// --- Bearer extractor & JWT utils ---
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

pub struct Bearer(pub String);

#[axum::async_trait]
impl<S> FromRequestParts<S> for Bearer
where
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(auth) = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
        {
            if let Some(t) = auth.strip_prefix("Bearer ") {
                return Ok(Bearer(t.to_string()));
            }
        }
        Err(ServiceError::invalid_token())
    }
}

pub(crate) fn validate_bearer(cfg: &Config, bearer: Bearer) -> Result<String, ServiceError> {
    let mut validation = Validation::default();
    if cfg.jwt_expires_secs.is_none() {
        // Tokens without an expiry claim are the historical contract.
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
    }
    let data = jsonwebtoken::decode::<Claims>(
        &bearer.0,
        &DecodingKey::from_secret(cfg.jwt_secret.as_bytes()),
        &validation,
    )
    .map_err(|_| ServiceError::invalid_token())?;
    Ok(data.claims.username)
}

/// Verifies the bearer token and resolves it to a stored `user_id`.
/// Every protected handler goes through here; one DB read per request.
pub(crate) async fn current_user(ctx: &AppContext, bearer: Bearer) -> Result<i64, ServiceError> {
    let username = validate_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.user_repo();
    let uc = ResolveIdentity {
        repo: repo.as_ref(),
    };
    uc.execute(&username).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(expires: Option<i64>) -> Config {
        Config {
            api_port: 0,
            frontend_url: None,
            database_url: "sqlite::memory:".into(),
            jwt_secret: "unit-test-secret".into(),
            jwt_expires_secs: expires,
            is_production: false,
        }
    }

    #[test]
    fn token_round_trip_without_expiry() {
        let cfg = test_config(None);
        let token = issue_token(&cfg, "alice").unwrap();
        let username = validate_bearer(&cfg, Bearer(token)).unwrap();
        assert_eq!(username, "alice");
    }

    #[test]
    fn token_round_trip_with_expiry() {
        let cfg = test_config(Some(3600));
        let token = issue_token(&cfg, "bob").unwrap();
        let username = validate_bearer(&cfg, Bearer(token)).unwrap();
        assert_eq!(username, "bob");
    }

    #[test]
    fn tampered_token_is_rejected() {
        let cfg = test_config(None);
        let token = issue_token(&cfg, "alice").unwrap();
        let other = test_config(None);
        let forged = {
            let mut bad = other;
            bad.jwt_secret = "a-different-secret".into();
            issue_token(&bad, "alice").unwrap()
        };
        assert!(validate_bearer(&cfg, Bearer(forged)).is_err());
        assert!(validate_bearer(&cfg, Bearer(format!("{token}x"))).is_err());
    }
}
