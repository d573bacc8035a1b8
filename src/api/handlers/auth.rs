use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::auth::AuthUser;
use crate::api::state::AppState;
use crate::auth::jwt::create_token;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::session::{clear_session_cookie, session_cookie};
use crate::domain::repositories::{RepositoryError, User, UserRepository};
use crate::domain::user::{Email, Password, Username};
use crate::infrastructure::repositories::PostgresUserRepository;

const PASSWORDS_DIFFER: &str = "Invalid credentials: passwords do not match";
const USERNAME_TAKEN: &str = "Invalid credentials: username is already taken";
const BAD_CREDENTIALS: &str = "Invalid credentials: username and/or password are incorrect";

/// Request body for user registration
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Request body for user login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response from a successful register or login
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user_id: Uuid,
    pub username: String,
    pub token: String,
}

/// Issues a token for the user and wraps it in the session cookie
fn start_session(
    state: &AppState,
    jar: CookieJar,
    user_id: Uuid,
    username: &Username,
) -> Result<(CookieJar, SessionResponse), ApiError> {
    let token = create_token(user_id, username.as_str(), state.jwt_secret())?;
    let jar = jar.add(session_cookie(token.clone()));

    Ok((
        jar,
        SessionResponse {
            user_id,
            username: username.to_string(),
            token,
        },
    ))
}

/// Register a new user and log them in
///
/// POST /books/register
///
/// Any body that does not decode as a register form is a 400 with the
/// usual `{"error": ...}` shape, whatever its content type.
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Bytes,
) -> Result<(StatusCode, CookieJar, Json<SessionResponse>), ApiError> {
    let form_error = |e: String| ApiError::bad_request(format!("Error in register form: {}", e));

    let req: RegisterRequest =
        serde_json::from_slice(&body).map_err(|e| form_error(e.to_string()))?;

    let username = Username::new(req.username).map_err(form_error)?;
    let email = Email::new(req.email).map_err(form_error)?;
    let password = Password::new(req.password).map_err(form_error)?;

    if password.as_str() != req.confirm_password {
        return Err(ApiError::bad_request(PASSWORDS_DIFFER));
    }

    let password_hash = hash_password(&password)?;

    let user = User {
        id: Uuid::new_v4(),
        username: username.clone(),
        email,
        password_hash,
        is_active: true,
    };

    let user_repo = PostgresUserRepository::new(state.pool.clone());
    let user_id = user_repo.create(user).await.map_err(|e| match e {
        RepositoryError::Duplicate(_) => {
            tracing::warn!(username = %username, "Registration with taken username");
            ApiError::conflict(USERNAME_TAKEN)
        }
        other => ApiError::from(other),
    })?;

    tracing::info!(%user_id, username = %username, "User registered");

    let (jar, session) = start_session(&state, jar, user_id, &username)?;
    Ok((StatusCode::CREATED, jar, Json(session)))
}

/// Login with username and password
///
/// POST /books/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Bytes,
) -> Result<(CookieJar, Json<SessionResponse>), ApiError> {
    let req: LoginRequest =
        serde_json::from_slice(&body).map_err(|_| ApiError::unauthorized(BAD_CREDENTIALS))?;

    // A name that could never have been registered cannot match anyone
    let username = Username::new(req.username).map_err(|_| ApiError::unauthorized(BAD_CREDENTIALS))?;

    let user_repo = PostgresUserRepository::new(state.pool.clone());
    let user = match user_repo.find_by_username(&username).await? {
        Some(user) if user.is_active => user,
        _ => {
            tracing::warn!(username = %username, "Login rejected");
            return Err(ApiError::unauthorized(BAD_CREDENTIALS));
        }
    };

    if !verify_password(&req.password, &user.password_hash)? {
        tracing::warn!(username = %username, "Login rejected");
        return Err(ApiError::unauthorized(BAD_CREDENTIALS));
    }

    if let Err(e) = user_repo.update_last_login(user.id).await {
        tracing::warn!(user_id = %user.id, error = %e, "Failed to record last login");
    }

    tracing::info!(user_id = %user.id, "User logged in");

    let (jar, session) = start_session(&state, jar, user.id, &user.username)?;
    Ok((jar, Json(session)))
}

/// Log the current user out by clearing the session cookie
///
/// POST /books/logout
pub async fn logout(user: AuthUser, jar: CookieJar) -> (CookieJar, StatusCode) {
    tracing::info!(user_id = %user.user_id, "User logged out");
    (jar.remove(clear_session_cookie()), StatusCode::NO_CONTENT)
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
