use crate::auth::{AuthService, RegisterOutcome};
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use secrecy::SecretString;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, error, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Deserialize, Debug)]
pub struct UserRegister {
    username: String,
    email: String,
    #[schema(value_type = String, format = Password)]
    password: SecretString,
}

#[utoipa::path(
    post,
    path= "/user/register",
    request_body = UserRegister,
    responses (
        (status = 201, description = "Registration successful"),
        (status = 400, description = "Invalid username, email or password"),
        (status = 409, description = "User with the specified username or email already exists"),
        (status = 500, description = "Registration could not be completed"),
    ),
    tag= "register"
)]
// axum handler for register
#[instrument(skip_all)]
pub async fn register(
    service: Extension<Arc<AuthService>>,
    payload: Option<Json<UserRegister>>,
) -> impl IntoResponse {
    let user: UserRegister = match payload {
        Some(Json(payload)) => payload,
        None => return (StatusCode::BAD_REQUEST, "Missing payload".to_string()),
    };

    // SecretString keeps the password redacted here
    debug!("user: {:?}", user);

    match service
        .register(&user.username, &user.email, &user.password)
        .await
    {
        Ok(RegisterOutcome::Registered { username }) => {
            debug!("Registered {}", username);

            (StatusCode::CREATED, "User created".to_string())
        }
        Ok(RegisterOutcome::InvalidInput(field)) => {
            (StatusCode::BAD_REQUEST, format!("Invalid {field}"))
        }
        Ok(RegisterOutcome::DuplicateIdentity) => (
            StatusCode::CONFLICT,
            "Username or email already taken".to_string(),
        ),
        Err(error) => {
            error!("Error registering user: {:?}", error);

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error registering user".to_string(),
            )
        }
    }
}
