use crate::auth::{AuthService, LoginOutcome};
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Deserialize, Debug)]
pub struct UserLogin {
    identifier: String,
    #[schema(value_type = String, format = Password)]
    password: SecretString,
}

#[derive(ToSchema, Serialize, Debug)]
pub struct LoginOk {
    username: String,
}

#[utoipa::path(
    post,
    path= "/user/login",
    request_body = UserLogin,
    responses (
        (status = 200, description = "Login successful", body = [LoginOk]),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Login could not be completed"),
    ),
    tag= "login"
)]
// axum handler for login
#[instrument(skip_all)]
pub async fn login(
    service: Extension<Arc<AuthService>>,
    payload: Option<Json<UserLogin>>,
) -> impl IntoResponse {
    let user: UserLogin = match payload {
        Some(Json(payload)) => payload,
        None => return (StatusCode::BAD_REQUEST, "Missing payload".to_string()).into_response(),
    };

    debug!("user: {:?}", user);

    match service.login(&user.identifier, &user.password).await {
        Ok(LoginOutcome::Authenticated { username }) => {
            debug!("Login successful for {}", username);

            (StatusCode::OK, Json(LoginOk { username })).into_response()
        }

        // Unknown identifier and wrong password answer identically
        Ok(LoginOutcome::InvalidCredentials) => {
            (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string()).into_response()
        }

        Err(error) => {
            error!("Error logging in: {:?}", error);

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error logging in".to_string(),
            )
                .into_response()
        }
    }
}
