use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::Result;
use crate::models::{
    ApiResponse,
    lecturers::{
        requests::{CreateLecturerRequest, SignupRequest},
        responses::SignupResponse,
    },
};
use crate::utils::password::encode_password;
use crate::utils::require_text;

use super::AuthService;

pub async fn handle_signup(
    service: &AuthService,
    signup_request: SignupRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match signup(service, signup_request, request).await {
        Ok(lecturer_id) => {
            tracing::info!("Lecturer account {} created", lecturer_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                SignupResponse { lecturer_id },
                "Account created",
            )))
        }
        Err(e) => {
            tracing::warn!("Signup rejected: {}", e);
            Ok(HttpResponse::Ok().json(ApiResponse::from_error(&e)))
        }
    }
}

async fn signup(
    service: &AuthService,
    signup_request: SignupRequest,
    request: &HttpRequest,
) -> Result<i64> {
    let name = require_text(signup_request.name, "name")?;
    let email = require_text(signup_request.email, "email")?;
    let password = require_text(signup_request.password, "password")?;

    let scheme = service.get_config().auth.password_scheme;
    let password = encode_password(scheme, &password)?;

    // 邮箱唯一性由数据库约束保证，冲突时存储层返回 "Email already registered"
    service
        .get_storage(request)
        .create_lecturer(CreateLecturerRequest {
            name,
            email,
            password,
        })
        .await
}
