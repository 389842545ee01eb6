use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::{PortfolioError, Result};
use crate::models::{
    ApiResponse,
    lecturers::{entities::Lecturer, requests::LoginRequest, responses::LecturerResponse},
};
use crate::utils::password::check_password;

use super::AuthService;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match authenticate(service, login_request, request).await {
        Ok(lecturer) => {
            tracing::info!("Lecturer {} logged in successfully", lecturer.lecturer_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                LecturerResponse { lecturer },
                "Login successful",
            )))
        }
        Err(e @ PortfolioError::Authentication(_)) => {
            tracing::debug!("Login rejected: {}", e);
            Ok(HttpResponse::Ok().json(ApiResponse::from_error(&e)))
        }
        Err(e) => {
            tracing::error!("Login failed: {}", e);
            Ok(HttpResponse::Ok().json(ApiResponse::from_error(&e)))
        }
    }
}

async fn authenticate(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> Result<Lecturer> {
    // 缺少任一凭据都按凭据不匹配处理
    let (Some(email), Some(password)) = (login_request.email, login_request.password) else {
        return Err(PortfolioError::authentication(INVALID_CREDENTIALS));
    };

    // 1. 根据邮箱获取讲师信息
    let lecturer = service
        .get_storage(request)
        .get_lecturer_by_email(&email)
        .await?
        .ok_or_else(|| PortfolioError::authentication(INVALID_CREDENTIALS))?;

    // 2. 按配置的方案验证密码
    let scheme = service.get_config().auth.password_scheme;
    if !check_password(scheme, &password, &lecturer.password) {
        return Err(PortfolioError::authentication(INVALID_CREDENTIALS));
    }

    Ok(lecturer)
}
