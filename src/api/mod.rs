pub mod contact;
pub mod projects;

use axum::Router;
use serde::Serialize;

use crate::app_state::AppState;

/// 通用响应
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub message: String,
}

/// 错误响应
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// 所有 API 路由（统一入口）
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/contact", contact::contact_routes())
        .nest("/projects", projects::project_routes())
}
