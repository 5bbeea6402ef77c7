/// 联系表单接口

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{error, info};

use crate::{
    api::{ApiResponse, ErrorResponse},
    app_state::AppState,
    db::models::contact::{ContactForm, ContactResponse},
    errors::Error,
    services::contact_service::ContactService,
};

/// 联系表单路由
pub fn contact_routes() -> Router<AppState> {
    Router::new().route("/", get(list_contacts).post(create_contact))
}

/// 保存留言
pub async fn create_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<(StatusCode, Json<ApiResponse>), (StatusCode, Json<ErrorResponse>)> {
    let service = ContactService::new(state);
    match service.submit(form).await {
        Ok(saved) => {
            info!("✅ 留言已保存: {}", saved.email);
            Ok((
                StatusCode::CREATED,
                Json(ApiResponse {
                    message: "Message saved successfully!".to_string(),
                }),
            ))
        }
        Err(Error::Validation(e)) => {
            info!("表单校验失败: {}", e);
            Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "All fields are required!".to_string(),
                }),
            ))
        }
        Err(e) => {
            error!("❌ 保存留言失败: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal Server Error".to_string(),
                }),
            ))
        }
    }
}

/// 获取留言列表（最新在前）
pub async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let service = ContactService::new(state);
    match service.list_messages().await {
        Ok(messages) => Ok(Json(
            messages.into_iter().map(ContactResponse::from).collect(),
        )),
        Err(e) => {
            error!("❌ 获取留言列表失败: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal Server Error".to_string(),
                }),
            ))
        }
    }
}
