/// 项目展示接口
///
/// 目前仅返回静态确认响应，项目数据由前端静态维护。

use axum::{routing::get, Json, Router};

use crate::{api::ApiResponse, app_state::AppState};

/// 项目路由
pub fn project_routes() -> Router<AppState> {
    Router::new().route("/", get(list_projects))
}

/// 项目接口确认响应
pub async fn list_projects() -> Json<ApiResponse> {
    Json(ApiResponse {
        message: "Projects API is up!".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::app_state::AppState;
    use crate::db::store::testing::MemoryContactStore;
    use crate::ws::SessionManager;

    #[tokio::test]
    async fn test_projects_ack() {
        let state = AppState::new(Arc::new(MemoryContactStore::new()), SessionManager::new());
        let app = crate::api::api_routes().with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/projects")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Projects API is up!");
    }
}
