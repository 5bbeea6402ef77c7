/// Portfolio Hub - Server
///
/// 后端服务器主程序，提供联系表单 API 与 WebSocket 消息服务

mod api;
mod app_state;
mod config;
mod db;
mod errors;
mod services;
mod ws;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

use crate::{
    app_state::AppState,
    db::store::MongoContactStore,
    ws::SessionManager,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    info!("🚀 启动 Portfolio Hub Server...");

    // 加载环境变量
    dotenvy::dotenv().ok();

    // 加载配置（缺少 MONGO_URI 时立即退出）
    let cfg = match config::Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("❌ 配置加载失败: {}", e);
            std::process::exit(1);
        }
    };
    info!("✅ 配置加载成功");

    // 初始化 MongoDB 客户端（惰性连接，存储不可用时请求级返回 500）
    let mongo_db = db::establish_connection(&cfg.mongo_uri).await?;
    let store = Arc::new(MongoContactStore::new(&mongo_db));
    info!("✅ MongoDB 客户端初始化成功");

    // 初始化 WebSocket 会话管理器
    let session_manager = SessionManager::new();
    info!("✅ 会话管理器初始化成功");

    // 创建应用状态
    let app_state = AppState::new(store, session_manager);

    // 设置CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 构建应用路由
    let app = Router::new()
        .route("/", get(root_handler))
        .route("/ws", get(ws::handle_websocket))
        .nest("/api", api::api_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    // 启动服务器
    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.server_port));
    info!("🎯 服务器监听在 http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 服务器已退出");
    Ok(())
}

async fn root_handler() -> &'static str {
    "Portfolio Hub Server API v1"
}

/// 等待终止信号（Ctrl+C 或 SIGTERM）
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("无法安装 Ctrl+C 信号处理器");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("无法安装 SIGTERM 信号处理器")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("收到终止信号，开始优雅关闭");
}
