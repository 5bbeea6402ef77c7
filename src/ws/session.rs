/// WebSocket 会话处理器
///
/// 每个连接一条发送通道，收到的每一帧都按接收顺序回一条固定确认。

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::ws::{Message as AxumWsMessage, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::{mpsc, RwLock};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::app_state::AppState;

/// 固定确认文本，每收到一帧回一条
pub const ACK_TEXT: &str = "Message received!";

/// 会话连接信息
#[derive(Debug, Clone)]
pub struct SessionConnection {
    /// 连接 ID
    pub connection_id: String,

    /// 发送消息的通道
    pub sender: mpsc::UnboundedSender<String>,

    /// 连接时间
    pub connected_at: chrono::DateTime<chrono::Utc>,
}

/// 会话管理器
#[derive(Clone)]
pub struct SessionManager {
    /// 所有连接的映射：connection_id -> SessionConnection
    connections: Arc<RwLock<HashMap<String, Arc<SessionConnection>>>>,
}

impl SessionManager {
    /// 创建新的会话管理器
    pub fn new() -> Self {
        Self {
            connections: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// 注册新的会话
    pub async fn register(
        &self,
        connection_id: String,
        sender: mpsc::UnboundedSender<String>,
    ) -> Arc<SessionConnection> {
        let connection = Arc::new(SessionConnection {
            connection_id: connection_id.clone(),
            sender,
            connected_at: chrono::Utc::now(),
        });

        let mut connections = self.connections.write().await;
        connections.insert(connection_id.clone(), connection.clone());

        info!("🔌 会话已注册: {}", connection_id);
        connection
    }

    /// 注销会话
    pub async fn unregister(&self, connection_id: &str) {
        let mut connections = self.connections.write().await;
        if connections.remove(connection_id).is_some() {
            info!("🔌 会话已注销: {}", connection_id);
        }
    }

    /// 获取连接数量
    pub async fn count(&self) -> usize {
        let connections = self.connections.read().await;
        connections.len()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

/// WebSocket 升级处理器
pub async fn handle_websocket(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_session(socket, state))
}

/// 处理单个 WebSocket 会话
///
/// 生命周期：注册 -> 逐帧确认 -> 注销。确认帧经由每连接的
/// 通道写出，单一写任务保证按接收顺序发送。
async fn handle_session(socket: WebSocket, state: AppState) {
    let connection_id = Uuid::new_v4().to_string();
    info!("新的 WebSocket 连接: {}", connection_id);

    let (mut ws_sender, mut ws_receiver) = socket.split();

    // 创建消息发送通道
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();

    // 注册到管理器
    state
        .session_manager()
        .register(connection_id.clone(), tx.clone())
        .await;

    // 发送任务：顺序写出通道中的确认帧
    let send_task = tokio::spawn(async move {
        while let Some(text) = rx.recv().await {
            if let Err(e) = ws_sender.send(AxumWsMessage::Text(text)).await {
                error!("发送确认帧失败: {}", e);
                break;
            }
        }
        debug!("会话发送任务结束");
    });

    // 接收循环：记录每一帧并排入确认
    while let Some(result) = ws_receiver.next().await {
        match result {
            Ok(AxumWsMessage::Text(text)) => {
                info!("📨 收到消息 [{}]: {}", connection_id, text);
                if tx.send(ACK_TEXT.to_string()).is_err() {
                    break;
                }
            }
            Ok(AxumWsMessage::Binary(data)) => {
                info!("📨 收到二进制消息 [{}]: {} 字节", connection_id, data.len());
                if tx.send(ACK_TEXT.to_string()).is_err() {
                    break;
                }
            }
            Ok(AxumWsMessage::Close(_)) => {
                debug!("收到关闭帧: {}", connection_id);
                break;
            }
            // Ping/Pong 由传输层自动应答
            Ok(_) => {}
            Err(e) => {
                warn!("接收消息错误 [{}]: {}", connection_id, e);
                break;
            }
        }
    }

    // 清理：注销后通道全部关闭，发送任务随之退出
    state.session_manager().unregister(&connection_id).await;
    drop(tx);
    let _ = send_task.await;

    info!("WebSocket 连接已关闭: {}", connection_id);
}
