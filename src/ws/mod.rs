/// WebSocket 模块
///
/// 管理客户端 WebSocket 会话：连接注册、逐帧确认、断开清理

pub mod session;

pub use session::{handle_websocket, SessionManager, ACK_TEXT};
