/// 应用全局状态

use std::sync::Arc;

use crate::db::store::ContactStore;
use crate::ws::SessionManager;

/// 应用状态
#[derive(Clone)]
pub struct AppState {
    /// 留言存储（依赖注入，测试时可替换为内存实现）
    pub store: Arc<dyn ContactStore>,
    /// WebSocket 会话管理器
    pub session_manager: SessionManager,
}

impl AppState {
    pub fn new(store: Arc<dyn ContactStore>, session_manager: SessionManager) -> Self {
        Self {
            store,
            session_manager,
        }
    }

    /// 获取留言存储（克隆句柄）
    pub fn store(&self) -> Arc<dyn ContactStore> {
        self.store.clone()
    }

    /// 获取会话管理器
    pub fn session_manager(&self) -> SessionManager {
        self.session_manager.clone()
    }
}
