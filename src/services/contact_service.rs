/// 留言服务

use crate::app_state::AppState;
use crate::db::models::contact::{ContactForm, ContactMessage};
use crate::errors::Result;

pub struct ContactService {
    state: AppState,
}

impl ContactService {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// 提交留言
    ///
    /// 先做显式校验，校验失败不会触碰存储。
    pub async fn submit(&self, form: ContactForm) -> Result<ContactMessage> {
        let dto = form.validate()?;
        let saved = self.state.store().insert(dto).await?;
        Ok(saved)
    }

    /// 获取全部留言（最新在前）
    pub async fn list_messages(&self) -> Result<Vec<ContactMessage>> {
        self.state.store().list_all_sorted_by_recency().await
    }
}
