/// 留言持久化网关
///
/// 以 trait 形式注入存储实现，生产环境使用 MongoDB 集合，
/// 测试时可替换为内存实现。

use async_trait::async_trait;
use bson::doc;
use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::{Collection, Database};

use crate::db::models::contact::{ContactMessage, CreateContactDto};
use crate::errors::{Error, Result};

/// 留言集合名
const CONTACT_COLLECTION: &str = "contacts";

/// 留言存储接口
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// 写入一条留言，返回包含系统分配时间戳和 ID 的记录
    async fn insert(&self, dto: CreateContactDto) -> Result<ContactMessage>;

    /// 返回全部留言，按创建时间降序（最新在前）
    async fn list_all_sorted_by_recency(&self) -> Result<Vec<ContactMessage>>;
}

/// MongoDB 留言存储
#[derive(Clone)]
pub struct MongoContactStore {
    collection: Collection<ContactMessage>,
}

impl MongoContactStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<ContactMessage>(CONTACT_COLLECTION),
        }
    }
}

#[async_trait]
impl ContactStore for MongoContactStore {
    async fn insert(&self, dto: CreateContactDto) -> Result<ContactMessage> {
        let now = Utc::now();
        let mut record = ContactMessage {
            id: None,
            name: dto.name,
            email: dto.email,
            message: dto.message,
            created_at: now,
            updated_at: now,
        };

        let result = self
            .collection
            .insert_one(&record)
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        record.id = result.inserted_id.as_object_id();

        Ok(record)
    }

    async fn list_all_sorted_by_recency(&self) -> Result<Vec<ContactMessage>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        let records = cursor
            .try_collect()
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(records)
    }
}

#[cfg(test)]
pub mod testing {
    //! 测试用存储实现

    use std::sync::Arc;

    use bson::oid::ObjectId;
    use tokio::sync::RwLock;

    use super::*;

    /// 内存留言存储
    #[derive(Clone, Default)]
    pub struct MemoryContactStore {
        records: Arc<RwLock<Vec<ContactMessage>>>,
    }

    impl MemoryContactStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub async fn count(&self) -> usize {
            self.records.read().await.len()
        }
    }

    #[async_trait]
    impl ContactStore for MemoryContactStore {
        async fn insert(&self, dto: CreateContactDto) -> Result<ContactMessage> {
            let now = Utc::now();
            let record = ContactMessage {
                id: Some(ObjectId::new()),
                name: dto.name,
                email: dto.email,
                message: dto.message,
                created_at: now,
                updated_at: now,
            };

            let mut records = self.records.write().await;
            records.push(record.clone());

            Ok(record)
        }

        async fn list_all_sorted_by_recency(&self) -> Result<Vec<ContactMessage>> {
            let mut records = self.records.read().await.clone();
            records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(records)
        }
    }

    /// 总是失败的存储，用于模拟存储不可达
    #[derive(Clone, Default)]
    pub struct FailingContactStore;

    #[async_trait]
    impl ContactStore for FailingContactStore {
        async fn insert(&self, _dto: CreateContactDto) -> Result<ContactMessage> {
            Err(Error::Database("存储不可达".to_string()))
        }

        async fn list_all_sorted_by_recency(&self) -> Result<Vec<ContactMessage>> {
            Err(Error::Database("存储不可达".to_string()))
        }
    }
}
