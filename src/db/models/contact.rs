use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::{Error, Result};

/// 留言模型
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub message: String,

    // 时间戳（由存储层在写入时分配）
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// 联系表单原始载荷
///
/// 三个字段都允许缺失，由显式校验步骤拒绝，而不是依赖反序列化失败。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl ContactForm {
    /// 校验表单并转换为可持久化的 DTO
    ///
    /// 字段缺失或为空字符串均视为校验失败。
    pub fn validate(self) -> Result<CreateContactDto> {
        let dto = CreateContactDto {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
        };

        Validate::validate(&dto).map_err(|e| Error::Validation(e.to_string()))?;

        Ok(dto)
    }
}

/// 创建留言 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateContactDto {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(length(min = 1))]
    pub email: String,

    #[validate(length(min = 1))]
    pub message: String,
}

/// 留言响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ContactMessage> for ContactResponse {
    fn from(record: ContactMessage) -> Self {
        Self {
            id: record.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: record.name,
            email: record.email,
            message: record.message,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
