/// 数据库访问层

pub mod models;
pub mod store;

use mongodb::{Client, Database};
use tracing::info;

/// 默认数据库名（连接串中未指定时使用）
const DEFAULT_DATABASE: &str = "portfolio_hub";

/// 建立 MongoDB 连接
///
/// 客户端为惰性连接：此处只解析连接串并构造客户端，
/// 存储不可达不会阻止进程启动，具体操作时才会报错。
pub async fn establish_connection(mongo_uri: &str) -> anyhow::Result<Database> {
    info!("正在初始化 MongoDB 客户端: {}", mongo_uri);

    let client = Client::with_uri_str(mongo_uri).await?;
    let db = client
        .default_database()
        .unwrap_or_else(|| client.database(DEFAULT_DATABASE));

    info!("MongoDB 客户端初始化完成，数据库: {}", db.name());

    Ok(db)
}
