/// 配置管理

use serde::Deserialize;

use crate::errors::{Error, Result};

/// 默认监听端口
const DEFAULT_PORT: &str = "5000";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server_port: u16,
    pub mongo_uri: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// MONGO_URI 为必填项，缺失时返回配置错误；PORT 可选，默认 5000。
    pub fn from_env() -> Result<Self> {
        let server_port = std::env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse()
            .map_err(|e| Error::Config(format!("PORT 无效: {}", e)))?;

        let mongo_uri = std::env::var("MONGO_URI")
            .map_err(|_| Error::Config("MONGO_URI 未设置，请在 .env 中配置".to_string()))?;

        Ok(Self {
            server_port,
            mongo_uri,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 环境变量为进程级状态，相关断言集中在一个用例内避免并发干扰
    #[test]
    fn test_from_env() {
        std::env::remove_var("MONGO_URI");
        std::env::remove_var("PORT");

        // 缺少 MONGO_URI 时必须失败
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        // 设置 MONGO_URI 后使用默认端口
        std::env::set_var("MONGO_URI", "mongodb://localhost:27017/portfolio");
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.server_port, 5000);
        assert_eq!(cfg.mongo_uri, "mongodb://localhost:27017/portfolio");

        // PORT 覆盖默认值
        std::env::set_var("PORT", "8080");
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.server_port, 8080);

        // 非法 PORT 返回配置错误
        std::env::set_var("PORT", "not-a-port");
        assert!(matches!(Config::from_env(), Err(Error::Config(_))));

        std::env::remove_var("MONGO_URI");
        std::env::remove_var("PORT");
    }
}
