use std::env;
use std::time::Duration;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub database_url: String,
    pub redis_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub db_max_connections: u32,
    pub cache_ttl_secs: u64,
    pub store_timeout_ms: u64,
    pub cache_timeout_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key))
    }

    /// 通过任意键值查找函数构建配置，可选项解析失败时使用默认值
    pub fn from_lookup<F>(lookup: F) -> Result<Self, env::VarError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let optional = |key: &str| lookup(key).ok();

        Ok(Config {
            database_url: lookup("DATABASE_URL")?,
            redis_url: lookup("REDIS_URL")?,
            server_host: optional("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            server_port: optional("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            db_max_connections: optional("DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            // 默认缓存1小时
            cache_ttl_secs: optional("CACHE_TTL_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
            store_timeout_ms: optional("STORE_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            cache_timeout_ms: optional("CACHE_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(500),
        })
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }

    pub fn cache_timeout(&self) -> Duration {
        Duration::from_millis(self.cache_timeout_ms)
    }
}
