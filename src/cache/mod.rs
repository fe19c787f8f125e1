// 缓存模块
// 包含缓存访问接口、缓存键和 Redis 实现

pub mod error;
pub mod keys;
pub mod operations;

use async_trait::async_trait;
use std::time::Duration;

// 重新导出常用类型和函数，方便其他模块使用
pub use error::CacheError;
pub use keys::user_cache_key;
pub use operations::user::UserCacheOperations;

/// 字符串键值缓存访问接口
///
/// 缓存是易失且尽力而为的：允许缺失，但不能在 TTL 或失效之后仍返回旧值。
#[async_trait]
pub trait RecordCache: Send + Sync {
    /// 未命中或已过期时返回 `None`
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError>;

    async fn delete(&self, key: &str) -> Result<(), CacheError>;
}
