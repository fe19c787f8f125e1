use std::time::Duration;

use thiserror::Error;

/// 缓存访问错误
///
/// 只在缓存层内部流转，用户服务会把它降级为缓存未命中或记录日志后忽略。
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("cache call timed out after {0:?}")]
    Timeout(Duration),
}
