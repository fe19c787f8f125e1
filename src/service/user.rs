// 用户服务
// 旁路缓存协议：读穿透填充缓存，写操作只删除缓存不更新缓存

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{CacheError, RecordCache, user_cache_key};
use crate::config::Config;
use crate::database::{StoreError, UserStore};
use crate::models::User;
use crate::service::ServiceError;

/// 默认缓存过期时间（秒）
pub const USER_CACHE_EXPIRE: u64 = 3600; // 1小时

const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_CACHE_TIMEOUT: Duration = Duration::from_millis(500);

/// 用户服务，所有用户记录的读写都经过这里
///
/// 每个用户名在概念上处于“未缓存”或“已缓存”两种状态之一：
///
/// - 未缓存时读取会回源数据库，命中后以固定 TTL 写入缓存；
/// - 已缓存时读取直接返回缓存内容，不访问数据库，缓存值最多陈旧一个 TTL；
/// - 更新或删除在数据库写入成功后删除缓存，回到未缓存状态；
/// - TTL 到期由缓存自身处理。
///
/// 同一用户名上的并发操作不加锁。读取未命中后查到旧值、并发更新删除缓存、读取再把旧值写回
/// 缓存，这种交错会留下一个陈旧条目直到 TTL 到期，这是可接受的有界陈旧。
///
/// 缓存的任何失败都不会中断请求：读失败视为未命中，写入和删除失败只记录日志。
pub struct UserService {
    store: Arc<dyn UserStore>,
    cache: Arc<dyn RecordCache>,
    cache_ttl: Duration,
    store_timeout: Duration,
    cache_timeout: Duration,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, cache: Arc<dyn RecordCache>) -> Self {
        Self {
            store,
            cache,
            cache_ttl: Duration::from_secs(USER_CACHE_EXPIRE),
            store_timeout: DEFAULT_STORE_TIMEOUT,
            cache_timeout: DEFAULT_CACHE_TIMEOUT,
        }
    }

    /// 使用配置中的 TTL 与超时创建服务
    pub fn from_config(
        store: Arc<dyn UserStore>,
        cache: Arc<dyn RecordCache>,
        config: &Config,
    ) -> Self {
        Self::new(store, cache)
            .with_cache_ttl(config.cache_ttl())
            .with_timeouts(config.store_timeout(), config.cache_timeout())
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn with_timeouts(mut self, store_timeout: Duration, cache_timeout: Duration) -> Self {
        self.store_timeout = store_timeout;
        self.cache_timeout = cache_timeout;
        self
    }

    pub fn cache_ttl(&self) -> Duration {
        self.cache_ttl
    }

    /// 列出全部用户，始终绕过缓存
    pub async fn list(&self) -> Result<Vec<User>, ServiceError> {
        let users = self.store_call(self.store.list_all()).await?;
        Ok(users)
    }

    /// 按用户名读取用户，优先使用缓存
    pub async fn get(&self, username: &str) -> Result<User, ServiceError> {
        if let Some(user) = self.cached_user(username).await {
            return Ok(user);
        }

        // 不缓存未找到的结果
        let user = self.store_call(self.store.get_by_username(username)).await?;
        self.populate(&user).await;

        Ok(user)
    }

    /// 创建用户，不预热缓存，首次读取时再填充
    pub async fn create(&self, username: &str, email: &str) -> Result<User, ServiceError> {
        if username.trim().is_empty() {
            return Err(ServiceError::Validation("username is required".into()));
        }
        validate_email(email)?;

        let id = self.store_call(self.store.insert(username, email)).await?;
        tracing::info!("Created user {} with id {}", username, id);

        Ok(User::new(id, username, email))
    }

    /// 更新邮箱。没有匹配行时返回 `NotFound` 且不触碰缓存
    pub async fn update(&self, username: &str, email: &str) -> Result<User, ServiceError> {
        validate_email(email)?;

        let id = self
            .store_call(self.store.update_email(username, email))
            .await?
            .ok_or(ServiceError::NotFound)?;

        self.invalidate(username).await;
        tracing::info!("Updated email of user {}", username);

        Ok(User::new(id, username, email))
    }

    /// 删除用户。没有匹配行时返回 `NotFound` 且不触碰缓存
    pub async fn delete(&self, username: &str) -> Result<(), ServiceError> {
        let affected = self
            .store_call(self.store.delete_by_username(username))
            .await?;

        if affected == 0 {
            return Err(ServiceError::NotFound);
        }

        self.invalidate(username).await;
        tracing::info!("Deleted user {}", username);

        Ok(())
    }

    /// 读取缓存，任何失败都降级为未命中
    async fn cached_user(&self, username: &str) -> Option<User> {
        let key = user_cache_key(username);

        match self.cache_call(self.cache.get(&key)).await {
            Ok(Some(json)) => match serde_json::from_str::<User>(&json) {
                Ok(user) => {
                    tracing::debug!("Get user from cache: {}", key);
                    Some(user)
                }
                Err(e) => {
                    tracing::warn!("Discarding undecodable cache entry {}: {}", key, e);
                    None
                }
            },
            Ok(None) => {
                tracing::debug!("Cache miss: {}", key);
                None
            }
            Err(e) => {
                tracing::warn!("Cache read failed for {}, falling back to store: {}", key, e);
                None
            }
        }
    }

    async fn populate(&self, user: &User) {
        let key = user_cache_key(&user.username);

        let json = match serde_json::to_string(user) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize user {}: {}", key, e);
                return;
            }
        };

        match self.cache_call(self.cache.set(&key, &json, self.cache_ttl)).await {
            Ok(()) => tracing::debug!("Set user to cache: {}", key),
            Err(e) => tracing::warn!("Failed to cache user {}: {}", key, e),
        }
    }

    async fn invalidate(&self, username: &str) {
        let key = user_cache_key(username);

        if let Err(e) = self.cache_call(self.cache.delete(&key)).await {
            tracing::warn!("Failed to invalidate cache for {}: {}", key, e);
        }
    }

    async fn store_call<T, F>(&self, fut: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        let result = match tokio::time::timeout(self.store_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::Timeout(self.store_timeout)),
        };

        if let Err(ref e @ (StoreError::Timeout(_) | StoreError::Database(_))) = result {
            tracing::error!("Store call failed: {}", e);
        }

        result
    }

    async fn cache_call<T, F>(&self, fut: F) -> Result<T, CacheError>
    where
        F: Future<Output = Result<T, CacheError>>,
    {
        match tokio::time::timeout(self.cache_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(CacheError::Timeout(self.cache_timeout)),
        }
    }
}

fn validate_email(email: &str) -> Result<(), ServiceError> {
    if email.trim().is_empty() {
        return Err(ServiceError::Validation("email is required".into()));
    }
    Ok(())
}
