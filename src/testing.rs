// 测试替身
// 内存版的数据库与缓存实现，用于服务层和路由层测试

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

use crate::cache::{CacheError, RecordCache};
use crate::database::{StoreError, UserStore};
use crate::models::User;

/// 内存数据库，记录按用户名查询的次数
#[derive(Default)]
pub struct FakeStore {
    rows: Mutex<BTreeMap<i64, User>>,
    next_id: AtomicUsize,
    get_calls: AtomicUsize,
    failing: AtomicBool,
    delay: Mutex<Option<Duration>>,
}

impl FakeStore {
    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.lock().unwrap().is_empty()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn set_delay(&self, delay: Option<Duration>) {
        *self.delay.lock().unwrap() = delay;
    }

    async fn enter(&self) -> Result<(), StoreError> {
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for FakeStore {
    async fn list_all(&self) -> Result<Vec<User>, StoreError> {
        self.enter().await?;
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn get_by_username(&self, username: &str) -> Result<User, StoreError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.enter().await?;
        self.rows
            .lock()
            .unwrap()
            .values()
            .find(|u| u.username == username)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn insert(&self, username: &str, email: &str) -> Result<i64, StoreError> {
        self.enter().await?;
        let mut rows = self.rows.lock().unwrap();
        if rows.values().any(|u| u.username == username) {
            return Err(StoreError::Conflict);
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
        rows.insert(id, User::new(id, username, email));
        Ok(id)
    }

    async fn update_email(&self, username: &str, email: &str) -> Result<Option<i64>, StoreError> {
        self.enter().await?;
        let mut rows = self.rows.lock().unwrap();
        Ok(rows
            .values_mut()
            .find(|u| u.username == username)
            .map(|u| {
                u.email = email.to_string();
                u.id
            }))
    }

    async fn delete_by_username(&self, username: &str) -> Result<u64, StoreError> {
        self.enter().await?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|_, u| u.username != username);
        Ok((before - rows.len()) as u64)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheCall {
    Get(String),
    Set(String, Duration),
    Delete(String),
}

/// 内存缓存，记录每一次调用，可以模拟不可用或慢响应
#[derive(Default)]
pub struct FakeCache {
    entries: Mutex<HashMap<String, (String, Option<Instant>)>>,
    calls: Mutex<Vec<CacheCall>>,
    failing: AtomicBool,
    delay: Mutex<Option<Duration>>,
}

impl FakeCache {
    pub fn calls(&self) -> Vec<CacheCall> {
        self.calls.lock().unwrap().clone()
    }

    /// 已过期的条目视为不存在
    pub fn entry(&self, key: &str) -> Option<String> {
        let mut entries = self.entries.lock().unwrap();
        let (value, expires_at) = entries.get(key).cloned()?;
        if expires_at.is_some_and(|at| Instant::now() >= at) {
            entries.remove(key);
            return None;
        }
        Some(value)
    }

    /// 写入一个不过期的原始条目
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), None));
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn set_delay(&self, delay: Option<Duration>) {
        *self.delay.lock().unwrap() = delay;
    }

    async fn enter(&self, call: CacheCall) -> Result<(), CacheError> {
        self.calls.lock().unwrap().push(call);
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(CacheError::Redis(redis::RedisError::from((
                redis::ErrorKind::IoError,
                "connection refused",
            ))));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordCache for FakeCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.enter(CacheCall::Get(key.to_string())).await?;
        Ok(self.entry(key))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        self.enter(CacheCall::Set(key.to_string(), ttl)).await?;
        self.entries.lock().unwrap().insert(
            key.to_string(),
            (value.to_string(), Some(Instant::now() + ttl)),
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.enter(CacheCall::Delete(key.to_string())).await?;
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
