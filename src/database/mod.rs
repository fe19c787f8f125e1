// 数据库模块
// 包含持久化存储的访问接口与 PostgreSQL 实现

pub mod error;
pub mod operations; // 数据库操作实现

use async_trait::async_trait;

use crate::models::User;

// 重新导出常用类型，方便其他模块使用
pub use error::StoreError;
pub use operations::user::UserOperation;

/// 用户持久化存储访问接口
///
/// 所有查询必须使用参数绑定，禁止拼接 SQL。每个操作最多影响一行，依赖数据库的单行原子性。
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 按 id 顺序返回全部用户，不分页
    async fn list_all(&self) -> Result<Vec<User>, StoreError>;

    /// 没有匹配行时返回 `StoreError::NotFound`
    async fn get_by_username(&self, username: &str) -> Result<User, StoreError>;

    /// 插入新用户并返回数据库分配的 id，用户名重复时返回 `StoreError::Conflict`
    async fn insert(&self, username: &str, email: &str) -> Result<i64, StoreError>;

    /// 更新邮箱。返回被更新行的 id，没有匹配行时返回 `None`（影响行数为 0）
    async fn update_email(&self, username: &str, email: &str) -> Result<Option<i64>, StoreError>;

    /// 删除用户，返回影响行数（0 或 1）
    async fn delete_by_username(&self, username: &str) -> Result<u64, StoreError>;
}
