// 用户存储库
// 包含 users 表相关的数据库操作

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::database::{StoreError, UserStore};
use crate::models::User;

/// 用户存储库，处理所有与用户相关的数据库操作
pub struct UserOperation {
    db: Arc<PgPool>,
}

impl UserOperation {
    /// 创建新的用户存储库实例
    pub fn new(db: Arc<PgPool>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for UserOperation {
    async fn list_all(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&*self.db)
        .await?;

        Ok(users)
    }

    async fn get_by_username(&self, username: &str) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&*self.db)
        .await?;

        user.ok_or(StoreError::NotFound)
    }

    async fn insert(&self, username: &str, email: &str) -> Result<i64, StoreError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (username, email)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(username)
        .bind(email)
        .fetch_one(&*self.db)
        .await?;

        tracing::debug!("Inserted user {} with id {}", username, id);
        Ok(id)
    }

    async fn update_email(&self, username: &str, email: &str) -> Result<Option<i64>, StoreError> {
        // RETURNING 使影响行数与被更新行的 id 在同一条语句中得到
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE users
            SET email = $1
            WHERE username = $2
            RETURNING id
            "#,
        )
        .bind(email)
        .bind(username)
        .fetch_optional(&*self.db)
        .await?;

        Ok(id)
    }

    async fn delete_by_username(&self, username: &str) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .execute(&*self.db)
        .await?;

        Ok(result.rows_affected())
    }
}
