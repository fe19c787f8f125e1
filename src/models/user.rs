use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 用户记录
///
/// `id` 由数据库分配，创建后不可变；`username` 是对外查询与缓存使用的唯一键。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl User {
    pub fn new(id: i64, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
        }
    }
}
