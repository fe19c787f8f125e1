use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
}

/// 更新请求，以路径中的用户名为准，请求体中多余的 `username` 字段被忽略
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub email: String,
}
