// 领域模型
// 用户记录在数据库、缓存与接口层之间共用

pub mod user;

pub use user::User;
