// 数据库操作

pub mod user;
