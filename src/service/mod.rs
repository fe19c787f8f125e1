// 服务模块
// 协调数据库与缓存，实现旁路缓存的读写协议

pub mod error;
pub mod user;

pub use error::ServiceError;
pub use user::UserService;
