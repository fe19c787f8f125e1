/// 生成用户缓存键
///
/// 直接使用原始用户名作为键，与已部署实例写入的缓存保持兼容。
pub fn user_cache_key(username: &str) -> String {
    username.to_string()
}
