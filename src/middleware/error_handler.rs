use axum::{
    body::{Body, to_bytes},
    http::Request,
    middleware::Next,
    response::Response,
};
use tracing::{debug, error};

/// 日志中记录错误响应体的最大字符数，不影响返回给客户端的内容
const MAX_LOGGED_BODY: usize = 1024;

/// 记录服务端错误响应，客户端错误只在 debug 级别记录
pub async fn log_errors(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let response = next.run(req).await;
    let status = response.status();

    if status.is_client_error() {
        debug!("{} {} -> {}", method, uri, status);
        return response;
    }

    if !status.is_server_error() {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            error!("{} {} -> {}, unreadable body: {}", method, uri, status, e);
            return Response::from_parts(parts, Body::empty());
        }
    };

    let body_str = String::from_utf8_lossy(&bytes);
    let logged: String = body_str.chars().take(MAX_LOGGED_BODY).collect();
    error!("{} {} -> {}, body: {}", method, uri, status, logged);

    // 重置body以便重新构建响应
    parts.headers.remove(axum::http::header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(bytes))
}
