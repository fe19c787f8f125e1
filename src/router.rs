use axum::{Router, routing::get};

use crate::{AppState, middleware::log_errors, routes};

async fn root() -> &'static str {
    "Hello World!"
}

// 用户相关的路由
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user", get(routes::user::list_users).post(routes::user::create_user))
        .route(
            "/user/{username}",
            get(routes::user::get_user)
                .put(routes::user::update_user)
                .delete(routes::user::delete_user),
        )
}

// 创建主路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(user_routes())
        .layer(axum::middleware::from_fn(log_errors))
        .with_state(state)
}
