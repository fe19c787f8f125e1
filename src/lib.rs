use config::Config;
use service::UserService;
use std::sync::Arc;

pub mod cache;
pub mod config;
pub mod database;
pub mod middleware;
pub mod models;
pub mod router;
pub mod routes;
pub mod service;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
    pub config: Arc<Config>,
}
